//! Repository for the `armours` table.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::armour::{Armour, CreateArmour, UpdateArmour};

const COLUMNS: &str = "id, name, description, type, created_at, updated_at";

/// Provides CRUD operations for armour pieces.
pub struct ArmourRepo;

impl ArmourRepo {
    pub async fn create(pool: &PgPool, input: &CreateArmour) -> Result<Armour, sqlx::Error> {
        let query = format!(
            "INSERT INTO armours (name, description, type)
             VALUES ($1, COALESCE($2, ''), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Armour>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.armour_type.code())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Armour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM armours WHERE id = $1");
        sqlx::query_as::<_, Armour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List armour grouped by hit location, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Armour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM armours ORDER BY type ASC, name ASC, id ASC");
        sqlx::query_as::<_, Armour>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArmour,
    ) -> Result<Option<Armour>, sqlx::Error> {
        let query = format!(
            "UPDATE armours SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                type = COALESCE($4, type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Armour>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.armour_type.map(|t| t.code()))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM armours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
