//! Repository for the `traits` table.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::traits::{CreateTrait, Trait, UpdateTrait};

const COLUMNS: &str = "id, name, description, full_description, created_at, updated_at";

/// Provides CRUD operations for traits.
pub struct TraitRepo;

impl TraitRepo {
    pub async fn create(pool: &PgPool, input: &CreateTrait) -> Result<Trait, sqlx::Error> {
        let query = format!(
            "INSERT INTO traits (name, description, full_description)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trait>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.full_description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Trait>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM traits WHERE id = $1");
        sqlx::query_as::<_, Trait>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Trait>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM traits ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Trait>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrait,
    ) -> Result<Option<Trait>, sqlx::Error> {
        let query = format!(
            "UPDATE traits SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                full_description = COALESCE($4, full_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trait>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.full_description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM traits WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
