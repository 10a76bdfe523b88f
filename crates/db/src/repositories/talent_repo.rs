//! Repository for the `talents` table.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::talent::{CreateTalent, Talent, UpdateTalent};

/// `group` is a reserved word and must stay quoted.
const COLUMNS: &str =
    "id, name, prerequisites, benefit, description, \"group\", created_at, updated_at";

/// Provides CRUD operations for talents.
pub struct TalentRepo;

impl TalentRepo {
    pub async fn create(pool: &PgPool, input: &CreateTalent) -> Result<Talent, sqlx::Error> {
        let query = format!(
            "INSERT INTO talents (name, prerequisites, benefit, description, \"group\")
             VALUES ($1, COALESCE($2, ''), $3, COALESCE($4, ''), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Talent>(&query)
            .bind(&input.name)
            .bind(&input.prerequisites)
            .bind(&input.benefit)
            .bind(&input.description)
            .bind(&input.group)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Talent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talents WHERE id = $1");
        sqlx::query_as::<_, Talent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Talent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM talents ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Talent>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTalent,
    ) -> Result<Option<Talent>, sqlx::Error> {
        let query = format!(
            "UPDATE talents SET
                name = COALESCE($2, name),
                prerequisites = COALESCE($3, prerequisites),
                benefit = COALESCE($4, benefit),
                description = COALESCE($5, description),
                \"group\" = COALESCE($6, \"group\")
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Talent>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.prerequisites)
            .bind(&input.benefit)
            .bind(&input.description)
            .bind(&input.group)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM talents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
