//! Repository for the `mutations` table.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::mutation::{CreateMutation, Mutation, UpdateMutation};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for mutations.
pub struct MutationRepo;

impl MutationRepo {
    pub async fn create(pool: &PgPool, input: &CreateMutation) -> Result<Mutation, sqlx::Error> {
        let query = format!(
            "INSERT INTO mutations (name, description)
             VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mutation>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mutation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mutations WHERE id = $1");
        sqlx::query_as::<_, Mutation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Mutation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mutations ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Mutation>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMutation,
    ) -> Result<Option<Mutation>, sqlx::Error> {
        let query = format!(
            "UPDATE mutations SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mutation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mutations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
