//! Repository for the `career_paths` and `career_ranks` tables.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::career::{
    CareerPath, CareerPathAssociation, CareerPathDetail, CareerRank, CreateCareerPath,
    CreateCareerRank, UpdateCareerPath,
};
use crate::repositories::LinkRepo;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

const RANK_COLUMNS: &str = "id, career_path_id, name, description, min_xp, max_xp, rank_level, \
    created_at, updated_at";

/// Provides CRUD operations for career paths and their ranks.
pub struct CareerPathRepo;

impl CareerPathRepo {
    /// Insert a new career path, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCareerPath,
    ) -> Result<CareerPath, sqlx::Error> {
        let query = format!(
            "INSERT INTO career_paths (name, description)
             VALUES ($1, COALESCE($2, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CareerPath>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a career path by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CareerPath>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM career_paths WHERE id = $1");
        sqlx::query_as::<_, CareerPath>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all career paths, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<CareerPath>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM career_paths ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, CareerPath>(&query).fetch_all(pool).await
    }

    /// Update a career path. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCareerPath,
    ) -> Result<Option<CareerPath>, sqlx::Error> {
        let query = format!(
            "UPDATE career_paths SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CareerPath>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a career path and its ranks. Characters on this path keep
    /// their row with `career_path_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM career_paths WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load a career path with its starting grants and ranks.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CareerPathDetail>, sqlx::Error> {
        let Some(career_path) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let ids = |a: CareerPathAssociation| LinkRepo::linked_ids(pool, a.link(), id);

        Ok(Some(CareerPathDetail {
            career_path,
            starting_skill_ids: ids(CareerPathAssociation::Skills).await?,
            starting_talent_ids: ids(CareerPathAssociation::Talents).await?,
            starting_gear_ids: ids(CareerPathAssociation::Gear).await?,
            starting_trait_ids: ids(CareerPathAssociation::Traits).await?,
            ranks: Self::list_ranks(pool, id).await?,
        }))
    }

    // -----------------------------------------------------------------------
    // Ranks
    // -----------------------------------------------------------------------

    /// Insert a rank on `career_path_id`. Levels are unique per path.
    pub async fn create_rank(
        pool: &PgPool,
        career_path_id: DbId,
        input: &CreateCareerRank,
    ) -> Result<CareerRank, sqlx::Error> {
        let query = format!(
            "INSERT INTO career_ranks
                (career_path_id, name, description, min_xp, max_xp, rank_level)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, $6)
             RETURNING {RANK_COLUMNS}"
        );
        sqlx::query_as::<_, CareerRank>(&query)
            .bind(career_path_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.min_xp)
            .bind(input.max_xp)
            .bind(input.rank_level)
            .fetch_one(pool)
            .await
    }

    /// Ranks of a career path, lowest level first.
    pub async fn list_ranks(
        pool: &PgPool,
        career_path_id: DbId,
    ) -> Result<Vec<CareerRank>, sqlx::Error> {
        let query = format!(
            "SELECT {RANK_COLUMNS} FROM career_ranks
             WHERE career_path_id = $1
             ORDER BY rank_level ASC"
        );
        sqlx::query_as::<_, CareerRank>(&query)
            .bind(career_path_id)
            .fetch_all(pool)
            .await
    }
}
