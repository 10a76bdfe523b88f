//! Repository for the `home_worlds`, `home_world_classes` and `quirks` tables.

use acolyte_core::roll::RollCandidate;
use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::home_world::{
    CreateHomeWorld, CreateHomeWorldClass, CreateQuirk, HomeWorld, HomeWorldAssociation,
    HomeWorldClass, HomeWorldDetail, Quirk, UpdateHomeWorld,
};
use crate::repositories::LinkRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, life_description, pc_description, \
    start_roll, end_roll, created_at, updated_at";

const CLASS_COLUMNS: &str = "id, home_world_id, name, description, created_at, updated_at";

const QUIRK_COLUMNS: &str = "id, home_world_id, name, created_at, updated_at";

/// Provides CRUD operations for home worlds and their owned rows.
pub struct HomeWorldRepo;

impl HomeWorldRepo {
    /// Insert a new home world, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHomeWorld) -> Result<HomeWorld, sqlx::Error> {
        let query = format!(
            "INSERT INTO home_worlds
                (name, description, life_description, pc_description, start_roll, end_roll)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HomeWorld>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.life_description)
            .bind(&input.pc_description)
            .bind(input.start_roll)
            .bind(input.end_roll)
            .fetch_one(pool)
            .await
    }

    /// Find a home world by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HomeWorld>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM home_worlds WHERE id = $1");
        sqlx::query_as::<_, HomeWorld>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all home worlds in roll-table order (id ascending).
    pub async fn list(pool: &PgPool) -> Result<Vec<HomeWorld>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM home_worlds ORDER BY id ASC");
        sqlx::query_as::<_, HomeWorld>(&query).fetch_all(pool).await
    }

    /// The roll table: every home world's range with its derived weight,
    /// ordered by id ascending so seeded draws are reproducible.
    pub async fn list_roll_candidates(pool: &PgPool) -> Result<Vec<RollCandidate>, sqlx::Error> {
        let rows: Vec<(DbId, i32, i32)> =
            sqlx::query_as("SELECT id, start_roll, end_roll FROM home_worlds ORDER BY id ASC")
                .fetch_all(pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(id, start_roll, end_roll)| RollCandidate::new(id, start_roll, end_roll))
            .collect())
    }

    /// Update a home world. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHomeWorld,
    ) -> Result<Option<HomeWorld>, sqlx::Error> {
        let query = format!(
            "UPDATE home_worlds SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                life_description = COALESCE($4, life_description),
                pc_description = COALESCE($5, pc_description),
                start_roll = COALESCE($6, start_roll),
                end_roll = COALESCE($7, end_roll)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HomeWorld>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.life_description)
            .bind(&input.pc_description)
            .bind(input.start_roll)
            .bind(input.end_roll)
            .fetch_optional(pool)
            .await
    }

    /// Delete a home world. Characters pointing at it lose their home world;
    /// its classes and quirks are removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM home_worlds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load a home world with its linked ids, quirks and classes.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HomeWorldDetail>, sqlx::Error> {
        let Some(home_world) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let roll_weight = home_world.roll_candidate().roll_weight;

        let ids = |a: HomeWorldAssociation| LinkRepo::linked_ids(pool, a.link(), id);

        Ok(Some(HomeWorldDetail {
            roll_weight,
            skill_ids: ids(HomeWorldAssociation::Skills).await?,
            trait_ids: ids(HomeWorldAssociation::Traits).await?,
            career_path_ids: ids(HomeWorldAssociation::CareerPaths).await?,
            quirks: Self::list_quirks(pool, id).await?,
            classes: Self::list_classes(pool, id).await?,
            home_world,
        }))
    }

    // -----------------------------------------------------------------------
    // Classes
    // -----------------------------------------------------------------------

    /// Insert a class owned by `home_world_id`.
    pub async fn create_class(
        pool: &PgPool,
        home_world_id: DbId,
        input: &CreateHomeWorldClass,
    ) -> Result<HomeWorldClass, sqlx::Error> {
        let query = format!(
            "INSERT INTO home_world_classes (home_world_id, name, description)
             VALUES ($1, $2, COALESCE($3, ''))
             RETURNING {CLASS_COLUMNS}"
        );
        sqlx::query_as::<_, HomeWorldClass>(&query)
            .bind(home_world_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Classes of a home world, ordered by name.
    pub async fn list_classes(
        pool: &PgPool,
        home_world_id: DbId,
    ) -> Result<Vec<HomeWorldClass>, sqlx::Error> {
        let query = format!(
            "SELECT {CLASS_COLUMNS} FROM home_world_classes
             WHERE home_world_id = $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, HomeWorldClass>(&query)
            .bind(home_world_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Quirks
    // -----------------------------------------------------------------------

    /// Insert a quirk owned by `home_world_id`.
    pub async fn create_quirk(
        pool: &PgPool,
        home_world_id: DbId,
        input: &CreateQuirk,
    ) -> Result<Quirk, sqlx::Error> {
        let query = format!(
            "INSERT INTO quirks (home_world_id, name)
             VALUES ($1, $2)
             RETURNING {QUIRK_COLUMNS}"
        );
        sqlx::query_as::<_, Quirk>(&query)
            .bind(home_world_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Quirks of a home world, ordered by name.
    pub async fn list_quirks(
        pool: &PgPool,
        home_world_id: DbId,
    ) -> Result<Vec<Quirk>, sqlx::Error> {
        let query = format!(
            "SELECT {QUIRK_COLUMNS} FROM quirks
             WHERE home_world_id = $1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Quirk>(&query)
            .bind(home_world_id)
            .fetch_all(pool)
            .await
    }
}
