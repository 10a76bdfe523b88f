//! Repository for the `gear` and `divinations` tables.
//!
//! Both are name-only catalogs.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::divination::{Divination, SaveDivination};
use crate::models::gear::{Gear, SaveGear};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for gear.
pub struct GearRepo;

impl GearRepo {
    pub async fn create(pool: &PgPool, input: &SaveGear) -> Result<Gear, sqlx::Error> {
        let query = format!("INSERT INTO gear (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Gear>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gear>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gear WHERE id = $1");
        sqlx::query_as::<_, Gear>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Gear>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gear ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Gear>(&query).fetch_all(pool).await
    }

    /// Rename a row. Returns `None` if it does not exist.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        input: &SaveGear,
    ) -> Result<Option<Gear>, sqlx::Error> {
        let query = format!("UPDATE gear SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Gear>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gear WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for imperial divinations.
pub struct DivinationRepo;

impl DivinationRepo {
    pub async fn create(pool: &PgPool, input: &SaveDivination) -> Result<Divination, sqlx::Error> {
        let query = format!("INSERT INTO divinations (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Divination>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Divination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM divinations WHERE id = $1");
        sqlx::query_as::<_, Divination>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Divination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM divinations ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Divination>(&query).fetch_all(pool).await
    }

    /// Rename a row. Returns `None` if it does not exist.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        input: &SaveDivination,
    ) -> Result<Option<Divination>, sqlx::Error> {
        let query = format!("UPDATE divinations SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Divination>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM divinations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
