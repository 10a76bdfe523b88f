//! Repository for every many-to-many junction table.
//!
//! Table and column names come only from the [`Link`] constants defined next
//! to each association enum, never from user input.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::link::Link;

/// Reads and replaces association sets through a [`Link`] descriptor.
pub struct LinkRepo;

impl LinkRepo {
    /// Ids linked to `owner_id`, ascending.
    pub async fn linked_ids(
        pool: &PgPool,
        link: Link,
        owner_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT {target} FROM {table} WHERE {owner} = $1 ORDER BY {target}",
            target = link.target_column,
            table = link.table,
            owner = link.owner_column,
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the whole association set for `owner_id` in one transaction.
    ///
    /// Duplicate ids are collapsed. A missing target row fails the whole
    /// replacement with a foreign key violation.
    pub async fn replace(
        pool: &PgPool,
        link: Link,
        owner_id: DbId,
        target_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::replace_inner(&mut tx, link, owner_id, target_ids).await?;
        tx.commit().await?;
        Self::linked_ids(pool, link, owner_id).await
    }

    /// Replace an association set within an existing transaction.
    async fn replace_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        link: Link,
        owner_id: DbId,
        target_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let delete = format!(
            "DELETE FROM {table} WHERE {owner} = $1",
            table = link.table,
            owner = link.owner_column,
        );
        sqlx::query(&delete)
            .bind(owner_id)
            .execute(&mut **tx)
            .await?;

        if target_ids.is_empty() {
            return Ok(());
        }

        let insert = format!(
            "INSERT INTO {table} ({owner}, {target}) \
             SELECT $1, UNNEST($2::bigint[]) \
             ON CONFLICT DO NOTHING",
            table = link.table,
            owner = link.owner_column,
            target = link.target_column,
        );
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(target_ids)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
