//! PostgreSQL-backed [`HomeWorldStore`] used by random home world assignment.

use acolyte_core::home_world::HomeWorldStore;
use acolyte_core::roll::RollCandidate;
use acolyte_core::types::DbId;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::character::Character;
use crate::repositories::{CharacterRepo, HomeWorldRepo};

/// Reads the roll table from `home_worlds` and writes the drawn home world
/// onto `characters`.
#[derive(Debug, Clone)]
pub struct PgRollStore {
    pool: PgPool,
}

impl PgRollStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HomeWorldStore for PgRollStore {
    type Character = Character;
    type Error = sqlx::Error;

    async fn list_roll_candidates(&self) -> Result<Vec<RollCandidate>, sqlx::Error> {
        HomeWorldRepo::list_roll_candidates(&self.pool).await
    }

    async fn assign_home_world(
        &self,
        character_id: DbId,
        home_world_id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        CharacterRepo::set_home_world(&self.pool, character_id, Some(home_world_id)).await
    }
}
