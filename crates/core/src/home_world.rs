//! Random home world assignment.
//!
//! Loads the roll table from a [`HomeWorldStore`], draws one home world with
//! [`crate::roll::choose_home_world`], and writes the result onto a
//! character. Every failure happens before the write, so a failed assignment
//! leaves the character untouched.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::roll::{choose_home_world, RollCandidate, RollSource};
use crate::types::DbId;

/// Storage the assignment needs.
#[async_trait]
pub trait HomeWorldStore: Send + Sync {
    /// The persisted character handed back after assignment.
    type Character: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// All home worlds with their roll ranges, ordered by id ascending.
    async fn list_roll_candidates(&self) -> Result<Vec<RollCandidate>, Self::Error>;

    /// Atomically load the character and overwrite its home world.
    ///
    /// Returns `None` without writing anything if the character does not
    /// exist.
    async fn assign_home_world(
        &self,
        character_id: DbId,
        home_world_id: DbId,
    ) -> Result<Option<Self::Character>, Self::Error>;
}

/// Why an assignment did not happen.
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError<E: std::error::Error + 'static> {
    /// The roll table cannot produce a home world.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Character with id {0} not found")]
    NotFound(DbId),

    #[error("Storage failure: {0}")]
    Storage(#[source] E),
}

impl<E: std::error::Error + 'static> AssignmentError<E> {
    fn from_core(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) | CoreError::Validation(msg) => Self::InvalidInput(msg),
            CoreError::NotFound { id, .. } => Self::NotFound(id),
        }
    }
}

/// Reject roll tables containing inverted ranges.
///
/// An inverted range means the table itself is misconfigured; drawing from
/// the remaining entries would hide that.
pub fn check_roll_table(candidates: &[RollCandidate]) -> Result<(), CoreError> {
    if let Some(bad) = candidates.iter().find(|c| c.is_inverted()) {
        return Err(CoreError::InvalidInput(format!(
            "Home world {} has end_roll {} before start_roll {}",
            bad.id, bad.end_roll, bad.start_roll
        )));
    }
    Ok(())
}

/// Draw a home world for `character_id` and persist it.
///
/// Candidates are drawn in the order the store returns them (id ascending),
/// so a seeded `rng` gives the same home world for the same table. Calling
/// this again performs a fresh draw and replaces the previous assignment.
pub async fn assign_random_home_world<S, R>(
    store: &S,
    rng: &mut R,
    character_id: DbId,
) -> Result<S::Character, AssignmentError<S::Error>>
where
    S: HomeWorldStore + ?Sized,
    R: RollSource + Send + ?Sized,
{
    let candidates = store
        .list_roll_candidates()
        .await
        .map_err(AssignmentError::Storage)?;

    check_roll_table(&candidates).map_err(AssignmentError::from_core)?;
    let home_world_id =
        choose_home_world(&candidates, rng).map_err(AssignmentError::from_core)?;

    store
        .assign_home_world(character_id, home_world_id)
        .await
        .map_err(AssignmentError::Storage)?
        .ok_or(AssignmentError::NotFound(character_id))
}
