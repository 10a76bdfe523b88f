use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The inputs to a domain operation are unusable as a whole, e.g. a roll
    /// table where no home world can be drawn.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
