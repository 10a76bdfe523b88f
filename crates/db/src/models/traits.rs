//! Trait entity model and DTOs.

use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `traits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trait {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub full_description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrait {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub description: Option<String>,
    pub full_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrait {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
}
