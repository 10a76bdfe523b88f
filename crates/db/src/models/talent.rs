//! Talent entity model and DTOs.

use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `talents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Talent {
    pub id: DbId,
    pub name: String,
    pub prerequisites: String,
    pub benefit: String,
    pub description: String,
    pub group: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTalent {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub prerequisites: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub benefit: String,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTalent {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub prerequisites: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub benefit: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub group: Option<String>,
}
