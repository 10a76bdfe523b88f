//! Gear entity model and DTOs.

use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `gear` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gear {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or renaming a gear item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveGear {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
