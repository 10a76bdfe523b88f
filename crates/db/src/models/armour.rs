//! Armour entity model and DTOs.

use acolyte_core::catalog::ArmourType;
use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `armours` table. `type` holds the hit location code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Armour {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub armour_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArmour {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub armour_type: ArmourType,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArmour {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub armour_type: Option<ArmourType>,
}
