//! Skill entity model and DTOs.

use acolyte_core::catalog::SkillType;
use acolyte_core::characteristic::CharacteristicType;
use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `skills` table.
///
/// `type` and `characteristic` are stored as their codes
/// (`BASIC`/`ADVANCED`, `WS`/`BS`/...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub skill_type: String,
    pub characteristic: String,
    pub descriptor: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    pub characteristic: CharacteristicType,
    #[validate(length(max = 255))]
    pub descriptor: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub skill_type: Option<SkillType>,
    pub characteristic: Option<CharacteristicType>,
    #[validate(length(max = 255))]
    pub descriptor: Option<String>,
    pub description: Option<String>,
}
