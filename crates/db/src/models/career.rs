//! Career path and career rank models and DTOs.

use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::link::Link;

/// A row from the `career_paths` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareerPath {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCareerPath {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCareerPath {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A career path with its starting grants and ranks (ordered by level).
#[derive(Debug, Clone, Serialize)]
pub struct CareerPathDetail {
    #[serde(flatten)]
    pub career_path: CareerPath,
    pub starting_skill_ids: Vec<DbId>,
    pub starting_talent_ids: Vec<DbId>,
    pub starting_gear_ids: Vec<DbId>,
    pub starting_trait_ids: Vec<DbId>,
    pub ranks: Vec<CareerRank>,
}

/// What a career path grants a new character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerPathAssociation {
    Skills,
    Talents,
    Gear,
    Traits,
}

impl CareerPathAssociation {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "skills" => Some(Self::Skills),
            "talents" => Some(Self::Talents),
            "gear" => Some(Self::Gear),
            "traits" => Some(Self::Traits),
            _ => None,
        }
    }

    pub fn link(self) -> Link {
        match self {
            Self::Skills => Link::new("career_path_skills", "career_path_id", "skill_id"),
            Self::Talents => Link::new("career_path_talents", "career_path_id", "talent_id"),
            Self::Gear => Link::new("career_path_gear", "career_path_id", "gear_id"),
            Self::Traits => Link::new("career_path_traits", "career_path_id", "trait_id"),
        }
    }
}

// ---------------------------------------------------------------------------
// Ranks
// ---------------------------------------------------------------------------

/// A row from the `career_ranks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareerRank {
    pub id: DbId,
    pub career_path_id: DbId,
    pub name: String,
    pub description: String,
    pub min_xp: i32,
    pub max_xp: i32,
    pub rank_level: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a rank under a career path. The XP window and level are
/// checked with [`acolyte_core::catalog::validate_rank`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCareerRank {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub description: Option<String>,
    pub min_xp: i32,
    pub max_xp: i32,
    pub rank_level: i32,
}
