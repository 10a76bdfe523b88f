//! Home world, home world class, and quirk models and DTOs.
//!
//! A home world's `[start_roll, end_roll)` range is its slice of the roll
//! table used by random assignment. Classes and quirks are owned by exactly
//! one home world and removed with it.

use acolyte_core::roll::RollCandidate;
use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::link::Link;

/// A row from the `home_worlds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HomeWorld {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub life_description: String,
    pub pc_description: String,
    pub start_roll: i32,
    pub end_roll: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HomeWorld {
    pub fn roll_candidate(&self) -> RollCandidate {
        RollCandidate::new(self.id, self.start_roll, self.end_roll)
    }
}

/// DTO for creating a new home world.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHomeWorld {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub description: Option<String>,
    pub life_description: Option<String>,
    pub pc_description: Option<String>,
    pub start_roll: i32,
    pub end_roll: i32,
}

/// DTO for updating a home world. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateHomeWorld {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub life_description: Option<String>,
    pub pc_description: Option<String>,
    pub start_roll: Option<i32>,
    pub end_roll: Option<i32>,
}

/// A home world enriched with its linked and owned rows.
#[derive(Debug, Clone, Serialize)]
pub struct HomeWorldDetail {
    #[serde(flatten)]
    pub home_world: HomeWorld,
    /// Width of the roll range; the draw weight.
    pub roll_weight: i64,
    pub skill_ids: Vec<DbId>,
    pub trait_ids: Vec<DbId>,
    pub career_path_ids: Vec<DbId>,
    pub quirks: Vec<Quirk>,
    pub classes: Vec<HomeWorldClass>,
}

/// The many-to-many associations a home world grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeWorldAssociation {
    Skills,
    Traits,
    CareerPaths,
}

impl HomeWorldAssociation {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "skills" => Some(Self::Skills),
            "traits" => Some(Self::Traits),
            "career-paths" => Some(Self::CareerPaths),
            _ => None,
        }
    }

    pub fn link(self) -> Link {
        match self {
            Self::Skills => Link::new("home_world_skills", "home_world_id", "skill_id"),
            Self::Traits => Link::new("home_world_traits", "home_world_id", "trait_id"),
            Self::CareerPaths => {
                Link::new("home_world_career_paths", "home_world_id", "career_path_id")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Home world classes
// ---------------------------------------------------------------------------

/// A row from the `home_world_classes` table: the character's previous
/// occupation on their home world.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HomeWorldClass {
    pub id: DbId,
    pub home_world_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHomeWorldClass {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Quirks
// ---------------------------------------------------------------------------

/// A row from the `quirks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quirk {
    pub id: DbId,
    pub home_world_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuirk {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
