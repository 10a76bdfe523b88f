//! Character entity model and DTOs.

use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::characteristic::CharacterCharacteristic;
use crate::models::double_option;
use crate::models::link::Link;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    /// `None` until a home world is chosen or rolled.
    pub home_world_id: Option<DbId>,
    pub career_path_id: Option<DbId>,
    pub home_world_class_id: Option<DbId>,
    pub divination_id: Option<DbId>,
    pub wound: Option<i32>,
    pub fate_point: Option<i32>,
    pub wealth: Option<i32>,
    pub sex: String,
    pub age: Option<i32>,
    pub hair_color: String,
    pub eye_color: String,
    pub skin_color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character. Only the name is required; the home
/// world starts unset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub career_path_id: Option<DbId>,
    #[validate(range(min = 0))]
    pub age: Option<i32>,
    #[validate(length(max = 32))]
    pub sex: Option<String>,
}

/// DTO for updating an existing character. All fields are optional.
///
/// The nullable references and counters take `Option<Option<_>>`: omit the
/// key to keep the stored value, send `null` to clear it. The home world is
/// absent; it changes only through the choose/roll endpoints.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCharacter {
    #[validate(length(min = 1, max = 64))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub career_path_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub home_world_class_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub divination_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0))]
    pub wound: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0))]
    pub fate_point: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0))]
    pub wealth: Option<Option<i32>>,
    #[validate(length(max = 32))]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0))]
    pub age: Option<Option<i32>>,
    #[validate(length(max = 32))]
    pub hair_color: Option<String>,
    #[validate(length(max = 32))]
    pub eye_color: Option<String>,
    #[validate(length(max = 32))]
    pub skin_color: Option<String>,
}

/// Body for manually choosing a home world. `null` clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct ChooseHomeWorld {
    pub home_world_id: Option<DbId>,
}

/// A character together with every linked id and its characteristic values.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSheet {
    #[serde(flatten)]
    pub character: Character,
    pub skill_ids: Vec<DbId>,
    pub talent_ids: Vec<DbId>,
    pub gear_ids: Vec<DbId>,
    pub rank_ids: Vec<DbId>,
    pub trait_ids: Vec<DbId>,
    pub quirk_ids: Vec<DbId>,
    pub armour_ids: Vec<DbId>,
    pub mutation_ids: Vec<DbId>,
    pub characteristics: Vec<CharacterCharacteristic>,
}

/// The many-to-many associations a character carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterAssociation {
    Skills,
    Talents,
    Gear,
    Ranks,
    Traits,
    Quirks,
    Armours,
    Mutations,
}

impl CharacterAssociation {
    pub const ALL: [CharacterAssociation; 8] = [
        Self::Skills,
        Self::Talents,
        Self::Gear,
        Self::Ranks,
        Self::Traits,
        Self::Quirks,
        Self::Armours,
        Self::Mutations,
    ];

    /// Parse the URL segment (`/characters/{id}/{slug}`).
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Talents => "talents",
            Self::Gear => "gear",
            Self::Ranks => "ranks",
            Self::Traits => "traits",
            Self::Quirks => "quirks",
            Self::Armours => "armours",
            Self::Mutations => "mutations",
        }
    }

    pub fn link(self) -> Link {
        match self {
            Self::Skills => Link::new("character_skills", "character_id", "skill_id"),
            Self::Talents => Link::new("character_talents", "character_id", "talent_id"),
            Self::Gear => Link::new("character_gear", "character_id", "gear_id"),
            Self::Ranks => Link::new("character_ranks", "character_id", "career_rank_id"),
            Self::Traits => Link::new("character_traits", "character_id", "trait_id"),
            Self::Quirks => Link::new("character_quirks", "character_id", "quirk_id"),
            Self::Armours => Link::new("character_armours", "character_id", "armour_id"),
            Self::Mutations => Link::new("character_mutations", "character_id", "mutation_id"),
        }
    }
}
