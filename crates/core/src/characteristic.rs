//! The nine characteristics every acolyte is rated in.
//!
//! Characteristics are stored by their short code (`WS`, `BS`, ...) both on
//! skills (the characteristic a skill tests against) and on a character's
//! own characteristic values.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Characteristic vocabulary, serialized as the short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacteristicType {
    #[serde(rename = "WS")]
    WeaponSkill,
    #[serde(rename = "BS")]
    BallisticSkill,
    #[serde(rename = "S")]
    Strength,
    #[serde(rename = "T")]
    Toughness,
    #[serde(rename = "Ag")]
    Agility,
    #[serde(rename = "Int")]
    Intelligence,
    #[serde(rename = "Per")]
    Perception,
    #[serde(rename = "WP")]
    Willpower,
    #[serde(rename = "Fel")]
    Fellowship,
}

impl CharacteristicType {
    pub const ALL: [CharacteristicType; 9] = [
        Self::WeaponSkill,
        Self::BallisticSkill,
        Self::Strength,
        Self::Toughness,
        Self::Agility,
        Self::Intelligence,
        Self::Perception,
        Self::Willpower,
        Self::Fellowship,
    ];

    /// Short code as stored in the database.
    pub fn code(self) -> &'static str {
        match self {
            Self::WeaponSkill => "WS",
            Self::BallisticSkill => "BS",
            Self::Strength => "S",
            Self::Toughness => "T",
            Self::Agility => "Ag",
            Self::Intelligence => "Int",
            Self::Perception => "Per",
            Self::Willpower => "WP",
            Self::Fellowship => "Fel",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::WeaponSkill => "Weapon skill",
            Self::BallisticSkill => "Ballistic skill",
            Self::Strength => "Strength",
            Self::Toughness => "Toughness",
            Self::Agility => "Agility",
            Self::Intelligence => "Intelligence",
            Self::Perception => "Perception",
            Self::Willpower => "Willpower",
            Self::Fellowship => "Fellowship",
        }
    }

    /// Parse a stored short code. Codes are case-sensitive (`S` vs `Ag`).
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| CoreError::Validation(format!("Unknown characteristic code '{code}'")))
    }
}
