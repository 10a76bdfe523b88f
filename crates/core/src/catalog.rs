//! Catalog vocabularies and pure validation for reference entities.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Skill type
// ---------------------------------------------------------------------------

/// Whether a skill may be used untrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillType {
    Basic,
    Advanced,
}

impl SkillType {
    pub const ALL: [SkillType; 2] = [Self::Basic, Self::Advanced];

    pub fn code(self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Advanced => "ADVANCED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Advanced => "Advanced",
        }
    }
}

// ---------------------------------------------------------------------------
// Armour location
// ---------------------------------------------------------------------------

/// Hit location an armour piece covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArmourType {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl ArmourType {
    pub const ALL: [ArmourType; 6] = [
        Self::Head,
        Self::Body,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Body => "BODY",
            Self::LeftArm => "LEFT_ARM",
            Self::RightArm => "RIGHT_ARM",
            Self::LeftLeg => "LEFT_LEG",
            Self::RightLeg => "RIGHT_LEG",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Head => "Head armour",
            Self::Body => "Body armour",
            Self::LeftArm => "Left arm armour",
            Self::RightArm => "Right arm armour",
            Self::LeftLeg => "Left leg armour",
            Self::RightLeg => "Right leg armour",
        }
    }
}

// ---------------------------------------------------------------------------
// Range validation
// ---------------------------------------------------------------------------

/// Validate a home world roll range. `end_roll` may equal `start_roll`
/// (a zero-weight entry that is never drawn) but may not precede it.
pub fn validate_roll_range(start_roll: i32, end_roll: i32) -> Result<(), CoreError> {
    if end_roll < start_roll {
        return Err(CoreError::Validation(format!(
            "end_roll ({end_roll}) must not be less than start_roll ({start_roll})"
        )));
    }
    Ok(())
}

/// Validate a career rank's experience window and level.
pub fn validate_rank(min_xp: i32, max_xp: i32, rank_level: i32) -> Result<(), CoreError> {
    if min_xp < 0 {
        return Err(CoreError::Validation(format!(
            "min_xp must be non-negative, got {min_xp}"
        )));
    }
    if max_xp < min_xp {
        return Err(CoreError::Validation(format!(
            "max_xp ({max_xp}) must not be less than min_xp ({min_xp})"
        )));
    }
    if rank_level < 1 {
        return Err(CoreError::Validation(format!(
            "rank_level must be at least 1, got {rank_level}"
        )));
    }
    Ok(())
}
