//! Fixed code lists the client needs to build forms.

use acolyte_core::catalog::{ArmourType, SkillType};
use acolyte_core::characteristic::CharacteristicType;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VocabularyEntry {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Vocabularies {
    pub characteristics: Vec<VocabularyEntry>,
    pub skill_types: Vec<VocabularyEntry>,
    pub armour_types: Vec<VocabularyEntry>,
}

/// GET /api/v1/vocabularies
pub async fn list() -> Json<Vocabularies> {
    Json(Vocabularies {
        characteristics: CharacteristicType::ALL
            .into_iter()
            .map(|c| VocabularyEntry {
                code: c.code(),
                label: c.label(),
            })
            .collect(),
        skill_types: SkillType::ALL
            .into_iter()
            .map(|t| VocabularyEntry {
                code: t.code(),
                label: t.label(),
            })
            .collect(),
        armour_types: ArmourType::ALL
            .into_iter()
            .map(|t| VocabularyEntry {
                code: t.code(),
                label: t.label(),
            })
            .collect(),
    })
}
