//! Character characteristic values (WS, BS, S, ...).

use acolyte_core::characteristic::CharacteristicType;
use acolyte_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `character_characteristics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterCharacteristic {
    pub id: DbId,
    pub character_id: DbId,
    /// Short code, see [`CharacteristicType::code`].
    pub characteristic: String,
    pub value: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One entry of an upsert request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetCharacteristic {
    pub characteristic: CharacteristicType,
    #[validate(range(min = 0, max = 100))]
    pub value: i32,
}
