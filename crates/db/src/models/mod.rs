//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! Nullable columns that a patch may clear use `Option<Option<T>>` with
//! [`double_option`]: an absent key keeps the value, `null` clears it.

pub mod armour;
pub mod career;
pub mod character;
pub mod characteristic;
pub mod divination;
pub mod gear;
pub mod home_world;
pub mod link;
pub mod mutation;
pub mod skill;
pub mod talent;
pub mod traits;

use serde::{Deserialize, Deserializer};

/// Deserialize a present key (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
