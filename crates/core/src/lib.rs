//! Domain layer for the Acolyte character sheet service.
//!
//! Holds the vocabularies, validation rules, and the home world roll
//! (sampler + assignment orchestration). Nothing here touches a database
//! or HTTP; storage is reached through [`home_world::HomeWorldStore`].

pub mod catalog;
pub mod characteristic;
pub mod error;
pub mod home_world;
pub mod roll;
pub mod types;
