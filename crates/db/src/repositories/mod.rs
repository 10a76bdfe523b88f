//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod armour_repo;
pub mod career_repo;
pub mod character_repo;
pub mod gear_repo;
pub mod home_world_repo;
pub mod link_repo;
pub mod mutation_repo;
pub mod skill_repo;
pub mod talent_repo;
pub mod trait_repo;

pub use armour_repo::ArmourRepo;
pub use career_repo::CareerPathRepo;
pub use character_repo::CharacterRepo;
pub use gear_repo::{DivinationRepo, GearRepo};
pub use home_world_repo::HomeWorldRepo;
pub use link_repo::LinkRepo;
pub use mutation_repo::MutationRepo;
pub use skill_repo::SkillRepo;
pub use talent_repo::TalentRepo;
pub use trait_repo::TraitRepo;
