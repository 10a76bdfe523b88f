pub mod armour;
pub mod career_path;
pub mod character;
pub mod gear;
pub mod home_world;
pub mod mutation;
pub mod skill;
pub mod talent;
pub mod traits;
pub mod vocabulary;
