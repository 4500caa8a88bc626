pub mod inventory;
pub mod npc;
pub mod player;
pub mod resource;
pub mod structure;
pub mod tree;

pub use inventory::{Inventory, ItemType, Recipe, RECIPES};
pub use npc::{Npc, NpcSkills, NpcState, NpcTask};
pub use player::Player;
pub use resource::Resource;
pub use structure::{Campfire, CampfireSize};
pub use tree::{PlantedSeed, TreeData};
