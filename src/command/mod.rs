//! Player intents and their execution
//!
//! The host (renderer, input layer, test harness) never mutates the world
//! directly. It sends an [`Intent`]; the session checks the phase and hands
//! world-level intents to the [`CommandExecutor`].

pub mod executor;

use serde::{Deserialize, Serialize};

use crate::core::types::{NpcId, ResourceId, TreeId, Vec2};
use crate::entity::inventory::ItemType;
use crate::entity::npc::NpcTask;

pub use executor::{CommandExecutor, ExecutionResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    // Session
    Start,
    /// Start with a fresh seed
    StartWithSeed(u64),
    Pause,
    Resume,
    /// Pause if playing, resume if paused
    TogglePause,
    QuitToMenu,

    // Island
    MoveTo(Vec2),
    Collect(ResourceId),
    ShakeTree(TreeId),
    /// Use the item in a backpack slot
    Eat(usize),

    // Workbench
    InteractWorkbench,
    CloseWorkbench,
    Craft(ItemType),
    Deposit(usize),
    Withdraw(usize),

    // NPCs
    /// Wake if unconscious, otherwise open the command menu
    InteractNpc(NpcId),
    /// Assign a task to the selected NPC, or clear it with `None`
    CommandNpc(Option<NpcTask>),
    CollectFromNpc,
    FeedNpc,
    CloseNpcMenu,
}

impl Intent {
    /// Session intents are handled by the session itself, not the executor
    pub fn is_session(&self) -> bool {
        matches!(
            self,
            Intent::Start
                | Intent::StartWithSeed(_)
                | Intent::Pause
                | Intent::Resume
                | Intent::TogglePause
                | Intent::QuitToMenu
        )
    }
}
