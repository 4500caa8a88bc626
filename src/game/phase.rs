//! Session phases

use serde::{Deserialize, Serialize};

/// Where the session is. Only `Playing` advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Menu,
    Playing,
    Paused,
    /// Crafting and storage screen
    Workbench,
    /// Command screen for the selected NPC
    NpcMenu,
    GameOver,
}

impl GamePhase {
    pub fn is_simulating(&self) -> bool {
        *self == GamePhase::Playing
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Menu
    }
}
