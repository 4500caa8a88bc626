//! The player castaway: position, vitals and backpack

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{Millis, Vec2};
use crate::entity::inventory::{Inventory, ItemType};

/// Vertical offset applied while swimming (renderer sinks the model)
const SWIM_DEPTH: f32 = -0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    /// Destination of the current move intent
    pub move_target: Option<Vec2>,

    /// 0.0 = collapsed, max_energy = fully fed
    pub energy: f32,
    /// 0.0 = dry, max_wetness = soaked
    pub wetness: f32,

    pub sick: bool,
    pub sickness_remaining_ms: Millis,

    pub holding_torch: bool,
    pub torch_remaining_ms: Millis,

    /// Malnutrition tracking
    pub last_food: Option<ItemType>,
    pub consecutive_food: u32,

    pub inventory: Inventory,
    pub score: u32,

    // Derived every tick by the kinematics pass
    pub is_moving: bool,
    pub is_swimming: bool,
    pub is_sheltered: bool,
}

impl Player {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            move_target: None,
            energy: config.player.max_energy,
            wetness: 0.0,
            sick: false,
            sickness_remaining_ms: 0,
            holding_torch: false,
            torch_remaining_ms: 0,
            last_food: None,
            consecutive_food: 0,
            inventory: Inventory::with_capacity(config.player.inventory_size),
            score: 0,
            is_moving: false,
            is_swimming: false,
            is_sheltered: false,
        }
    }

    pub fn vertical_offset(&self) -> f32 {
        if self.is_swimming {
            SWIM_DEPTH
        } else {
            0.0
        }
    }

    pub fn heal(&mut self, amount: f32, max_energy: f32) {
        self.energy = (self.energy + amount).min(max_energy);
    }

    pub fn fall_sick(&mut self, duration_ms: Millis) {
        self.sick = true;
        self.sickness_remaining_ms = duration_ms;
    }

    pub fn light_torch(&mut self, duration_ms: Millis) {
        self.holding_torch = true;
        self.torch_remaining_ms = duration_ms;
    }

    pub fn extinguish_torch(&mut self) {
        self.holding_torch = false;
        self.torch_remaining_ms = 0;
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }
}
