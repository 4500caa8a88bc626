//! Campfires placed by the player
//!
//! A fire stores only its absolute expiry; remaining life is derived.

use serde::{Deserialize, Serialize};

use crate::core::config::StructureConfig;
use crate::core::types::{Millis, StructureId, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampfireSize {
    /// Three torches stacked together
    Standard,
    /// A wooden stand; burns through the night
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campfire {
    pub id: StructureId,
    pub position: Vec2,
    pub expires_at: Millis,
    pub size: CampfireSize,
}

impl Campfire {
    pub fn new(
        id: StructureId,
        position: Vec2,
        size: CampfireSize,
        now: Millis,
        config: &StructureConfig,
    ) -> Self {
        let duration = match size {
            CampfireSize::Standard => config.campfire_duration_ms,
            CampfireSize::Large => config.large_campfire_duration_ms,
        };
        Self {
            id,
            position,
            expires_at: now + duration,
            size,
        }
    }

    pub fn is_lit(&self, now: Millis) -> bool {
        now < self.expires_at
    }

    pub fn remaining_ms(&self, now: Millis) -> Millis {
        self.expires_at.saturating_sub(now)
    }

    pub fn light_radius(&self, config: &StructureConfig) -> f32 {
        match self.size {
            CampfireSize::Standard => config.campfire_light_radius,
            CampfireSize::Large => config.large_campfire_light_radius,
        }
    }

    /// Radius within which the fire dries the player off
    pub fn warmth_radius(&self, config: &StructureConfig) -> f32 {
        match self.size {
            CampfireSize::Standard => config.campfire_warmth_radius,
            CampfireSize::Large => config.large_campfire_warmth_radius,
        }
    }
}
