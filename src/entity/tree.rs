//! Trees and the seeds that grow into them

use serde::{Deserialize, Serialize};

use crate::core::config::TreeConfig;
use crate::core::types::{Millis, SeedId, TreeId, Vec2};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeData {
    pub id: TreeId,
    pub position: Vec2,
    /// Never exceeds `TreeConfig::max_scale`
    pub scale: f32,
    /// Outstanding shakes; each one lowers the drop chance
    pub shake_count: u32,
    pub last_shake_ms: Millis,
    pub next_drop_ms: Millis,
    /// Last growth step (stepped growth mode only)
    pub last_growth_ms: Millis,
}

impl TreeData {
    pub fn new(id: TreeId, position: Vec2, scale: f32, now: Millis, next_drop_ms: Millis) -> Self {
        Self {
            id,
            position,
            scale,
            shake_count: 0,
            last_shake_ms: 0,
            next_drop_ms,
            last_growth_ms: now,
        }
    }

    /// Chance that the next shake drops something.
    ///
    /// Bigger trees drop more; every outstanding shake divides the chance.
    pub fn drop_chance(&self, config: &TreeConfig) -> f32 {
        (config.drop_chance * self.scale) / (1.0 + self.shake_count as f32 * config.decay_factor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantedSeed {
    pub id: SeedId,
    pub position: Vec2,
    pub planted_at: Millis,
    pub growth_ms: Millis,
}

impl PlantedSeed {
    pub fn is_mature(&self, now: Millis) -> bool {
        now.saturating_sub(self.planted_at) > self.growth_ms
    }

    /// Fraction of the growth period already elapsed, for sapling visuals
    pub fn progress(&self, now: Millis) -> f32 {
        if self.growth_ms == 0 {
            return 1.0;
        }
        (now.saturating_sub(self.planted_at) as f32 / self.growth_ms as f32).min(1.0)
    }
}
