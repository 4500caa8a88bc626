//! Collectible items lying in the world

use serde::{Deserialize, Serialize};

use crate::core::types::{Millis, ResourceId, Vec2};
use crate::entity::inventory::ItemType;

/// Fish float slightly below the surface
const FISH_DEPTH: f32 = -0.2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub item: ItemType,
    pub position: Vec2,
    /// Collected; kept as a placeholder until respawned or pruned
    pub eaten: bool,
    /// Drives despawn and respawn eligibility
    pub created_at: Millis,
}

impl Resource {
    pub fn new(id: ResourceId, item: ItemType, position: Vec2, now: Millis) -> Self {
        Self {
            id,
            item,
            position,
            eaten: false,
            created_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.eaten
    }

    pub fn age(&self, now: Millis) -> Millis {
        now.saturating_sub(self.created_at)
    }

    pub fn vertical_offset(&self) -> f32 {
        if self.item == ItemType::Fish {
            FISH_DEPTH
        } else {
            0.0
        }
    }

    /// Sea resources persist; land resources despawn if ignored
    pub fn is_sea_resource(&self) -> bool {
        self.item == ItemType::Fish
    }
}
