//! Campfire lifetimes and proximity effects

use crate::core::config::StructureConfig;
use crate::core::types::{Millis, Vec2};
use crate::ecs::world::World;
use crate::entity::structure::Campfire;

/// Drop every fire whose expiry has passed. Returns how many went out.
pub fn prune_expired(world: &mut World) -> usize {
    let now = world.now_ms;
    let before = world.campfires.len();
    world.campfires.retain(|c| c.is_lit(now));
    let pruned = before - world.campfires.len();
    if pruned > 0 {
        tracing::debug!(pruned, remaining = world.campfires.len(), "campfires burned out");
    }
    pruned
}

/// Whether `position` is inside the warmth radius of any lit fire
pub fn is_near_warm_fire(
    campfires: &[Campfire],
    position: Vec2,
    now: Millis,
    config: &StructureConfig,
) -> bool {
    campfires
        .iter()
        .filter(|c| c.is_lit(now))
        .any(|c| c.position.distance(&position) < c.warmth_radius(config))
}
