//! Resource lifecycle: collection, despawn sweep and respawn roll

use rand::Rng;

use crate::core::config::RespawnPolicy;
use crate::core::types::{ResourceId, Vec2};
use crate::ecs::world::World;
use crate::entity::inventory::ItemType;
use crate::entity::resource::Resource;

/// Result of a collect intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    Collected(ItemType),
    BackpackFull,
    OutOfReach,
    /// Unknown id or already collected
    Unavailable,
}

/// What one sweep did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub despawned: usize,
    pub pruned: usize,
    pub respawned: Option<ResourceId>,
}

/// Pick-up radius for a resource type
pub fn reach_for(item: ItemType, world: &World) -> f32 {
    if item == ItemType::Fish {
        world.config.player.fish_interaction_distance
    } else {
        world.config.player.interaction_distance
    }
}

/// Move a resource from the ground into the player's backpack
pub fn collect_resource(world: &mut World, id: ResourceId) -> CollectOutcome {
    let Some(index) = world.resources.iter().position(|r| r.id == id && r.is_available()) else {
        return CollectOutcome::Unavailable;
    };
    let resource = &world.resources[index];
    let item = resource.item;
    if resource.position.distance(&world.player.position) > reach_for(item, world) {
        return CollectOutcome::OutOfReach;
    }
    if world.player.inventory.insert(item).is_none() {
        return CollectOutcome::BackpackFull;
    }
    world.resources[index].eaten = true;
    tracing::debug!(resource = %id, %item, "collected");
    CollectOutcome::Collected(item)
}

fn respawn_eligible(resource: &Resource, policy: RespawnPolicy) -> bool {
    match policy {
        RespawnPolicy::FishOnly => resource.item == ItemType::Fish,
        RespawnPolicy::AllFood => matches!(resource.item, ItemType::Fish | ItemType::Apple),
    }
}

/// One pass of the periodic resource sweep.
///
/// Uncollected land items past the despawn window vanish. Collected
/// placeholders stay only while the respawn policy could revive them. Then,
/// with `respawn_chance`, one eligible placeholder is moved to a fresh spot
/// in its spawn ring and made available again.
pub fn sweep_resources(world: &mut World) -> SweepReport {
    let now = world.now_ms;
    let config = world.config.resources.clone();
    let mut report = SweepReport::default();

    world.resources.retain(|r| {
        if r.eaten {
            let keep = respawn_eligible(r, config.respawn_policy);
            report.pruned += usize::from(!keep);
            keep
        } else if r.is_sea_resource() {
            true
        } else {
            let fresh = r.age(now) < config.despawn_ms;
            report.despawned += usize::from(!fresh);
            fresh
        }
    });

    let placeholders: Vec<usize> = world
        .resources
        .iter()
        .enumerate()
        .filter(|(_, r)| r.eaten)
        .map(|(i, _)| i)
        .collect();
    if placeholders.is_empty() || world.rng.gen::<f32>() >= config.respawn_chance {
        return report;
    }

    let index = placeholders[world.rng.gen_range(0..placeholders.len())];
    let (min, max) = world.spawn_ring(world.resources[index].item);
    let position: Vec2 = world.random_point_in_ring(min, max);
    let resource = &mut world.resources[index];
    resource.eaten = false;
    resource.position = position;
    resource.created_at = now;
    report.respawned = Some(resource.id);
    tracing::debug!(resource = %resource.id, item = %resource.item, "resource respawned");

    report
}
