//! Tree growth, shake recovery, shaking and autonomous apple drops

use rand::Rng;

use crate::core::clock::TickDelta;
use crate::core::config::GrowthMode;
use crate::core::types::{TreeId, Vec2};
use crate::ecs::world::World;
use crate::entity::inventory::ItemType;
use crate::simulation::events::SimulationEvent;

/// Per-tick tree pass: recovery, growth, then auto-drops
pub fn update_trees(world: &mut World, delta: TickDelta) {
    let now = world.now_ms;
    let config = world.config.trees.clone();
    let dt = delta.secs();
    let mut drops: Vec<Vec2> = Vec::new();

    for tree in world.trees.iter_mut() {
        // Recovery forgives one shake and rewinds half a window, so a
        // heavily shaken tree recovers one step every half window after that
        if tree.shake_count > 0 && now.saturating_sub(tree.last_shake_ms) > config.recovery_ms {
            tree.shake_count -= 1;
            tree.last_shake_ms = now.saturating_sub(config.recovery_ms / 2);
        }

        if tree.scale < config.max_scale {
            match config.growth_mode {
                GrowthMode::Continuous => {
                    let growth = config.passive_growth_rate * dt / tree.scale;
                    tree.scale = (tree.scale + growth).min(config.max_scale);
                }
                GrowthMode::Stepped => {
                    if now.saturating_sub(tree.last_growth_ms) >= config.growth_step_interval_ms {
                        let growth = config.growth_step / tree.scale;
                        tree.scale = (tree.scale + growth).min(config.max_scale);
                        tree.last_growth_ms = now;
                    }
                }
            }
        }

        if now >= tree.next_drop_ms {
            drops.push(tree.position);
            let wait = random_ms(config.auto_drop_min_ms, config.auto_drop_max_ms, &mut world.rng);
            tree.next_drop_ms = now + wait;
        }
    }

    for origin in drops {
        let offset = world.random_point_in_ring(0.0, config.auto_drop_scatter);
        world.spawn_resource(ItemType::Apple, origin + offset);
        tracing::debug!(x = origin.x, y = origin.y, "tree dropped an apple");
    }
}

fn random_ms(min: u64, max: u64, rng: &mut impl Rng) -> u64 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Shake a tree.
///
/// The drop chance is computed before the shake counts against the tree.
/// The shake is recorded whether or not anything falls.
pub fn shake_tree(world: &mut World, tree_id: TreeId) -> Option<SimulationEvent> {
    let index = world.tree_index(tree_id)?;
    let config = world.config.trees.clone();
    let now = world.now_ms;

    let tree = &mut world.trees[index];
    let chance = tree.drop_chance(&config);
    tree.shake_count += 1;
    tree.last_shake_ms = now;
    let origin = tree.position;
    let shakes = tree.shake_count;

    if world.rng.gen::<f32>() >= chance {
        tracing::debug!(tree = %tree_id, chance, shakes, "shake yielded nothing");
        return Some(SimulationEvent::TreeShaken { dropped: None });
    }

    let item = if world.rng.gen::<f32>() > 0.5 {
        ItemType::Wood
    } else {
        ItemType::Apple
    };
    let spread = config.drop_scatter;
    let offset = Vec2::new(
        world.rng.gen_range(-spread..=spread),
        world.rng.gen_range(-spread..=spread),
    );
    world.spawn_resource(item, origin + offset);
    tracing::debug!(tree = %tree_id, chance, shakes, %item, "shake dropped an item");
    Some(SimulationEvent::TreeShaken { dropped: Some(item) })
}
