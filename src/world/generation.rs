//! Procedural placement of the starting trees and resources
//!
//! The island is a disc of `island_radius` around the origin with the
//! workbench at the centre; everything outside it is sea. Generation draws
//! from the world RNG, so the same seed always produces the same island.

use serde::{Deserialize, Serialize};

use crate::core::config::MapConfig;
use crate::core::types::Vec2;
use crate::ecs::world::World;
use crate::entity::inventory::ItemType;

/// Counts of what generation actually placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub trees: usize,
    pub apples: usize,
    pub fish: usize,
}

/// Whether `position` lies on the land disc
pub fn is_on_land(position: Vec2, map: &MapConfig) -> bool {
    position.length() <= map.island_radius
}

/// Populate an empty world with trees, apples and fish.
///
/// Tree placement makes a fixed number of attempts; attempts landing in the
/// workbench clearing are discarded rather than retried, so an island can
/// start with fewer trees than attempts.
pub fn generate_world(world: &mut World) -> GenerationSummary {
    let map = world.config.map.clone();
    let trees = world.config.trees.clone();
    let mut summary = GenerationSummary::default();

    for _ in 0..map.initial_tree_count {
        let position = world.random_point_in_ring(map.tree_min_radius, map.island_radius);
        if position.length() <= map.tree_clearing_radius {
            continue;
        }
        let scale = random_scale(world, trees.initial_scale_min, trees.initial_scale_max);
        world.spawn_tree(position, scale);
        summary.trees += 1;
    }

    for _ in 0..map.initial_apples {
        let (min, max) = world.spawn_ring(ItemType::Apple);
        let position = world.random_point_in_ring(min, max);
        world.spawn_resource(ItemType::Apple, position);
        summary.apples += 1;
    }

    for _ in 0..map.initial_fish {
        let (min, max) = world.spawn_ring(ItemType::Fish);
        let position = world.random_point_in_ring(min, max);
        world.spawn_resource(ItemType::Fish, position);
        summary.fish += 1;
    }

    tracing::info!(
        trees = summary.trees,
        apples = summary.apples,
        fish = summary.fish,
        seed = world.config.seed,
        "island generated"
    );
    summary
}

/// Uniform scale in [min, max)
pub(crate) fn random_scale(world: &mut World, min: f32, max: f32) -> f32 {
    use rand::Rng;
    if max > min {
        world.rng.gen_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;

    #[test]
    fn test_generation_respects_zones() {
        let mut world = World::new(SimulationConfig::default().with_seed(99));
        let summary = generate_world(&mut world);

        assert!(summary.trees <= 15);
        assert_eq!(summary.apples, 8);
        assert_eq!(summary.fish, 15);
        assert_eq!(world.trees.len(), summary.trees);

        for tree in &world.trees {
            let r = tree.position.length();
            assert!(r > 8.0 && r < 50.0);
            assert!((0.8..1.5).contains(&tree.scale));
        }
        for res in &world.resources {
            let r = res.position.length();
            match res.item {
                ItemType::Apple => assert!((8.0..48.0).contains(&r)),
                ItemType::Fish => assert!((50.0..80.0).contains(&r)),
                other => panic!("unexpected {other}"),
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut a = World::new(SimulationConfig::default().with_seed(5));
        let mut b = World::new(SimulationConfig::default().with_seed(5));
        generate_world(&mut a);
        generate_world(&mut b);
        let pa: Vec<_> = a.trees.iter().map(|t| t.position).collect();
        let pb: Vec<_> = b.trees.iter().map(|t| t.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_is_on_land() {
        let map = MapConfig::default();
        assert!(is_on_land(Vec2::new(30.0, 30.0), &map));
        assert!(!is_on_land(Vec2::new(40.0, 40.0), &map));
    }
}
