//! Planted seeds maturing into saplings

use rand::Rng;

use crate::ecs::world::World;
use crate::simulation::events::SimulationEvent;
use crate::world::generation::random_scale;

/// Resolve every seed whose growth period has elapsed.
///
/// Each matured seed is removed; with `seed_success_chance` it leaves a
/// sapling behind. Reports how many saplings actually took root.
pub fn mature_seeds(world: &mut World) -> Option<SimulationEvent> {
    let now = world.now_ms;
    let (matured, growing): (Vec<_>, Vec<_>) =
        world.seeds.drain(..).partition(|seed| seed.is_mature(now));
    world.seeds = growing;

    if matured.is_empty() {
        return None;
    }

    let trees = world.config.trees.clone();
    let mut sprouted = 0;
    for seed in &matured {
        if world.rng.gen::<f32>() < trees.seed_success_chance {
            let scale = random_scale(world, trees.sapling_scale_min, trees.sapling_scale_max);
            world.spawn_tree(seed.position, scale);
            sprouted += 1;
        } else {
            tracing::debug!(seed = %seed.id, "seed failed to sprout");
        }
    }

    tracing::debug!(matured = matured.len(), sprouted, "seeds matured");
    (sprouted > 0).then_some(SimulationEvent::SaplingsGrew { count: sprouted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::core::types::Vec2;

    #[test]
    fn test_immature_seeds_stay_planted() {
        let mut world = World::default();
        world.plant_seed(Vec2::new(5.0, 5.0));
        world.now_ms = 30_000;
        assert!(mature_seeds(&mut world).is_none());
        assert_eq!(world.seeds.len(), 1);
    }

    #[test]
    fn test_guaranteed_sprout_becomes_sapling() {
        let mut config = SimulationConfig::default();
        config.trees.seed_success_chance = 1.0;
        let mut world = World::new(config);
        world.plant_seed(Vec2::new(5.0, 5.0));
        world.plant_seed(Vec2::new(-5.0, 5.0));

        world.now_ms = 60_001;
        let event = mature_seeds(&mut world);
        assert_eq!(event, Some(SimulationEvent::SaplingsGrew { count: 2 }));
        assert!(world.seeds.is_empty());
        assert_eq!(world.trees.len(), 2);
        for tree in &world.trees {
            assert!((0.6..1.0).contains(&tree.scale));
            assert!(tree.next_drop_ms > world.now_ms);
        }
    }

    #[test]
    fn test_failed_seed_is_still_removed() {
        let mut config = SimulationConfig::default();
        config.trees.seed_success_chance = 0.0;
        let mut world = World::new(config);
        world.plant_seed(Vec2::new(5.0, 5.0));

        world.now_ms = 60_001;
        assert!(mature_seeds(&mut world).is_none());
        assert!(world.seeds.is_empty());
        assert!(world.trees.is_empty());
    }
}
