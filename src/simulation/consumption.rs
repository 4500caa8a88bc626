//! Using an inventory slot: eating, lighting, planting and building
//!
//! Each item type has its own effect. Food heals and scores. Eating the same
//! simple food over and over risks malnutrition, and raw fish can make the
//! player sick.

use rand::Rng;

use crate::core::config::FoodConfig;
use crate::core::types::Vec2;
use crate::ecs::world::World;
use crate::entity::inventory::ItemType;
use crate::entity::structure::CampfireSize;
use crate::simulation::events::SimulationEvent;

/// Heal amount and score for a food item
pub fn food_value(item: ItemType, cooked: bool, food: &FoodConfig) -> Option<(f32, u32)> {
    match item {
        ItemType::Apple => Some((food.apple_heal, food.apple_score)),
        ItemType::AppleJuice => Some((food.apple_juice_heal, food.apple_juice_score)),
        ItemType::BigFish => Some((food.big_fish_heal, food.big_fish_score)),
        ItemType::Fish if cooked => Some((food.cooked_fish_heal, food.cooked_fish_score)),
        ItemType::Fish => Some((food.fish_heal, food.fish_score)),
        _ => None,
    }
}

/// Use the item in `slot`. An empty or out-of-range slot does nothing.
pub fn eat(world: &mut World, slot: usize) -> Vec<SimulationEvent> {
    let Some(item) = world.player.inventory.get(slot) else {
        return Vec::new();
    };
    let position = world.player.position;

    match item {
        ItemType::Wood => {
            world.player.inventory.replace(slot, ItemType::Torch);
            vec![SimulationEvent::TorchCrafted]
        }
        ItemType::Seed => {
            world.player.inventory.take(slot);
            world.plant_seed(position);
            vec![SimulationEvent::SeedPlanted]
        }
        ItemType::Torch => use_torch(world, slot, position),
        ItemType::WoodStand => {
            world.player.inventory.take(slot);
            world.build_campfire(position, CampfireSize::Large);
            tracing::info!(x = position.x, y = position.y, "large campfire built");
            vec![SimulationEvent::CampfireBuilt { large: true }]
        }
        ItemType::Apple | ItemType::Fish | ItemType::AppleJuice | ItemType::BigFish => {
            eat_food(world, slot, item, position)
        }
    }
}

/// Holding a torch with enough spares builds a campfire; otherwise light one
fn use_torch(world: &mut World, slot: usize, position: Vec2) -> Vec<SimulationEvent> {
    let cost = world.config.player.campfire_torch_cost;
    let player = &mut world.player;
    if player.holding_torch && player.inventory.count(ItemType::Torch) >= cost {
        player.inventory.remove_n(ItemType::Torch, cost);
        world.build_campfire(position, CampfireSize::Standard);
        tracing::info!(x = position.x, y = position.y, "campfire built");
        return vec![SimulationEvent::CampfireBuilt { large: false }];
    }
    player.inventory.take(slot);
    player.light_torch(world.config.player.torch_duration_ms);
    vec![SimulationEvent::TorchLit]
}

fn eat_food(world: &mut World, slot: usize, item: ItemType, position: Vec2) -> Vec<SimulationEvent> {
    let cooked = item == ItemType::Fish && world.player_near_cooking_fire();
    let Some((heal, score)) = food_value(item, cooked, &world.config.food) else {
        return Vec::new();
    };
    let config = world.config.player.clone();
    let was_sick = world.player.sick;
    let mut events = Vec::new();

    let player = &mut world.player;
    player.inventory.take(slot);
    player.heal(heal, config.max_energy);
    player.score += score;
    events.push(SimulationEvent::Ate { item, heal, cooked });
    tracing::debug!(%item, heal, cooked, energy = player.energy, "ate");

    if item == ItemType::Apple {
        let angle = world.rng.gen_range(0.0..std::f32::consts::TAU);
        let drop = position + Vec2::from_angle(angle) * world.config.food.seed_drop_offset;
        world.spawn_resource(ItemType::Seed, drop);
        events.push(SimulationEvent::SeedDropped);
    }

    // Cooked fish still counts toward the streak but never warns
    if matches!(item, ItemType::Apple | ItemType::Fish) {
        if world.player.last_food == Some(item) {
            world.player.consecutive_food += 1;
            if world.player.consecutive_food > config.malnutrition_threshold && !cooked {
                events.push(SimulationEvent::MalnutritionWarning);
                if world.rng.gen::<f32>() < config.malnutrition_sickness_chance && !was_sick {
                    world.player.fall_sick(config.sickness_duration_ms);
                    events.push(SimulationEvent::MalnutritionSickness);
                }
            }
        } else {
            world.player.last_food = Some(item);
            world.player.consecutive_food = 1;
        }
    }

    if item == ItemType::Fish && !cooked && !was_sick {
        if world.rng.gen::<f32>() < config.raw_fish_sickness_chance {
            world.player.fall_sick(config.sickness_duration_ms);
            events.push(SimulationEvent::RawFishSickness);
        }
    }

    events
}
