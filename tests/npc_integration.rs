//! Integration tests for castaway NPCs
//!
//! Covers the full lifecycle driven through the session:
//! - Washing ashore unconscious, and washing away if left alone
//! - Waking, task assignment and gathering
//! - Handing over the haul and feeding
//! - Starvation and death

use castaway::command::Intent;
use castaway::core::clock::TickDelta;
use castaway::core::config::SimulationConfig;
use castaway::core::types::Vec2;
use castaway::ecs::world::World;
use castaway::entity::inventory::ItemType;
use castaway::entity::npc::{Npc, NpcState, NpcTask};
use castaway::game::{Game, GamePhase};
use castaway::simulation::events::SimulationEvent;
use castaway::simulation::tick::run_simulation_tick;

fn game_with_castaway() -> Game {
    let mut config = SimulationConfig::default();
    config.npc.spawn_chance_per_sec = 1_000.0;
    let mut game = Game::new(config).unwrap();
    game.apply(Intent::Start);

    let events = game.step(100);
    assert!(
        events.iter().any(|e| matches!(e, SimulationEvent::NpcArrived { .. })),
        "castaway should wash ashore on the first tick"
    );
    game.world_mut().config.npc.spawn_chance_per_sec = 0.0;
    game
}

#[test]
fn test_castaway_arrives_unconscious_at_the_shore() {
    let game = game_with_castaway();
    let world = game.world();
    assert_eq!(world.npcs.len(), 1);

    let npc = &world.npcs[0];
    assert_eq!(npc.state, NpcState::Unconscious);
    assert_eq!(npc.energy, 50.0);
    let distance = npc.position.length();
    assert!((48.0..=56.0).contains(&distance), "spawned at radius {distance}");
    assert!(game.log().latest().unwrap().text.starts_with("Someone washed ashore"));
}

#[test]
fn test_only_one_castaway_at_a_time() {
    let mut config = SimulationConfig::default();
    config.npc.spawn_chance_per_sec = 1_000.0;
    let mut game = Game::new(config).unwrap();
    game.apply(Intent::Start);
    for _ in 0..50 {
        game.step(100);
    }
    assert_eq!(game.world().npcs.len(), 1);
}

#[test]
fn test_ignored_castaway_washes_away() {
    let mut game = game_with_castaway();
    let mut washed_away = false;
    for _ in 0..1_300 {
        let events = game.step(100);
        if events.iter().any(|e| matches!(e, SimulationEvent::NpcWashedAway { .. })) {
            washed_away = true;
            break;
        }
    }
    assert!(washed_away);
    assert!(game.world().npcs.is_empty());
    assert!(game.world().now_ms > 120_000);
}

#[test]
fn test_wake_assign_gather_and_hand_over() {
    let mut game = game_with_castaway();
    let id = game.world().npcs[0].id;

    // Keep the castaway in place so the test controls what is in range
    {
        let world = game.world_mut();
        world.config.npc.speed = 0.0;
        world.config.npc.base_success_rate = 1.0;
        world.npcs[0].position = Vec2::new(20.0, 0.0);
        world.resources.clear();
    }

    let events = game.apply(Intent::InteractNpc(id));
    assert!(matches!(&events[..], [SimulationEvent::NpcWoke { .. }]));
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.world().npcs[0].energy, 60.0);

    game.apply(Intent::InteractNpc(id));
    assert_eq!(game.phase(), GamePhase::NpcMenu);
    let events = game.apply(Intent::CommandNpc(Some(NpcTask::GatherApple)));
    assert!(matches!(
        &events[..],
        [SimulationEvent::NpcTaskAssigned { task: Some(NpcTask::GatherApple), .. }]
    ));
    assert_eq!(game.phase(), GamePhase::Playing);

    let apples: Vec<_> = [Vec2::new(21.0, 0.0), Vec2::new(20.0, 1.5), Vec2::new(18.5, -1.0)]
        .into_iter()
        .map(|p| game.world_mut().spawn_resource(ItemType::Apple, p))
        .collect();
    for _ in 0..150 {
        game.step(100);
    }

    let npc = &game.world().npcs[0];
    assert_eq!(npc.state, NpcState::Working);
    assert_eq!(npc.inventory, vec![ItemType::Apple; 3]);
    assert!((npc.skills.apple - 0.15).abs() < 1e-4);
    // Collected placeholders may already have been swept away
    for apple in &apples {
        assert!(game.world().resource(*apple).map_or(true, |r| !r.is_available()));
    }

    game.apply(Intent::InteractNpc(id));
    let events = game.apply(Intent::CollectFromNpc);
    assert!(matches!(&events[..], [SimulationEvent::NpcHandedOver { count: 3, .. }]));
    assert_eq!(game.world().player.inventory.count(ItemType::Apple), 3);
    assert!(game.world().npcs[0].inventory.is_empty());

    let events = game.apply(Intent::CollectFromNpc);
    assert!(matches!(&events[..], [SimulationEvent::NpcNothingToGive { .. }]));

    let energy = game.world().npcs[0].energy;
    let events = game.apply(Intent::FeedNpc);
    assert!(matches!(&events[..], [SimulationEvent::NpcFed { item: ItemType::Apple, .. }]));
    assert!((game.world().npcs[0].energy - (energy + 40.0)).abs() < 1e-4);
    assert_eq!(game.world().player.inventory.count(ItemType::Apple), 2);

    game.apply(Intent::CloseNpcMenu);
    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.world().selected_npc, None);
}

#[test]
fn test_fisher_heads_out_to_sea() {
    let mut world = World::new(SimulationConfig::default());
    world.config.npc.spawn_chance_per_sec = 0.0;
    let id = world.ids.npc();
    let mut npc = Npc::washed_ashore(id, "Noor".into(), Vec2::new(30.0, 0.0), 0, &world.config.npc);
    npc.state = NpcState::Idle;
    npc.energy = 90.0;
    world.npcs.push(npc);
    castaway::simulation::npc_ai::assign_task(&mut world, id, Some(NpcTask::Fish));

    for _ in 0..100 {
        run_simulation_tick(&mut world, TickDelta::from_ms(100));
    }
    let npc = &world.npcs[0];
    let distance = npc.position.length();
    assert!(distance > 50.0 && distance < 85.0, "fisher at radius {distance}");
    assert_eq!(npc.state, NpcState::Working);
}

#[test]
fn test_starving_castaway_dies_and_menu_closes() {
    let mut game = game_with_castaway();
    let id = game.world().npcs[0].id;
    game.world_mut().npcs[0].position = Vec2::new(10.0, 0.0);
    game.apply(Intent::InteractNpc(id));
    game.apply(Intent::InteractNpc(id));
    assert_eq!(game.world().selected_npc, Some(id));
    game.apply(Intent::CloseNpcMenu);

    game.world_mut().npcs[0].energy = 0.05;
    game.world_mut().selected_npc = Some(id);

    let mut seen = Vec::new();
    for _ in 0..20 {
        seen.extend(game.step(100));
        if game.world().npcs.is_empty() {
            break;
        }
    }
    assert!(seen.iter().any(|e| matches!(e, SimulationEvent::NpcStarving { .. })));
    assert!(seen.iter().any(|e| matches!(e, SimulationEvent::NpcDied { .. })));
    assert!(game.world().npcs.is_empty());
    assert_eq!(game.world().selected_npc, None);
    assert_eq!(game.phase(), GamePhase::Playing, "npc death never ends the session");
}

#[test]
fn test_hungry_castaway_eats_from_pack() {
    let mut world = World::new(SimulationConfig::default());
    world.config.npc.spawn_chance_per_sec = 0.0;
    let id = world.ids.npc();
    let mut npc = Npc::washed_ashore(id, "Friday".into(), Vec2::new(10.0, 0.0), 0, &world.config.npc);
    npc.state = NpcState::Idle;
    npc.energy = 29.0;
    npc.inventory = vec![ItemType::Wood, ItemType::Fish];
    world.npcs.push(npc);

    let events = run_simulation_tick(&mut world, TickDelta::from_ms(100));
    assert!(events.contains(&SimulationEvent::NpcAte { name: "Friday".into(), item: ItemType::Fish }));
    let npc = &world.npcs[0];
    assert_eq!(npc.inventory, vec![ItemType::Wood]);
    assert!(npc.energy > 58.0);
    assert!(!npc.starving);
}
