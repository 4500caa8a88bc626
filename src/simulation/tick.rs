//! Tick system - orchestrates simulation updates
//!
//! One tick advances every subsystem by the same clamped delta, in a fixed
//! order:
//!
//! clock -> campfire pruning -> trees -> seeds -> NPC spawn -> NPC update
//! -> player kinematics -> time & weather -> player vitals
//!
//! Subsystems that look at shared lists (NPCs scanning resources, vitals
//! checking fire proximity) read the [`TickSnapshot`] taken at the start of
//! the tick, never a half-updated list.

use crate::core::clock::TickDelta;
use crate::core::types::{Millis, Vec2};
use crate::ecs::world::World;
use crate::entity::resource::Resource;
use crate::entity::structure::Campfire;
use crate::simulation::events::SimulationEvent;
use crate::simulation::{movement, npc_ai, planting, structures, trees, vitals, weather};

/// Read-only view of shared world state as it stood when the tick began
#[derive(Debug, Clone)]
pub struct TickSnapshot {
    pub now_ms: Millis,
    pub player_position: Vec2,
    /// Lit fires only
    pub campfires: Vec<Campfire>,
    pub tree_positions: Vec<Vec2>,
    /// Uncollected resources only
    pub resources: Vec<Resource>,
}

impl TickSnapshot {
    pub fn capture(world: &World) -> Self {
        let now = world.now_ms;
        Self {
            now_ms: now,
            player_position: world.player.position,
            campfires: world
                .campfires
                .iter()
                .filter(|c| c.is_lit(now))
                .cloned()
                .collect(),
            tree_positions: world.trees.iter().map(|t| t.position).collect(),
            resources: world
                .resources
                .iter()
                .filter(|r| r.is_available())
                .cloned()
                .collect(),
        }
    }
}

/// Run a single simulation tick
///
/// Returns the events raised this tick, in subsystem order. A
/// [`SimulationEvent::Collapsed`] event means the session is over.
pub fn run_simulation_tick(world: &mut World, delta: TickDelta) -> Vec<SimulationEvent> {
    world.tick(delta.delta_ms);
    let snapshot = TickSnapshot::capture(world);
    let mut events = Vec::new();

    structures::prune_expired(world);
    trees::update_trees(world, delta);
    events.extend(planting::mature_seeds(world));
    events.extend(npc_ai::try_spawn_npc(world, delta));
    events.extend(npc_ai::update_npcs(world, &snapshot, delta));

    movement::update_player_kinematics(world, &snapshot, delta);
    let weather_message = weather::update_time_and_weather(world, delta);
    let outcome = vitals::update_vitals(world, &snapshot, delta);

    // Weather and vitals share one message slot per tick
    events.extend(outcome.message.or(weather_message));
    if outcome.collapsed {
        events.push(SimulationEvent::Collapsed {
            score: world.player.score,
        });
    }

    tracing::trace!(
        tick = world.current_tick,
        now_ms = world.now_ms,
        events = events.len(),
        "tick complete"
    );
    events
}
