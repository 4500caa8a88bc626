//! Player vitals: wetness, torch fuel, energy and sickness
//!
//! Runs after kinematics so the swimming, moving and shelter flags are
//! current. Every branch can set the tick's single message; a later branch
//! overwrites an earlier one.

use rand::Rng;

use crate::core::clock::TickDelta;
use crate::ecs::world::World;
use crate::simulation::events::SimulationEvent;
use crate::simulation::structures::is_near_warm_fire;
use crate::simulation::tick::TickSnapshot;

/// Result of one vitals pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsOutcome {
    /// The last message raised this tick, if any
    pub message: Option<SimulationEvent>,
    /// Energy hit zero
    pub collapsed: bool,
}

pub fn update_vitals(world: &mut World, snapshot: &TickSnapshot, delta: TickDelta) -> VitalsOutcome {
    let config = world.config.player.clone();
    let dt = delta.secs();
    let heavy_rain = world.weather.is_heavy(world.config.weather.heavy_rain_threshold);
    let near_fire = is_near_warm_fire(
        &snapshot.campfires,
        world.player.position,
        snapshot.now_ms,
        &world.config.structures,
    );
    let raining = world.weather.raining;
    let intensity = world.weather.intensity;
    let player = &mut world.player;
    let mut outcome = VitalsOutcome::default();

    // Wetness
    let mut rate = -config.wetness_dry_per_sec;
    if player.is_swimming {
        rate = config.wetness_gain_per_sec * config.swim_wetness_multiplier;
    } else if raining && !player.is_sheltered {
        rate = config.wetness_gain_per_sec * (0.5 + intensity);
    }
    if near_fire {
        rate = -config.wetness_gain_per_sec * config.fire_drying_multiplier;
    }
    player.wetness = (player.wetness + rate * dt).clamp(0.0, config.max_wetness);

    // Torch
    if player.holding_torch {
        if player.is_swimming {
            player.extinguish_torch();
            outcome.message = Some(SimulationEvent::TorchDoused);
        } else {
            player.torch_remaining_ms = player.torch_remaining_ms.saturating_sub(delta.delta_ms);
            if player.torch_remaining_ms == 0 {
                player.extinguish_torch();
                outcome.message = Some(SimulationEvent::TorchBurnedOut);
            }
        }
    }

    // Energy
    let decay = if player.is_swimming {
        config.decay_swimming
    } else if player.is_moving {
        config.decay_moving
    } else {
        config.decay_idle
    };
    player.energy = (player.energy - decay * dt).min(config.max_energy);
    if !player.is_alive() {
        player.energy = 0.0;
        outcome.collapsed = true;
        tracing::info!(score = player.score, "player collapsed");
    }

    // Sickness: onset only when healthy at the start of the pass, recovery
    // only when already sick
    let was_sick = player.sick;
    if !was_sick && player.wetness > config.wet_sickness_threshold {
        let multiplier = if heavy_rain { config.heavy_rain_sickness_multiplier } else { 1.0 };
        let chance = config.wet_sickness_chance_per_sec * dt * multiplier;
        if world.rng.gen::<f32>() < chance {
            let player = &mut world.player;
            player.fall_sick(config.sickness_duration_ms);
            outcome.message = Some(SimulationEvent::CaughtCold);
            tracing::debug!(wetness = player.wetness, heavy_rain, "caught a cold");
        }
    }
    let player = &mut world.player;
    if was_sick {
        player.sickness_remaining_ms = player.sickness_remaining_ms.saturating_sub(delta.delta_ms);
        if player.sickness_remaining_ms == 0 {
            player.sick = false;
            outcome.message = Some(SimulationEvent::Recovered);
        }
    }

    outcome
}
