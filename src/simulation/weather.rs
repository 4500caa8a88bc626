//! Day/night cycle and the rain process

use rand::Rng;

use crate::core::clock::TickDelta;
use crate::ecs::world::World;
use crate::simulation::events::SimulationEvent;

/// Advance time of day and the rain state machine by one tick
pub fn update_time_and_weather(world: &mut World, delta: TickDelta) -> Option<SimulationEvent> {
    let config = world.config.weather.clone();
    let now = world.now_ms;
    world.time.advance(delta.delta_ms, config.day_length_ms);

    let weather = &mut world.weather;
    if weather.raining {
        weather.rain_remaining_ms = weather.rain_remaining_ms.saturating_sub(delta.delta_ms);
        if weather.rain_remaining_ms > 0 {
            return None;
        }
        let spacing = config.min_time_between_rains_ms as f32;
        let jitter = (world.rng.gen::<f32>() * spacing) as u64;
        weather.raining = false;
        weather.intensity = 0.0;
        weather.next_rain_ms = now + config.min_time_between_rains_ms + jitter;
        tracing::info!(next_rain_ms = weather.next_rain_ms, "rain stopped");
        return Some(SimulationEvent::RainStopped);
    }

    if now <= weather.next_rain_ms {
        return None;
    }

    let intensity = world.rng.gen_range(config.rain_intensity_min..=1.0);
    let duration = if config.rain_duration_max_ms > config.rain_duration_min_ms {
        world
            .rng
            .gen_range(config.rain_duration_min_ms..=config.rain_duration_max_ms)
    } else {
        config.rain_duration_min_ms
    };
    weather.raining = true;
    weather.intensity = intensity;
    weather.rain_remaining_ms = duration;
    let heavy = weather.is_heavy(config.heavy_rain_threshold);
    tracing::info!(intensity, duration_ms = duration, heavy, "rain started");
    Some(SimulationEvent::RainStarted { intensity, heavy })
}
