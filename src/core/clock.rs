//! Tick driver and periodic timers
//!
//! The host calls [`TickDriver::fire`] from its own wall-clock timer. The
//! driver turns the gap since the previous fire into a bounded simulation
//! delta. Everything downstream sees only that delta; no subsystem reads the
//! wall clock.

use serde::{Deserialize, Serialize};

use crate::core::config::TimingConfig;
use crate::core::types::Millis;

/// Elapsed time handed to one simulation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickDelta {
    /// Real milliseconds since the previous fire
    pub raw_ms: Millis,
    /// Milliseconds actually simulated (after clamping)
    pub delta_ms: Millis,
}

impl TickDelta {
    pub fn from_ms(delta_ms: Millis) -> Self {
        Self { raw_ms: delta_ms, delta_ms }
    }

    pub fn secs(&self) -> f32 {
        self.delta_ms as f32 / 1000.0
    }

    pub fn was_clamped(&self) -> bool {
        self.raw_ms > self.delta_ms
    }
}

/// Fixed-interval driver producing clamped deltas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickDriver {
    interval_ms: Millis,
    max_delta_ms: Millis,
    last_fire_ms: Option<Millis>,
}

impl TickDriver {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            interval_ms: timing.tick_interval_ms,
            max_delta_ms: (timing.max_tick_delta_secs * 1000.0).round() as Millis,
            last_fire_ms: None,
        }
    }

    /// Bound a raw gap to the per-tick maximum
    pub fn clamp(&self, raw_ms: Millis) -> TickDelta {
        TickDelta {
            raw_ms,
            delta_ms: raw_ms.min(self.max_delta_ms),
        }
    }

    /// Whether a fire at `now_ms` would be on schedule
    pub fn is_due(&self, now_ms: Millis) -> bool {
        match self.last_fire_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
            None => true,
        }
    }

    /// Record a fire at `now_ms`.
    ///
    /// The timestamp is always recorded so that resuming after a pause does
    /// not produce one huge catch-up delta. Returns `None` when the
    /// simulation is inactive or on the very first fire.
    pub fn fire(&mut self, now_ms: Millis, active: bool) -> Option<TickDelta> {
        let previous = self.last_fire_ms.replace(now_ms);
        if !active {
            return None;
        }
        let delta = self.clamp(now_ms.saturating_sub(previous?));
        if delta.was_clamped() {
            tracing::debug!(raw_ms = delta.raw_ms, clamped_ms = delta.delta_ms, "tick delta clamped");
        }
        Some(delta)
    }

    /// Forget the last fire (restart)
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}

/// Accumulates simulated time and reports when its period has elapsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodicTimer {
    period_ms: Millis,
    accumulated_ms: Millis,
}

impl PeriodicTimer {
    pub fn new(period_ms: Millis) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
        }
    }

    /// Advance by `delta_ms`; returns how many periods completed
    pub fn advance(&mut self, delta_ms: Millis) -> u32 {
        self.accumulated_ms += delta_ms;
        let fires = self.accumulated_ms / self.period_ms;
        self.accumulated_ms %= self.period_ms;
        fires as u32
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}
