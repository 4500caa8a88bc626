//! Time-of-day tracking
//!
//! The island runs on a compressed day: `day_length_ms` of simulated time
//! covers 24 in-game hours. Hours are fractional and always wrap into
//! `[0, 24)`.

use serde::{Deserialize, Serialize};

/// Coarse periods of the day, for UI labels and NPC flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning,    // 06:00-12:00
    Afternoon,  // 12:00-18:00
    Evening,    // 18:00-22:00
    Night,      // 22:00-06:00
}

impl TimePeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimePeriod::Morning,
            12..=17 => TimePeriod::Afternoon,
            18..=21 => TimePeriod::Evening,
            _ => TimePeriod::Night, // 22-23, 0-5
        }
    }
}

/// Current in-game hour, wrapping at 24
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeOfDay {
    hours: f32,
}

impl TimeOfDay {
    pub fn new(hours: f32) -> Self {
        Self {
            hours: hours.rem_euclid(24.0),
        }
    }

    pub fn hours(&self) -> f32 {
        self.hours
    }

    /// Advance by a raw number of hours
    pub fn advance_hours(&mut self, step: f32) {
        let mut next = (self.hours + step).rem_euclid(24.0);
        // rem_euclid can round up to exactly 24.0 for tiny negative inputs
        if next >= 24.0 {
            next -= 24.0;
        }
        self.hours = next;
    }

    /// Advance by simulated milliseconds on a day of `day_length_ms`
    pub fn advance(&mut self, delta_ms: u64, day_length_ms: u64) {
        let step = (delta_ms as f64 / day_length_ms as f64 * 24.0) as f32;
        self.advance_hours(step);
    }

    pub fn hour(&self) -> u32 {
        self.hours.floor() as u32
    }

    pub fn period(&self) -> TimePeriod {
        TimePeriod::from_hour(self.hour())
    }

    pub fn is_night(&self) -> bool {
        self.period() == TimePeriod::Night
    }

    /// Ambient light level in [0.1, 1.0], peaking at noon
    pub fn light_level(&self) -> f32 {
        let angle = (self.hours / 24.0) * std::f32::consts::TAU - std::f32::consts::FRAC_PI_2;
        0.1 + ((angle.sin() + 1.0) / 2.0) * 0.9
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::new(8.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_period_from_hour() {
        assert_eq!(TimePeriod::from_hour(6), TimePeriod::Morning);
        assert_eq!(TimePeriod::from_hour(11), TimePeriod::Morning);
        assert_eq!(TimePeriod::from_hour(12), TimePeriod::Afternoon);
        assert_eq!(TimePeriod::from_hour(17), TimePeriod::Afternoon);
        assert_eq!(TimePeriod::from_hour(18), TimePeriod::Evening);
        assert_eq!(TimePeriod::from_hour(21), TimePeriod::Evening);
        assert_eq!(TimePeriod::from_hour(22), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(5), TimePeriod::Night);
    }

    #[test]
    fn test_wraps_past_midnight() {
        let mut t = TimeOfDay::new(23.5);
        t.advance_hours(1.0);
        assert!((t.hours() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_full_day_returns_to_start() {
        let mut t = TimeOfDay::new(8.0);
        for _ in 0..1200 {
            t.advance(100, 120_000);
        }
        assert!((t.hours() - 8.0).abs() < 0.01, "got {}", t.hours());
    }

    #[test]
    fn test_light_level_peaks_at_noon() {
        let noon = TimeOfDay::new(12.0).light_level();
        let midnight = TimeOfDay::new(0.0).light_level();
        assert!((noon - 1.0).abs() < 1e-4);
        assert!((midnight - 0.1).abs() < 1e-4);
    }
}
