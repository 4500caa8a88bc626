pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{TimeOfDay, TimePeriod};
pub use clock::{PeriodicTimer, TickDelta, TickDriver};
pub use config::SimulationConfig;
