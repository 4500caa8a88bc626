//! Per-tick subsystems and the tick orchestrator

pub mod consumption;
pub mod events;
pub mod movement;
pub mod npc_ai;
pub mod planting;
pub mod resources;
pub mod structures;
pub mod tick;
pub mod trees;
pub mod vitals;
pub mod weather;

pub use events::{EventLog, LogMessage, Severity, SimulationEvent, LOG_CAPACITY};
pub use tick::{run_simulation_tick, TickSnapshot};
