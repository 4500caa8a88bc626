//! Island generation and geography queries

pub mod generation;

pub use generation::{generate_world, is_on_land, GenerationSummary};
