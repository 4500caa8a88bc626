//! Castaway - island survival simulation core
//!
//! A tick-driven world: player vitals, weather and day/night, trees and
//! seeds, campfires, resource respawn, and castaway NPCs that wash ashore
//! and can be put to work. Rendering and input live in the host; the host
//! talks to a [`game::Game`] through [`command::Intent`]s and reads back
//! [`game::GameSnapshot`]s.

pub mod command;
pub mod core;
pub mod ecs;
pub mod entity;
pub mod game;
pub mod simulation;
pub mod world;
