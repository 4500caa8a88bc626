pub mod world;

pub use world::{WeatherState, World};
