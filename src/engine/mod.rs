//! Simulation engine: configuration, the owned `Simulation` and its bevy
//! integration.
//!
//! Architecture:
//!   host loop / bevy `Update` → `Simulation::tick(input, dt)` → `SimEvent`s
//!
//! The simulation can be driven directly (tests, benches, other hosts) or
//! through [`SimulationPlugin`] inside a bevy app.

pub mod config;
pub mod plugin;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use plugin::{FrameInput, SimulationPlugin, SimulationResource};
pub use simulation::Simulation;
