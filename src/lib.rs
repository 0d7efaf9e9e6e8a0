//! Shadow Survivor - Simulation Core
//!
//! Headless game logic for a 3D action-survival game:
//! - Player controller (intent, jump, gravity, collision-gated movement)
//! - Enemy AI (patrol, chase, cooldown-gated attacks)
//! - Static collision world and day/night clock
//! - Shadow clone decoy ability
//! - Collectibles, inventory ledger and crafting
//! - Level table and the game/level state machine
//! - Bevy plugin, structured logging and save snapshots

pub mod abilities;
pub mod constants;
pub mod countdown;
pub mod economy;
pub mod effects;
pub mod engine;
pub mod events;
pub mod gameflow;
pub mod generation;
pub mod geometry;
pub mod logging;
pub mod loot;
pub mod monster;
pub mod movement;
pub mod player;
pub mod save;
pub mod world;

pub use engine::{SimConfig, Simulation, SimulationPlugin};
pub use events::SimEvent;
pub use gameflow::GameState;
pub use movement::InputIntent;
