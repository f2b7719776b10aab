//! Simulation engine for Bulwark.
//!
//! Owns the hecs ECS world, advances one wave of tower-defense combat
//! in variable-delta steps, and produces `WaveSnapshot`s for the
//! presentation layer. Completely headless, enabling deterministic
//! testing.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod timers;

pub use bulwark_core as core;
pub use engine::{SimulationEngine, TowerSpec, WaveConfig};
