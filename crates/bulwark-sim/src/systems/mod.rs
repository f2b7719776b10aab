//! Systems that operate on the simulation world each step.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they need. They do not own state — all per-entity state lives
//! in components, and wave-level state lives on the engine.

pub mod combat;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod targeting;
pub mod wave_scheduler;
