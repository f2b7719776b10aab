//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Per-frame outcome of the simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveStatus {
    /// Wave in progress: units spawning, moving, or dying.
    #[default]
    Active,
    /// Every unit spawned and cleared while the objective still stands.
    /// Terminal for this wave.
    WaveCleared,
    /// The objective was destroyed. Terminal for the whole run.
    ObjectiveLost,
}

/// Tower archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Cheap, fast-firing, short range.
    #[default]
    Basic,
    /// Higher damage and longer range, slower fire rate.
    Archer,
    /// Highest damage, slowest fire rate, splash damage on impact.
    Cannon,
    /// Fires no projectiles; pulses a slow effect on units in range.
    Wall,
}
