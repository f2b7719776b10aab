//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world units (pixel-scale Cartesian, y increases downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

/// Virtual simulation clock, advanced by the per-frame delta.
///
/// All cooldowns, timers, and the spawn cadence are measured against
/// this clock, never against wall time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed frames.
    pub frame: u64,
    /// Elapsed virtual time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Record one frame of `delta_ms` virtual milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += delta_ms;
    }
}
