//! Events emitted by the simulation for the presentation layer.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One-shot events drained into each snapshot. Hit flashes, sounds,
/// and phase transitions are all driven from these outside the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A unit entered the route at progress 0.
    UnitSpawned { unit_id: u32 },
    /// A unit was destroyed by combat damage.
    UnitKilled { unit_id: u32, position: DVec2 },
    /// A unit reached the objective and damaged it.
    UnitArrived { unit_id: u32, objective_hp: u32 },
    /// A tower fired a projectile at a unit.
    TowerFired { tower_index: usize, target_id: u32 },
    /// A wall tower slowed a unit.
    SlowApplied { unit_id: u32 },
    /// Every unit spawned and cleared; the wave is over.
    WaveCleared,
    /// The objective's health reached zero.
    ObjectiveDestroyed,
}
