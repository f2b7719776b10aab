//! Wave snapshot — the complete visible state produced each frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{TowerKind, WaveStatus};
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete wave state handed to the presentation layer after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveSnapshot {
    pub time: SimTime,
    pub status: WaveStatus,
    pub objective: ObjectiveView,
    pub units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    pub towers: Vec<TowerView>,
    /// Units spawned so far this wave.
    pub spawned: u32,
    /// Total units this wave will spawn.
    pub total_to_spawn: u32,
    /// Alive units plus not-yet-spawned units (display counter).
    pub remaining: u32,
    pub events: Vec<SimEvent>,
}

/// Objective health for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectiveView {
    pub hp: u32,
    pub max_hp: u32,
}

/// A visible unit on the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u32,
    pub position: DVec2,
    /// Fractional route progress, 0 to 1.
    pub progress: f64,
    pub health: f64,
    pub max_health: f64,
    pub alive: bool,
    pub slowed: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub splash_radius: f64,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub position: DVec2,
    pub kind: TowerKind,
    /// Milliseconds until the tower may fire again (0 when ready).
    pub cooldown_remaining_ms: f64,
}
