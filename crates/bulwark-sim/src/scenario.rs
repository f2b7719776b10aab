//! Built-in scenario data: the default map and tower presets.
//!
//! The default map targets a 1024x768 field. The route is an S-curve
//! from off-screen top-center down to the objective near the bottom.

use glam::DVec2;

use bulwark_core::constants::{
    ARCHER_TOWER_COOLDOWN_MS, ARCHER_TOWER_DAMAGE, ARCHER_TOWER_RANGE, BASIC_TOWER_COOLDOWN_MS,
    BASIC_TOWER_DAMAGE, BASIC_TOWER_RANGE, CANNON_SPLASH_RADIUS, CANNON_TOWER_COOLDOWN_MS,
    CANNON_TOWER_DAMAGE, CANNON_TOWER_RANGE, DEFAULT_OBJECTIVE_HP, WALL_PULSE_COOLDOWN_MS,
    WALL_SLOW_RANGE,
};
use bulwark_core::enums::TowerKind;
use bulwark_core::route::Route;

use crate::engine::{TowerSpec, WaveConfig};

/// The default enemy route. Spawn is off-screen at the top; the last
/// waypoint sits just above the objective.
pub fn default_route() -> Route {
    Route::new(vec![
        DVec2::new(512.0, -20.0),
        DVec2::new(512.0, 80.0),
        DVec2::new(800.0, 80.0),
        DVec2::new(800.0, 230.0),
        DVec2::new(200.0, 230.0),
        DVec2::new(200.0, 380.0),
        DVec2::new(800.0, 380.0),
        DVec2::new(800.0, 530.0),
        DVec2::new(512.0, 530.0),
        DVec2::new(512.0, 680.0),
    ])
}

/// Tower placement spots beside the default route, offset so towers
/// sit next to the path rather than on it.
pub fn placement_spots() -> Vec<DVec2> {
    vec![
        DVec2::new(600.0, 140.0),
        DVec2::new(700.0, 140.0),
        DVec2::new(860.0, 155.0),
        DVec2::new(650.0, 170.0),
        DVec2::new(400.0, 290.0),
        DVec2::new(300.0, 170.0),
        DVec2::new(140.0, 305.0),
        DVec2::new(400.0, 440.0),
        DVec2::new(600.0, 320.0),
        DVec2::new(700.0, 440.0),
        DVec2::new(860.0, 455.0),
        DVec2::new(450.0, 590.0),
        DVec2::new(580.0, 590.0),
    ]
}

/// Preset stats for a tower of the given kind at `position`.
pub fn tower_spec(kind: TowerKind, position: DVec2) -> TowerSpec {
    match kind {
        TowerKind::Basic => TowerSpec {
            position,
            kind,
            damage: BASIC_TOWER_DAMAGE,
            range: BASIC_TOWER_RANGE,
            cooldown_ms: BASIC_TOWER_COOLDOWN_MS,
            splash_radius: 0.0,
        },
        TowerKind::Archer => TowerSpec {
            position,
            kind,
            damage: ARCHER_TOWER_DAMAGE,
            range: ARCHER_TOWER_RANGE,
            cooldown_ms: ARCHER_TOWER_COOLDOWN_MS,
            splash_radius: 0.0,
        },
        TowerKind::Cannon => TowerSpec {
            position,
            kind,
            damage: CANNON_TOWER_DAMAGE,
            range: CANNON_TOWER_RANGE,
            cooldown_ms: CANNON_TOWER_COOLDOWN_MS,
            splash_radius: CANNON_SPLASH_RADIUS,
        },
        // Walls deal no damage; they pulse a slow over units in range.
        TowerKind::Wall => TowerSpec {
            position,
            kind,
            damage: 0.0,
            range: WALL_SLOW_RANGE,
            cooldown_ms: WALL_PULSE_COOLDOWN_MS,
            splash_radius: 0.0,
        },
    }
}

/// A ready-to-run wave on the default map with no towers placed.
pub fn default_wave(round: u32) -> WaveConfig {
    WaveConfig {
        route: default_route(),
        towers: Vec::new(),
        objective_hp: DEFAULT_OBJECTIVE_HP,
        round,
    }
}
