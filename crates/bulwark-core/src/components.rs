//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// Marks an entity as a mobile hostile unit on the route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mob;

/// Display identifier for a unit, assigned sequentially by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobId(pub u32);

/// Progress-parametrized movement state along the route.
///
/// `progress` is the authoritative coordinate; the entity's `Position`
/// is recomputed from it every frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFollower {
    /// Fractional position along the route, 0 (spawn) to 1 (objective).
    /// Monotonically non-decreasing while the unit is alive.
    pub progress: f64,
    /// Unmodified movement speed in world units per second.
    pub base_speed: f64,
    /// Effective speed after slow effects.
    pub current_speed: f64,
    /// Whether a slow effect is active (effects never stack).
    pub slowed: bool,
}

/// Hit points and liveness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Current hit points, floored at zero.
    pub current: f64,
    pub max: f64,
    /// Cleared exactly once, when `current` reaches zero.
    pub alive: bool,
}

/// Stationary defender state. Position is fixed at placement and the
/// entity persists for the whole wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub kind: TowerKind,
    /// Damage dealt per projectile.
    pub damage: f64,
    /// Targeting range in world units. `<= 0` disables the tower.
    pub range: f64,
    /// Minimum interval between shots (or slow pulses) in milliseconds.
    pub cooldown_ms: f64,
    /// Virtual-clock timestamp of the last shot; `None` until the
    /// first shot, so a fresh tower may fire immediately.
    pub last_fired_ms: Option<f64>,
    /// Area-of-effect radius on impact. 0 = single target.
    pub splash_radius: f64,
}

// Position (types.rs) is used directly as a component on units,
// towers, and projectiles.
