//! Projectile flight and impact resolution.

use glam::DVec2;
use hecs::{Entity, World};

use bulwark_core::components::Health;
use bulwark_core::constants::PROJECTILE_HIT_RADIUS;
use bulwark_core::types::Position;

use super::combat;

/// A projectile in flight toward a live unit.
///
/// Holds a raw entity handle rather than an index: if the target dies
/// before impact the handle simply stops resolving and the projectile
/// self-destructs without damage.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub target: Entity,
    pub damage: f64,
    /// Area-of-effect radius on impact. 0 = single target.
    pub splash_radius: f64,
    /// Travel speed in world units per second.
    pub speed: f64,
}

/// Result of advancing a projectile one step.
#[derive(Debug)]
pub enum ProjectileOutcome {
    InFlight,
    /// The projectile reached its target and resolved damage.
    /// `kills` holds the units this impact destroyed.
    Impact { kills: Vec<Entity> },
    /// The target died (or despawned) mid-flight; no damage is dealt.
    TargetLost,
}

/// Advance one projectile by `delta_ms` of virtual time.
///
/// Homing: the heading is re-derived from the target's current position
/// every step, so a projectile cannot miss a live target. `units` is
/// the engine's spawn-ordered unit list, used for splash resolution.
pub fn advance_projectile(
    world: &mut World,
    entity: Entity,
    units: &[Entity],
    delta_ms: f64,
) -> ProjectileOutcome {
    let Ok(&Projectile {
        target,
        damage,
        splash_radius,
        speed,
    }) = world.query_one_mut::<&Projectile>(entity)
    else {
        return ProjectileOutcome::TargetLost;
    };

    let Some(target_pos) = live_target_position(world, target) else {
        return ProjectileOutcome::TargetLost;
    };

    let own_pos = match world.get::<&Position>(entity) {
        Ok(p) => p.0,
        Err(_) => return ProjectileOutcome::TargetLost,
    };

    if own_pos.distance(target_pos) < PROJECTILE_HIT_RADIUS {
        let kills = resolve_impact(world, target, target_pos, damage, splash_radius, units);
        return ProjectileOutcome::Impact { kills };
    }

    if let Ok(position) = world.query_one_mut::<&mut Position>(entity) {
        // Distance is at least the hit radius here, so the direction
        // is well-defined.
        let direction = (target_pos - position.0).normalize();
        position.0 += direction * speed * delta_ms / 1000.0;
    }
    ProjectileOutcome::InFlight
}

/// Position of `target` if it is still alive in the world.
fn live_target_position(world: &World, target: Entity) -> Option<DVec2> {
    let alive = world.get::<&Health>(target).map(|h| h.alive).ok()?;
    if !alive {
        return None;
    }
    world.get::<&Position>(target).map(|p| p.0).ok()
}

/// Deal the projectile's damage at `at`.
///
/// With a splash radius, every unit within the radius of the target's
/// position (the target included) takes full damage. Without one, only
/// the target is hit.
fn resolve_impact(
    world: &mut World,
    target: Entity,
    at: DVec2,
    damage: f64,
    splash_radius: f64,
    units: &[Entity],
) -> Vec<Entity> {
    let mut kills = Vec::new();
    if splash_radius > 0.0 {
        for &unit in units {
            let within = match world.get::<&Position>(unit) {
                Ok(p) => p.0.distance(at) <= splash_radius,
                Err(_) => false,
            };
            if within && combat::apply_damage(world, unit, damage) {
                kills.push(unit);
            }
        }
    } else if combat::apply_damage(world, target, damage) {
        kills.push(target);
    }
    kills
}
