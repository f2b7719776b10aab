//! Damage application and slow effects.

use hecs::{Entity, World};

use bulwark_core::components::{Health, RouteFollower};

use crate::timers::{TimerAction, TimerQueue};

/// Apply `amount` damage to a unit, flooring health at zero.
///
/// Returns true exactly once, on the hit that kills the unit. Damage
/// against an already-dead unit is a no-op.
pub fn apply_damage(world: &mut World, entity: Entity, amount: f64) -> bool {
    let Ok(health) = world.query_one_mut::<&mut Health>(entity) else {
        return false;
    };
    if !health.alive {
        return false;
    }
    health.current = (health.current - amount).max(0.0);
    if health.current <= 0.0 {
        health.alive = false;
        return true;
    }
    false
}

/// Apply a slow effect to a unit: multiply its speed by `factor` and
/// schedule restoration after `duration_ms` of virtual time.
///
/// Slows never stack. Reapplying to an already-slowed unit is a
/// no-op: neither the factor nor the pending expiry changes. Returns
/// true if the unit transitioned from unslowed to slowed.
pub fn apply_slow(
    world: &mut World,
    timers: &mut TimerQueue,
    entity: Entity,
    factor: f64,
    duration_ms: f64,
    now_ms: f64,
) -> bool {
    let Ok((follower, health)) = world.query_one_mut::<(&mut RouteFollower, &Health)>(entity)
    else {
        return false;
    };
    if !health.alive || follower.slowed {
        return false;
    }

    follower.current_speed = follower.base_speed * factor;
    follower.slowed = true;
    timers.schedule(now_ms + duration_ms, entity, TimerAction::RestoreSpeed);
    true
}

/// Restore a slowed unit's speed to its base value. Skipped when the
/// unit has died in the meantime.
pub fn restore_speed(world: &mut World, entity: Entity) {
    let Ok((follower, health)) = world.query_one_mut::<(&mut RouteFollower, &Health)>(entity)
    else {
        return;
    };
    if !health.alive {
        return;
    }
    follower.current_speed = follower.base_speed;
    follower.slowed = false;
}
