//! Tower target selection and firing.

use glam::DVec2;
use hecs::{Entity, World};

use bulwark_core::components::{Health, MobId, Tower};
use bulwark_core::constants::{
    PROJECTILE_SPEED, WALL_SLOW_DURATION_MS, WALL_SLOW_FACTOR,
};
use bulwark_core::enums::TowerKind;
use bulwark_core::events::SimEvent;
use bulwark_core::types::Position;

use super::combat;
use super::projectile::Projectile;
use crate::timers::TimerQueue;

/// Find the nearest live unit within `range` of `origin`.
///
/// `units` is walked in spawn order, so on an exact distance tie the
/// earlier-spawned unit wins. A non-positive range disables targeting.
pub fn nearest_in_range(
    world: &World,
    units: &[Entity],
    origin: DVec2,
    range: f64,
) -> Option<Entity> {
    if range <= 0.0 {
        return None;
    }
    let mut best: Option<(Entity, f64)> = None;
    for &unit in units {
        let Ok(health) = world.get::<&Health>(unit) else {
            continue;
        };
        if !health.alive {
            continue;
        }
        drop(health);
        let Ok(position) = world.get::<&Position>(unit) else {
            continue;
        };
        let distance = position.0.distance(origin);
        if distance <= range && best.map_or(true, |(_, d)| distance < d) {
            best = Some((unit, distance));
        }
    }
    best.map(|(unit, _)| unit)
}

/// Step one tower: check its cooldown, pick a target, and act.
///
/// Attack towers launch a homing projectile and return its entity for
/// the engine's projectile list. Wall towers pulse a slow over every
/// unit in range instead and return `None`.
pub fn update_tower(
    world: &mut World,
    timers: &mut TimerQueue,
    tower_entity: Entity,
    tower_index: usize,
    units: &[Entity],
    now_ms: f64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    let (kind, damage, range, cooldown_ms, last_fired_ms, splash_radius, origin) = {
        let Ok((tower, position)) = world.query_one_mut::<(&Tower, &Position)>(tower_entity)
        else {
            return None;
        };
        (
            tower.kind,
            tower.damage,
            tower.range,
            tower.cooldown_ms,
            tower.last_fired_ms,
            tower.splash_radius,
            position.0,
        )
    };

    let ready = match last_fired_ms {
        None => true,
        Some(t) => now_ms - t >= cooldown_ms,
    };
    if !ready {
        return None;
    }

    if kind == TowerKind::Wall {
        pulse_slow(world, timers, tower_entity, units, origin, range, now_ms, events);
        return None;
    }

    let target = nearest_in_range(world, units, origin, range)?;
    let target_id = unit_display_id(world, target);
    let projectile = world.spawn((
        Position(origin),
        Projectile {
            target,
            damage,
            splash_radius,
            speed: PROJECTILE_SPEED,
        },
    ));
    events.push(SimEvent::TowerFired {
        tower_index,
        target_id,
    });
    set_last_fired(world, tower_entity, now_ms);
    Some(projectile)
}

/// Slow every live unit within range of a wall tower. The pulse (and
/// its cooldown) only triggers when at least one live unit is in
/// range; dead units awaiting removal do not count.
#[allow(clippy::too_many_arguments)]
fn pulse_slow(
    world: &mut World,
    timers: &mut TimerQueue,
    tower_entity: Entity,
    units: &[Entity],
    origin: DVec2,
    range: f64,
    now_ms: f64,
    events: &mut Vec<SimEvent>,
) {
    if range <= 0.0 {
        return;
    }
    let in_range: Vec<Entity> = units
        .iter()
        .copied()
        .filter(|&unit| {
            let alive = world
                .get::<&Health>(unit)
                .map(|h| h.alive)
                .unwrap_or(false);
            alive
                && world
                    .get::<&Position>(unit)
                    .map(|p| p.0.distance(origin) <= range)
                    .unwrap_or(false)
        })
        .collect();
    if in_range.is_empty() {
        return;
    }
    for unit in in_range {
        let newly_slowed = combat::apply_slow(
            world,
            timers,
            unit,
            WALL_SLOW_FACTOR,
            WALL_SLOW_DURATION_MS,
            now_ms,
        );
        if newly_slowed {
            events.push(SimEvent::SlowApplied {
                unit_id: unit_display_id(world, unit),
            });
        }
    }
    set_last_fired(world, tower_entity, now_ms);
}

fn set_last_fired(world: &mut World, tower_entity: Entity, now_ms: f64) {
    if let Ok(tower) = world.query_one_mut::<&mut Tower>(tower_entity) {
        tower.last_fired_ms = Some(now_ms);
    }
}

/// Display id of a unit, for events and snapshots.
pub fn unit_display_id(world: &World, unit: Entity) -> u32 {
    world.get::<&MobId>(unit).map(|id| id.0).unwrap_or(0)
}
