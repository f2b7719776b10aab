//! Snapshot building — flattens the world into a `WaveSnapshot`.

use hecs::{Entity, World};

use bulwark_core::components::{Health, MobId, RouteFollower, Tower};
use bulwark_core::enums::WaveStatus;
use bulwark_core::events::SimEvent;
use bulwark_core::state::{ObjectiveView, ProjectileView, TowerView, UnitView, WaveSnapshot};
use bulwark_core::types::{Position, SimTime};

use super::wave_scheduler::WaveScheduler;
use crate::engine::ObjectiveState;
use crate::systems::projectile::Projectile;

/// Build the complete visible state for one frame. Entity lists are
/// walked in spawn order so view ordering is stable across frames.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    status: WaveStatus,
    objective: &ObjectiveState,
    scheduler: &WaveScheduler,
    units: &[Entity],
    projectiles: &[Entity],
    towers: &[Entity],
    events: Vec<SimEvent>,
) -> WaveSnapshot {
    let mut unit_views = Vec::with_capacity(units.len());
    let mut alive_count = 0;
    for &unit in units {
        let Ok(mut query) =
            world.query_one::<(&MobId, &Position, &RouteFollower, &Health)>(unit)
        else {
            continue;
        };
        if let Some((id, position, follower, health)) = query.get() {
            if health.alive {
                alive_count += 1;
            }
            unit_views.push(UnitView {
                id: id.0,
                position: position.0,
                progress: follower.progress,
                health: health.current,
                max_health: health.max,
                alive: health.alive,
                slowed: follower.slowed,
            });
        }
    }

    let mut projectile_views = Vec::with_capacity(projectiles.len());
    for &entity in projectiles {
        let Ok(mut query) = world.query_one::<(&Position, &Projectile)>(entity) else {
            continue;
        };
        if let Some((position, projectile)) = query.get() {
            projectile_views.push(ProjectileView {
                position: position.0,
                splash_radius: projectile.splash_radius,
            });
        }
    }

    let now_ms = time.elapsed_ms;
    let mut tower_views = Vec::with_capacity(towers.len());
    for &entity in towers {
        let Ok(mut query) = world.query_one::<(&Position, &Tower)>(entity) else {
            continue;
        };
        if let Some((position, tower)) = query.get() {
            let cooldown_remaining_ms = match tower.last_fired_ms {
                None => 0.0,
                Some(t) => (tower.cooldown_ms - (now_ms - t)).max(0.0),
            };
            tower_views.push(TowerView {
                position: position.0,
                kind: tower.kind,
                cooldown_remaining_ms,
            });
        }
    }

    WaveSnapshot {
        time,
        status,
        objective: ObjectiveView {
            hp: objective.hp,
            max_hp: objective.max_hp,
        },
        units: unit_views,
        projectiles: projectile_views,
        towers: tower_views,
        spawned: scheduler.spawned(),
        total_to_spawn: scheduler.total(),
        remaining: scheduler.remaining(alive_count),
        events,
    }
}
