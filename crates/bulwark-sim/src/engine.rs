//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, advances one wave of
//! combat per `step` call, and produces `WaveSnapshot`s. Completely
//! headless (no rendering dependency), enabling deterministic testing.

use glam::DVec2;
use hecs::{Entity, World};

use bulwark_core::components::{Health, Mob, MobId, RouteFollower, Tower};
use bulwark_core::constants::{ARRIVAL_DAMAGE, DEFAULT_OBJECTIVE_HP};
use bulwark_core::enums::{TowerKind, WaveStatus};
use bulwark_core::events::SimEvent;
use bulwark_core::route::Route;
use bulwark_core::state::WaveSnapshot;
use bulwark_core::types::{Position, SimTime};

use crate::systems;
use crate::systems::projectile::ProjectileOutcome;
use crate::systems::wave_scheduler::WaveScheduler;
use crate::timers::{TimerAction, TimerQueue};

/// Everything needed to place one tower.
#[derive(Debug, Clone)]
pub struct TowerSpec {
    pub position: DVec2,
    pub kind: TowerKind,
    pub damage: f64,
    pub range: f64,
    pub cooldown_ms: f64,
    pub splash_radius: f64,
}

/// Configuration for starting a new wave.
#[derive(Debug, Clone)]
pub struct WaveConfig {
    pub route: Route,
    pub towers: Vec<TowerSpec>,
    pub objective_hp: u32,
    /// 1-based round index driving unit count and health.
    pub round: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            route: Route::new(Vec::new()),
            towers: Vec::new(),
            objective_hp: DEFAULT_OBJECTIVE_HP,
            round: 1,
        }
    }
}

/// The defended objective at the route end.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveState {
    pub hp: u32,
    pub max_hp: u32,
}

impl ObjectiveState {
    pub fn new(hp: u32) -> Self {
        Self { hp, max_hp: hp }
    }

    pub fn damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hp == 0
    }
}

/// The simulation engine. Owns the ECS world and all wave state.
///
/// Entity lists are kept in spawn order; systems that walk them rely
/// on that order for stable tie-breaking, so removal preserves it.
pub struct SimulationEngine {
    world: World,
    route: Route,
    time: SimTime,
    status: WaveStatus,
    objective: ObjectiveState,
    scheduler: WaveScheduler,
    timers: TimerQueue,
    units: Vec<Entity>,
    projectiles: Vec<Entity>,
    towers: Vec<Entity>,
    next_unit_id: u32,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine for one wave.
    pub fn new(config: WaveConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            route: config.route,
            time: SimTime::default(),
            status: WaveStatus::Active,
            objective: ObjectiveState::new(config.objective_hp),
            scheduler: WaveScheduler::new(config.round),
            timers: TimerQueue::default(),
            units: Vec::new(),
            projectiles: Vec::new(),
            towers: Vec::new(),
            next_unit_id: 0,
            events: Vec::new(),
        };
        for spec in config.towers {
            engine.add_tower(spec);
        }
        engine
    }

    /// Place a tower. Towers may be added mid-wave; the new tower is
    /// ready to fire immediately. Returns its index.
    pub fn add_tower(&mut self, spec: TowerSpec) -> usize {
        let entity = self.world.spawn((
            Position(spec.position),
            Tower {
                kind: spec.kind,
                damage: spec.damage,
                range: spec.range,
                cooldown_ms: spec.cooldown_ms,
                last_fired_ms: None,
                splash_radius: spec.splash_radius,
            },
        ));
        self.towers.push(entity);
        self.towers.len() - 1
    }

    /// Advance the wave by `delta_ms` of virtual time and return the
    /// resulting status.
    ///
    /// Order within a step: timers, spawns, unit movement and removal,
    /// towers, projectiles, then terminal checks. Once the wave
    /// reaches a terminal status further steps are no-ops that keep
    /// reporting the latched status.
    pub fn step(&mut self, delta_ms: f64) -> WaveStatus {
        if self.status != WaveStatus::Active {
            return self.status;
        }

        self.time.advance(delta_ms);
        let now_ms = self.time.elapsed_ms;

        for (owner, action) in self.timers.fire_due(now_ms) {
            match action {
                TimerAction::RestoreSpeed => systems::combat::restore_speed(&mut self.world, owner),
            }
        }

        let due = self.scheduler.poll(delta_ms);
        for _ in 0..due {
            self.spawn_unit();
        }

        self.advance_units(delta_ms);
        self.update_towers(now_ms);
        self.advance_projectiles(delta_ms);

        // Loss takes priority when both conditions hold in one step.
        if self.objective.is_destroyed() {
            self.status = WaveStatus::ObjectiveLost;
            self.scheduler.cancel();
            self.events.push(SimEvent::ObjectiveDestroyed);
        } else if self.scheduler.is_fully_spawned() && self.units.is_empty() {
            self.status = WaveStatus::WaveCleared;
            self.events.push(SimEvent::WaveCleared);
        }

        self.status
    }

    /// Walk units newest-first: drop units killed last step, then move
    /// the rest. An arriving unit damages the objective and leaves the
    /// field. Reverse order keeps pending indices valid across removal.
    fn advance_units(&mut self, delta_ms: f64) {
        for index in (0..self.units.len()).rev() {
            let entity = self.units[index];
            let alive = self
                .world
                .get::<&Health>(entity)
                .map(|h| h.alive)
                .unwrap_or(false);
            if !alive {
                self.remove_unit(index);
                continue;
            }
            let arrived =
                systems::movement::advance_unit(&mut self.world, entity, &self.route, delta_ms);
            if arrived {
                self.objective.damage(ARRIVAL_DAMAGE);
                self.events.push(SimEvent::UnitArrived {
                    unit_id: systems::targeting::unit_display_id(&self.world, entity),
                    objective_hp: self.objective.hp,
                });
                self.remove_unit(index);
            }
        }
    }

    fn update_towers(&mut self, now_ms: f64) {
        for index in 0..self.towers.len() {
            let tower = self.towers[index];
            let spawned = systems::targeting::update_tower(
                &mut self.world,
                &mut self.timers,
                tower,
                index,
                &self.units,
                now_ms,
                &mut self.events,
            );
            if let Some(projectile) = spawned {
                self.projectiles.push(projectile);
            }
        }
    }

    /// Walk projectiles newest-first, removing any that impacted or
    /// lost their target. Units killed by an impact stay on the field
    /// until the next step's unit walk.
    fn advance_projectiles(&mut self, delta_ms: f64) {
        for index in (0..self.projectiles.len()).rev() {
            let entity = self.projectiles[index];
            let outcome = systems::projectile::advance_projectile(
                &mut self.world,
                entity,
                &self.units,
                delta_ms,
            );
            match outcome {
                ProjectileOutcome::InFlight => {}
                ProjectileOutcome::Impact { kills } => {
                    for killed in kills {
                        let position = self
                            .world
                            .get::<&Position>(killed)
                            .map(|p| p.0)
                            .unwrap_or(DVec2::ZERO);
                        self.events.push(SimEvent::UnitKilled {
                            unit_id: systems::targeting::unit_display_id(&self.world, killed),
                            position,
                        });
                    }
                    self.remove_projectile(index);
                }
                ProjectileOutcome::TargetLost => {
                    self.remove_projectile(index);
                }
            }
        }
    }

    fn spawn_unit(&mut self) {
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        let health = self.scheduler.unit_health();
        let speed = self.scheduler.unit_speed();
        let entity = self.world.spawn((
            Mob,
            MobId(id),
            Position(self.route.start()),
            RouteFollower {
                progress: 0.0,
                base_speed: speed,
                current_speed: speed,
                slowed: false,
            },
            Health {
                current: health,
                max: health,
                alive: true,
            },
        ));
        self.units.push(entity);
        self.events.push(SimEvent::UnitSpawned { unit_id: id });
    }

    fn remove_unit(&mut self, index: usize) {
        let entity = self.units.remove(index);
        self.timers.cancel_owner(entity);
        let _ = self.world.despawn(entity);
    }

    fn remove_projectile(&mut self, index: usize) {
        let entity = self.projectiles.remove(index);
        let _ = self.world.despawn(entity);
    }

    /// Build the frame's snapshot, draining accumulated events.
    pub fn snapshot(&mut self) -> WaveSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.status,
            &self.objective,
            &self.scheduler,
            &self.units,
            &self.projectiles,
            &self.towers,
            events,
        )
    }

    /// Stop all future spawns. Units already on the route play out.
    pub fn cancel_wave(&mut self) {
        self.scheduler.cancel();
    }

    pub fn status(&self) -> WaveStatus {
        self.status
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn objective(&self) -> ObjectiveState {
        self.objective
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn scheduler(&self) -> &WaveScheduler {
        &self.scheduler
    }

    /// Units currently on the field, dead-but-unremoved included.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
