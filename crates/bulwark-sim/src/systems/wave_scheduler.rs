//! Wave scheduling — paces unit spawns across a round.

use bulwark_core::constants::{
    SPAWN_INTERVAL_MS, UNIT_SPEED, WAVE_BASE_UNIT_COUNT, WAVE_BASE_UNIT_HEALTH,
    WAVE_UNIT_COUNT_PER_ROUND, WAVE_UNIT_HEALTH_PER_ROUND,
};

/// Units in a wave as a pure function of the 1-based round index.
pub fn unit_count_for_round(round: u32) -> u32 {
    WAVE_BASE_UNIT_COUNT + WAVE_UNIT_COUNT_PER_ROUND * round
}

/// Unit hit points as a pure function of the 1-based round index.
pub fn unit_health_for_round(round: u32) -> f64 {
    WAVE_BASE_UNIT_HEALTH + WAVE_UNIT_HEALTH_PER_ROUND * f64::from(round)
}

/// Paces the spawning of one wave's units.
///
/// The engine polls the scheduler each step; the scheduler accumulates
/// virtual time and reports how many spawns are due. It never touches
/// the world itself. The first spawn lands only after one full
/// interval has elapsed.
#[derive(Debug, Clone)]
pub struct WaveScheduler {
    round: u32,
    total: u32,
    spawned: u32,
    interval_ms: f64,
    accumulator_ms: f64,
    cancelled: bool,
}

impl WaveScheduler {
    pub fn new(round: u32) -> Self {
        Self {
            round,
            total: unit_count_for_round(round),
            spawned: 0,
            interval_ms: SPAWN_INTERVAL_MS,
            accumulator_ms: 0.0,
            cancelled: false,
        }
    }

    /// Advance the spawn clock by `delta_ms` and return how many units
    /// are due to spawn. A delta spanning several intervals yields
    /// several spawns, capped at the wave's remaining unspawned count.
    pub fn poll(&mut self, delta_ms: f64) -> u32 {
        if self.cancelled || self.is_fully_spawned() {
            return 0;
        }
        self.accumulator_ms += delta_ms;
        let mut due = 0;
        while self.accumulator_ms >= self.interval_ms && self.spawned < self.total {
            self.accumulator_ms -= self.interval_ms;
            self.spawned += 1;
            due += 1;
        }
        due
    }

    /// Stop all future spawns. Units already on the route are
    /// unaffected.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_fully_spawned(&self) -> bool {
        self.spawned >= self.total
    }

    /// The wave is complete when every unit has spawned and none
    /// remain alive.
    pub fn is_complete(&self, alive_count: u32) -> bool {
        self.is_fully_spawned() && alive_count == 0
    }

    /// Display counter: alive units plus units not yet spawned.
    pub fn remaining(&self, alive_count: u32) -> u32 {
        alive_count + self.total.saturating_sub(self.spawned)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Hit points for units of this wave.
    pub fn unit_health(&self) -> f64 {
        unit_health_for_round(self.round)
    }

    /// Movement speed for units of this wave.
    pub fn unit_speed(&self) -> f64 {
        UNIT_SPEED
    }
}
