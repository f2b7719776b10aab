//! Timer queue keyed to the simulation's virtual clock.
//!
//! Timed effects (slow expiry) are scheduled against elapsed virtual
//! milliseconds, never wall time, so pausing or fast-forwarding the
//! step loop cannot desynchronize them.

use hecs::Entity;

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Restore the owning unit's speed to its base value.
    RestoreSpeed,
}

#[derive(Debug, Clone)]
struct TimerEntry {
    fires_at_ms: f64,
    owner: Entity,
    action: TimerAction,
}

/// Pending timed effects, owned by the engine.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    /// Schedule `action` on `owner` at `fires_at_ms` on the virtual clock.
    pub fn schedule(&mut self, fires_at_ms: f64, owner: Entity, action: TimerAction) {
        self.entries.push(TimerEntry {
            fires_at_ms,
            owner,
            action,
        });
    }

    /// Drop every pending timer owned by `owner`. Called when the owner
    /// despawns so a stale timer can never touch a recycled entity.
    pub fn cancel_owner(&mut self, owner: Entity) {
        self.entries.retain(|e| e.owner != owner);
    }

    /// Remove and return all timers due at or before `now_ms`, in
    /// scheduling order.
    pub fn fire_due(&mut self, now_ms: f64) -> Vec<(Entity, TimerAction)> {
        let mut due = Vec::new();
        self.entries.retain(|e| {
            if e.fires_at_ms <= now_ms {
                due.push((e.owner, e.action));
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
