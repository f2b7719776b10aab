//! Route geometry — the fixed polyline mobile units traverse.
//!
//! Arc-length parametrized: per-segment lengths and the total length
//! are computed once at construction and immutable thereafter, so
//! progress lookups are a single walk over precomputed sums.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Immutable polyline from spawn point to objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    waypoints: Vec<DVec2>,
    /// segments[i] = distance from waypoints[i] to waypoints[i+1].
    segments: Vec<f64>,
    total_length: f64,
}

impl Route {
    pub fn new(waypoints: Vec<DVec2>) -> Self {
        let mut segments = Vec::new();
        let mut total_length = 0.0;
        for pair in waypoints.windows(2) {
            let len = pair[0].distance(pair[1]);
            segments.push(len);
            total_length += len;
        }
        Self {
            waypoints,
            segments,
            total_length,
        }
    }

    /// Total polyline length. Zero for routes with fewer than 2 waypoints.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// First waypoint (spawn point). Origin for an empty route.
    pub fn start(&self) -> DVec2 {
        self.waypoints.first().copied().unwrap_or(DVec2::ZERO)
    }

    /// Last waypoint (objective position). Origin for an empty route.
    pub fn end(&self) -> DVec2 {
        self.waypoints.last().copied().unwrap_or(DVec2::ZERO)
    }

    /// Position at fractional progress `t` along the route.
    ///
    /// `t` is clamped to [0, 1]; 0 and 1 return the first and last
    /// waypoints exactly. In between, the fractional progress is
    /// converted to a target arc length and linearly interpolated
    /// within the containing segment. Degenerate routes (fewer than
    /// 2 waypoints) collapse every query to the single available point.
    pub fn point_at_progress(&self, t: f64) -> DVec2 {
        if self.waypoints.len() < 2 || t <= 0.0 {
            return self.start();
        }
        if t >= 1.0 {
            return self.end();
        }

        let target = t * self.total_length;
        let mut accumulated = 0.0;
        for (i, &seg_len) in self.segments.iter().enumerate() {
            if seg_len > 0.0 && accumulated + seg_len >= target {
                let seg_t = (target - accumulated) / seg_len;
                return self.waypoints[i].lerp(self.waypoints[i + 1], seg_t);
            }
            accumulated += seg_len;
        }

        self.end()
    }
}
