//! Tests for route geometry, core types, and serde round-trips.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::enums::{TowerKind, WaveStatus};
use crate::events::SimEvent;
use crate::route::Route;
use crate::state::WaveSnapshot;
use crate::types::{Position, SimTime};

// ---- Route geometry ----

fn l_route() -> Route {
    Route::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 0.0),
        DVec2::new(100.0, 100.0),
    ])
}

#[test]
fn test_route_total_length() {
    assert!((l_route().total_length() - 200.0).abs() < 1e-10);
}

#[test]
fn test_route_endpoints_exact() {
    let route = l_route();
    assert_eq!(route.point_at_progress(0.0), DVec2::new(0.0, 0.0));
    assert_eq!(route.point_at_progress(1.0), DVec2::new(100.0, 100.0));
    // Out-of-range t clamps to the endpoints.
    assert_eq!(route.point_at_progress(-0.5), DVec2::new(0.0, 0.0));
    assert_eq!(route.point_at_progress(2.0), DVec2::new(100.0, 100.0));
}

#[test]
fn test_route_midpoint_lands_on_corner() {
    // Half of 200 units of arc length is exactly the corner.
    let p = l_route().point_at_progress(0.5);
    assert!((p.x - 100.0).abs() < 1e-10);
    assert!(p.y.abs() < 1e-10);
}

#[test]
fn test_route_interpolates_within_segment() {
    let p = l_route().point_at_progress(0.25);
    assert!((p.x - 50.0).abs() < 1e-10);
    assert!(p.y.abs() < 1e-10);
}

/// Distance from `p` to the segment a-b.
fn point_segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[test]
fn test_route_points_lie_on_polyline() {
    // Random routes, random progress values: every query must land
    // on one of the segments.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(2..8);
        let waypoints: Vec<DVec2> = (0..n)
            .map(|_| DVec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
            .collect();
        let route = Route::new(waypoints.clone());

        for _ in 0..20 {
            let t: f64 = rng.gen_range(0.0..=1.0);
            let p = route.point_at_progress(t);
            let min_dist = waypoints
                .windows(2)
                .map(|w| point_segment_distance(p, w[0], w[1]))
                .fold(f64::INFINITY, f64::min);
            assert!(
                min_dist < 1e-6,
                "point at t={t} is {min_dist} off the polyline"
            );
        }
    }
}

#[test]
fn test_route_degenerate_single_waypoint() {
    let route = Route::new(vec![DVec2::new(42.0, 7.0)]);
    assert_eq!(route.total_length(), 0.0);
    assert_eq!(route.point_at_progress(0.0), DVec2::new(42.0, 7.0));
    assert_eq!(route.point_at_progress(0.5), DVec2::new(42.0, 7.0));
    assert_eq!(route.point_at_progress(1.0), DVec2::new(42.0, 7.0));
}

#[test]
fn test_route_degenerate_empty() {
    let route = Route::new(Vec::new());
    assert_eq!(route.total_length(), 0.0);
    assert_eq!(route.point_at_progress(0.5), DVec2::ZERO);
}

#[test]
fn test_route_skips_zero_length_segments() {
    // Duplicate waypoint in the middle must not break interpolation.
    let route = Route::new(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(100.0, 0.0),
        DVec2::new(100.0, 0.0),
        DVec2::new(200.0, 0.0),
    ]);
    assert!((route.total_length() - 200.0).abs() < 1e-10);
    let p = route.point_at_progress(0.75);
    assert!((p.x - 150.0).abs() < 1e-10);
}

// ---- Position ----

#[test]
fn test_position_distance() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
}

// ---- SimTime ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    assert_eq!(time.frame, 0);
    assert_eq!(time.elapsed_ms, 0.0);

    for _ in 0..60 {
        time.advance(16.0);
    }
    assert_eq!(time.frame, 60);
    assert!((time.elapsed_ms - 960.0).abs() < 1e-10);
}

// ---- Serde ----

#[test]
fn test_wave_status_serde() {
    let variants = vec![
        WaveStatus::Active,
        WaveStatus::WaveCleared,
        WaveStatus::ObjectiveLost,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: WaveStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_tower_kind_serde() {
    let variants = vec![
        TowerKind::Basic,
        TowerKind::Archer,
        TowerKind::Cannon,
        TowerKind::Wall,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: TowerKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_sim_event_serde() {
    let events = vec![
        SimEvent::UnitSpawned { unit_id: 3 },
        SimEvent::UnitKilled {
            unit_id: 3,
            position: DVec2::new(10.0, 20.0),
        },
        SimEvent::UnitArrived {
            unit_id: 4,
            objective_hp: 19,
        },
        SimEvent::TowerFired {
            tower_index: 0,
            target_id: 3,
        },
        SimEvent::SlowApplied { unit_id: 5 },
        SimEvent::WaveCleared,
        SimEvent::ObjectiveDestroyed,
    ];
    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_snapshot_serde() {
    let snapshot = WaveSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: WaveSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.frame, back.time.frame);
    assert_eq!(snapshot.status, back.status);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}

#[test]
fn test_route_serde_preserves_lengths() {
    let route = l_route();
    let json = serde_json::to_string(&route).unwrap();
    let back: Route = serde_json::from_str(&json).unwrap();
    assert!((back.total_length() - route.total_length()).abs() < 1e-10);
    assert_eq!(back.point_at_progress(0.5), route.point_at_progress(0.5));
}
