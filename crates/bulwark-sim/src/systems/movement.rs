//! Unit movement along the route.

use hecs::{Entity, World};

use bulwark_core::components::RouteFollower;
use bulwark_core::route::Route;
use bulwark_core::types::Position;

/// Advance one unit along the route by `delta_ms` of virtual time.
///
/// Progress is the authoritative coordinate; position is recomputed
/// from it after every advance. Progress clamps at 1.0 with no
/// carryover into the next frame. Returns true when the unit has
/// reached the route end.
pub fn advance_unit(world: &mut World, entity: Entity, route: &Route, delta_ms: f64) -> bool {
    let Ok((follower, position)) =
        world.query_one_mut::<(&mut RouteFollower, &mut Position)>(entity)
    else {
        return false;
    };

    // A zero-length route leaves progress untouched: the unit holds
    // its spawn point rather than instantly arriving.
    let distance = follower.current_speed * delta_ms / 1000.0;
    let total = route.total_length();
    if total > 0.0 {
        follower.progress = (follower.progress + distance / total).min(1.0);
    }
    position.0 = route.point_at_progress(follower.progress);

    follower.progress >= 1.0
}
