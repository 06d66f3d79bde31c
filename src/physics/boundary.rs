//! World boundary guard.
//!
//! The play field is a disc around the origin. A player past the rim
//! gets clamped back onto it along the same radial line with velocity
//! reversed at half magnitude, a soft bounce that keeps runaway flights
//! inside the world.

use crate::types::Kinematics;

/// Clamp `kin` to the world disc of radius `max_radius`.
///
/// In bounds this is a no-op, so the guard is idempotent. Out of
/// bounds the position is pulled to exactly `max_radius` along its
/// current direction and velocity becomes `-v * 0.5` on both axes.
///
/// # Returns
/// `true` if the player was out of bounds and got clamped
pub fn enforce_boundary(kin: &mut Kinematics, max_radius: f64) -> bool {
    let dist = kin.pos.length();
    if dist <= max_radius {
        return false;
    }

    kin.pos *= max_radius / dist;
    kin.vel = -kin.vel * 0.5;
    true
}
