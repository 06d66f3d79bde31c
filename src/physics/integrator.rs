//! Free-flight integration.
//!
//! Semi-implicit Euler: acceleration feeds velocity first, the updated
//! velocity feeds position. One step per fixed 60 Hz tick. The order is
//! part of the movement feel and is deliberately not a higher-order
//! scheme; drag is a plain per-tick multiply tuned against that tick
//! rate, suppressed while a dash window is open.

use bevy::math::DVec2;

use super::gravity::{GravitySource, compute_acceleration};
use crate::types::Kinematics;

/// Advance one free-flight tick.
///
/// Exact sequence: `v += a*dt`, then `v *= drag` (skipped while
/// dashing), then `p += v*dt`. With no sources the step degenerates to
/// pure drag drift.
///
/// # Arguments
/// * `kin` - Player state, updated in place
/// * `sources` - Flattened gravity sources for this tick
/// * `drag` - Per-tick velocity retention factor (e.g. 0.99)
/// * `dashing` - Whether the dash window suppresses drag
/// * `dt` - Tick duration in seconds
pub fn integrate_flight(
    kin: &mut Kinematics,
    sources: &[GravitySource],
    drag: f64,
    dashing: bool,
    dt: f64,
) {
    let acc = compute_acceleration(kin.pos, sources);
    kin.vel += acc * dt;

    if !dashing {
        kin.vel *= drag;
    }

    kin.pos += kin.vel * dt;
}
