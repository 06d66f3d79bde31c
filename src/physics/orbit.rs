//! Closed-form orbital motion.
//!
//! While landed, the player's position is fully determined by the
//! planet and an angle; velocity is defined to be zero. The angle
//! sweeps at the planet's angular velocity.

use bevy::math::DVec2;

use crate::planet::Planet;
use crate::types::Kinematics;

/// Advance one orbit tick: sweep the angle, snap to the orbit shell,
/// zero the velocity.
///
/// # Arguments
/// * `kin` - Player state, updated in place
/// * `angle` - Orbit angle in radians, updated in place
/// * `planet` - The orbited body
/// * `player_radius` - Player collision radius
/// * `dt` - Tick duration in seconds
pub fn update_orbit(
    kin: &mut Kinematics,
    angle: &mut f64,
    planet: &Planet,
    player_radius: f64,
    dt: f64,
) {
    *angle += planet.angular_velocity * dt;

    let shell = planet.orbit_radius(player_radius);
    kin.pos = planet.pos + shell * DVec2::new(angle.cos(), angle.sin());
    kin.vel = DVec2::ZERO;
}

/// Angle of `pos` around the planet center, for entering orbit at the
/// point of contact.
pub fn contact_angle(pos: DVec2, planet: &Planet) -> f64 {
    let delta = pos - planet.pos;
    delta.y.atan2(delta.x)
}
