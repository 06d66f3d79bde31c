//! Planet entity definition and spawning.
//!
//! Planets are the static gravity wells of the world. They never move
//! and are never despawned during play (only a preset reload replaces
//! them); the player either orbits one or falls through the field they
//! generate together.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::types::DEFAULT_ANGULAR_VELOCITY;

/// A planet: a fixed circular body with its own gravity scaling.
///
/// `gravity_multiplier` scales the standard inverse-square pull and may
/// be negative, which turns the body into a repulsive "void" that
/// pushes the player away instead of attracting.
#[derive(Component, Clone, Debug)]
pub struct Planet {
    /// Center position in world units
    pub pos: DVec2,
    /// Surface radius in world units
    pub radius: f64,
    /// Sweep rate applied to an orbiting player (rad/s)
    pub angular_velocity: f64,
    /// Scale on the inverse-square pull; negative repels
    pub gravity_multiplier: f64,
}

impl Planet {
    /// A standard attracting planet with the default sweep rate.
    pub fn standard(pos: DVec2, radius: f64) -> Self {
        Self {
            pos,
            radius,
            angular_velocity: DEFAULT_ANGULAR_VELOCITY,
            gravity_multiplier: 1.0,
        }
    }

    /// A repulsive void body. Cannot be landed on.
    pub fn void(pos: DVec2, radius: f64, strength: f64) -> Self {
        Self {
            pos,
            radius,
            angular_velocity: 0.0,
            gravity_multiplier: -strength.abs(),
        }
    }

    /// Whether the body attracts (and can therefore capture a player).
    pub fn is_attracting(&self) -> bool {
        self.gravity_multiplier > 0.0
    }

    /// Orbit shell distance for a player of the given radius.
    pub fn orbit_radius(&self, player_radius: f64) -> f64 {
        self.radius + player_radius + crate::types::ORBIT_CLEARANCE
    }
}

/// Name component for planet display and logging.
#[derive(Component, Clone, Debug)]
pub struct PlanetName(pub String);

/// Spawn a planet entity.
///
/// # Arguments
/// * `commands` - Bevy commands for entity spawning
/// * `name` - Display name for logs
/// * `planet` - Body parameters
///
/// # Returns
/// The spawned planet's Entity ID
pub fn spawn_planet(commands: &mut Commands, name: String, planet: Planet) -> Entity {
    info!(
        "Spawning planet {} at ({:.0}, {:.0}), r={:.0}, gravity x{:.2}",
        name, planet.pos.x, planet.pos.y, planet.radius, planet.gravity_multiplier
    );

    commands.spawn((PlanetName(name), planet)).id()
}
