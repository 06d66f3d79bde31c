//! Player entity definition and spawning.
//!
//! The player is the single simulated object: it either orbits a planet
//! (closed-form circular motion) or free-flies through the gravity
//! field. `MotionMode` makes the two update paths mutually exclusive by
//! construction; no tick can run both.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::camera::CameraScale;
use crate::planet::Planet;
use crate::trail::Trail;
use crate::types::{Kinematics, PLAYER_RADIUS};

/// Marker and collision size for the player entity.
#[derive(Component, Clone, Debug)]
pub struct Player {
    /// Collision radius in world units
    pub radius: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
        }
    }
}

/// Which motion model owns the player this tick.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum MotionMode {
    /// Locked to a planet's orbit shell at the stored angle.
    Orbiting {
        /// The planet being orbited; the caller keeps this valid.
        planet: Entity,
        /// Current angle around the planet center (radians)
        angle: f64,
    },
    /// Ballistic flight under summed gravity and drag.
    FreeFlight,
}

impl MotionMode {
    /// Whether the player is currently landed.
    pub fn is_on_planet(&self) -> bool {
        matches!(self, MotionMode::Orbiting { .. })
    }

    /// The orbited planet, if landed.
    pub fn planet(&self) -> Option<Entity> {
        match self {
            MotionMode::Orbiting { planet, .. } => Some(*planet),
            MotionMode::FreeFlight => None,
        }
    }
}

/// Dash timers. `dashing` grants drag immunity while `timer` runs;
/// `cooldown` gates the next dash.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct DashState {
    /// Currently inside the dash window (drag suppressed)
    pub dashing: bool,
    /// Seconds left in the dash window
    pub timer: f64,
    /// Seconds until the next dash is allowed
    pub cooldown: f64,
}

impl DashState {
    /// Whether the cooldown gate is open.
    pub fn ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Decay both timers by `dt`, ending the dash window when it runs out.
    pub fn tick(&mut self, dt: f64) {
        if self.dashing {
            self.timer -= dt;
            if self.timer <= 0.0 {
                self.timer = 0.0;
                self.dashing = false;
            }
        }
        self.cooldown = (self.cooldown - dt).max(0.0);
    }
}

/// Spawn a free-flying player.
///
/// # Returns
/// The spawned player's Entity ID
pub fn spawn_player(commands: &mut Commands, pos: DVec2, vel: DVec2) -> Entity {
    info!("Spawning player at ({:.0}, {:.0})", pos.x, pos.y);

    commands
        .spawn((
            Player::default(),
            Kinematics::new(pos, vel),
            MotionMode::FreeFlight,
            DashState::default(),
            Trail::new(),
            CameraScale::default(),
        ))
        .id()
}

/// Spawn a player already orbiting `planet` at `angle`.
///
/// Position is placed on the orbit shell immediately so the first tick
/// sees a consistent state.
pub fn spawn_player_on_planet(
    commands: &mut Commands,
    planet_entity: Entity,
    planet: &Planet,
    angle: f64,
) -> Entity {
    let player = Player::default();
    let shell = planet.orbit_radius(player.radius);
    let pos = planet.pos + shell * DVec2::new(angle.cos(), angle.sin());

    info!(
        "Spawning player on planet at ({:.0}, {:.0}), angle {:.2}",
        planet.pos.x, planet.pos.y, angle
    );

    commands
        .spawn((
            player,
            Kinematics::at_rest(pos),
            MotionMode::Orbiting {
                planet: planet_entity,
                angle,
            },
            DashState::default(),
            Trail::new(),
            CameraScale::default(),
        ))
        .id()
}
