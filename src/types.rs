//! Core types and constants for the jump physics simulation.

use bevy::math::DVec2;
use bevy::prelude::*;

/// World constants (game units: pixels and seconds)

/// Maximum distance from the world origin before the boundary guard clamps.
pub const WORLD_RADIUS: f64 = 5000.0;

/// Player collision radius.
pub const PLAYER_RADIUS: f64 = 10.0;

/// Gap between a planet surface and an orbiting player.
pub const ORBIT_CLEARANCE: f64 = 5.0;

/// Gravitational strength constant. A planet's pull is
/// `GRAVITY_STRENGTH * radius^2 * multiplier / distance^2`,
/// so surface gravity is independent of planet size.
pub const GRAVITY_STRENGTH: f64 = 3000.0;

/// Bodies closer than this are skipped by the gravity sum to avoid
/// the 1/r^2 singularity blowing up the integrator.
pub const MIN_GRAVITY_DISTANCE: f64 = 1.0;

/// Fixed simulation tick rate in Hz. Drag constants and the adaptive
/// band below are tuned against this rate.
pub const TICK_HZ: f64 = 60.0;

/// Default sweep rate for a player orbiting a planet (rad/s).
pub const DEFAULT_ANGULAR_VELOCITY: f64 = 0.6;

/// Position and velocity of a moving entity.
/// Uses f64 (DVec2) so long drag decays and far-from-origin flights
/// stay numerically clean.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Kinematics {
    /// Position in world units from the world origin
    pub pos: DVec2,
    /// Velocity in world units per second
    pub vel: DVec2,
}

impl Kinematics {
    /// Create a new kinematic state
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    /// Stationary state at a position
    pub fn at_rest(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
        }
    }

    /// Current speed in world units per second
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Distance from the world origin
    pub fn distance_from_origin(&self) -> f64 {
        self.pos.length()
    }
}

/// Simulation clock resource tracking elapsed sim time.
///
/// Advanced once per fixed tick; timestamps taken from it (planning
/// time, adaptive recalibration cadence) are in sim seconds, so a host
/// that pauses the fixed schedule pauses every derived timer with it.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimClock {
    /// Seconds of simulated time since startup
    pub elapsed: f64,
    /// Completed fixed ticks since startup
    pub tick: u64,
}

impl SimClock {
    /// Advance the clock by one tick of `dt` seconds
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        self.tick += 1;
    }
}
