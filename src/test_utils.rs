//! Test utilities for movement simulation tests.
//!
//! Provides fixtures for planets, players and profiles, assertions for
//! geometric invariants, and helpers for driving headless Bevy apps one
//! fixed tick at a time.

use bevy::math::DVec2;

use crate::planet::Planet;
use crate::services::{Mood, MovementStyle, PlayerProfile};
use crate::types::Kinematics;

/// Fixtures for creating test world states.
pub mod fixtures {
    use super::*;
    use crate::physics::GravitySource;
    use crate::types::GRAVITY_STRENGTH;

    /// A standard attracting planet at the given position.
    pub fn planet_at(pos: DVec2, radius: f64) -> Planet {
        Planet::standard(pos, radius)
    }

    /// Player kinematics drifting along +x at `speed` from the origin.
    pub fn drifting(speed: f64) -> Kinematics {
        Kinematics::new(DVec2::ZERO, DVec2::new(speed, 0.0))
    }

    /// Flattened gravity source for a standard planet at default
    /// strength.
    pub fn source_at(pos: DVec2, radius: f64) -> GravitySource {
        (pos, GRAVITY_STRENGTH * radius * radius)
    }

    /// A ring of `count` standard planets around the origin. Counts
    /// that are not multiples of four exercise both the SIMD chunks
    /// and the scalar tail of the gravity sum.
    pub fn ring_of_sources(count: usize, ring_radius: f64) -> Vec<GravitySource> {
        (0..count)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / count.max(1) as f64;
                source_at(
                    DVec2::new(ring_radius * angle.cos(), ring_radius * angle.sin()),
                    40.0,
                )
            })
            .collect()
    }

    /// Mid-skill, neutral, balanced profile.
    pub fn average_profile() -> PlayerProfile {
        PlayerProfile {
            skill_level: 0.5,
            risk_tolerance: 0.5,
            mood: Mood::Neutral,
            movement_style: MovementStyle::Balanced,
        }
    }

    /// Profile at the top of every band.
    pub fn expert_profile() -> PlayerProfile {
        PlayerProfile {
            skill_level: 1.0,
            risk_tolerance: 1.0,
            mood: Mood::Excited,
            movement_style: MovementStyle::Aggressive,
        }
    }

    /// Frustrated low-skill profile at the bottom of every band.
    pub fn struggling_profile() -> PlayerProfile {
        PlayerProfile {
            skill_level: 0.0,
            risk_tolerance: 0.0,
            mood: Mood::Frustrated,
            movement_style: MovementStyle::Cautious,
        }
    }
}

/// Assertions for verifying geometric invariants.
pub mod assertions {
    use super::*;

    /// Assert two points coincide within `tolerance` world units.
    pub fn assert_close(a: DVec2, b: DVec2, tolerance: f64) {
        let dist = (a - b).length();
        assert!(
            dist <= tolerance,
            "Points differ by {dist:.6} (tolerance {tolerance:.6}): {a:?} vs {b:?}"
        );
    }

    /// Assert a position sits on a planet's orbit shell for the given
    /// player radius.
    pub fn assert_on_shell(pos: DVec2, planet: &Planet, player_radius: f64, tolerance: f64) {
        let dist = (pos - planet.pos).length();
        let shell = planet.orbit_radius(player_radius);
        assert!(
            (dist - shell).abs() <= tolerance,
            "Distance from planet {dist:.6} is off the orbit shell {shell:.6}"
        );
    }
}

/// Utilities for creating and driving headless Bevy apps.
pub mod bevy_test {
    use std::time::Duration;

    use bevy::prelude::*;

    use crate::physics::PhysicsPlugin;
    use crate::types::TICK_HZ;

    /// Create a minimal Bevy app running the full movement simulation
    /// without rendering.
    pub fn physics_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(PhysicsPlugin);
        app
    }

    /// Drive exactly `ticks` fixed simulation steps, bypassing the
    /// wall-clock accumulator so tests stay deterministic.
    pub fn step_fixed(app: &mut App, ticks: u32) {
        let dt = Duration::from_secs_f64(1.0 / TICK_HZ);
        for _ in 0..ticks {
            app.world_mut()
                .resource_mut::<Time<Fixed>>()
                .advance_by(dt);
            app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run the Update schedule once so event handlers drain pending
    /// requests.
    pub fn drain_events(app: &mut App) {
        app.world_mut().run_schedule(Update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLAYER_RADIUS;

    #[test]
    fn test_ring_sources_count_and_sign() {
        let sources = fixtures::ring_of_sources(7, 1000.0);
        assert_eq!(sources.len(), 7);
        assert!(sources.iter().all(|(_, gm)| *gm > 0.0));
    }

    #[test]
    fn test_planet_fixture_attracts() {
        let planet = fixtures::planet_at(DVec2::new(100.0, 0.0), 50.0);
        assert!(planet.is_attracting());
    }

    #[test]
    fn test_on_shell_assertion_accepts_shell_point() {
        let planet = fixtures::planet_at(DVec2::ZERO, 50.0);
        let shell = planet.orbit_radius(PLAYER_RADIUS);
        assertions::assert_on_shell(DVec2::new(shell, 0.0), &planet, PLAYER_RADIUS, 1e-9);
    }

    #[test]
    #[should_panic(expected = "off the orbit shell")]
    fn test_on_shell_assertion_rejects_center() {
        let planet = fixtures::planet_at(DVec2::ZERO, 50.0);
        assertions::assert_on_shell(DVec2::ZERO, &planet, PLAYER_RADIUS, 1e-9);
    }
}
