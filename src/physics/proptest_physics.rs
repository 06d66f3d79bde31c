//! Property-based tests for the movement simulation using proptest.
//!
//! These tests verify motion invariants across wide ranges of speeds,
//! positions and planet layouts.

use bevy::math::DVec2;
use proptest::prelude::*;

use crate::adaptive::{
    MAX_CAMERA_RESPONSE, MAX_SPACE_DRAG, MIN_CAMERA_RESPONSE, MIN_SPACE_DRAG,
    camera_response_for_profile, drag_for_profile,
};
use crate::physics::boundary::enforce_boundary;
use crate::physics::gravity::{compute_acceleration, compute_acceleration_scalar, GravitySource};
use crate::physics::integrator::integrate_flight;
use crate::physics::orbit::update_orbit;
use crate::planet::Planet;
use crate::services::{Mood, MovementStyle, PlayerProfile};
use crate::test_utils::fixtures;
use crate::trail::{TRAIL_CAPACITY, Trail};
use crate::types::{GRAVITY_STRENGTH, Kinematics, PLAYER_RADIUS, WORLD_RADIUS};

/// Game-plausible gravity sources: positions inside the world circle,
/// radii and multipliers in the preset ranges.
fn arb_source() -> impl Strategy<Value = GravitySource> {
    (
        -4000.0f64..4000.0,
        -4000.0f64..4000.0,
        10.0f64..200.0,
        prop_oneof![Just(1.0f64), Just(-1.0f64), 0.5f64..2.0],
    )
        .prop_map(|(x, y, radius, multiplier)| {
            (
                DVec2::new(x, y),
                GRAVITY_STRENGTH * radius * radius * multiplier,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With no gravity sources, drag is the only force: speed decays by
    /// exactly the drag factor every tick and never increases.
    #[test]
    fn prop_drag_decays_speed(
        vx in -800.0f64..800.0,
        vy in -800.0f64..800.0,
        drag in 0.985f64..0.995,
        steps in 1usize..240,
    ) {
        let mut kin = Kinematics::new(DVec2::ZERO, DVec2::new(vx, vy));
        let mut previous = kin.speed();

        for _ in 0..steps {
            integrate_flight(&mut kin, &[], drag, false, 1.0 / 60.0);
            let speed = kin.speed();
            prop_assert!(speed <= previous, "Drag must never add speed");
            previous = speed;
        }

        let expected = (vx * vx + vy * vy).sqrt() * drag.powi(steps as i32);
        let drift = (previous - expected).abs();
        prop_assert!(
            drift <= 1e-9 * (1.0 + expected),
            "Speed after {} steps was {:.9}, closed form {:.9}",
            steps, previous, expected
        );
    }

    /// The same initial state stepped twice through the same field
    /// produces bitwise identical trajectories.
    #[test]
    fn prop_flight_is_deterministic(
        px in -2000.0f64..2000.0,
        py in -2000.0f64..2000.0,
        vx in -400.0f64..400.0,
        vy in -400.0f64..400.0,
        source_count in 0usize..9,
    ) {
        let sources = fixtures::ring_of_sources(source_count, 1500.0);

        let mut a = Kinematics::new(DVec2::new(px, py), DVec2::new(vx, vy));
        let mut b = a;
        for _ in 0..120 {
            integrate_flight(&mut a, &sources, 0.99, false, 1.0 / 60.0);
            integrate_flight(&mut b, &sources, 0.99, false, 1.0 / 60.0);
        }

        prop_assert_eq!(a.pos, b.pos);
        prop_assert_eq!(a.vel, b.vel);
    }

    /// Points inside the world circle are never touched by the
    /// boundary; points outside come back to the rim with direction
    /// preserved and velocity reversed at half strength.
    #[test]
    fn prop_boundary_clamps_to_rim(
        px in -9000.0f64..9000.0,
        py in -9000.0f64..9000.0,
        vx in -500.0f64..500.0,
        vy in -500.0f64..500.0,
    ) {
        let mut kin = Kinematics::new(DVec2::new(px, py), DVec2::new(vx, vy));
        let before = kin;
        let outside = kin.distance_from_origin() > WORLD_RADIUS;

        let clamped = enforce_boundary(&mut kin, WORLD_RADIUS);

        prop_assert_eq!(clamped, outside);
        if outside {
            let dist = kin.distance_from_origin();
            prop_assert!(
                (dist - WORLD_RADIUS).abs() <= 1e-9 * WORLD_RADIUS,
                "Clamped distance {:.9} should sit on the rim",
                dist
            );
            // Halving and negation are exact in floating point.
            prop_assert_eq!(kin.vel, -before.vel * 0.5);
            // Direction through the origin is preserved.
            let cross = before.pos.x * kin.pos.y - before.pos.y * kin.pos.x;
            prop_assert!(cross.abs() <= 1e-6 * before.pos.length_squared());
        } else {
            prop_assert_eq!(kin.pos, before.pos);
            prop_assert_eq!(kin.vel, before.vel);
        }
    }

    /// Orbiting keeps the player exactly on the orbit shell with zero
    /// velocity, for any planet and any number of ticks.
    #[test]
    fn prop_orbit_holds_the_shell(
        planet_x in -3000.0f64..3000.0,
        planet_y in -3000.0f64..3000.0,
        radius in 10.0f64..200.0,
        start_angle in -10.0f64..10.0,
        ticks in 1usize..600,
    ) {
        let planet = Planet::standard(DVec2::new(planet_x, planet_y), radius);
        let shell = planet.orbit_radius(PLAYER_RADIUS);
        let mut kin = Kinematics::at_rest(
            planet.pos + shell * DVec2::new(start_angle.cos(), start_angle.sin()),
        );
        let mut angle = start_angle;

        for _ in 0..ticks {
            update_orbit(&mut kin, &mut angle, &planet, PLAYER_RADIUS, 1.0 / 60.0);
            let dist = (kin.pos - planet.pos).length();
            prop_assert!(
                (dist - shell).abs() <= 1e-9 * (1.0 + shell),
                "Orbit left the shell: {:.9} vs {:.9}",
                dist, shell
            );
            prop_assert_eq!(kin.vel, DVec2::ZERO);
        }
    }

    /// The SIMD batch path agrees with the scalar reference for any
    /// source count, including counts that leave a partial tail.
    #[test]
    fn prop_simd_matches_scalar(
        sources in prop::collection::vec(arb_source(), 0..24),
        px in -4500.0f64..4500.0,
        py in -4500.0f64..4500.0,
    ) {
        let pos = DVec2::new(px, py);
        let fast = compute_acceleration(pos, &sources);
        let reference = compute_acceleration_scalar(pos, &sources);

        let diff = (fast - reference).length();
        prop_assert!(
            diff <= 1e-9 * (1.0 + reference.length()),
            "SIMD path diverged from scalar: {:?} vs {:?}",
            fast, reference
        );
    }

    /// A single attracting planet always pulls the sample point toward
    /// itself; a void always pushes away.
    #[test]
    fn prop_gravity_sign_follows_multiplier(
        px in -4000.0f64..4000.0,
        py in -4000.0f64..4000.0,
        radius in 10.0f64..200.0,
    ) {
        let planet_pos = DVec2::new(1234.0, -567.0);
        let toward = planet_pos - DVec2::new(px, py);
        prop_assume!(toward.length() > 2.0);

        let attract = compute_acceleration(
            DVec2::new(px, py),
            &[fixtures::source_at(planet_pos, radius)],
        );
        prop_assert!(attract.dot(toward) > 0.0, "Positive gm must attract");

        let void = Planet::void(planet_pos, radius, 1.0);
        let repel = compute_acceleration(
            DVec2::new(px, py),
            &[(void.pos, GRAVITY_STRENGTH * void.radius * void.radius * void.gravity_multiplier)],
        );
        prop_assert!(repel.dot(toward) < 0.0, "Negative gm must repel");
    }

    /// The trail pool never exceeds its fixed capacity, and decay never
    /// leaves a point alive with non-positive life.
    #[test]
    fn prop_trail_pool_stays_bounded(
        emits in 1usize..2000,
        decay in 0.0f64..0.1,
    ) {
        let mut trail = Trail::new();
        for i in 0..emits {
            trail.decay(decay);
            trail.emit(DVec2::new(i as f64, 0.0), i % 7 == 0);
            prop_assert!(trail.active_len() <= TRAIL_CAPACITY);
            prop_assert!(trail.iter_active().all(|p| p.life > 0.0));
        }
    }

    /// Whatever the profile reports, the derived drag and camera
    /// response land inside their bands.
    #[test]
    fn prop_profile_factors_stay_in_band(
        skill in -2.0f64..3.0,
        risk in -2.0f64..3.0,
        mood_ix in 0usize..4,
        style_ix in 0usize..3,
    ) {
        let profile = PlayerProfile {
            skill_level: skill,
            risk_tolerance: risk,
            mood: [Mood::Frustrated, Mood::Neutral, Mood::Confident, Mood::Excited][mood_ix],
            movement_style: [
                MovementStyle::Cautious,
                MovementStyle::Balanced,
                MovementStyle::Aggressive,
            ][style_ix],
        };

        let drag = drag_for_profile(&profile);
        prop_assert!((MIN_SPACE_DRAG..=MAX_SPACE_DRAG).contains(&drag));

        let response = camera_response_for_profile(&profile);
        prop_assert!((MIN_CAMERA_RESPONSE..=MAX_CAMERA_RESPONSE).contains(&response));
    }
}

/// Pinned single-tick cases with hand-computed expectations, for the
/// step arithmetic the property suites only check in aggregate.
mod deterministic_tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_one_flight_tick_exact() {
        // One source dead ahead: a = gm/r² = 3000·50²/400² = 46.875.
        let sources = [(DVec2::new(400.0, 0.0), GRAVITY_STRENGTH * 50.0 * 50.0)];
        let mut kin = Kinematics::new(DVec2::ZERO, DVec2::new(100.0, 0.0));

        integrate_flight(&mut kin, &sources, 0.99, false, DT);

        // Same operation order as the integrator: accelerate, drag, move.
        let expected_vx = (100.0 + 46.875 * DT) * 0.99;
        assert_eq!(kin.vel, DVec2::new(expected_vx, 0.0));
        assert_eq!(kin.pos, DVec2::new(expected_vx * DT, 0.0));
    }

    #[test]
    fn test_dash_tick_skips_drag() {
        let mut kin = Kinematics::new(DVec2::ZERO, DVec2::new(100.0, 0.0));

        integrate_flight(&mut kin, &[], 0.99, true, DT);

        assert_eq!(kin.vel, DVec2::new(100.0, 0.0), "Dashing ignores drag");
        assert_eq!(kin.pos, DVec2::new(100.0 * DT, 0.0));
    }

    #[test]
    fn test_one_orbit_tick_exact() {
        let planet = Planet::standard(DVec2::new(100.0, -50.0), 40.0);
        let shell = planet.orbit_radius(PLAYER_RADIUS);
        let mut kin = Kinematics::at_rest(planet.pos + DVec2::new(shell, 0.0));
        let mut angle = 0.0;

        update_orbit(&mut kin, &mut angle, &planet, PLAYER_RADIUS, DT);

        let expected_angle = planet.angular_velocity * DT;
        assert_eq!(angle, expected_angle);
        assert_eq!(
            kin.pos,
            planet.pos + shell * DVec2::new(expected_angle.cos(), expected_angle.sin())
        );
        assert_eq!(kin.vel, DVec2::ZERO);
    }
}
