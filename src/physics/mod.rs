//! Fixed-tick movement simulation.
//!
//! Wires the per-tick pipeline into Bevy's FixedUpdate schedule. The
//! stage order is a contract: timers first, then motion, trail, world
//! boundary, landing capture, camera smoothing. Jump and dash request
//! handlers run in Update so host input lands between ticks.

pub mod boundary;
pub mod gravity;
pub mod integrator;
pub mod orbit;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use boundary::enforce_boundary;
pub use gravity::{GravityField, GravitySource, compute_acceleration, compute_acceleration_scalar};
pub use integrator::integrate_flight;
pub use orbit::{contact_angle, update_orbit};

use crate::actions::{DashRequest, JumpRequest, handle_dash_requests, handle_jump_requests};
use crate::adaptive::AdaptivePhysics;
use crate::camera::{CameraScale, smooth_scale, target_scale};
use crate::config::{PhysicsTuning, load_physics_tuning};
use crate::planet::Planet;
use crate::player::{DashState, MotionMode, Player};
use crate::prediction::{LandingEvent, detect_landing};
use crate::services::GameServices;
use crate::session::SessionState;
use crate::trail::Trail;
use crate::types::{Kinematics, SimClock, TICK_HZ};

/// Tick pipeline stages, configured as a strict chain in FixedUpdate.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Clock, dash timers, adaptive recalibration
    Timers,
    /// Gravity flattening, orbital motion, free flight
    Motion,
    /// Trail decay and emission
    Trail,
    /// World edge clamping
    Boundary,
    /// Landing capture
    Landing,
    /// Camera scale smoothing
    Camera,
}

/// Plugin providing the whole movement simulation.
///
/// Adds systems for:
/// - The fixed-tick pipeline in `PhysicsSet` order
/// - Jump/dash request handling in Update
/// - Tuning file load at startup
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<PhysicsTuning>()
            .init_resource::<GravityField>()
            .init_resource::<SimClock>()
            .init_resource::<AdaptivePhysics>()
            .init_resource::<GameServices>()
            .init_resource::<SessionState>()
            .add_event::<JumpRequest>()
            .add_event::<DashRequest>()
            .add_event::<LandingEvent>()
            .configure_sets(
                FixedUpdate,
                (
                    PhysicsSet::Timers,
                    PhysicsSet::Motion,
                    PhysicsSet::Trail,
                    PhysicsSet::Boundary,
                    PhysicsSet::Landing,
                    PhysicsSet::Camera,
                )
                    .chain(),
            )
            .add_systems(Startup, load_physics_tuning)
            .add_systems(
                FixedUpdate,
                (
                    // The clock must advance before recalibration reads
                    // it, so the trio runs in a fixed order.
                    (advance_clock, tick_dash_timers, recalibrate_adaptive)
                        .chain()
                        .in_set(PhysicsSet::Timers),
                    (collect_gravity_sources, orbital_motion, free_flight)
                        .chain()
                        .in_set(PhysicsSet::Motion),
                    update_trail.in_set(PhysicsSet::Trail),
                    enforce_world_boundary.in_set(PhysicsSet::Boundary),
                    detect_landing.in_set(PhysicsSet::Landing),
                    smooth_camera_scale.in_set(PhysicsSet::Camera),
                ),
            )
            .add_systems(
                Update,
                (handle_jump_requests, handle_dash_requests).chain(),
            );
    }
}

/// Advance the simulation clock by one fixed tick.
fn advance_clock(time: Res<Time<Fixed>>, mut clock: ResMut<SimClock>) {
    clock.advance(time.delta_secs_f64());
}

/// Decay dash windows and cooldowns.
fn tick_dash_timers(time: Res<Time<Fixed>>, mut dashers: Query<&mut DashState>) {
    let dt = time.delta_secs_f64();
    for mut dash in dashers.iter_mut() {
        dash.tick(dt);
    }
}

/// Give the adaptive controller its periodic chance to recalibrate.
/// The interval gate inside keeps this cheap on the ticks in between.
fn recalibrate_adaptive(
    clock: Res<SimClock>,
    services: Res<GameServices>,
    mut adaptive: ResMut<AdaptivePhysics>,
) {
    adaptive.maybe_recalibrate(clock.elapsed, services.profile.profile().as_ref());
}

/// Flatten the planet set into the reusable gravity source buffer.
fn collect_gravity_sources(
    tuning: Res<PhysicsTuning>,
    planets: Query<&Planet>,
    mut field: ResMut<GravityField>,
) {
    field.rebuild(tuning.gravity_strength, planets.iter());
}

/// Closed-form circular motion for landed players.
///
/// A player whose orbited planet has despawned is released into free
/// flight rather than left frozen on a stale shell.
fn orbital_motion(
    time: Res<Time<Fixed>>,
    planets: Query<&Planet>,
    mut players: Query<(&Player, &mut Kinematics, &mut MotionMode)>,
) {
    let dt = time.delta_secs_f64();
    for (player, mut kin, mut mode) in players.iter_mut() {
        let MotionMode::Orbiting { planet, angle } = *mode else {
            continue;
        };
        match planets.get(planet) {
            Ok(planet_data) => {
                let mut angle = angle;
                update_orbit(&mut kin, &mut angle, planet_data, player.radius, dt);
                *mode = MotionMode::Orbiting { planet, angle };
            }
            Err(_) => {
                warn!("Orbited planet {planet:?} despawned; releasing player to free flight");
                *mode = MotionMode::FreeFlight;
            }
        }
    }
}

/// Ballistic integration for free-flying players.
fn free_flight(
    time: Res<Time<Fixed>>,
    field: Res<GravityField>,
    adaptive: Res<AdaptivePhysics>,
    mut players: Query<(&mut Kinematics, &MotionMode, &DashState), With<Player>>,
) {
    let dt = time.delta_secs_f64();
    for (mut kin, mode, dash) in players.iter_mut() {
        if mode.is_on_planet() {
            continue;
        }
        integrate_flight(&mut kin, field.sources(), adaptive.space_drag, dash.dashing, dt);
    }
}

/// Decay existing trail points, then lay down this tick's breadcrumb.
fn update_trail(
    time: Res<Time<Fixed>>,
    tuning: Res<PhysicsTuning>,
    mut players: Query<(&Kinematics, &DashState, &mut Trail), With<Player>>,
) {
    let dt = time.delta_secs_f64();
    for (kin, dash, mut trail) in players.iter_mut() {
        trail.decay(tuning.trail_decay_rate * dt);
        trail.emit(kin.pos, dash.dashing);
    }
}

/// Clamp free-flying players to the world circle. Landed players are
/// skipped; the orbit solver owns their position.
fn enforce_world_boundary(
    tuning: Res<PhysicsTuning>,
    mut players: Query<(&mut Kinematics, &MotionMode), With<Player>>,
) {
    for (mut kin, mode) in players.iter_mut() {
        if mode.is_on_planet() {
            continue;
        }
        if enforce_boundary(&mut kin, tuning.world_radius) {
            info!("Player hit the world edge; velocity reflected inward");
        }
    }
}

/// Ease each player's camera scale toward its speed target at the
/// adaptive response rate.
fn smooth_camera_scale(
    time: Res<Time<Fixed>>,
    adaptive: Res<AdaptivePhysics>,
    mut players: Query<(&Kinematics, &mut CameraScale), With<Player>>,
) {
    let dt = time.delta_secs_f64();
    for (kin, mut camera) in players.iter_mut() {
        let target = target_scale(kin.speed());
        camera.scale = smooth_scale(camera.scale, target, adaptive.camera_response, dt);
    }
}
