//! Common test utilities for integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy::math::DVec2;
use bevy::prelude::*;

use orbit_jump::actions::{DashRequest, JumpRequest};
use orbit_jump::camera::CameraScale;
use orbit_jump::physics::PhysicsPlugin;
use orbit_jump::planet::{Planet, PlanetName};
use orbit_jump::player::{DashState, MotionMode, Player};
use orbit_jump::services::{
    FeedbackSink, GameServices, JumpSample, PlayerProfile, PowerUpKind, PowerUps, ProfileProvider,
    Telemetry,
};
use orbit_jump::trail::Trail;
use orbit_jump::types::{Kinematics, TICK_HZ};

/// Build a headless app with the movement simulation installed.
pub fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(PhysicsPlugin);
    app
}

/// Drive exactly `ticks` fixed steps, bypassing the wall-clock
/// accumulator so tests stay deterministic.
pub fn step_fixed(app: &mut App, ticks: u32) {
    let dt = Duration::from_secs_f64(1.0 / TICK_HZ);
    for _ in 0..ticks {
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(dt);
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Run the Update schedule once so request handlers drain their events.
pub fn drain_events(app: &mut App) {
    app.world_mut().run_schedule(Update);
}

/// Queue a jump request; call `drain_events` to deliver it.
pub fn request_jump(app: &mut App, pull_power: f64, angle: f64) {
    app.world_mut()
        .resource_mut::<Events<JumpRequest>>()
        .send(JumpRequest { pull_power, angle });
}

/// Queue a dash request; call `drain_events` to deliver it.
pub fn request_dash(app: &mut App, target: DVec2) {
    app.world_mut()
        .resource_mut::<Events<DashRequest>>()
        .send(DashRequest { target });
}

/// Spawn a standard planet directly into the world.
pub fn spawn_planet(app: &mut App, pos: DVec2, radius: f64) -> Entity {
    app.world_mut()
        .spawn((
            Planet::standard(pos, radius),
            PlanetName("Testworld".to_string()),
        ))
        .id()
}

/// Spawn a player orbiting `planet_entity` at `angle`, positioned on
/// the orbit shell.
pub fn spawn_orbiting_player(app: &mut App, planet_entity: Entity, angle: f64) -> Entity {
    let planet = app
        .world()
        .entity(planet_entity)
        .get::<Planet>()
        .cloned()
        .expect("planet entity must carry a Planet component");

    let player = Player::default();
    let shell = planet.orbit_radius(player.radius);
    let pos = planet.pos + shell * DVec2::new(angle.cos(), angle.sin());

    app.world_mut()
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

/// Spawn a free-flying player.
pub fn spawn_flying_player(app: &mut App, pos: DVec2, vel: DVec2) -> Entity {
    app.world_mut()
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

/// Power-up stub with fixed flags.
#[derive(Clone, Copy, Default)]
pub struct StubPowerUps {
    pub speed_boost: bool,
    pub multi_jump: bool,
}

impl PowerUps for StubPowerUps {
    fn is_active(&self, kind: PowerUpKind) -> bool {
        match kind {
            PowerUpKind::SpeedBoost => self.speed_boost,
            PowerUpKind::MultiJump => self.multi_jump,
        }
    }
}

/// Profile provider returning a fixed profile, or nothing.
#[derive(Clone, Copy, Default)]
pub struct StubProfile(pub Option<PlayerProfile>);

impl ProfileProvider for StubProfile {
    fn profile(&self) -> Option<PlayerProfile> {
        self.0
    }
}

/// Telemetry recorder. Clones share the same buffers, so a test keeps
/// one handle while the box goes into the resource.
#[derive(Clone, Default)]
pub struct RecordingTelemetry {
    pub jumps: Arc<Mutex<Vec<JumpSample>>>,
    pub accuracies: Arc<Mutex<Vec<f64>>>,
}

impl Telemetry for RecordingTelemetry {
    fn record_jump(&mut self, sample: &JumpSample) {
        self.jumps.lock().unwrap().push(*sample);
    }

    fn record_landing_accuracy(&mut self, accuracy: f64) {
        self.accuracies.lock().unwrap().push(accuracy);
    }
}

/// Feedback recorder capturing every callback with its arguments.
#[derive(Clone, Default)]
pub struct RecordingFeedback {
    /// (power, success, first_jump)
    pub jumps: Arc<Mutex<Vec<(f64, bool, bool)>>>,
    /// (emergency, success)
    pub dashes: Arc<Mutex<Vec<(bool, bool)>>>,
    /// intensity
    pub landings: Arc<Mutex<Vec<f64>>>,
}

impl FeedbackSink for RecordingFeedback {
    fn on_jump(&mut self, power: f64, success: bool, first_jump: bool) {
        self.jumps.lock().unwrap().push((power, success, first_jump));
    }

    fn on_dash(&mut self, emergency: bool, success: bool) {
        self.dashes.lock().unwrap().push((emergency, success));
    }

    fn on_landing(&mut self, intensity: f64) {
        self.landings.lock().unwrap().push(intensity);
    }
}

/// Replace the app's services with recording doubles and the given
/// stubs, returning live handles to the recorders.
pub fn install_recording_services(
    app: &mut App,
    power_ups: StubPowerUps,
    profile: StubProfile,
) -> (RecordingTelemetry, RecordingFeedback) {
    let telemetry = RecordingTelemetry::default();
    let feedback = RecordingFeedback::default();

    app.insert_resource(GameServices {
        power_ups: Box::new(power_ups),
        profile: Box::new(profile),
        telemetry: Box::new(telemetry.clone()),
        feedback: Box::new(feedback.clone()),
    });

    (telemetry, feedback)
}
