//! Landing prediction and accuracy analysis.
//!
//! The predictor is a deliberate rough cut: assume the launch velocity
//! holds for a fixed flight duration and call that the landing point.
//! It only feeds analytics, so being wrong is informative (the accuracy
//! analyzer scores exactly how wrong) rather than harmful. Landing
//! detection itself lives here too, closing the loop the jump opened.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::config::PhysicsTuning;
use crate::physics::orbit::contact_angle;
use crate::planet::Planet;
use crate::player::{DashState, MotionMode, Player};
use crate::services::GameServices;
use crate::session::SessionState;
use crate::types::{Kinematics, SimClock};

/// Fired when a free-flying player captures onto a planet. `accuracy`
/// is present when the flight started with a tracked jump.
#[derive(Event, Clone, Copy, Debug)]
pub struct LandingEvent {
    pub player: Entity,
    pub planet: Entity,
    pub accuracy: Option<f64>,
}

/// Ballistic landing estimate: current position carried along the
/// current velocity for a fixed assumed flight time. Analytics only.
pub fn predict_landing(pos: DVec2, vel: DVec2, flight_time: f64) -> DVec2 {
    pos + vel * flight_time
}

/// Score how close a landing came to its prediction: 1.0 on the mark,
/// fading to 0.0 at `normalization` distance.
pub fn landing_accuracy(actual: DVec2, predicted: DVec2, normalization: f64) -> f64 {
    let distance = (actual - predicted).length();
    (1.0 - distance / normalization).clamp(0.0, 1.0)
}

/// Capture check: inside the orbit shell of an attracting planet and
/// moving inward. The inward condition keeps the launch tick (which
/// starts exactly on the shell, moving out) from recapturing instantly.
pub fn should_capture(kin: &Kinematics, player_radius: f64, planet: &Planet) -> bool {
    if !planet.is_attracting() {
        return false;
    }
    let delta = kin.pos - planet.pos;
    if delta.length() > planet.orbit_radius(player_radius) {
        return false;
    }
    kin.vel.dot(delta) < 0.0
}

/// Land free-flying players that touch a planet's orbit shell.
///
/// Runs after the boundary clamp so capture sees final tick positions.
/// On capture: snap into orbit at the contact angle, zero velocity,
/// close any dash window, stamp the session, and settle the pending
/// jump's accuracy with telemetry and feedback.
pub fn detect_landing(
    clock: Res<SimClock>,
    tuning: Res<PhysicsTuning>,
    mut services: ResMut<GameServices>,
    mut session: ResMut<SessionState>,
    planets: Query<(Entity, &Planet)>,
    mut players: Query<(
        Entity,
        &Player,
        &mut Kinematics,
        &mut MotionMode,
        &mut DashState,
    )>,
    mut landing_events: EventWriter<LandingEvent>,
) {
    for (player_entity, player, mut kin, mut mode, mut dash) in players.iter_mut() {
        if mode.is_on_planet() {
            continue;
        }

        // Nearest qualifying planet wins when shells overlap.
        let mut capture: Option<(Entity, &Planet, f64)> = None;
        for (planet_entity, planet) in planets.iter() {
            if !should_capture(&kin, player.radius, planet) {
                continue;
            }
            let dist = (kin.pos - planet.pos).length();
            match capture {
                Some((_, _, best)) if best <= dist => {}
                _ => capture = Some((planet_entity, planet, dist)),
            }
        }

        let Some((planet_entity, planet, _)) = capture else {
            continue;
        };

        let angle = contact_angle(kin.pos, planet);
        let shell = planet.orbit_radius(player.radius);
        kin.pos = planet.pos + shell * DVec2::new(angle.cos(), angle.sin());
        kin.vel = DVec2::ZERO;
        *mode = MotionMode::Orbiting {
            planet: planet_entity,
            angle,
        };
        dash.dashing = false;
        dash.timer = 0.0;

        session.landings += 1;
        session.landed_at = clock.elapsed;

        let accuracy = session.active_jump.take().map(|context| {
            let score = landing_accuracy(
                kin.pos,
                context.predicted_landing,
                tuning.accuracy_normalization,
            );
            services.telemetry.record_landing_accuracy(score);
            services.feedback.on_landing(score);
            score
        });

        info!(
            "Player landed at angle {:.2}{}",
            angle,
            accuracy
                .map(|a| format!(", accuracy {:.2}", a))
                .unwrap_or_default()
        );

        landing_events.send(LandingEvent {
            player: player_entity,
            planet: planet_entity,
            accuracy,
        });
    }
}
