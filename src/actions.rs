//! Jump and dash actions.
//!
//! Both actions are externally triggered transitions on top of the
//! tick loop: the host sends a request event, the handler validates
//! preconditions, mutates velocity and motion state, and forwards the
//! side effects (telemetry, feedback, session bookkeeping, adaptive
//! recalibration) to the injected collaborators. Failed preconditions
//! are ordinary outcomes, not errors.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::adaptive::AdaptivePhysics;
use crate::config::PhysicsTuning;
use crate::player::{DashState, MotionMode, Player};
use crate::prediction::predict_landing;
use crate::services::{GameServices, JumpSample};
use crate::session::{JumpContext, SessionState};
use crate::types::{Kinematics, SimClock};

/// Directions shorter than this cannot be normalized meaningfully.
const MIN_DASH_DIRECTION: f64 = 1e-9;

/// Request to jump off the current planet with the given pull.
#[derive(Event, Clone, Copy, Debug)]
pub struct JumpRequest {
    /// Pull strength from the input layer; capped by tuning
    pub pull_power: f64,
    /// Launch angle in radians
    pub angle: f64,
}

/// Request to dash toward a world point.
#[derive(Event, Clone, Copy, Debug)]
pub struct DashRequest {
    pub target: DVec2,
}

/// Result of a jump attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JumpOutcome {
    /// Precondition failed: the player was not on a planet. Nothing
    /// was mutated.
    NotOnPlanet,
    /// Launched into free flight.
    Launched {
        /// Power after the cap
        power: f64,
        /// Initial flight velocity
        velocity: DVec2,
    },
}

impl JumpOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JumpOutcome::Launched { .. })
    }
}

/// Result of a dash attempt. Every failure variant leaves the player
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashOutcome {
    Dashed,
    /// Dashing is a flight move; the player was landed.
    OnPlanet,
    /// Cooldown still pending.
    CoolingDown,
    /// Neither the multi-jump power-up nor the tutorial bypass allows
    /// dashing.
    NotUnlocked,
    /// Target coincides with the player; no direction to dash in.
    NoDirection,
}

impl DashOutcome {
    pub fn is_success(&self) -> bool {
        *self == DashOutcome::Dashed
    }
}

/// Launch velocity for a capped jump power at the given angle.
pub fn jump_velocity(power: f64, angle: f64, boosted: bool, tuning: &PhysicsTuning) -> DVec2 {
    let mut speed = power * tuning.jump_velocity_ratio;
    if boosted {
        speed *= tuning.speed_boost_multiplier;
    }
    DVec2::new(angle.cos(), angle.sin()) * speed
}

/// Execute a jump on the player state.
///
/// Precondition: landed. On success the velocity is replaced by the
/// launch velocity and the motion state flips to free flight; position
/// stays on the orbit shell it launched from.
pub fn perform_jump(
    kin: &mut Kinematics,
    mode: &mut MotionMode,
    pull_power: f64,
    angle: f64,
    boosted: bool,
    tuning: &PhysicsTuning,
) -> JumpOutcome {
    if !mode.is_on_planet() {
        return JumpOutcome::NotOnPlanet;
    }

    let power = pull_power.min(tuning.max_jump_power);
    let velocity = jump_velocity(power, angle, boosted, tuning);

    kin.vel = velocity;
    *mode = MotionMode::FreeFlight;

    JumpOutcome::Launched { power, velocity }
}

/// Execute a dash on the player state.
///
/// Gates in order: airborne, cooldown elapsed, dash unlocked, usable
/// direction. On success velocity is overridden toward the target and
/// the dash window plus cooldown start. Emergency classification is
/// not handled here; it never gates the dash.
pub fn perform_dash(
    kin: &mut Kinematics,
    mode: &MotionMode,
    dash: &mut DashState,
    target: DVec2,
    unlocked: bool,
    tuning: &PhysicsTuning,
) -> DashOutcome {
    if mode.is_on_planet() {
        return DashOutcome::OnPlanet;
    }
    if !dash.ready() {
        return DashOutcome::CoolingDown;
    }
    if !unlocked {
        return DashOutcome::NotUnlocked;
    }

    let delta = target - kin.pos;
    if delta.length() < MIN_DASH_DIRECTION {
        return DashOutcome::NoDirection;
    }

    kin.vel = delta.normalize() * tuning.dash_power;
    dash.dashing = true;
    dash.timer = tuning.dash_duration;
    dash.cooldown = tuning.dash_cooldown;

    DashOutcome::Dashed
}

/// 2-of-3 emergency vote on a dash attempt's pre-dash state: high
/// speed, direction more than the threshold away from the current
/// velocity, or a mostly-pending cooldown (recently dashed / mashing).
/// Classification flavor only; the result never gates anything.
pub fn is_emergency_dash(
    vel: DVec2,
    dash_dir: DVec2,
    cooldown_remaining: f64,
    tuning: &PhysicsTuning,
) -> bool {
    let mut votes = 0;

    if vel.length() > tuning.emergency_speed {
        votes += 1;
    }
    if let Some(deviation) = angle_between(vel, dash_dir) {
        if deviation > tuning.emergency_angle {
            votes += 1;
        }
    }
    if cooldown_remaining > tuning.emergency_cooldown_fraction * tuning.dash_cooldown {
        votes += 1;
    }

    votes >= 2
}

/// Angle between two vectors in [0, pi]. `None` when either vector is
/// degenerate (the deviation criterion then votes false).
fn angle_between(a: DVec2, b: DVec2) -> Option<f64> {
    let len_a = a.length();
    let len_b = b.length();
    if len_a < MIN_DASH_DIRECTION || len_b < MIN_DASH_DIRECTION {
        return None;
    }
    Some((a.dot(b) / (len_a * len_b)).clamp(-1.0, 1.0).acos())
}

/// Drain jump requests against the player.
pub fn handle_jump_requests(
    mut requests: EventReader<JumpRequest>,
    clock: Res<SimClock>,
    tuning: Res<PhysicsTuning>,
    mut adaptive: ResMut<AdaptivePhysics>,
    mut services: ResMut<GameServices>,
    mut session: ResMut<SessionState>,
    mut players: Query<(&mut Kinematics, &mut MotionMode), With<Player>>,
) {
    for request in requests.read() {
        for (mut kin, mut mode) in players.iter_mut() {
            let from_planet = mode.planet();
            let boosted = services.speed_boost_active();
            let outcome = perform_jump(
                &mut kin,
                &mut mode,
                request.pull_power,
                request.angle,
                boosted,
                &tuning,
            );

            let capped_power = request.pull_power.min(tuning.max_jump_power);
            services
                .feedback
                .on_jump(capped_power, outcome.is_success(), session.is_first_jump());

            let JumpOutcome::Launched { power, velocity } = outcome else {
                continue;
            };

            let predicted = predict_landing(kin.pos, velocity, tuning.flight_time_estimate);
            let planning_time = session.planning_time(clock.elapsed);

            services.telemetry.record_jump(&JumpSample {
                power,
                angle: request.angle,
                start: kin.pos,
                predicted_landing: predicted,
                planning_time,
            });

            session.jumps += 1;
            if let Some(from_planet) = from_planet {
                session.active_jump = Some(JumpContext {
                    origin: kin.pos,
                    power,
                    angle: request.angle,
                    planning_time,
                    from_planet,
                    predicted_landing: predicted,
                    launched_at: clock.elapsed,
                });
            }

            // Jumps are the natural moment to re-check adaptation.
            adaptive.maybe_recalibrate(clock.elapsed, services.profile.profile().as_ref());

            info!(
                "Jump: power {:.1}, angle {:.2}, planned for {:.1}s",
                power, request.angle, planning_time
            );
        }
    }
}

/// Drain dash requests against the player.
pub fn handle_dash_requests(
    mut requests: EventReader<DashRequest>,
    tuning: Res<PhysicsTuning>,
    mut services: ResMut<GameServices>,
    mut players: Query<(&mut Kinematics, &MotionMode, &mut DashState), With<Player>>,
) {
    for request in requests.read() {
        for (mut kin, mode, mut dash) in players.iter_mut() {
            // Classify on the pre-dash state; a gated attempt still
            // reports its panic flavor to the feedback side.
            let emergency =
                is_emergency_dash(kin.vel, request.target - kin.pos, dash.cooldown, &tuning);

            let unlocked = services.multi_jump_active() || tuning.free_dash;
            let outcome = perform_dash(&mut kin, mode, &mut dash, request.target, unlocked, &tuning);

            services.feedback.on_dash(emergency, outcome.is_success());

            if outcome.is_success() {
                info!(
                    "Dash toward ({:.0}, {:.0}){}",
                    request.target.x,
                    request.target.y,
                    if emergency { " [emergency]" } else { "" }
                );
            }
        }
    }
}
