//! Collaborator interfaces for the surrounding game.
//!
//! The physics core talks to power-ups, player analytics, telemetry and
//! emotional feedback only through these narrow traits, resolved once
//! at app construction into the `GameServices` resource. Every slot has
//! a null default, so a host that wires nothing up gets a simulation
//! that silently degrades instead of failing: no boosts, no adaptation,
//! telemetry into the void.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Externally granted capabilities that gate or modify actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Multiplies jump launch velocity
    SpeedBoost,
    /// Unlocks dashing mid-flight
    MultiJump,
}

/// Player mood as inferred by the analytics side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Frustrated,
    Neutral,
    Confident,
    Excited,
}

/// Broad movement style classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementStyle {
    Cautious,
    Balanced,
    Aggressive,
}

/// Profile snapshot consumed by the adaptive controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerProfile {
    /// Inferred skill in [0, 1]
    pub skill_level: f64,
    /// Willingness to take risks in [0, 1]
    pub risk_tolerance: f64,
    pub mood: Mood,
    pub movement_style: MovementStyle,
}

/// Everything telemetry wants to know about a jump at launch time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpSample {
    /// Capped jump power
    pub power: f64,
    /// Launch angle in radians
    pub angle: f64,
    /// Launch position
    pub start: DVec2,
    /// Ballistic landing estimate at launch time
    pub predicted_landing: DVec2,
    /// Seconds spent on the planet before jumping
    pub planning_time: f64,
}

/// Power-up queries.
pub trait PowerUps: Send + Sync {
    fn is_active(&self, kind: PowerUpKind) -> bool;
}

/// Player-profile provider. `None` means no analytics are available
/// yet; consumers treat that as "skip, retry later".
pub trait ProfileProvider: Send + Sync {
    fn profile(&self) -> Option<PlayerProfile>;
}

/// Fire-and-forget analytics sink.
pub trait Telemetry: Send + Sync {
    fn record_jump(&mut self, sample: &JumpSample);
    fn record_landing_accuracy(&mut self, accuracy: f64);
}

/// Fire-and-forget emotional feedback sink (audio, haptics, particles).
pub trait FeedbackSink: Send + Sync {
    fn on_jump(&mut self, power: f64, success: bool, first_jump: bool);
    fn on_dash(&mut self, emergency: bool, success: bool);
    fn on_landing(&mut self, intensity: f64);
}

/// Null power-ups: nothing is ever active.
#[derive(Debug, Default)]
pub struct NoPowerUps;

impl PowerUps for NoPowerUps {
    fn is_active(&self, _kind: PowerUpKind) -> bool {
        false
    }
}

/// Null profile provider: analytics absent.
#[derive(Debug, Default)]
pub struct NoProfile;

impl ProfileProvider for NoProfile {
    fn profile(&self) -> Option<PlayerProfile> {
        None
    }
}

/// Telemetry sink that drops everything.
#[derive(Debug, Default)]
pub struct NullTelemetry;

impl Telemetry for NullTelemetry {
    fn record_jump(&mut self, _sample: &JumpSample) {}
    fn record_landing_accuracy(&mut self, _accuracy: f64) {}
}

/// Feedback sink that drops everything.
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn on_jump(&mut self, _power: f64, _success: bool, _first_jump: bool) {}
    fn on_dash(&mut self, _emergency: bool, _success: bool) {}
    fn on_landing(&mut self, _intensity: f64) {}
}

/// The injected collaborator set.
///
/// Hosts overwrite individual slots before (or instead of) letting the
/// plugin insert the null defaults; the core never looks collaborators
/// up anywhere else.
#[derive(Resource)]
pub struct GameServices {
    pub power_ups: Box<dyn PowerUps>,
    pub profile: Box<dyn ProfileProvider>,
    pub telemetry: Box<dyn Telemetry>,
    pub feedback: Box<dyn FeedbackSink>,
}

impl Default for GameServices {
    fn default() -> Self {
        Self {
            power_ups: Box::new(NoPowerUps),
            profile: Box::new(NoProfile),
            telemetry: Box::new(NullTelemetry),
            feedback: Box::new(NullFeedback),
        }
    }
}

impl GameServices {
    /// Shorthand for the speed-boost gate with the default multiplier
    /// fallback semantics (inactive when the collaborator is null).
    pub fn speed_boost_active(&self) -> bool {
        self.power_ups.is_active(PowerUpKind::SpeedBoost)
    }

    /// Shorthand for the dash-unlock gate.
    pub fn multi_jump_active(&self) -> bool {
        self.power_ups.is_active(PowerUpKind::MultiJump)
    }
}
