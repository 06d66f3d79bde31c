//! Adaptive physics controller.
//!
//! Periodically retunes space drag and camera response from the
//! externally inferred player profile. The formulas are additive
//! factor sums with hard band clamps; the bands are the contract (a
//! hand-edited save or an out-of-range profile can never push the
//! simulation outside them), the factor weights are empirical feel.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::services::{Mood, MovementStyle, PlayerProfile};

/// Baseline per-tick velocity retention.
pub const BASE_SPACE_DRAG: f64 = 0.99;

/// Hard band for space drag. Below 0.985 flight feels like syrup,
/// above 0.995 nothing ever slows down.
pub const MIN_SPACE_DRAG: f64 = 0.985;
pub const MAX_SPACE_DRAG: f64 = 0.995;

/// Baseline camera-scale approach rate.
pub const BASE_CAMERA_RESPONSE: f64 = 2.0;

/// Hard band for camera response.
pub const MIN_CAMERA_RESPONSE: f64 = 1.0;
pub const MAX_CAMERA_RESPONSE: f64 = 4.0;

/// Seconds between recalibrations.
pub const RECALIBRATION_INTERVAL: f64 = 10.0;

/// Maximum drag contribution of full skill.
pub const DRAG_SKILL_WEIGHT: f64 = 0.005;

/// Drag swing of risk tolerance around its midpoint (+/- half of this).
pub const DRAG_RISK_WEIGHT: f64 = 0.004;

/// Maximum camera-response contribution of full skill.
pub const CAMERA_SKILL_WEIGHT: f64 = 1.0;

/// Drag contribution per mood, within [-0.004, +0.003].
fn mood_drag_factor(mood: Mood) -> f64 {
    match mood {
        Mood::Frustrated => -0.004,
        Mood::Neutral => 0.0,
        Mood::Confident => 0.002,
        Mood::Excited => 0.003,
    }
}

/// Camera-response contribution per mood, within [-0.5, +0.5].
fn mood_camera_factor(mood: Mood) -> f64 {
    match mood {
        Mood::Frustrated => -0.5,
        Mood::Neutral => 0.0,
        Mood::Confident => 0.3,
        Mood::Excited => 0.5,
    }
}

/// Camera-response contribution per movement style, within [-0.5, +0.5].
fn style_camera_factor(style: MovementStyle) -> f64 {
    match style {
        MovementStyle::Cautious => -0.5,
        MovementStyle::Balanced => 0.0,
        MovementStyle::Aggressive => 0.5,
    }
}

/// Space drag for a profile: base plus skill, risk and mood factors,
/// clamped into the safe band. Skilled players get less drag (drag
/// closer to 1.0 keeps more speed).
pub fn drag_for_profile(profile: &PlayerProfile) -> f64 {
    let skill_factor = profile.skill_level * DRAG_SKILL_WEIGHT;
    let risk_factor = (profile.risk_tolerance - 0.5) * DRAG_RISK_WEIGHT;
    let mood_factor = mood_drag_factor(profile.mood);

    (BASE_SPACE_DRAG + skill_factor + risk_factor + mood_factor)
        .clamp(MIN_SPACE_DRAG, MAX_SPACE_DRAG)
}

/// Camera response for a profile: base plus skill, mood and style
/// factors, clamped into the safe band. Skilled aggressive players get
/// a snappier camera.
pub fn camera_response_for_profile(profile: &PlayerProfile) -> f64 {
    let skill_factor = profile.skill_level * CAMERA_SKILL_WEIGHT;
    let mood_factor = mood_camera_factor(profile.mood);
    let style_factor = style_camera_factor(profile.movement_style);

    (BASE_CAMERA_RESPONSE + skill_factor + mood_factor + style_factor)
        .clamp(MIN_CAMERA_RESPONSE, MAX_CAMERA_RESPONSE)
}

/// Controller phase. `Recalibrating` also covers the armed state where
/// the interval has elapsed but no profile is available yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    Recalibrating,
}

/// Current adaptive values plus the recalibration state machine.
///
/// Written only by [`AdaptivePhysics::maybe_recalibrate`]; read every
/// tick by the flight integrator (`space_drag`) and the camera smoother
/// (`camera_response`).
#[derive(Resource, Clone, Debug)]
pub struct AdaptivePhysics {
    /// Per-tick velocity retention in [MIN_SPACE_DRAG, MAX_SPACE_DRAG]
    pub space_drag: f64,
    /// Camera approach rate in [MIN_CAMERA_RESPONSE, MAX_CAMERA_RESPONSE]
    pub camera_response: f64,
    /// Sim time of the last applied recalibration
    pub last_recalibration: f64,
    /// Seconds between recalibrations
    pub interval: f64,
    phase: ControllerPhase,
}

impl Default for AdaptivePhysics {
    fn default() -> Self {
        Self {
            space_drag: BASE_SPACE_DRAG,
            camera_response: BASE_CAMERA_RESPONSE,
            last_recalibration: 0.0,
            interval: RECALIBRATION_INTERVAL,
            phase: ControllerPhase::Idle,
        }
    }
}

impl AdaptivePhysics {
    /// Run one recalibration check at sim time `now`.
    ///
    /// Idle until the interval elapses, then armed; armed until a
    /// profile is available (an absent provider is a no-op, not a
    /// failure), then the new values are computed and the timestamp
    /// stamped.
    ///
    /// # Returns
    /// `true` if new values were applied this call
    pub fn maybe_recalibrate(&mut self, now: f64, profile: Option<&PlayerProfile>) -> bool {
        if self.phase == ControllerPhase::Idle {
            if now - self.last_recalibration < self.interval {
                return false;
            }
            self.phase = ControllerPhase::Recalibrating;
        }

        let Some(profile) = profile else {
            return false;
        };

        self.space_drag = drag_for_profile(profile);
        self.camera_response = camera_response_for_profile(profile);
        self.last_recalibration = now;
        self.phase = ControllerPhase::Idle;
        true
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    /// The persistable flat record.
    pub fn snapshot(&self) -> AdaptiveSnapshot {
        AdaptiveSnapshot {
            space_drag: self.space_drag,
            camera_response: self.camera_response,
            last_adaptation: self.last_recalibration,
        }
    }

    /// Restore from a saved record. Values are re-clamped into their
    /// bands so a stale or hand-edited save cannot escape them.
    pub fn restore(&mut self, snapshot: AdaptiveSnapshot) {
        self.space_drag = snapshot.space_drag.clamp(MIN_SPACE_DRAG, MAX_SPACE_DRAG);
        self.camera_response = snapshot
            .camera_response
            .clamp(MIN_CAMERA_RESPONSE, MAX_CAMERA_RESPONSE);
        self.last_recalibration = snapshot.last_adaptation;
        self.phase = ControllerPhase::Idle;
    }
}

/// Flat serializable record of the adaptive values. The storage medium
/// (save file, cloud blob) belongs to the host, not to this crate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveSnapshot {
    pub space_drag: f64,
    pub camera_response: f64,
    pub last_adaptation: f64,
}
