//! Session bookkeeping around jumps and landings.
//!
//! The physics core hands the session layer an ephemeral `JumpContext`
//! at launch and takes it back at landing for accuracy analysis. The
//! counters feed first-jump detection and planning-time measurement.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Ephemeral record bridging a jump to its landing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpContext {
    /// Launch position
    pub origin: DVec2,
    /// Capped jump power
    pub power: f64,
    /// Launch angle in radians
    pub angle: f64,
    /// Seconds spent on the planet before this jump
    pub planning_time: f64,
    /// The planet the jump left
    pub from_planet: Entity,
    /// Ballistic landing estimate taken at launch
    pub predicted_landing: DVec2,
    /// Sim time of the launch
    pub launched_at: f64,
}

/// Per-session state owned by the caller side of the physics core.
#[derive(Resource, Clone, Debug, Default)]
pub struct SessionState {
    /// Successful jumps this session
    pub jumps: u64,
    /// Landings this session
    pub landings: u64,
    /// Sim time of the most recent landing (or session start)
    pub landed_at: f64,
    /// Jump currently in the air, if any
    pub active_jump: Option<JumpContext>,
}

impl SessionState {
    /// Whether no jump has been counted yet.
    pub fn is_first_jump(&self) -> bool {
        self.jumps == 0
    }

    /// Seconds spent planning on the planet since the last landing.
    pub fn planning_time(&self, now: f64) -> f64 {
        (now - self.landed_at).max(0.0)
    }
}
