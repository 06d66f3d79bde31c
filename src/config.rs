//! Runtime physics tuning loaded from `assets/physics.toml`.
//!
//! [`PhysicsTuning`] is a Bevy [`Resource`] holding every feel knob the
//! movement systems read. At startup [`load_physics_tuning`] reads
//! `assets/physics.toml` and overwrites the defaults with any values
//! present in the file; missing keys keep their compiled defaults, so a
//! minimal TOML can override just the constants being tuned. A missing
//! file is not an error, the defaults simply stand.

use bevy::prelude::*;
use serde::Deserialize;
use std::f64::consts::FRAC_PI_2;
use thiserror::Error;

use crate::types::{GRAVITY_STRENGTH, WORLD_RADIUS};

/// Default tuning values. `PhysicsTuning::default()` is the
/// authoritative source; the TOML file overrides it per key.

/// Cap on jump power regardless of pull strength.
pub const MAX_JUMP_POWER: f64 = 100.0;

/// Launch speed per unit of jump power.
pub const JUMP_VELOCITY_RATIO: f64 = 3.0;

/// Velocity multiplier while the speed-boost power-up is active.
pub const SPEED_BOOST_MULTIPLIER: f64 = 1.5;

/// Dash launch speed.
pub const DASH_POWER: f64 = 500.0;

/// Length of the drag-immune dash window in seconds.
pub const DASH_DURATION: f64 = 0.3;

/// Cooldown between dashes in seconds.
pub const DASH_COOLDOWN: f64 = 1.0;

/// Trail life lost per second (life starts at 1.0).
pub const TRAIL_DECAY_RATE: f64 = 1.2;

/// Assumed flight duration for the ballistic landing estimate.
pub const FLIGHT_TIME_ESTIMATE: f64 = 2.0;

/// Distance at which landing accuracy reaches zero.
pub const ACCURACY_NORMALIZATION: f64 = 500.0;

/// Emergency-dash vote: speed threshold.
pub const EMERGENCY_SPEED: f64 = 300.0;

/// Emergency-dash vote: velocity deviation threshold (radians).
pub const EMERGENCY_ANGLE: f64 = FRAC_PI_2;

/// Emergency-dash vote: fraction of the full cooldown that still has
/// to be pending for the "recently dashed" criterion.
pub const EMERGENCY_COOLDOWN_FRACTION: f64 = 0.5;

/// Runtime-tunable movement configuration.
///
/// All fields default to the constants above (and the world constants
/// in `types.rs`). Override any subset in `assets/physics.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    // World
    pub gravity_strength: f64,
    pub world_radius: f64,

    // Jump
    pub max_jump_power: f64,
    pub jump_velocity_ratio: f64,
    pub speed_boost_multiplier: f64,

    // Dash
    pub dash_power: f64,
    pub dash_duration: f64,
    pub dash_cooldown: f64,
    /// Tutorial bypass: allow dashing without the multi-jump power-up.
    pub free_dash: bool,

    // Emergency-dash heuristic thresholds (retunable without touching
    // the vote logic)
    pub emergency_speed: f64,
    pub emergency_angle: f64,
    pub emergency_cooldown_fraction: f64,

    // Trail
    pub trail_decay_rate: f64,

    // Landing prediction
    pub flight_time_estimate: f64,
    pub accuracy_normalization: f64,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity_strength: GRAVITY_STRENGTH,
            world_radius: WORLD_RADIUS,
            max_jump_power: MAX_JUMP_POWER,
            jump_velocity_ratio: JUMP_VELOCITY_RATIO,
            speed_boost_multiplier: SPEED_BOOST_MULTIPLIER,
            dash_power: DASH_POWER,
            dash_duration: DASH_DURATION,
            dash_cooldown: DASH_COOLDOWN,
            free_dash: false,
            emergency_speed: EMERGENCY_SPEED,
            emergency_angle: EMERGENCY_ANGLE,
            emergency_cooldown_fraction: EMERGENCY_COOLDOWN_FRACTION,
            trail_decay_rate: TRAIL_DECAY_RATE,
            flight_time_estimate: FLIGHT_TIME_ESTIMATE,
            accuracy_normalization: ACCURACY_NORMALIZATION,
        }
    }
}

/// Errors from reading a tuning file.
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load tuning from a TOML file at `path`.
pub fn load_tuning_from_path(path: &str) -> Result<PhysicsTuning, TuningError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Startup system: overwrite the `PhysicsTuning` resource from
/// `assets/physics.toml` when the file exists. Parse and IO errors are
/// logged and the compiled defaults stand; the simulation never aborts
/// over a tuning file.
pub fn load_physics_tuning(mut tuning: ResMut<PhysicsTuning>) {
    let path = "assets/physics.toml";
    match load_tuning_from_path(path) {
        Ok(loaded) => {
            *tuning = loaded;
            info!("Loaded physics tuning from {path}");
        }
        Err(TuningError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No {path} found; using compiled defaults");
        }
        Err(e) => {
            warn!("{e}; using compiled defaults");
        }
    }
}
