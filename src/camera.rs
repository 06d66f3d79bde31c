//! Camera-scale smoothing.
//!
//! The renderer zooms out as the player speeds up. This module owns the
//! per-player scale factor and its smoothing; the target is derived
//! from current speed and approached at the adaptive camera-response
//! rate, so tuned-up players get a snappier camera.

use bevy::prelude::*;

/// Scale at rest (orbiting).
pub const BASE_SCALE: f64 = 1.0;

/// Closest allowed scale.
pub const MIN_SCALE: f64 = 0.6;

/// Widest allowed scale (fastest flight).
pub const MAX_SCALE: f64 = 1.8;

/// Speed at which the target reaches the widest scale.
pub const SPEED_ZOOM_REF: f64 = 600.0;

/// Smoothed camera zoom factor associated with a player.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraScale {
    /// Current smoothed scale
    pub scale: f64,
}

impl Default for CameraScale {
    fn default() -> Self {
        Self { scale: BASE_SCALE }
    }
}

/// Target scale for a given speed: widen linearly up to the reference
/// speed, clamped into the scale band.
pub fn target_scale(speed: f64) -> f64 {
    let t = (speed / SPEED_ZOOM_REF).clamp(0.0, 1.0);
    (BASE_SCALE + t * (MAX_SCALE - BASE_SCALE)).clamp(MIN_SCALE, MAX_SCALE)
}

/// Move `scale` toward `target` at `response` per second. The step
/// fraction is capped at 1.0 so large rates or ticks can overshoot
/// nothing.
pub fn smooth_scale(scale: f64, target: f64, response: f64, dt: f64) -> f64 {
    scale + (target - scale) * (response * dt).min(1.0)
}
