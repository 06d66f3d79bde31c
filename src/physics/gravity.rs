//! Gravity summation for free flight.
//!
//! Computes the summed acceleration the planet field exerts at a point.
//! Planet entities are flattened once per tick into a reused source
//! buffer so the integrator and the landing predictor sample the same
//! slice without re-walking the ECS.

use bevy::math::DVec2;
use bevy::prelude::*;
use wide::f64x4;

use crate::planet::Planet;
use crate::types::MIN_GRAVITY_DISTANCE;

/// One flattened gravity source: (center position, gm).
/// `gm = GRAVITY_STRENGTH * radius^2 * multiplier`; negative gm repels.
pub type GravitySource = (DVec2, f64);

/// Per-tick cache of flattened gravity sources.
///
/// `rebuild` clears and refills the buffer; capacity is retained across
/// ticks, so the steady state allocates nothing.
#[derive(Resource, Debug, Default)]
pub struct GravityField {
    sources: Vec<GravitySource>,
}

impl GravityField {
    /// Refill the buffer from the current planet set.
    pub fn rebuild<'a>(&mut self, strength: f64, planets: impl Iterator<Item = &'a Planet>) {
        self.sources.clear();
        self.sources.extend(
            planets.map(|p| (p.pos, strength * p.radius * p.radius * p.gravity_multiplier)),
        );
    }

    /// The flattened sources for this tick.
    pub fn sources(&self) -> &[GravitySource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Compute gravitational acceleration at `pos` from flattened sources.
///
/// Batches of four sources go through the SIMD lane path; the remainder
/// takes the scalar path. Both paths perform identical per-source
/// arithmetic in identical order, so the split is invisible in the
/// result.
///
/// # Arguments
/// * `pos` - Sample position in world units
/// * `sources` - Pre-flattened (position, gm) pairs
///
/// # Returns
/// Acceleration vector in world units/s²
#[inline]
pub fn compute_acceleration(pos: DVec2, sources: &[GravitySource]) -> DVec2 {
    let mut acc = DVec2::ZERO;

    let mut chunks = sources.chunks_exact(4);
    for chunk in &mut chunks {
        acc += accumulate_four(pos, chunk);
    }
    acc + compute_acceleration_scalar(pos, chunks.remainder())
}

/// Scalar reference path over any number of sources.
///
/// # Arguments
/// * `pos` - Sample position in world units
/// * `sources` - Pre-flattened (position, gm) pairs
///
/// # Returns
/// Acceleration vector in world units/s²
#[inline]
pub fn compute_acceleration_scalar(pos: DVec2, sources: &[GravitySource]) -> DVec2 {
    let mut acc = DVec2::ZERO;

    for &(body_pos, gm) in sources {
        let delta = body_pos - pos;
        let r_squared = delta.length_squared();

        // Skip inside the singularity threshold; a player center this
        // deep inside a body is already being captured elsewhere.
        if r_squared > MIN_GRAVITY_DISTANCE * MIN_GRAVITY_DISTANCE {
            let r = r_squared.sqrt();
            // a = gm/r² in the direction of delta; delta/r is the unit vector
            acc += delta * (gm / (r_squared * r));
        }
    }

    acc
}

/// SIMD lane path for exactly four sources.
///
/// Pack the four deltas into f64x4 lanes, do the shared arithmetic
/// vectorized, then unpack and apply the singularity guard per lane.
#[inline]
fn accumulate_four(pos: DVec2, sources: &[GravitySource]) -> DVec2 {
    let px = f64x4::new([sources[0].0.x, sources[1].0.x, sources[2].0.x, sources[3].0.x]);
    let py = f64x4::new([sources[0].0.y, sources[1].0.y, sources[2].0.y, sources[3].0.y]);
    let gm = f64x4::new([sources[0].1, sources[1].1, sources[2].1, sources[3].1]);

    let dx = px - f64x4::splat(pos.x);
    let dy = py - f64x4::splat(pos.y);
    let r_squared = dx * dx + dy * dy;
    let denom = r_squared * r_squared.sqrt();

    let dx = dx.to_array();
    let dy = dy.to_array();
    let r_squared = r_squared.to_array();
    let denom = denom.to_array();
    let gm = gm.to_array();

    let mut acc = DVec2::ZERO;
    for lane in 0..4 {
        if r_squared[lane] > MIN_GRAVITY_DISTANCE * MIN_GRAVITY_DISTANCE {
            let scale = gm[lane] / denom[lane];
            acc += DVec2::new(dx[lane] * scale, dy[lane] * scale);
        }
    }
    acc
}
