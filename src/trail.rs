//! Fixed-capacity trail point pool.
//!
//! The trail records recent player positions for rendering. It is on
//! the per-tick hot path, so the backing store is a fixed-size array
//! allocated once with the component; emits reuse slots and expiry only
//! flips the active flag. No allocation ever happens after spawn.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Pool capacity. Sized at least 2x the steady-state active count
/// (one emit per tick at 60 Hz against the default decay rate leaves
/// ~50 points alive).
pub const TRAIL_CAPACITY: usize = 128;

/// One pooled trail record. Inactive slots keep their last contents
/// until reused.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrailPoint {
    /// World position at emit time
    pub pos: DVec2,
    /// Remaining life in [0, 1]; the renderer fades on this
    pub life: f64,
    /// Emitted during a dash window
    pub dashed: bool,
    /// Slot is live; expired slots are recycled, never freed
    pub active: bool,
}

/// The player's trail history.
///
/// Slot selection on emit: a free slot if any exists, otherwise the
/// active slot with the lowest remaining life is evicted.
#[derive(Component, Clone, Debug)]
pub struct Trail {
    points: [TrailPoint; TRAIL_CAPACITY],
}

impl Trail {
    /// Create an empty pool. This is the only allocation the trail
    /// ever performs (inline in the component itself).
    pub fn new() -> Self {
        Self {
            points: [TrailPoint::default(); TRAIL_CAPACITY],
        }
    }

    /// Write one point at full life, reusing a pool slot.
    pub fn emit(&mut self, pos: DVec2, dashed: bool) {
        let slot = self.select_slot();
        self.points[slot] = TrailPoint {
            pos,
            life: 1.0,
            dashed,
            active: true,
        };
    }

    /// Decay every active point by `amount`, deactivating expired ones.
    pub fn decay(&mut self, amount: f64) {
        for point in self.points.iter_mut() {
            if !point.active {
                continue;
            }
            point.life -= amount;
            if point.life <= 0.0 {
                point.life = 0.0;
                point.active = false;
            }
        }
    }

    /// Number of live points.
    pub fn active_len(&self) -> usize {
        self.points.iter().filter(|p| p.active).count()
    }

    /// Iterate live points in storage order.
    pub fn iter_active(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter().filter(|p| p.active)
    }

    /// Total slot count (fixed for the component's lifetime).
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// Pick the slot for the next emit: first inactive slot, else the
    /// active slot with the lowest remaining life.
    fn select_slot(&self) -> usize {
        let mut lowest = 0;
        let mut lowest_life = f64::INFINITY;
        for (i, point) in self.points.iter().enumerate() {
            if !point.active {
                return i;
            }
            if point.life < lowest_life {
                lowest_life = point.life;
                lowest = i;
            }
        }
        lowest
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
