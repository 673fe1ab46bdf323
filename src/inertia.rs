//! Pan inertia: exponential-decay momentum for drag-release panning.
//!
//! During a drag each pointer delta feeds [`PanInertia::sample`], which
//! exponentially smooths an instantaneous velocity. After release the
//! host's frame timer (~60 Hz) calls [`PanInertia::step`] and applies the
//! returned offset delta to the camera; friction decays the velocity
//! geometrically until it drops below the stop threshold. Any new press
//! must call [`PanInertia::cancel`] so stale momentum never fights fresh
//! input.

#[cfg(test)]
#[path = "inertia_test.rs"]
mod inertia_test;

use crate::consts::{INERTIA_FRICTION, MIN_VELOCITY, VELOCITY_SMOOTHING};

/// Velocity state for pan momentum, in viewport pixels per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanInertia {
    vx: f64,
    vy: f64,
}

impl PanInertia {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Whether momentum is still in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.vx != 0.0 || self.vy != 0.0
    }

    /// Feed one pointer-move delta during a drag. Non-finite samples are
    /// ignored.
    pub fn sample(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.vx = dx * VELOCITY_SMOOTHING + self.vx * (1.0 - VELOCITY_SMOOTHING);
        self.vy = dy * VELOCITY_SMOOTHING + self.vy * (1.0 - VELOCITY_SMOOTHING);
    }

    /// Advance one frame: returns the offset delta to apply, then decays
    /// the velocity. Stops (zeroes both axes) once both components are at
    /// or below the minimum.
    pub fn step(&mut self) -> (f64, f64) {
        let delta = (self.vx, self.vy);
        self.vx *= INERTIA_FRICTION;
        self.vy *= INERTIA_FRICTION;
        if self.vx.abs() <= MIN_VELOCITY && self.vy.abs() <= MIN_VELOCITY {
            self.vx = 0.0;
            self.vy = 0.0;
        }
        delta
    }

    /// Kill momentum immediately (called on every new press).
    pub fn cancel(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }
}
