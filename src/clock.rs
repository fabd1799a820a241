//! Clock adapters between wall-time drivers and the simulation
//!
//! The sim consumes two callback sources: a repeating tick (round timer)
//! and a per-frame advance. The frame source is whatever calls
//! [`GameLoop::frame`](crate::driver::GameLoop::frame); [`Interval`] turns
//! that continuous frame time into the discrete ticks, as a cancellable
//! subscription the driver holds a handle to.

use serde::{Deserialize, Serialize};

/// Repeating tick subscription driven by frame time.
///
/// Accumulates elapsed seconds and yields one tick per whole period.
/// A cancelled interval yields nothing and holds no residual time, so a
/// later `restart` cannot replay ticks from before the cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interval {
    period: f32,
    accumulator: f32,
    active: bool,
}

impl Interval {
    /// A new, active interval firing every `period` seconds
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
            active: true,
        }
    }

    /// Feed elapsed frame time, returning how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.active {
            return 0;
        }
        self.accumulator += dt;
        let due = (self.accumulator / self.period) as u32;
        self.accumulator -= due as f32 * self.period;
        due
    }

    /// Stop firing and drain accumulated time. Idempotent.
    pub fn cancel(&mut self) {
        self.active = false;
        self.accumulator = 0.0;
    }

    /// Begin firing again, starting a fresh period from now
    pub fn restart(&mut self) {
        self.active = true;
        self.accumulator = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
