//! Charge tracking and throw power
//!
//! A charge session is the window between the control being pressed and
//! released. Its duration maps to a normalized throw power: holding longer
//! throws harder, up to a cap past which extra hold time does nothing.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_CHARGE;

/// An open charge session - the control is currently held.
///
/// Created on charge-start, consumed into a duration on charge-release.
/// Timestamps are sim-clock seconds, not wall time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeSession {
    /// Sim clock at the moment the control was pressed
    pub started_at: f64,
}

impl ChargeSession {
    pub fn new(started_at: f64) -> Self {
        Self { started_at }
    }

    /// Seconds the control has been held as of `now`
    pub fn elapsed(&self, now: f64) -> f32 {
        (now - self.started_at).max(0.0) as f32
    }
}

/// Normalized throw power in [0, 1] for a given hold duration.
///
/// Linear up to [`MAX_CHARGE`] seconds, flat at 1.0 beyond it.
#[inline]
pub fn clamped_power(duration: f32) -> f32 {
    duration.max(0.0).min(MAX_CHARGE) / MAX_CHARGE
}
