//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time arrives only through the two callback paths (`timer_tick`,
//!   `advance_frame`) - no wall clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The presentation layer reads `phase`, `score`, `seconds_remaining`,
//! `is_charging`, `is_throwing` and `particles`, and issues the four
//! commands (`request_start`, `request_reset`, `charge_start`, `charge_end`).
//! Out-of-order commands are silent no-ops.

pub mod charge;
pub mod field;
pub mod state;
pub mod tick;
pub mod timer;

pub use charge::{ChargeSession, clamped_power};
pub use field::{Particle, ParticleField};
pub use state::{GamePhase, GameState};
pub use timer::RoundTimer;
