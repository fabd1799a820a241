//! Game state and core simulation types
//!
//! All state that must be captured for a deterministic replay lives here,
//! RNG stream included. Mutation happens only through the command and
//! callback methods in [`tick`](super::tick).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::charge::ChargeSession;
use super::field::{Particle, ParticleField};
use super::timer::RoundTimer;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start command
    Title,
    /// Start banner is up; the round begins when the delay elapses
    Starting,
    /// Active gameplay - charging, throwing and scoring are live
    Playing,
    /// Round ended; everything is frozen until the reset command
    Over,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Single RNG behind every stochastic draw
    pub(super) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Grams of cheese on the pasta this round, 2-decimal precision
    pub score: f32,
    /// Monotonic sim clock in seconds, advanced by the frame callback
    pub(super) clock: f64,
    /// Remaining Starting-phase delay before the round begins
    pub(super) start_delay: f32,
    /// Round countdown
    pub(super) timer: RoundTimer,
    /// Open charge session, if the control is held
    pub(super) charge: Option<ChargeSession>,
    /// Duration of the most recent completed charge, seconds
    pub(super) last_charge: f32,
    /// In-flight cheese batch
    pub(super) field: ParticleField,
}

impl GameState {
    /// Create a fresh game at the title screen with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            score: 0.0,
            clock: 0.0,
            start_delay: 0.0,
            timer: RoundTimer::default(),
            charge: None,
            last_charge: 0.0,
            field: ParticleField::default(),
        }
    }

    /// Seconds left in the round (the full round length outside Playing
    /// until a round has run)
    pub fn seconds_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    /// Whether the control is currently held
    pub fn is_charging(&self) -> bool {
        self.charge.is_some()
    }

    /// Whether a cheese batch is currently in flight
    pub fn is_throwing(&self) -> bool {
        self.field.is_throwing()
    }

    /// The in-flight (or frozen, after Over) particle batch, for rendering
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    /// Hold duration of the most recent throw, seconds
    pub fn last_charge(&self) -> f32 {
        self.last_charge
    }

    /// Sim-clock seconds since creation
    pub fn clock(&self) -> f64 {
        self.clock
    }
}
