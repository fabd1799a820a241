//! Cheese Toss - a hold-and-release arcade minigame
//!
//! Hold the control to charge a throw, release it, and a shower of grated
//! cheese flies toward the pasta. Cheese that lands on the pasta counts in
//! grams; the round lasts ten seconds.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, charge, particles, scoring)
//! - `clock`: Interval adapter bridging frame time to round-timer ticks
//! - `driver`: Game loop owning the simulation and its subscriptions

pub mod clock;
pub mod driver;
pub mod sim;

pub use driver::GameLoop;
pub use sim::{GamePhase, GameState, Particle};

/// Game configuration constants
pub mod consts {
    /// Seconds the start banner is shown before a round begins
    pub const START_DELAY: f32 = 1.0;
    /// Round length in seconds
    pub const ROUND_SECONDS: u32 = 10;
    /// Default round-timer tick interval (seconds)
    pub const TICK_INTERVAL: f32 = 1.0;

    /// Charge duration (seconds) at which throw power caps out
    pub const MAX_CHARGE: f32 = 2.0;

    /// Particles per throw
    pub const PARTICLE_BATCH: usize = 30;
    /// Seconds a particle batch stays in flight
    pub const FLIGHT_DURATION: f32 = 1.5;
    /// Flight progress past which airborne particles are despawned
    pub const MISS_CUTOFF: f32 = 0.95;

    /// Thrower position, percent of the field width
    pub const THROW_ORIGIN_X: f32 = 20.0;
    /// Pasta position - a particle at or past this x has landed on it
    pub const PASTA_X: f32 = 80.0;
    /// Vertical baseline of both thrower and pasta, percent of field height
    pub const BASELINE_Y: f32 = 40.0;
    /// Arc apex height at full power, percent of field height
    pub const ARC_HEIGHT: f32 = 40.0;

    /// Spawn jitter around the thrower, percent (both axes, +/-)
    pub const SPAWN_JITTER: f32 = 5.0;
    /// Particle size range in pixels
    pub const SIZE_MIN: f32 = 2.0;
    pub const SIZE_MAX: f32 = 8.0;
    /// Per-particle per-frame arc randomness band (applied to both axes)
    pub const ARC_FACTOR_MIN: f32 = 0.8;
    pub const ARC_FACTOR_MAX: f32 = 1.2;

    /// Grams of cheese one landed particle is worth
    pub const GRAMS_MIN: f32 = 0.1;
    pub const GRAMS_MAX: f32 = 0.3;
    /// Jitter of the landing spot on the pasta, percent (+/-)
    pub const LAND_JITTER_X: f32 = 5.0;
    pub const LAND_JITTER_Y: f32 = 10.0;
}

/// Round to 2 decimal places (gram display precision)
#[inline]
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
