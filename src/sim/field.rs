//! Particle field - throw simulation and pasta impact detection
//!
//! A throw spawns a fixed batch of cheese particles near the thrower and
//! flies them toward the pasta over a fixed flight window. The arcs are a
//! stylized interpolation, not true ballistics: each airborne particle gets
//! a fresh randomness factor every frame, applied to both axes, which makes
//! the shower look organic while keeping the math trivial.
//!
//! Horizontal travel scales with throw power, so only sufficiently charged
//! throws can push particles past the pasta line before the miss cutoff.
//! That makes scoring stochastic per particle but monotonic in power.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One airborne (or landed) speck of cheese
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    /// Position in percent of the field, x right / y down
    pub pos: Vec2,
    /// Rendered size in pixels
    pub size: f32,
    /// Landed particles are done moving: either stuck to the pasta or
    /// despawned past the miss cutoff
    pub landed: bool,
}

/// Owns the in-flight batch for one throw
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
    throwing: bool,
    power: f32,
    /// Seconds since the current throw began
    elapsed: f32,
}

impl ParticleField {
    /// Start a throw at the given power. No-op while a batch is still in
    /// flight - release events can arrive faster than one flight duration
    /// under rapid tapping, and that guard lives here, not in the caller.
    pub fn begin_throw(&mut self, power: f32, rng: &mut Pcg32) {
        if self.throwing {
            return;
        }
        self.particles.clear();
        self.particles.reserve(PARTICLE_BATCH);
        for id in 0..PARTICLE_BATCH as u32 {
            let offset_x = rng.random_range(-SPAWN_JITTER..SPAWN_JITTER);
            let offset_y = rng.random_range(-SPAWN_JITTER..SPAWN_JITTER);
            self.particles.push(Particle {
                id,
                pos: Vec2::new(THROW_ORIGIN_X + offset_x, BASELINE_Y + offset_y),
                size: rng.random_range(SIZE_MIN..SIZE_MAX),
                landed: false,
            });
        }
        self.power = power;
        self.elapsed = 0.0;
        self.throwing = true;
    }

    /// Advance the flight by one frame, returning the gram weight of every
    /// particle that hit the pasta this frame (empty on most frames).
    ///
    /// When the last particle lands the batch is cleared and the field
    /// re-enables the next charge/throw cycle.
    pub fn advance(&mut self, dt: f32, rng: &mut Pcg32) -> Vec<f32> {
        if !self.throwing {
            return Vec::new();
        }

        self.elapsed += dt;
        let progress = (self.elapsed / FLIGHT_DURATION).min(1.0);
        let mut impacts = Vec::new();

        for particle in &mut self.particles {
            if particle.landed {
                continue;
            }
            let factor = rng.random_range(ARC_FACTOR_MIN..ARC_FACTOR_MAX);
            let x = THROW_ORIGIN_X + (PASTA_X - THROW_ORIGIN_X) * self.power * progress * factor;
            let y = BASELINE_Y - (progress * std::f32::consts::PI).sin()
                * (self.power * ARC_HEIGHT)
                * factor;

            if x >= PASTA_X {
                // Stick to the pasta rather than the trajectory point
                particle.pos = Vec2::new(
                    PASTA_X + rng.random_range(-LAND_JITTER_X..LAND_JITTER_X),
                    BASELINE_Y + rng.random_range(-LAND_JITTER_Y..LAND_JITTER_Y),
                );
                particle.landed = true;
                impacts.push(rng.random_range(GRAMS_MIN..GRAMS_MAX));
            } else {
                particle.pos = Vec2::new(x, y);
                // Out of flight time without reaching the pasta: despawn
                if progress >= MISS_CUTOFF {
                    particle.landed = true;
                }
            }
        }

        if self.particles.iter().all(|p| p.landed) {
            self.particles.clear();
            self.throwing = false;
            self.power = 0.0;
            self.elapsed = 0.0;
        }

        impacts
    }

    /// Drop any in-flight batch and re-enable throwing (round start/reset)
    pub fn clear(&mut self) {
        self.particles.clear();
        self.throwing = false;
        self.power = 0.0;
        self.elapsed = 0.0;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_throwing(&self) -> bool {
        self.throwing
    }
}
