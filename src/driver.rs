//! Game loop - owns the simulation and its clock subscriptions
//!
//! The embedder (a renderer, a test, the demo binary) calls [`GameLoop::frame`]
//! once per displayed frame with the elapsed time. The loop delivers due
//! round-timer ticks first, then the frame advance, then reconciles the
//! interval subscription with the phase: ticking runs only while a round
//! does, and teardown cancels everything before state is dropped so no
//! callback can fire into it.

use crate::clock::Interval;
use crate::consts::TICK_INTERVAL;
use crate::sim::{GamePhase, GameState};

/// Top-level game driver
pub struct GameLoop {
    state: GameState,
    /// Round-timer subscription, held so every phase exit can cancel it
    ticks: Interval,
    last_phase: GamePhase,
    shut_down: bool,
}

impl GameLoop {
    /// New game with the default 1-second round tick
    pub fn new(seed: u64) -> Self {
        Self::with_tick_interval(seed, TICK_INTERVAL)
    }

    /// New game with a custom round-tick interval (test speedups, slow-mo)
    pub fn with_tick_interval(seed: u64, period: f32) -> Self {
        let mut ticks = Interval::new(period);
        // Nothing to count down until a round starts
        ticks.cancel();
        Self {
            state: GameState::new(seed),
            ticks,
            last_phase: GamePhase::Title,
            shut_down: false,
        }
    }

    /// One rendered frame of elapsed seconds
    pub fn frame(&mut self, dt: f32) {
        if self.shut_down {
            return;
        }
        for _ in 0..self.ticks.advance(dt) {
            self.state.timer_tick();
        }
        self.state.advance_frame(dt);
        self.sync_subscriptions();
    }

    pub fn request_start(&mut self) {
        if self.shut_down {
            return;
        }
        self.state.request_start();
        self.sync_subscriptions();
    }

    pub fn request_reset(&mut self) {
        if self.shut_down {
            return;
        }
        self.state.request_reset();
        self.sync_subscriptions();
    }

    pub fn charge_start(&mut self) {
        if !self.shut_down {
            self.state.charge_start();
        }
    }

    pub fn charge_end(&mut self) {
        if !self.shut_down {
            self.state.charge_end();
        }
    }

    /// Read access for the presentation layer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cancel both callback paths for good. Further frames and commands
    /// are no-ops. Called from `Drop`; safe to call twice.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.ticks.cancel();
        self.shut_down = true;
        log::info!("game loop shut down (final score {:.2}g)", self.state.score);
    }

    /// Keep the tick subscription in step with the phase
    fn sync_subscriptions(&mut self) {
        let phase = self.state.phase;
        if phase == self.last_phase {
            return;
        }
        log::info!("phase {:?} -> {:?}", self.last_phase, phase);
        match phase {
            GamePhase::Playing => self.ticks.restart(),
            _ => self.ticks.cancel(),
        }
        self.last_phase = phase;
    }

    #[cfg(test)]
    fn ticks_active(&self) -> bool {
        self.ticks.is_active()
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}
