//! Commands and callback-driven advancement
//!
//! Two external drivers mutate the simulation: a repeating interval delivers
//! `timer_tick` once per second while a round runs, and the frame source
//! delivers `advance_frame` with the elapsed time since the previous frame.
//! The four player commands arrive between callbacks. Nothing here blocks;
//! charging is just state held between the start and end commands.
//!
//! Legal phase edges, in full:
//! Title --start--> Starting --delay--> Playing --timer zero--> Over
//! --reset--> Title. Every other command/phase pairing is a silent no-op.

use crate::consts::START_DELAY;
use crate::round2;

use super::charge::{ChargeSession, clamped_power};
use super::state::{GamePhase, GameState};

impl GameState {
    /// Start command: Title -> Starting. Scoring and the timer stay
    /// inactive until the start delay elapses.
    pub fn request_start(&mut self) {
        if self.phase != GamePhase::Title {
            return;
        }
        self.start_delay = START_DELAY;
        self.phase = GamePhase::Starting;
    }

    /// Reset command: Over -> Title, clearing residual score and particles
    /// ahead of the next Starting cycle.
    pub fn request_reset(&mut self) {
        if self.phase != GamePhase::Over {
            return;
        }
        self.score = 0.0;
        self.charge = None;
        self.field.clear();
        self.phase = GamePhase::Title;
    }

    /// Charge-start command. Ignored unless a round is running with no
    /// throw in flight; repeated presses never reset an open session.
    pub fn charge_start(&mut self) {
        if self.phase != GamePhase::Playing || self.field.is_throwing() || self.charge.is_some() {
            return;
        }
        self.charge = Some(ChargeSession::new(self.clock));
    }

    /// Charge-release command. Converts the open session into a throw;
    /// ignored when no session is open (spurious release events, release
    /// while a throw is animating, release after the round ended).
    pub fn charge_end(&mut self) {
        let Some(session) = self.charge.take() else {
            return;
        };
        let duration = session.elapsed(self.clock);
        self.last_charge = duration;
        self.field.begin_throw(clamped_power(duration), &mut self.rng);
    }

    /// One round-timer tick. Only a running round counts down; the tick
    /// that reaches zero ends the round.
    pub fn timer_tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.timer.tick() {
            self.end_round();
        }
    }

    /// One frame of elapsed time from the display driver.
    ///
    /// Every particle position this frame derives from the same elapsed
    /// snapshot, and every impact is applied to the score before this
    /// returns - no lost updates. Title and Over advance nothing but the
    /// clock.
    pub fn advance_frame(&mut self, dt: f32) {
        self.clock += dt as f64;
        match self.phase {
            GamePhase::Starting => {
                self.start_delay -= dt;
                if self.start_delay <= 0.0 {
                    self.begin_round();
                }
            }
            GamePhase::Playing => {
                for grams in self.field.advance(dt, &mut self.rng) {
                    self.score = round2(self.score + grams);
                }
            }
            GamePhase::Title | GamePhase::Over => {}
        }
    }

    /// Starting -> Playing: fresh score and timer, any batch left over
    /// from a previous round dropped before the first frame can touch it.
    fn begin_round(&mut self) {
        self.score = 0.0;
        self.charge = None;
        self.last_charge = 0.0;
        self.field.clear();
        self.timer.start();
        self.phase = GamePhase::Playing;
    }

    /// Playing -> Over: stop the countdown and freeze everything else
    /// where it stands. An open charge can't complete across the edge.
    fn end_round(&mut self) {
        self.timer.stop();
        self.charge = None;
        self.phase = GamePhase::Over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const DT: f32 = 1.0 / 60.0;

    /// Step frames for the given seconds, interleaving timer ticks the way
    /// the driver would (one per whole second of frame time)
    fn run(state: &mut GameState, seconds: f32) {
        let frames = (seconds / DT).round() as u32;
        let mut acc = 0.0f32;
        for _ in 0..frames {
            acc += DT;
            if acc >= TICK_INTERVAL {
                acc -= TICK_INTERVAL;
                state.timer_tick();
            }
            state.advance_frame(DT);
        }
    }

    /// Drive a fresh game into Playing
    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.request_start();
        run(&mut state, START_DELAY + 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_lifecycle_follows_the_only_legal_path() {
        let mut state = GameState::new(5);
        assert_eq!(state.phase, GamePhase::Title);

        state.request_start();
        assert_eq!(state.phase, GamePhase::Starting);

        run(&mut state, START_DELAY + 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.seconds_remaining(), ROUND_SECONDS);

        run(&mut state, ROUND_SECONDS as f32 + 0.5);
        assert_eq!(state.phase, GamePhase::Over);

        state.request_reset();
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score, 0.0);
        assert!(state.particles().is_empty());
    }

    #[test]
    fn test_start_is_noop_outside_title() {
        let mut state = GameState::new(5);
        state.request_start();
        state.request_start();
        assert_eq!(state.phase, GamePhase::Starting);

        let mut state = playing(5);
        let before = state.seconds_remaining();
        state.request_start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.seconds_remaining(), before);

        run(&mut state, ROUND_SECONDS as f32 + 0.5);
        assert_eq!(state.phase, GamePhase::Over);
        state.request_start();
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_reset_is_noop_outside_over() {
        let mut state = GameState::new(5);
        state.request_reset();
        assert_eq!(state.phase, GamePhase::Title);

        state.request_start();
        state.request_reset();
        assert_eq!(state.phase, GamePhase::Starting);
    }

    #[test]
    fn test_timer_counts_one_per_tick_and_stops_at_zero() {
        let mut state = playing(5);
        for expected in (1..ROUND_SECONDS).rev() {
            state.timer_tick();
            assert_eq!(state.seconds_remaining(), expected);
            assert_eq!(state.phase, GamePhase::Playing);
        }
        state.timer_tick();
        assert_eq!(state.seconds_remaining(), 0);
        assert_eq!(state.phase, GamePhase::Over);

        // Stray ticks after the round change nothing
        state.timer_tick();
        assert_eq!(state.seconds_remaining(), 0);
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut state = playing(5);
        state.charge_end();
        assert!(!state.is_throwing());
        assert!(state.particles().is_empty());
        assert_eq!(state.score, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_charge_ignored_outside_playing() {
        let mut state = GameState::new(5);
        state.charge_start();
        assert!(!state.is_charging());

        state.request_start();
        state.charge_start();
        assert!(!state.is_charging());
    }

    #[test]
    fn test_repeated_press_keeps_first_timestamp() {
        let mut state = playing(5);
        state.charge_start();
        let first = state.charge.unwrap().started_at;
        run(&mut state, 0.5);
        state.charge_start();
        assert_eq!(state.charge.unwrap().started_at, first);
    }

    #[test]
    fn test_charge_ignored_while_throwing() {
        let mut state = playing(5);
        state.charge_start();
        run(&mut state, 0.5);
        state.charge_end();
        assert!(state.is_throwing());

        state.charge_start();
        assert!(!state.is_charging());
        // And a second release while animating does not restart the flight
        state.charge_end();
        assert!(state.is_throwing());
    }

    #[test]
    fn test_full_charge_scores_with_capped_power() {
        let mut state = playing(42);
        state.charge_start();
        run(&mut state, 2.5);
        state.charge_end();
        assert!((state.last_charge() - 2.5).abs() < 0.05);
        assert_eq!(super::clamped_power(state.last_charge()), 1.0);
        assert!(state.is_throwing());

        run(&mut state, FLIGHT_DURATION + 0.2);
        assert!(!state.is_throwing());
        assert!(state.score > 0.0, "full-power throw should land cheese");
        assert!(state.score <= PARTICLE_BATCH as f32 * GRAMS_MAX);
    }

    #[test]
    fn test_instant_release_scores_nothing() {
        let mut state = playing(42);
        state.charge_start();
        state.charge_end();
        assert_eq!(state.last_charge(), 0.0);
        assert!(state.is_throwing());

        run(&mut state, FLIGHT_DURATION + 0.2);
        assert!(!state.is_throwing());
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_score_is_monotonic_during_round() {
        let mut state = playing(7);
        state.charge_start();
        run(&mut state, 2.0);
        state.charge_end();

        let mut last = state.score;
        for _ in 0..((FLIGHT_DURATION / DT) as u32 + 10) {
            state.advance_frame(DT);
            assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn test_over_freezes_score_and_particles() {
        let mut state = playing(7);
        state.charge_start();
        run(&mut state, 2.0);
        state.charge_end();
        // End the round while the batch is mid-flight
        run(&mut state, 0.3);
        for _ in 0..ROUND_SECONDS {
            state.timer_tick();
        }
        assert_eq!(state.phase, GamePhase::Over);
        assert!(!state.is_charging());

        let score = state.score;
        let particles: Vec<_> = state.particles().to_vec();
        run(&mut state, 2.0);
        state.charge_start();
        state.charge_end();
        assert_eq!(state.score, score);
        assert_eq!(state.particles(), &particles[..]);
    }

    #[test]
    fn test_new_round_drops_leftover_state() {
        let mut state = playing(7);
        state.charge_start();
        run(&mut state, 2.0);
        state.charge_end();
        run(&mut state, 0.3);
        for _ in 0..ROUND_SECONDS {
            state.timer_tick();
        }
        assert!(state.score > 0.0 || !state.particles().is_empty());

        state.request_reset();
        state.request_start();
        run(&mut state, START_DELAY + 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert!(state.particles().is_empty());
        assert!(!state.is_throwing());
        assert_eq!(state.seconds_remaining(), ROUND_SECONDS);
    }

    #[test]
    fn test_determinism_same_seed_same_story() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);
        for state in [&mut a, &mut b] {
            state.request_start();
            run(state, START_DELAY + 0.1);
            state.charge_start();
            run(state, 1.3);
            state.charge_end();
            run(state, FLIGHT_DURATION + 0.2);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.particles(), b.particles());
    }
}
