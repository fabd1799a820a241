//! Round countdown timer
//!
//! Counts whole seconds down from [`ROUND_SECONDS`]. Ticks are delivered by
//! the driver's interval subscription; the timer itself only holds the
//! remaining count and the ticking flag, so a stray tick after the round has
//! ended (or after `stop`) is a no-op and expiry fires exactly once.

use serde::{Deserialize, Serialize};

use crate::consts::ROUND_SECONDS;

/// Seconds-remaining countdown for one round
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoundTimer {
    remaining: u32,
    ticking: bool,
}

impl RoundTimer {
    /// (Re)set to the full round length and begin ticking
    pub fn start(&mut self) {
        self.remaining = ROUND_SECONDS;
        self.ticking = true;
    }

    /// Halt ticking. Idempotent - safe on an already-stopped timer.
    pub fn stop(&mut self) {
        self.ticking = false;
    }

    /// Consume one tick. Returns `true` on the tick that reaches zero;
    /// the timer stops itself on that tick so expiry cannot fire twice.
    pub fn tick(&mut self) -> bool {
        if !self.ticking {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.ticking = false;
            return true;
        }
        false
    }

    /// Seconds left in the round
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_zero() {
        let mut timer = RoundTimer::default();
        timer.start();
        assert_eq!(timer.remaining(), ROUND_SECONDS);

        for expected in (1..ROUND_SECONDS).rev() {
            assert!(!timer.tick());
            assert_eq!(timer.remaining(), expected);
        }
        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_expiry_fires_once() {
        let mut timer = RoundTimer::default();
        timer.start();
        let mut expiries = 0;
        // Deliver far more ticks than the round holds
        for _ in 0..ROUND_SECONDS * 3 {
            if timer.tick() {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_ticking());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = RoundTimer::default();
        timer.start();
        timer.stop();
        timer.stop();
        assert!(!timer.is_ticking());
        // Ticks after stop leave the count alone
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), ROUND_SECONDS);
    }

    #[test]
    fn test_restart_resets_count() {
        let mut timer = RoundTimer::default();
        timer.start();
        timer.tick();
        timer.tick();
        timer.start();
        assert_eq!(timer.remaining(), ROUND_SECONDS);
        assert!(timer.is_ticking());
    }
}
