//! Per-player countdown clock.
//!
//! A clock counts down from the session's per-player time budget, one
//! second per tick while running. Reaching zero expires the clock: it
//! stops permanently and reports the expiry exactly once, whether zero
//! was reached by ticking or by a penalty deduction.
//!
//! The clock itself knows nothing about turns. Mutual exclusion of the
//! two running clocks is enforced by the session, which pauses one clock
//! before starting the other.

use serde::{Deserialize, Serialize};

/// What happened when a clock was advanced or penalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockStep {
    /// Nothing changed: the clock was not running (tick) or already
    /// expired (deduct).
    Idle,

    /// Time was removed and the clock is still live.
    Counted,

    /// The clock just reached zero. Reported at most once per clock.
    Expired,
}

/// A single player's countdown clock.
///
/// ## Example
///
/// ```
/// use showcase_duel::core::{Clock, ClockStep};
///
/// let mut clock = Clock::new(2);
/// assert!(clock.start());
///
/// assert_eq!(clock.tick(), ClockStep::Counted);
/// assert_eq!(clock.tick(), ClockStep::Expired);
///
/// // Expiry is terminal: the clock can never run again.
/// assert!(!clock.start());
/// assert_eq!(clock.tick(), ClockStep::Idle);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    remaining: u32,
    running: bool,
    expired: bool,
}

impl Clock {
    /// Create a paused clock holding the full time budget.
    #[must_use]
    pub fn new(budget_seconds: u32) -> Self {
        Self {
            remaining: budget_seconds,
            running: false,
            expired: false,
        }
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Is the clock currently counting down?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Has the clock reached zero? Terminal once true.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Start counting down.
    ///
    /// Refused (returns false) once the clock has expired or holds no
    /// time.
    pub fn start(&mut self) -> bool {
        if self.expired || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting down without touching the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Remove one second of time.
    ///
    /// A tick while the clock is paused or expired is `Idle` — the tick
    /// source may keep firing after a pause without effect.
    pub fn tick(&mut self) -> ClockStep {
        if !self.running {
            return ClockStep::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.expire();
            ClockStep::Expired
        } else {
            ClockStep::Counted
        }
    }

    /// Remove `seconds` immediately, independent of ticking.
    ///
    /// The remaining time clamps at zero; crossing zero expires the clock
    /// with the same terminal effect as a natural countdown. Deducting
    /// from an already-expired clock is `Idle`.
    pub fn deduct(&mut self, seconds: u32) -> ClockStep {
        if self.expired {
            return ClockStep::Idle;
        }
        self.remaining = self.remaining.saturating_sub(seconds);
        if self.remaining == 0 {
            self.expire();
            ClockStep::Expired
        } else {
            ClockStep::Counted
        }
    }

    fn expire(&mut self) {
        self.remaining = 0;
        self.running = false;
        self.expired = true;
    }
}

impl std::fmt::Display for Clock {
    /// Renders the remaining time as `MM:SS`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
