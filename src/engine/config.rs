//! Session configuration.
//!
//! Callers configure a session at setup time; the engine never reads
//! configuration from anywhere else.

use serde::{Deserialize, Serialize};

/// Seconds removed from the active clock when a player passes.
pub const PASS_PENALTY_SECONDS: u32 = 5;

/// How long the presentation layer is expected to show a revealed word
/// before sending `Input::CompleteReveal`, in milliseconds.
///
/// Purely a hint: the engine treats the reveal window as an explicit
/// sub-state and waits for the completion input, however long it takes.
pub const REVEAL_HINT_MILLIS: u64 = 1500;

/// Configuration for one game session.
///
/// ## Example
///
/// ```
/// use showcase_duel::engine::SessionConfig;
///
/// let config = SessionConfig::new(120).with_shuffle_seed(42);
/// assert_eq!(config.seconds_per_player, 120);
/// assert_eq!(config.pass_penalty, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Time budget per player, in seconds. Must be positive.
    pub seconds_per_player: u32,

    /// Pass penalty in seconds.
    pub pass_penalty: u32,

    /// Reveal display duration hint for the presentation layer.
    pub reveal_hint_millis: u64,

    /// Seed for the one-time image shuffle.
    pub shuffle_seed: u64,
}

impl SessionConfig {
    /// Create a configuration with the default penalty and reveal hint.
    #[must_use]
    pub fn new(seconds_per_player: u32) -> Self {
        Self {
            seconds_per_player,
            pass_penalty: PASS_PENALTY_SECONDS,
            reveal_hint_millis: REVEAL_HINT_MILLIS,
            shuffle_seed: 0,
        }
    }

    /// Override the pass penalty.
    #[must_use]
    pub fn with_pass_penalty(mut self, seconds: u32) -> Self {
        self.pass_penalty = seconds;
        self
    }

    /// Override the reveal display hint.
    #[must_use]
    pub fn with_reveal_hint_millis(mut self, millis: u64) -> Self {
        self.reveal_hint_millis = millis;
        self
    }

    /// Override the shuffle seed.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = seed;
        self
    }
}
