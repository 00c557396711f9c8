//! # showcase-duel
//!
//! A turn-based vocabulary showcase game engine: two players take turns
//! naming pictured words under personal countdown clocks.
//!
//! ## Design Principles
//!
//! 1. **Closed state machine**: all mutation flows through the defined
//!    session operations; invalid input is silently ignored, never
//!    escalated.
//!
//! 2. **Single-writer**: the caller funnels ticks and user actions
//!    through one queue (`Input` / `GameSession::apply`). No locking —
//!    mutual exclusion of the two clocks is engine logic.
//!
//! 3. **Caller-owned time**: the engine never sleeps or schedules. A
//!    tick input means "one second elapsed"; the reveal window closes on
//!    an explicit input from the presentation layer.
//!
//! ## Architecture
//!
//! - **Clocks**: one countdown per player; at most one runs at any
//!   instant, expiry is terminal and observed exactly once.
//!
//! - **Turn arbitration**: a pure function of the current seat and the
//!   expiry flags; expired players are skipped until both are out.
//!
//! - **Game-over watcher**: "both clocks expired" is checked on every
//!   expiry and is the single authoritative source of timer-based
//!   termination. Image exhaustion is the other, disjoint terminal
//!   condition.
//!
//! ## Modules
//!
//! - `core`: players, clocks, images, deterministic shuffle RNG
//! - `engine`: the session state machine, events, inputs, snapshots
//! - `showcase`: topics and their in-memory registry
//! - `history`: finished-game records and the storage seam

pub mod core;
pub mod engine;
pub mod history;
pub mod showcase;

// Re-export commonly used types
pub use crate::core::{
    Clock, ClockStep, GameRng, GameRngState, ImageId, ImageItem, Player, PlayerId, PlayerPair,
};

pub use crate::engine::{
    next_active, AnswerRecord, ClockView, EventBatch, GameSession, ImageView, Input, Outcome,
    PlayerView, RevealKind, RevealState, SessionConfig, SessionEvent, SessionSnapshot, SetupError,
    PASS_PENALTY_SECONDS, REVEAL_HINT_MILLIS,
};

pub use crate::history::{GameRecord, HistoryError, HistoryStore, MemoryHistoryStore};

pub use crate::showcase::{ShowcaseRegistry, ShowcaseTopic};
