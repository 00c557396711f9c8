//! The turn-based timed game engine.
//!
//! Owns the session state machine: per-player countdown clocks, turn
//! arbitration, scoring, pass penalties, reveal sequencing, and
//! game-over detection. Everything else (storage, image acquisition,
//! rendering) is a collaborator behind the seams in `showcase` and
//! `history`.

pub mod config;
pub mod event;
pub mod input;
pub mod session;
pub mod snapshot;
pub mod turn;

pub use config::{SessionConfig, PASS_PENALTY_SECONDS, REVEAL_HINT_MILLIS};
pub use event::{AnswerRecord, EventBatch, RevealKind, RevealState, SessionEvent};
pub use input::Input;
pub use session::{GameSession, Outcome, SetupError};
pub use snapshot::{ClockView, ImageView, PlayerView, SessionSnapshot};
pub use turn::next_active;
