//! Queueable engine inputs.
//!
//! The engine assumes a single-writer model: ticks and user actions are
//! funnelled through one queue and applied one at a time. `Input` is the
//! queue element; `GameSession::apply` is the single entry point.

use serde::{Deserialize, Serialize};

use crate::engine::event::EventBatch;
use crate::engine::session::GameSession;

/// One discrete engine input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// One second of wall-clock time elapsed.
    Tick,
    /// The active player named the word.
    SubmitCorrect,
    /// The active player passed.
    SubmitPass,
    /// The presentation layer finished showing the revealed word.
    CompleteReveal,
    /// Open the stop-confirmation prompt.
    RequestStop,
    /// Close the prompt and resume play.
    CancelStop,
    /// Confirm the stop and discard the session.
    ConfirmStop,
}

impl GameSession {
    /// Apply a single input and return the resulting events.
    ///
    /// Equivalent to calling the corresponding named operation.
    pub fn apply(&mut self, input: Input) -> EventBatch {
        match input {
            Input::Tick => self.tick(),
            Input::SubmitCorrect => self.submit_correct(),
            Input::SubmitPass => self.submit_pass(),
            Input::CompleteReveal => self.complete_reveal(),
            Input::RequestStop => self.request_stop(),
            Input::CancelStop => self.cancel_stop(),
            Input::ConfirmStop => self.confirm_stop(),
        }
    }
}
