//! Session events and answer history records.
//!
//! Every engine input returns a batch of events describing what changed.
//! A caller driving a display can react to events instead of diffing
//! snapshots. `GameOver` and `Aborted` are each emitted at most once per
//! session.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ImageId, Player, PlayerId};

/// How the current image's word came to be revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealKind {
    /// The active player named the word.
    Correct,
    /// The active player passed.
    Pass,
}

/// Transient reveal sub-state: the answer word shown between a resolved
/// guess and the advance to the next image.
///
/// While a reveal is pending the engine refuses further answers for the
/// same image; the presentation layer ends the window with
/// `Input::CompleteReveal`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    /// The answer word being shown.
    pub word: String,

    /// Why it was revealed.
    pub kind: RevealKind,
}

/// Something observable that happened inside the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A player's clock started; they are now the answering player.
    TurnStarted {
        /// The newly active player.
        player: PlayerId,
    },

    /// A correct answer raised a player's score.
    ScoreAwarded {
        /// The scoring player.
        player: PlayerId,
        /// Their new total.
        score: u32,
    },

    /// A pass penalty was deducted from a player's clock.
    PenaltyApplied {
        /// The penalized player.
        player: PlayerId,
        /// Seconds left on their clock after the deduction.
        remaining: u32,
    },

    /// A clock reached zero. Fired exactly once per player per session.
    ClockExpired {
        /// The player whose clock expired.
        player: PlayerId,
    },

    /// The current image's word is being shown.
    RevealStarted {
        /// The answer word.
        word: String,
        /// Correct answer or pass.
        kind: RevealKind,
    },

    /// The session moved on to the next image.
    ImageAdvanced {
        /// New index into the shuffled sequence.
        index: usize,
    },

    /// The session ended normally; the caller should persist a record.
    GameOver {
        /// Final player snapshots, seat 0 first.
        players: [Player; 2],
    },

    /// The session was discarded. No result to persist.
    Aborted,
}

/// Batch of events produced by a single input.
///
/// Most inputs yield zero to two events; SmallVec keeps those off the
/// heap.
pub type EventBatch = SmallVec<[SessionEvent; 2]>;

/// A resolved guess, kept in the session's answer history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The player who answered or passed.
    pub player: PlayerId,

    /// The image the guess was about.
    pub image: ImageId,

    /// Correct answer or pass.
    pub kind: RevealKind,

    /// Turn number when the guess was resolved (starts at 1).
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = SessionEvent::ScoreAwarded {
            player: PlayerId::new(1),
            score: 3,
        };

        let json = serde_json::to_string(&event).unwrap();
        let restored: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, restored);
    }

    #[test]
    fn test_answer_record_serialization() {
        let record = AnswerRecord {
            player: PlayerId::new(0),
            image: ImageId::new("img-1"),
            kind: RevealKind::Pass,
            turn: 4,
        };

        let json = serde_json::to_string(&record).unwrap();
        let restored: AnswerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
