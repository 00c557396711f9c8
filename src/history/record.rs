//! Persistent game results.
//!
//! The engine never persists anything itself: on `GameOver` the caller
//! builds a `GameRecord` from the final player snapshots and hands it to
//! a `HistoryStore`. An aborted session produces no record.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::Player;

/// One finished game, as stored in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique record identifier.
    pub id: Uuid,

    /// Name of the topic that was played.
    pub topic_name: String,

    /// Final player snapshots, seat 0 first.
    pub players: [Player; 2],

    /// When the game finished, UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl GameRecord {
    /// Build a record for a game that just finished, stamping a fresh id
    /// and the current UTC time.
    pub fn new(topic_name: impl Into<String>, players: [Player; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic_name: topic_name.into(),
            players,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// The winning player, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let [a, b] = &self.players;
        if a.score > b.score {
            Some(a)
        } else if b.score > a.score {
            Some(b)
        } else {
            None
        }
    }
}
