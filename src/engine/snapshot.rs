//! Read-only display snapshots.
//!
//! The presentation layer renders from snapshots; it never reaches into
//! the session. A snapshot deliberately omits the current image's answer
//! word — the only path to the word is a reveal.

use serde::{Deserialize, Serialize};

use crate::core::{ImageId, PlayerId};
use crate::engine::event::RevealState;
use crate::engine::session::GameSession;

/// Display view of one clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockView {
    /// Seconds left.
    pub remaining: u32,
    /// Counting down right now?
    pub running: bool,
    /// Permanently out of time?
    pub expired: bool,
}

/// Display view of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Display name.
    pub name: String,
    /// Correct answers so far.
    pub score: u32,
}

/// Display view of the current image: reference only, no answer word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageView {
    /// Image identifier.
    pub id: ImageId,
    /// Opaque display reference.
    pub image_ref: String,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Players, seat 0 first.
    pub players: [PlayerView; 2],

    /// Clocks, seat 0 first.
    pub clocks: [ClockView; 2],

    /// The seat currently (or last) holding the turn.
    pub active: PlayerId,

    /// The image being guessed; `None` once the session is over.
    pub image: Option<ImageView>,

    /// The revealed word, while a reveal window is open.
    pub reveal: Option<RevealState>,

    /// Is the stop-confirmation prompt open?
    pub stop_pending: bool,

    /// Has the session terminated?
    pub over: bool,
}

impl GameSession {
    /// Capture a display snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let players = self
            .players()
            .to_array()
            .map(|p| PlayerView {
                name: p.name,
                score: p.score,
            });
        let clocks = self.clocks().to_array().map(|c| ClockView {
            remaining: c.remaining(),
            running: c.is_running(),
            expired: c.is_expired(),
        });

        let image = if self.is_over() {
            None
        } else {
            let current = self.current_image();
            Some(ImageView {
                id: current.id.clone(),
                image_ref: current.image_ref.clone(),
            })
        };

        SessionSnapshot {
            players,
            clocks,
            active: self.active_player(),
            image,
            reveal: self.reveal().cloned(),
            stop_pending: self.stop_pending(),
            over: self.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ImageItem;
    use crate::engine::{RevealKind, SessionConfig};

    fn session() -> GameSession {
        GameSession::begin(
            SessionConfig::new(120),
            "Ana",
            "Ben",
            vec![
                ImageItem::new("a", "apple", "ref://a"),
                ImageItem::new("b", "banana", "ref://b"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_reflects_initial_state() {
        let snapshot = session().snapshot();

        assert_eq!(snapshot.players[0].name, "Ana");
        assert_eq!(snapshot.players[1].name, "Ben");
        assert_eq!(snapshot.clocks[0].remaining, 120);
        assert!(snapshot.clocks[0].running);
        assert!(!snapshot.clocks[1].running);
        assert_eq!(snapshot.active, PlayerId::new(0));
        assert!(snapshot.image.is_some());
        assert!(snapshot.reveal.is_none());
        assert!(!snapshot.stop_pending);
        assert!(!snapshot.over);
    }

    #[test]
    fn test_snapshot_never_leaks_answer_word() {
        let session = session();
        let snapshot = session.snapshot();

        let image = snapshot.image.unwrap();
        assert_eq!(image.id, session.current_image().id);
        assert_eq!(image.image_ref, session.current_image().image_ref);
        // ImageView carries no `name` field; the word only appears once
        // revealed.
        let json = serde_json::to_string(&image).unwrap();
        assert!(!json.contains(&session.current_image().name));
    }

    #[test]
    fn test_snapshot_shows_reveal() {
        let mut session = session();
        session.submit_correct();

        let snapshot = session.snapshot();
        let reveal = snapshot.reveal.unwrap();
        assert_eq!(reveal.kind, RevealKind::Correct);
        assert_eq!(reveal.word, session.current_image().name);
    }

    #[test]
    fn test_snapshot_after_game_over() {
        let mut session = GameSession::begin(
            SessionConfig::new(120),
            "Ana",
            "Ben",
            vec![ImageItem::new("a", "apple", "ref://a")],
        )
        .unwrap();
        session.submit_correct();
        session.complete_reveal();

        let snapshot = session.snapshot();
        assert!(snapshot.over);
        assert!(snapshot.image.is_none());
        assert_eq!(snapshot.players[0].score, 1);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = session().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, restored);
    }
}
