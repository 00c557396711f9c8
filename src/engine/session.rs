//! The game session: clocks, turns, scoring, reveal sequencing,
//! game-over detection.
//!
//! A session is a closed, caller-driven state machine. All mutation goes
//! through the operations below (or `GameSession::apply`); the caller is
//! expected to funnel ticks and user actions through a single queue, so
//! no two operations ever run concurrently.
//!
//! ## Invariants
//!
//! - At most one clock is running at any instant.
//! - The image index is always valid for the shuffled sequence.
//! - Scores never decrease.
//! - A clock's expiry is terminal and observed exactly once.
//! - Exactly one of `GameOver` / `Aborted` is emitted, at most once.
//!
//! Invalid input — answering out of turn, after expiry, mid-reveal, or
//! after termination — is silently ignored rather than escalated: the
//! state does not change and the returned event batch is empty.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Clock, ClockStep, GameRng, ImageItem, Player, PlayerId, PlayerPair};
use crate::engine::config::SessionConfig;
use crate::engine::event::{AnswerRecord, EventBatch, RevealKind, RevealState, SessionEvent};
use crate::engine::turn::next_active;

/// Why a session could not be created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A player name was empty (after trimming).
    #[error("{0} has an empty name")]
    EmptyPlayerName(PlayerId),

    /// The per-player time budget was zero.
    #[error("time budget must be positive")]
    ZeroTimeBudget,

    /// The topic supplied no images to guess.
    #[error("image set is empty")]
    NoImages,
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Normal termination: both clocks expired or the images ran out.
    /// The caller should build and persist a history record.
    Finished {
        /// Final player snapshots, seat 0 first.
        players: [Player; 2],
    },

    /// The session was stopped and discarded. Nothing to persist.
    Aborted,
}

impl Outcome {
    /// Final players for a finished session, `None` if aborted.
    #[must_use]
    pub fn final_players(&self) -> Option<&[Player; 2]> {
        match self {
            Outcome::Finished { players } => Some(players),
            Outcome::Aborted => None,
        }
    }

    /// Was the session discarded without a result?
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted)
    }
}

/// Which sub-state the session is in between inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum Phase {
    /// Waiting for the active player to answer or pass.
    Guessing,
    /// Showing the answer word; answers refused until `complete_reveal`.
    Reveal(RevealState),
    /// Terminal. Every further input is a no-op.
    Over,
}

/// Pending stop confirmation. Remembers which clock was paused so a
/// cancel resumes exactly that one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StopPrompt {
    resume: Option<PlayerId>,
}

/// One running game of guess-the-picture between two players.
///
/// ## Example
///
/// ```
/// use showcase_duel::core::ImageItem;
/// use showcase_duel::engine::{GameSession, SessionConfig};
///
/// let images = vec![
///     ImageItem::new("a", "apple", "ref://a"),
///     ImageItem::new("b", "banana", "ref://b"),
/// ];
/// let mut session =
///     GameSession::begin(SessionConfig::new(120), "Ana", "Ben", images).unwrap();
///
/// session.submit_correct();
/// session.complete_reveal();
///
/// let snapshot = session.snapshot();
/// assert_eq!(snapshot.players[0].score, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    config: SessionConfig,
    players: PlayerPair<Player>,
    clocks: PlayerPair<Clock>,
    /// Shuffled once at `begin`; order never changes afterwards.
    images: Vec<ImageItem>,
    current_image: usize,
    active: PlayerId,
    phase: Phase,
    stop: Option<StopPrompt>,
    turn_number: u32,
    history: Vector<AnswerRecord>,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Start a session.
    ///
    /// Validates the setup inputs, shuffles the image sequence once from
    /// the configured seed, and starts player 1's clock.
    pub fn begin(
        config: SessionConfig,
        player1: impl Into<String>,
        player2: impl Into<String>,
        images: Vec<ImageItem>,
    ) -> Result<Self, SetupError> {
        let names: [String; 2] = [player1.into(), player2.into()];
        for player in PlayerId::both() {
            if names[player.index()].trim().is_empty() {
                return Err(SetupError::EmptyPlayerName(player));
            }
        }
        if config.seconds_per_player == 0 {
            return Err(SetupError::ZeroTimeBudget);
        }
        if images.is_empty() {
            return Err(SetupError::NoImages);
        }

        let mut images = images;
        GameRng::new(config.shuffle_seed).shuffle(&mut images);

        let players = PlayerPair::new(|p| Player::new(names[p.index()].trim()));
        let mut clocks = PlayerPair::new(|_| Clock::new(config.seconds_per_player));

        let active = PlayerId::new(0);
        clocks[active].start();

        info!(
            "session started: {} vs {}, {} images, {}s each",
            players[active].name,
            players[active.other()].name,
            images.len(),
            config.seconds_per_player,
        );

        let session = Self {
            config,
            players,
            clocks,
            images,
            current_image: 0,
            active,
            phase: Phase::Guessing,
            stop: None,
            turn_number: 1,
            history: Vector::new(),
            outcome: None,
        };
        session.assert_single_runner();
        Ok(session)
    }

    // === Clock driving ===

    /// Deliver one second of wall-clock time.
    ///
    /// Decrements whichever clock is running (at most one); a tick with
    /// no running clock is a no-op. Irregular delivery is tolerated: a
    /// tick is purely "decrement by 1".
    pub fn tick(&mut self) -> EventBatch {
        let mut events = EventBatch::new();
        if self.is_over() {
            return events;
        }

        // At most one clock is running. Resolve it before ticking so a
        // turn switch triggered by the expiry can't consume the same
        // second from the next player's clock.
        let Some(running) = self.clocks.find(|c| c.is_running()) else {
            return events;
        };
        if self.clocks[running].tick() == ClockStep::Expired {
            self.on_expiry(running, &mut events);
        }

        self.assert_single_runner();
        events
    }

    // === Answer resolution ===

    /// The active player named the word: score them and reveal it.
    ///
    /// Ignored while the session is terminal, a reveal is showing, the
    /// stop prompt is open, or the active player's clock has expired.
    pub fn submit_correct(&mut self) -> EventBatch {
        let mut events = EventBatch::new();
        if !self.accepting_answers() {
            debug!("correct answer ignored: not accepting input");
            return events;
        }

        let player = self.active;
        self.players[player].score += 1;
        events.push(SessionEvent::ScoreAwarded {
            player,
            score: self.players[player].score,
        });

        self.resolve_guess(RevealKind::Correct, &mut events);
        events
    }

    /// The active player passed: penalize their clock and reveal the word.
    ///
    /// Ignored under the same conditions as [`submit_correct`].
    ///
    /// [`submit_correct`]: GameSession::submit_correct
    pub fn submit_pass(&mut self) -> EventBatch {
        let mut events = EventBatch::new();
        if !self.accepting_answers() {
            debug!("pass ignored: not accepting input");
            return events;
        }

        let player = self.active;
        self.resolve_guess(RevealKind::Pass, &mut events);

        let step = self.clocks[player].deduct(self.config.pass_penalty);
        events.push(SessionEvent::PenaltyApplied {
            player,
            remaining: self.clocks[player].remaining(),
        });
        if step == ClockStep::Expired {
            self.on_expiry(player, &mut events);
        }

        self.assert_single_runner();
        events
    }

    /// The presentation layer finished showing the revealed word.
    ///
    /// Ends the session if the resolved image was the last one; otherwise
    /// advances to the next image and switches the turn. Ignored when no
    /// reveal is pending.
    pub fn complete_reveal(&mut self) -> EventBatch {
        let mut events = EventBatch::new();
        if self.is_over() || !matches!(self.phase, Phase::Reveal(_)) {
            return events;
        }

        if self.current_image == self.images.len() - 1 {
            self.finish(&mut events);
            return events;
        }

        self.current_image = (self.current_image + 1) % self.images.len();
        self.phase = Phase::Guessing;
        events.push(SessionEvent::ImageAdvanced {
            index: self.current_image,
        });
        self.switch_turn(&mut events);

        self.assert_single_runner();
        events
    }

    // === Stop / abort ===

    /// Open the stop prompt: pause whichever clock is running and
    /// remember it so a cancel can resume it.
    ///
    /// Ignored when the session is terminal or a prompt is already open.
    pub fn request_stop(&mut self) -> EventBatch {
        let events = EventBatch::new();
        if self.is_over() || self.stop.is_some() {
            return events;
        }

        let resume = self.clocks.find(|c| c.is_running());
        if let Some(player) = resume {
            self.clocks[player].pause();
        }
        self.stop = Some(StopPrompt { resume });
        debug!("stop requested, paused clock: {:?}", resume);
        events
    }

    /// Close the stop prompt and resume the clock that was paused by
    /// [`request_stop`] — that clock, not whichever seat is active.
    ///
    /// [`request_stop`]: GameSession::request_stop
    pub fn cancel_stop(&mut self) -> EventBatch {
        let events = EventBatch::new();
        if self.is_over() {
            return events;
        }
        let Some(prompt) = self.stop.take() else {
            return events;
        };

        if let Some(player) = prompt.resume {
            self.clocks[player].start();
        }

        self.assert_single_runner();
        events
    }

    /// Confirm the stop: discard the session with no result.
    ///
    /// Terminal, but distinct from normal game-over — the caller must not
    /// persist a history record. Ignored unless the stop prompt is open.
    pub fn confirm_stop(&mut self) -> EventBatch {
        let mut events = EventBatch::new();
        if self.is_over() || self.stop.take().is_none() {
            return events;
        }

        for player in PlayerId::both() {
            self.clocks[player].pause();
        }
        self.phase = Phase::Over;
        self.outcome = Some(Outcome::Aborted);
        events.push(SessionEvent::Aborted);
        info!("session aborted, no result recorded");
        events
    }

    // === Accessors ===

    /// Both players, seat 0 first.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    /// Both clocks, seat 0 first.
    #[must_use]
    pub fn clocks(&self) -> &PlayerPair<Clock> {
        &self.clocks
    }

    /// The seat currently (or last) holding the turn.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// The image currently being guessed.
    #[must_use]
    pub fn current_image(&self) -> &ImageItem {
        &self.images[self.current_image]
    }

    /// Index of the current image in the shuffled sequence.
    #[must_use]
    pub fn current_image_index(&self) -> usize {
        self.current_image
    }

    /// Number of images in the sequence.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// The pending reveal, if a guess was just resolved.
    #[must_use]
    pub fn reveal(&self) -> Option<&RevealState> {
        match &self.phase {
            Phase::Reveal(state) => Some(state),
            _ => None,
        }
    }

    /// Is the stop prompt open?
    #[must_use]
    pub fn stop_pending(&self) -> bool {
        self.stop.is_some()
    }

    /// Has the session reached a terminal state?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over)
    }

    /// Terminal outcome, once the session is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Resolved guesses so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<AnswerRecord> {
        &self.history
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The configuration this session was started with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // === Internals ===

    /// Can the active player answer or pass right now?
    fn accepting_answers(&self) -> bool {
        matches!(self.phase, Phase::Guessing)
            && self.stop.is_none()
            && !self.clocks[self.active].is_expired()
    }

    /// Record the guess and enter the reveal sub-state.
    fn resolve_guess(&mut self, kind: RevealKind, events: &mut EventBatch) {
        let image = &self.images[self.current_image];
        self.history.push_back(AnswerRecord {
            player: self.active,
            image: image.id.clone(),
            kind,
            turn: self.turn_number,
        });

        let word = image.name.clone();
        events.push(SessionEvent::RevealStarted {
            word: word.clone(),
            kind,
        });
        self.phase = Phase::Reveal(RevealState { word, kind });
    }

    /// A clock just expired. The both-expired watcher here is the single
    /// authoritative source of timer-based termination; turn switching
    /// never ends the session on its own.
    fn on_expiry(&mut self, player: PlayerId, events: &mut EventBatch) {
        events.push(SessionEvent::ClockExpired { player });
        info!("{} ran out of time", self.players[player].name);

        if self.clocks.all(|c| c.is_expired()) {
            self.finish(events);
            return;
        }

        // Mid-guess expiry of the active clock: hand the turn to the
        // surviving player immediately. During a reveal the post-reveal
        // switch takes care of it.
        if player == self.active && matches!(self.phase, Phase::Guessing) {
            self.switch_turn(events);
        }
    }

    /// Pause the active clock and start the next eligible player's.
    fn switch_turn(&mut self, events: &mut EventBatch) {
        self.clocks[self.active].pause();

        let expired = [
            self.clocks[PlayerId::new(0)].is_expired(),
            self.clocks[PlayerId::new(1)].is_expired(),
        ];
        if let Some(next) = next_active(self.active, expired) {
            self.active = next;
            self.clocks[next].start();
            self.turn_number += 1;
            events.push(SessionEvent::TurnStarted { player: next });
            debug!("turn {} -> {}", self.turn_number, self.players[next].name);
        }
        // Both expired: leave everything paused. The expiry watcher has
        // already terminated the session, or is about to.
    }

    /// Normal termination with the current scores. Fires at most once.
    fn finish(&mut self, events: &mut EventBatch) {
        for player in PlayerId::both() {
            self.clocks[player].pause();
        }
        self.phase = Phase::Over;

        let players = self.players.to_array();
        self.outcome = Some(Outcome::Finished {
            players: players.clone(),
        });
        events.push(SessionEvent::GameOver { players });
        info!(
            "game over: {} {} - {} {}",
            self.players[PlayerId::new(0)].name,
            self.players[PlayerId::new(0)].score,
            self.players[PlayerId::new(1)].name,
            self.players[PlayerId::new(1)].score,
        );
    }

    /// Mutual exclusion: the two clocks never run at the same time.
    fn assert_single_runner(&self) {
        debug_assert!(
            PlayerId::both()
                .filter(|&p| self.clocks[p].is_running())
                .count()
                <= 1,
            "both clocks running"
        );
    }
}
