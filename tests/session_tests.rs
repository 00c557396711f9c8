//! Full-session integration tests.
//!
//! These drive complete games through the public operations the way an
//! embedding caller would: ticks and user actions in, events and
//! snapshots out.

use showcase_duel::core::{ImageItem, PlayerId};
use showcase_duel::engine::{
    GameSession, Input, RevealKind, SessionConfig, SessionEvent,
};
use showcase_duel::history::{GameRecord, HistoryStore, MemoryHistoryStore};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn images(n: usize) -> Vec<ImageItem> {
    (0..n)
        .map(|i| ImageItem::new(format!("img-{i}"), format!("word-{i}"), format!("ref-{i}")))
        .collect()
}

fn session(seconds: u32, image_count: usize) -> GameSession {
    init_logging();
    GameSession::begin(SessionConfig::new(seconds), "Ana", "Ben", images(image_count)).unwrap()
}

fn game_over_count(events: &[SessionEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::GameOver { .. }))
        .count()
}

// =============================================================================
// Walkthrough Scenarios
// =============================================================================

/// Ana answers the first image correctly, Ben passes on the second and
/// last: game over by image exhaustion with scores {Ana: 1, Ben: 0}.
#[test]
fn test_ana_ben_walkthrough() {
    let mut session = session(120, 2);

    // Ana answers correctly.
    let events = session.submit_correct();
    assert!(events
        .iter()
        .any(|e| matches!(e, SessionEvent::ScoreAwarded { player, score: 1 } if *player == P0)));
    session.complete_reveal();

    assert_eq!(session.players()[P0].score, 1);
    assert_eq!(session.active_player(), P1);
    assert_eq!(session.current_image_index(), 1);

    // Ben passes on the last image.
    session.submit_pass();
    assert_eq!(session.clocks()[P1].remaining(), 115);
    let events = session.complete_reveal();

    assert!(session.is_over());
    assert_eq!(game_over_count(&events), 1);
    let players = session.outcome().unwrap().final_players().unwrap();
    assert_eq!(players[0].score, 1);
    assert_eq!(players[1].score, 0);
}

/// Always answering correctly over N images ends the game after exactly
/// N resolved answers, with the two scores summing to N.
#[test]
fn test_round_trip_all_correct() {
    let n = 7;
    let mut session = session(600, n);

    for i in 0..n {
        assert!(!session.is_over(), "ended early at answer {i}");
        let events = session.submit_correct();
        assert!(!events.is_empty(), "answer {i} was refused");
        session.complete_reveal();
    }

    assert!(session.is_over());
    let players = session.outcome().unwrap().final_players().unwrap();
    assert_eq!((players[0].score + players[1].score) as usize, n);
}

/// Turns alternate over the image sequence while both clocks are live.
#[test]
fn test_turns_alternate() {
    let mut session = session(600, 6);
    let mut seats = Vec::new();

    for _ in 0..4 {
        seats.push(session.active_player());
        session.submit_correct();
        session.complete_reveal();
    }

    assert_eq!(seats, vec![P0, P1, P0, P1]);
}

// =============================================================================
// Timer Scenarios
// =============================================================================

/// Ana's clock expires first; the rotation skips her indefinitely and Ben
/// keeps answering until his clock also runs out, then game over fires
/// exactly once.
#[test]
fn test_expired_player_is_skipped_until_both_expire() {
    let mut session = session(2, 20);

    // Burn Ana's entire budget.
    session.tick();
    let events = session.tick();
    assert!(session.clocks()[P0].is_expired());
    assert!(!session.is_over());
    assert_eq!(session.active_player(), P1);
    assert!(events
        .iter()
        .any(|e| matches!(e, SessionEvent::TurnStarted { player } if *player == P1)));

    // Ben answers twice; the turn never rotates back to Ana.
    for _ in 0..2 {
        session.submit_correct();
        session.complete_reveal();
        assert_eq!(session.active_player(), P1);
    }

    // Ben's clock runs out too: terminal, exactly one game-over.
    session.tick();
    let events = session.tick();
    assert!(session.is_over());
    assert_eq!(game_over_count(&events), 1);

    let players = session.outcome().unwrap().final_players().unwrap();
    assert_eq!(players[0].score, 0);
    assert_eq!(players[1].score, 2);
}

/// A pass with 3 seconds remaining clamps the clock to zero and fires
/// expiry exactly once, not a negative value.
#[test]
fn test_pass_penalty_clamps_at_zero() {
    let mut session = session(3, 5);

    let events = session.submit_pass();

    assert_eq!(session.clocks()[P0].remaining(), 0);
    assert!(session.clocks()[P0].is_expired());
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, SessionEvent::ClockExpired { player } if *player == P0))
            .count(),
        1
    );

    // Later ticks and passes can never re-fire the expiry.
    let later = session.tick();
    assert!(!later
        .iter()
        .any(|e| matches!(e, SessionEvent::ClockExpired { .. })));
}

/// The clock keeps counting during a reveal window, but answers are
/// refused until the window completes.
#[test]
fn test_reveal_window_suspends_input_not_time() {
    let mut session = session(120, 3);

    session.submit_correct();
    assert!(session.reveal().is_some());

    session.tick();
    assert_eq!(session.clocks()[P0].remaining(), 119);

    assert!(session.submit_correct().is_empty());
    assert!(session.submit_pass().is_empty());
    assert_eq!(session.players()[P0].score, 1);

    session.complete_reveal();
    assert_eq!(session.active_player(), P1);
}

/// Mutual exclusion holds at every observable instant of a full game.
#[test]
fn test_at_most_one_clock_runs() {
    let mut session = session(30, 10);
    let script = [
        Input::Tick,
        Input::SubmitCorrect,
        Input::Tick,
        Input::CompleteReveal,
        Input::SubmitPass,
        Input::CompleteReveal,
        Input::RequestStop,
        Input::Tick,
        Input::CancelStop,
        Input::Tick,
        Input::SubmitCorrect,
        Input::CompleteReveal,
    ];

    for input in script {
        session.apply(input);
        let running = PlayerId::both()
            .filter(|&p| session.clocks()[p].is_running())
            .count();
        assert!(running <= 1, "both clocks running after {input:?}");
    }
}

// =============================================================================
// Stop / Abort Scenarios
// =============================================================================

/// Requesting a stop while Ana's clock runs pauses Ana; cancelling
/// resumes Ana's clock, not Ben's.
#[test]
fn test_cancel_stop_resumes_the_paused_clock() {
    let mut session = session(120, 3);

    // Hand the turn to Ben first, then stop during Ben's turn.
    session.submit_correct();
    session.complete_reveal();
    assert!(session.clocks()[P1].is_running());

    session.request_stop();
    assert!(!session.clocks()[P0].is_running());
    assert!(!session.clocks()[P1].is_running());

    session.cancel_stop();
    assert!(session.clocks()[P1].is_running());
    assert!(!session.clocks()[P0].is_running());
}

/// Confirming a stop discards the session: terminal, aborted outcome, no
/// game-over event.
#[test]
fn test_confirm_stop_aborts_without_result() {
    let mut session = session(120, 3);
    session.submit_correct();
    session.complete_reveal();

    session.request_stop();
    let events = session.confirm_stop();

    assert!(session.is_over());
    assert!(session.outcome().unwrap().is_aborted());
    assert!(events.iter().any(|e| matches!(e, SessionEvent::Aborted)));
    assert_eq!(game_over_count(&events), 0);

    // Terminal: nothing comes back to life.
    assert!(session.tick().is_empty());
    assert!(session.cancel_stop().is_empty());
    assert!(session.submit_correct().is_empty());
}

// =============================================================================
// Caller Contract
// =============================================================================

/// A finished game yields final players the caller turns into a history
/// record; an aborted game yields nothing to persist.
#[test]
fn test_caller_persists_finished_games_only() {
    init_logging();
    let mut store = MemoryHistoryStore::new();

    // Finished game: persist.
    let mut finished = session(120, 1);
    finished.submit_correct();
    for event in finished.complete_reveal() {
        if let SessionEvent::GameOver { players } = event {
            store.save(GameRecord::new("Fruit", players)).unwrap();
        }
    }
    assert_eq!(store.len(), 1);

    // Aborted game: nothing to persist.
    let mut aborted = session(120, 1);
    aborted.request_stop();
    for event in aborted.confirm_stop() {
        assert!(!matches!(event, SessionEvent::GameOver { .. }));
    }
    assert_eq!(store.len(), 1);

    let records = store.recent();
    assert_eq!(records[0].topic_name, "Fruit");
    assert_eq!(records[0].winner().unwrap().name, "Ana");
}

/// The final answer's score update is included when the image sequence
/// ends the game.
#[test]
fn test_final_answer_counts_in_result() {
    let mut session = session(120, 1);

    session.submit_correct();
    let events = session.complete_reveal();

    let players = events
        .iter()
        .find_map(|e| match e {
            SessionEvent::GameOver { players } => Some(players.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(players[0].score, 1);
}

/// Pass history and reveal kinds line up with what each player did.
#[test]
fn test_answer_history() {
    let mut session = session(120, 4);

    session.submit_correct();
    session.complete_reveal();
    session.submit_pass();
    session.complete_reveal();
    session.submit_correct();
    session.complete_reveal();

    let kinds: Vec<_> = session.history().iter().map(|r| (r.player, r.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (P0, RevealKind::Correct),
            (P1, RevealKind::Pass),
            (P0, RevealKind::Correct),
        ]
    );
}
