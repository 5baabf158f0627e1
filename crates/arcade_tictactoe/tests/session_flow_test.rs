//! End-to-end session flows across all three modes.

use arcade_tictactoe::{
    start_session, Difficulty, GameConfig, Marker, MarkerChoice, MoveError, Phase, Session,
    SessionError, Status,
};

#[test]
fn test_hard_vs_hard_always_ties() {
    let mut session = start_session(GameConfig::cvc(Difficulty::Hard)).unwrap();
    let outcomes = session.run_computer_turns().unwrap();

    assert_eq!(outcomes.len(), 9);
    assert_eq!(session.phase(), Phase::Terminal);
    assert_eq!(session.state().status(), Status::Tie);
    assert_eq!(session.state().winning_line(), None);
    let last = outcomes.last().unwrap();
    assert_eq!(last.next_turn, None);
    assert!(last.is_terminal());
}

#[test]
fn test_cvc_terminates_at_every_difficulty() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..5 {
            let mut session = Session::with_seed(GameConfig::cvc(difficulty), seed).unwrap();
            session.start().unwrap();
            let outcomes = session.run_computer_turns().unwrap();
            assert!(!outcomes.is_empty() && outcomes.len() <= 9);
            assert_eq!(session.phase(), Phase::Terminal, "{difficulty} seed {seed}");
            assert!(matches!(
                session.step_computer_turn(),
                Err(SessionError::InvalidState { phase: Phase::Terminal, .. })
            ));
        }
    }
}

#[test]
fn test_cvc_step_by_step_alternates_markers() {
    let mut session = Session::with_seed(GameConfig::cvc(Difficulty::Easy), 11).unwrap();
    session.start().unwrap();
    let mut expected = Marker::X;
    while session.phase() == Phase::Active {
        let outcome = session.step_computer_turn().unwrap();
        assert_eq!(outcome.placed.marker, expected);
        expected = expected.opponent();
    }
}

#[test]
fn test_pvc_computer_opens_when_holding_x() {
    let mut session =
        Session::with_seed(GameConfig::pvc(MarkerChoice::O, Difficulty::Hard), 3).unwrap();
    session.start().unwrap();

    let opening = session.run_computer_turns().unwrap();
    assert_eq!(opening.len(), 1);
    assert_eq!(opening[0].placed.marker, Marker::X);
    assert_eq!(opening[0].next_turn, Some(Marker::O));
    assert!(!session.is_computer_turn());
    assert!(session.run_computer_turns().unwrap().is_empty());
}

#[test]
fn test_pvc_human_cannot_beat_hard() {
    // Human as X tries the corner trap; hard O holds the draw.
    let mut session =
        Session::with_seed(GameConfig::pvc(MarkerChoice::X, Difficulty::Hard), 8).unwrap();
    session.start().unwrap();

    let mut plan = vec![0, 8, 2, 6, 1, 3, 5, 7].into_iter();
    while session.phase() == Phase::Active {
        let mut placed = false;
        for index in plan.by_ref() {
            match session.submit_human_move(index) {
                Ok(_) => {
                    placed = true;
                    break;
                }
                Err(SessionError::IllegalMove(MoveError::SquareOccupied(_))) => continue,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert!(placed, "human ran out of planned squares");
        if session.phase() == Phase::Active {
            session.run_computer_turns().unwrap();
        }
    }
    assert_ne!(session.state().status(), Status::Win(Marker::X));
}

#[test]
fn test_play_again_after_reset() {
    let mut session = start_session(GameConfig::cvc(Difficulty::Medium)).unwrap();
    session.run_computer_turns().unwrap();
    assert_eq!(session.phase(), Phase::Terminal);

    session.reset();
    assert_eq!(session.snapshot().history.len(), 0);
    assert!(session.snapshot().current_player.is_none());

    session.start().unwrap();
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.current_player().map(|p| p.marker()), Some(Marker::X));
}

#[test]
fn test_snapshot_serializes() {
    let mut session = start_session(GameConfig::pvp()).unwrap();
    session.submit_human_move(4).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["phase"], "active");
    assert_eq!(json["history"][0]["index"], 4);
    assert_eq!(json["history"][0]["marker"], "x");
    assert_eq!(json["current_player"]["marker"], "o");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GameConfig::pvc(MarkerChoice::Random, Difficulty::Medium);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(
        json,
        r#"{"mode":"pvc","human_marker":"random","difficulty":"medium"}"#
    );
    let pvp: GameConfig = serde_json::from_str(r#"{"mode":"pvp"}"#).unwrap();
    assert_eq!(pvp, GameConfig::pvp());
}
