//! Search behaviour on known positions and whole games.

use arcade_tictactoe::{
    evaluate, minimax_move, random_move, Board, Difficulty, Marker, MinimaxSearch, Status,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

#[test]
fn test_hard_answers_center_with_a_corner() {
    let board = board("....x....");
    let reply = minimax_move(&board, Marker::O, None).unwrap();
    assert!([0, 2, 6, 8].contains(&reply), "edge reply {reply} loses");
}

#[test]
fn test_edge_replies_to_center_score_as_losses() {
    let mut search = MinimaxSearch::new(Marker::O);
    for (index, score) in search.scores(&board("....x....")) {
        if [1, 3, 5, 7].contains(&index) {
            assert!(score < 0, "edge {index} scored {score}");
        } else {
            assert_eq!(score, 0, "corner {index} should draw");
        }
    }
}

#[test]
fn test_opposite_corners_build_a_double_threat() {
    let start = board("x...o...x");
    let chosen = minimax_move(&start, Marker::X, None).unwrap();
    assert!(chosen == 2 || chosen == 6, "expected a fork square, got {chosen}");

    // O answers elsewhere; X completes either line.
    let mut after = start.with_move(chosen, Marker::X).unwrap();
    after.apply(3, Marker::O).unwrap();
    let finisher = minimax_move(&after, Marker::X, None).unwrap();
    after.apply(finisher, Marker::X).unwrap();
    assert_eq!(evaluate(&after).status, Status::Win(Marker::X));
}

#[test]
fn test_full_board_without_line_is_tie() {
    let eval = evaluate(&board("xoxxoooxx"));
    assert_eq!(eval.status, Status::Tie);
    assert_eq!(eval.winning_line, None);
}

#[test]
fn test_top_row_win_reports_line() {
    let eval = evaluate(&board("xxxooxoxo"));
    assert_eq!(eval.status, Status::Win(Marker::X));
    assert_eq!(eval.winning_line, Some([0, 1, 2]));
}

#[test]
fn test_search_is_deterministic() {
    for literal in [".........", "x...o....", "xo..x...o", "x.o.o...x"] {
        let b = board(literal);
        for depth in [None, Some(1), Some(3)] {
            assert_eq!(
                minimax_move(&b, Marker::X, depth),
                minimax_move(&b, Marker::X, depth),
                "{literal} at {depth:?}"
            );
        }
    }
}

/// Plays every O reply against hard X, asserting X never loses.
fn explore_o_replies(board: Board, leaves: &mut usize) {
    let eval = evaluate(&board);
    if eval.is_terminal() {
        assert_ne!(eval.status, Status::Win(Marker::O), "X lost on\n{board}");
        *leaves += 1;
        return;
    }

    let to_move = if board.count(Marker::X) == board.count(Marker::O) {
        Marker::X
    } else {
        Marker::O
    };

    match to_move {
        Marker::X => {
            let index = minimax_move(&board, Marker::X, None).unwrap();
            explore_o_replies(board.with_move(index, Marker::X).unwrap(), leaves);
        }
        Marker::O => {
            for index in board.legal_moves() {
                explore_o_replies(board.with_move(index, Marker::O).unwrap(), leaves);
            }
        }
    }
}

#[test]
fn test_hard_x_never_loses_against_any_reply() {
    let mut leaves = 0;
    explore_o_replies(Board::new(), &mut leaves);
    assert!(leaves > 0);
}

#[test]
fn test_hard_o_never_loses_against_random_x() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut b = Board::new();
        let mut to_move = Marker::X;
        while !evaluate(&b).is_terminal() {
            let index = match to_move {
                Marker::X => random_move(&b, &mut rng).unwrap(),
                Marker::O => Difficulty::Hard.choose_move(&b, Marker::O, &mut rng).unwrap(),
            };
            b.apply(index, to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert_ne!(evaluate(&b).status, Status::Win(Marker::X), "seed {seed}:\n{b}");
    }
}

#[test]
fn test_random_playouts_respect_board_properties() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let mut b = Board::new();
        let mut to_move = Marker::X;
        loop {
            let eval = evaluate(&b);
            assert_eq!(eval, evaluate(&b));
            if let Some(winner) = eval.winner() {
                assert!(b.count(winner) >= 3);
            }
            if eval.is_terminal() {
                break;
            }
            assert_eq!(b.legal_moves().count(), 9 - b.moves_played());
            let index = random_move(&b, &mut rng).unwrap();
            b.apply(index, to_move).unwrap();
            to_move = to_move.opponent();
        }
    }
}
