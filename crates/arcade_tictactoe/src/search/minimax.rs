//! Depth-limited minimax search.
//!
//! ```text
//!        0
//!      /  \
//!     0    0
//!    / \  / \
//!   0  0  0  0
//! ```
//!
//! Plain minimax without pruning. Each simulated move is placed on a
//! working copy of the board and cleared again after the recursive call,
//! so the empty tag is restored before the next sibling is tried.

use crate::error::MoveError;
use crate::rules::{evaluate, Status};
use crate::types::BOARD_SIZE;
use crate::{Board, Marker};
use tracing::{debug, instrument};

/// Base score of a decided game; remaining depth is added on top so
/// quicker wins and slower losses are preferred.
pub const WIN_SCORE: i32 = 10;

/// Minimax search from the point of view of `max_player`.
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    max_player: Marker,
    min_player: Marker,
    depth_limit: Option<u32>,
    nodes: u64,
}

impl MinimaxSearch {
    /// Creates an exhaustive search for `max_player`.
    pub fn new(max_player: Marker) -> Self {
        Self {
            max_player,
            min_player: max_player.opponent(),
            depth_limit: None,
            nodes: 0,
        }
    }

    /// Limits lookahead to `depth` plies below each candidate move.
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    /// Nodes visited by every search run so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores every legal move, in ascending square order.
    ///
    /// Returns an empty list for a terminal board.
    pub fn scores(&mut self, board: &Board) -> Vec<(usize, i32)> {
        if evaluate(board).is_terminal() {
            return Vec::new();
        }

        let depth = self
            .depth_limit
            .unwrap_or_else(|| board.legal_moves().count() as u32);
        let mut work = *board;
        let mut scores = Vec::with_capacity(BOARD_SIZE);
        for index in board.legal_moves() {
            work.place(index, self.max_player);
            let score = self.minimax(&mut work, depth, false);
            work.clear(index);
            scores.push((index, score));
        }
        scores
    }

    /// Returns the highest-scoring move; ties go to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] if the board is terminal.
    pub fn best_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        let mut best: Option<(usize, i32)> = None;
        for (index, score) in self.scores(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(MoveError::NoLegalMove)?;
        debug!(
            marker = %self.max_player,
            index,
            score,
            nodes = self.nodes,
            "Minimax selected move"
        );
        Ok(index)
    }

    fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        self.nodes += 1;

        let status = evaluate(board).status;
        if depth == 0 || status != Status::Live {
            return match status {
                Status::Win(marker) if marker == self.max_player => WIN_SCORE + depth as i32,
                Status::Win(_) => -WIN_SCORE - depth as i32,
                Status::Tie | Status::Live => 0,
            };
        }

        let (marker, mut best) = if maximizing {
            (self.max_player, i32::MIN)
        } else {
            (self.min_player, i32::MAX)
        };

        for index in 0..BOARD_SIZE {
            if !board.is_legal(index) {
                continue;
            }
            board.place(index, marker);
            let score = self.minimax(board, depth - 1, !maximizing);
            board.clear(index);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Best move for `marker`, searching `depth` plies (`None` = exhaustive).
///
/// Deterministic: the same board and depth always give the same square.
#[instrument(skip(board), fields(empty = board.legal_moves().count()))]
pub fn minimax_move(board: &Board, marker: Marker, depth: Option<u32>) -> Result<usize, MoveError> {
    let mut search = MinimaxSearch::new(marker);
    if let Some(depth) = depth {
        search = search.with_depth_limit(depth);
    }
    search.best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_opponent_line() {
        // O must block X's top row at square 2.
        let board: Board = "xx..o....".parse().unwrap();
        assert_eq!(minimax_move(&board, Marker::O, None), Ok(2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // X can win at 2 or block O at 5; winning scores higher.
        let board: Board = "xx.oo....".parse().unwrap();
        assert_eq!(minimax_move(&board, Marker::X, None), Ok(2));
    }

    #[test]
    fn test_scores_reward_faster_wins() {
        let board: Board = "xx.oo....".parse().unwrap();
        let mut search = MinimaxSearch::new(Marker::X);
        let scores = search.scores(&board);
        let immediate = scores.iter().find(|(i, _)| *i == 2).map(|(_, s)| *s);
        assert_eq!(immediate, Some(WIN_SCORE + 5));
        assert!(scores.iter().all(|(i, s)| *i == 2 || *s < WIN_SCORE + 5));
    }

    #[test]
    fn test_depth_zero_scores_only_immediate_results() {
        let board: Board = "xx.oo....".parse().unwrap();
        let mut search = MinimaxSearch::new(Marker::X).with_depth_limit(0);
        let scores = search.scores(&board);
        assert_eq!(scores[0], (2, WIN_SCORE));
        assert!(scores[1..].iter().all(|(_, s)| *s == 0));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // With no lookahead every move on the empty board scores 0.
        let mut search = MinimaxSearch::new(Marker::X).with_depth_limit(0);
        assert_eq!(search.best_move(&Board::new()), Ok(0));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "ooo.xx.x.".parse().unwrap();
        assert_eq!(minimax_move(&board, Marker::X, None), Err(MoveError::NoLegalMove));
        assert!(MinimaxSearch::new(Marker::X).scores(&board).is_empty());
    }

    #[test]
    fn test_search_leaves_board_unchanged_and_counts_nodes() {
        let board: Board = "x...o....".parse().unwrap();
        let mut search = MinimaxSearch::new(Marker::X);
        let first = search.best_move(&board).unwrap();
        assert!(search.nodes() > 0);
        assert_eq!(board, "x...o....".parse().unwrap());
        assert_eq!(search.best_move(&board).unwrap(), first);
    }
}
