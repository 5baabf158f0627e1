//! Terminal-state evaluation: win, tie, or still live.

use super::win::find_winning_line;
use crate::{Board, Marker};
use serde::{Deserialize, Serialize};

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Moves remain and nobody has won.
    Live,
    /// A marker completed a line.
    Win(Marker),
    /// Board is full with no completed line.
    Tie,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Live => write!(f, "live"),
            Status::Win(marker) => write!(f, "player {} wins", marker),
            Status::Tie => write!(f, "tie game"),
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// Board status.
    pub status: Status,
    /// Squares of the winning line, present only for [`Status::Win`].
    pub winning_line: Option<[usize; 3]>,
}

impl Evaluation {
    /// Returns true for a win or a tie.
    pub fn is_terminal(&self) -> bool {
        self.status != Status::Live
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self.status {
            Status::Win(marker) => Some(marker),
            _ => None,
        }
    }
}

/// Evaluates a board.
///
/// Pure: the same board always yields the same evaluation.
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((marker, line)) = find_winning_line(board) {
        return Evaluation {
            status: Status::Win(marker),
            winning_line: Some(line),
        };
    }

    let status = if board.is_full() {
        Status::Tie
    } else {
        Status::Live
    };
    Evaluation {
        status,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_live() {
        let eval = evaluate(&Board::new());
        assert_eq!(eval.status, Status::Live);
        assert!(!eval.is_terminal());
        assert_eq!(eval.winning_line, None);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let eval = evaluate(&"xoxxoooxx".parse().unwrap());
        assert_eq!(eval.status, Status::Tie);
        assert_eq!(eval.winning_line, None);
        assert!(eval.is_terminal());
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let eval = evaluate(&"xxxooxoxo".parse().unwrap());
        assert_eq!(eval.status, Status::Win(Marker::X));
        assert_eq!(eval.winning_line, Some([0, 1, 2]));
        assert_eq!(eval.winner(), Some(Marker::X));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Win(Marker::O).to_string(), "player o wins");
        assert_eq!(Status::Tie.to_string(), "tie game");
    }
}
