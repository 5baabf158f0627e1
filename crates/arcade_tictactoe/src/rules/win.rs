//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position, Square};

/// Every winning line, in the order they are checked: rows, columns,
/// then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line in [`LINES`] order.
///
/// Returns the owning marker and the three square indices.
pub fn find_winning_line(board: &Board) -> Option<(Marker, [usize; 3])> {
    LINES.iter().find_map(|[a, b, c]| {
        let line = [a.to_index(), b.to_index(), c.to_index()];
        match board.get(line[0]) {
            Some(Square::Marked(marker))
                if board.get(line[1]) == Some(Square::Marked(marker))
                    && board.get(line[2]) == Some(Square::Marked(marker)) =>
            {
                Some((marker, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "xxx.o.o..".parse().unwrap();
        assert_eq!(find_winning_line(&board), Some((Marker::X, [0, 1, 2])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "x.o.ox o..".parse().unwrap();
        assert_eq!(find_winning_line(&board), Some((Marker::O, [2, 4, 6])));
    }

    #[test]
    fn test_first_line_reported_when_two_complete() {
        // Top row and left column both belong to X; rows are checked first.
        let board: Board = "xxxxoox..".parse().unwrap();
        assert_eq!(find_winning_line(&board), Some((Marker::X, [0, 1, 2])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "xx.......".parse().unwrap();
        assert_eq!(find_winning_line(&board), None);
    }
}
