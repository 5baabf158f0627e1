//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, MoveError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Marker {
    /// Marker X (always moves first).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square marked by a player.
    Marked(Marker),
}

impl Square {
    /// Returns the marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: search works on its own copy and can never
/// alias the live board owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Checks if a square exists and is empty.
    pub fn is_legal(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Explains why `index` is not a legal move.
    pub fn check_legal(&self, index: usize) -> Result<(), MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfRange(index)),
            Some(Square::Marked(_)) => Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => Ok(()),
        }
    }

    /// Marks `index` with `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::SquareOccupied`];
    /// the board is untouched on error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, index: usize, marker: Marker) -> Result<(), MoveError> {
        self.check_legal(index)?;
        self.squares[index] = Square::Marked(marker);
        Ok(())
    }

    /// Returns a copy of the board with `index` marked.
    pub fn with_move(&self, index: usize, marker: Marker) -> Result<Board, MoveError> {
        let mut next = *self;
        next.apply(index, marker)?;
        Ok(next)
    }

    /// Empty square indices in ascending order.
    ///
    /// Recomputed from the squares on every call.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Number of marked squares.
    pub fn moves_played(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Marked(marker))
            .count()
    }

    /// Checks if every square is marked.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Simulation-only placement used by search; callers guarantee legality.
    pub(crate) fn place(&mut self, index: usize, marker: Marker) {
        debug_assert!(self.is_legal(index), "search placed on an occupied square");
        self.squares[index] = Square::Marked(marker);
    }

    /// Undoes a [`Board::place`], restoring the empty tag.
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty squares numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Marked(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine symbols: `x`/`o` for markers, `.`, `-`, `_` or a digit
    /// for an empty square. Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            board.squares[index] = match symbol {
                'x' | 'X' => Square::Marked(Marker::X),
                'o' | 'O' => Square::Marked(Marker::O),
                '.' | '-' | '_' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                other => return Err(BoardParseError::UnknownSymbol(other)),
            };
        }
        Ok(board)
    }
}
