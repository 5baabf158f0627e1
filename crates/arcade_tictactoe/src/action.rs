//! Moves and the result of applying them.
//!
//! Moves are domain events, not side effects: the session records
//! every accepted one and reports it back to the caller.

use crate::rules::Evaluation;
use crate::{Board, Marker, Position};
use serde::{Deserialize, Serialize};

/// A marker placed on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Square index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, index: usize) -> Self {
        Self { marker, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.index) {
            Some(position) => write!(f, "{} -> {}", self.marker, position.label()),
            None => write!(f, "{} -> {}", self.marker, self.index),
        }
    }
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The accepted move.
    pub placed: Move,
    /// Board after the move.
    pub board_after: Board,
    /// Marker to move next, `None` once the game is over.
    pub next_turn: Option<Marker>,
    /// Final evaluation if the move ended the game.
    pub terminal: Option<Evaluation>,
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }
}
