//! Move generators for computer players.
//!
//! Two strategies exist, random and minimax. A [`Difficulty`] tier maps
//! a board onto one of them.

mod minimax;
mod random;

pub use minimax::{minimax_move, MinimaxSearch, WIN_SCORE};
pub use random::random_move;

use crate::error::MoveError;
use crate::{Board, Marker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Medium plays randomly while more than this many squares are empty.
pub const MEDIUM_RANDOM_ABOVE: usize = 7;

/// Lookahead used by Medium once it starts searching.
pub const MEDIUM_DEPTH: u32 = 3;

/// Computer player strength.
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
pub enum Difficulty {
    /// Always random.
    Easy,
    /// Random opening, shallow search in the endgame.
    Medium,
    /// Exhaustive search; never loses.
    Hard,
}

impl Difficulty {
    /// Picks a square for `marker` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] if the board is already terminal.
    #[instrument(skip(board, rng), fields(empty = board.legal_moves().count()))]
    pub fn choose_move<R: Rng>(
        self,
        board: &Board,
        marker: Marker,
        rng: &mut R,
    ) -> Result<usize, MoveError> {
        match self {
            Difficulty::Easy => random_move(board, rng),
            Difficulty::Medium => {
                if board.legal_moves().count() > MEDIUM_RANDOM_ABOVE {
                    random_move(board, rng)
                } else {
                    minimax_move(board, marker, Some(MEDIUM_DEPTH))
                }
            }
            Difficulty::Hard => minimax_move(board, marker, None),
        }
    }
}
