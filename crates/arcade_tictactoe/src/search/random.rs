//! Uniform random move selection.

use crate::error::MoveError;
use crate::rules::evaluate;
use crate::Board;
use rand::Rng;

/// Picks a legal square uniformly at random.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] on a terminal board.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Result<usize, MoveError> {
    if evaluate(board).is_terminal() {
        return Err(MoveError::NoLegalMove);
    }
    let moves: Vec<usize> = board.legal_moves().collect();
    let index = rng.random_range(0..moves.len());
    Ok(moves[index])
}
