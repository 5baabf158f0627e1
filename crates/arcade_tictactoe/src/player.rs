//! Session participants.

use crate::error::MoveError;
use crate::search::Difficulty;
use crate::{Board, Marker};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a player produces moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive from outside as square indices.
    Human,
    /// Moves come from the move generator for this difficulty.
    Computer(Difficulty),
}

/// A participant bound to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    marker: Marker,
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    pub fn human(marker: Marker) -> Self {
        Self {
            marker,
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player.
    pub fn computer(marker: Marker, difficulty: Difficulty) -> Self {
        Self {
            marker,
            kind: PlayerKind::Computer(difficulty),
        }
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Human or computer.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns true for computer players.
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }

    /// Difficulty of a computer player.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(difficulty) => Some(difficulty),
        }
    }

    /// Produces this player's move.
    ///
    /// Humans must supply `requested`, which is checked for legality.
    /// Computers ignore `requested` and consult their move generator.
    pub fn resolve_move<R: Rng>(
        &self,
        board: &Board,
        requested: Option<usize>,
        rng: &mut R,
    ) -> Result<usize, MoveError> {
        match self.kind {
            PlayerKind::Human => {
                let index = requested.ok_or(MoveError::MissingIndex)?;
                board.check_legal(index)?;
                Ok(index)
            }
            PlayerKind::Computer(difficulty) => difficulty.choose_move(board, self.marker, rng),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PlayerKind::Human => write!(f, "{} (human)", self.marker),
            PlayerKind::Computer(difficulty) => {
                write!(f, "{} (computer, {})", self.marker, difficulty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_human_move_validated() {
        let board: Board = "x........".parse().unwrap();
        let human = Player::human(Marker::O);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(human.resolve_move(&board, Some(4), &mut rng), Ok(4));
        assert_eq!(
            human.resolve_move(&board, Some(0), &mut rng),
            Err(MoveError::SquareOccupied(0))
        );
        assert_eq!(
            human.resolve_move(&board, Some(12), &mut rng),
            Err(MoveError::OutOfRange(12))
        );
        assert_eq!(
            human.resolve_move(&board, None, &mut rng),
            Err(MoveError::MissingIndex)
        );
    }

    #[test]
    fn test_computer_ignores_requested_index() {
        let board: Board = "xx.oo....".parse().unwrap();
        let computer = Player::computer(Marker::X, Difficulty::Hard);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(computer.resolve_move(&board, Some(8), &mut rng), Ok(2));
        assert!(computer.is_computer());
        assert_eq!(computer.difficulty(), Some(Difficulty::Hard));
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::human(Marker::X).to_string(), "x (human)");
        assert_eq!(
            Player::computer(Marker::O, Difficulty::Easy).to_string(),
            "o (computer, easy)"
        );
    }
}
