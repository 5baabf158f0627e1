//! Error types for the tic-tac-toe engine.

use crate::session::Phase;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error raised when a move cannot be resolved or applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name a square (must be 0-8).
    #[display("Square {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// A human move was resolved without an index.
    #[display("No square was submitted for the human player")]
    MissingIndex,

    /// The board is terminal, so there is nothing to choose from.
    #[display("No legal moves remain")]
    NoLegalMove,
}

impl MoveError {
    /// Returns true for the recoverable "bad square" family of errors.
    pub fn is_illegal_move(&self) -> bool {
        !matches!(self, MoveError::NoLegalMove)
    }
}

/// Contradictory or incomplete game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a configuration error tagged with the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error returned by session operations.
///
/// None of these are fatal: the session is left exactly as it was
/// before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The submitted move was rejected.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),

    /// The operation is not valid in the current phase or turn.
    #[display("Cannot {} while the session is {}", operation, phase)]
    InvalidState {
        /// The rejected operation.
        operation: &'static str,
        /// Phase (or turn) the session was in.
        phase: Phase,
    },

    /// The configuration was rejected before any state was created.
    #[display("{}", _0)]
    Configuration(ConfigurationError),
}

impl SessionError {
    /// Creates an invalid-state error for `operation`.
    pub fn invalid_state(operation: &'static str, phase: Phase) -> Self {
        SessionError::InvalidState { operation, phase }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::IllegalMove(err)
    }
}

impl From<ConfigurationError> for SessionError {
    fn from(err: ConfigurationError) -> Self {
        SessionError::Configuration(err)
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character that is not a marker or an empty-square symbol.
    #[display("Unexpected square symbol {:?}", _0)]
    UnknownSymbol(#[error(not(source))] char),
}
