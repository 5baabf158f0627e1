//! First-class invariants for session state.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The session checks them in debug builds; tests can check them
//! directly.

use crate::session::SessionState;
use crate::{Board, Marker};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X never trails O, and leads by at most one mark.
pub struct MarkerBalanceInvariant;

impl Invariant<SessionState> for MarkerBalanceInvariant {
    fn holds(state: &SessionState) -> bool {
        let x = state.board().count(Marker::X);
        let o = state.board().count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Replaying the history onto an empty board reproduces the board.
///
/// Catches overwritten squares, since a replayed move onto a marked
/// square fails.
pub struct HistoryConsistentInvariant;

impl Invariant<SessionState> for HistoryConsistentInvariant {
    fn holds(state: &SessionState) -> bool {
        let mut replayed = Board::new();
        for mov in state.history() {
            if replayed.apply(mov.index, mov.marker).is_err() {
                return false;
            }
        }
        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

/// Moves alternate starting with X.
pub struct AlternatingTurnInvariant;

impl Invariant<SessionState> for AlternatingTurnInvariant {
    fn holds(state: &SessionState) -> bool {
        state.history().iter().enumerate().all(|(ply, mov)| {
            let expected = if ply % 2 == 0 { Marker::X } else { Marker::O };
            mov.marker == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

/// Every invariant the session maintains.
pub type SessionInvariants = (
    MarkerBalanceInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);
