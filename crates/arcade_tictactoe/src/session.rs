//! Game session state machine.
//!
//! ```text
//! Configuring --start--> Active --winning/filling move--> Terminal
//!      ^                                                     |
//!      +-------------------------reset-----------------------+
//! ```
//!
//! A [`Session`] owns its configuration, the two players, a random
//! source and the current [`SessionState`]. State is rebuilt as a fresh
//! value on every start and reset; nothing is cleared in place.

use crate::action::{Move, MoveOutcome};
use crate::config::{GameConfig, MarkerChoice, Mode};
use crate::error::{ConfigurationError, SessionError};
use crate::player::Player;
use crate::rules::{evaluate, Evaluation, Status};
use crate::{Board, Marker};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Configured but not started.
    Configuring,
    /// Accepting moves.
    Active,
    /// Won or tied; only reset is accepted.
    Terminal,
}

/// Board, turn, outcome and history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    board: Board,
    current: Marker,
    evaluation: Evaluation,
    history: Vec<Move>,
}

impl SessionState {
    /// Empty board with X to move.
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            board,
            current: Marker::X,
            evaluation: evaluate(&board),
            history: Vec::new(),
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn it is (the last mover once the game is over).
    pub fn current(&self) -> Marker {
        self.current
    }

    /// Live, won or tied.
    pub fn status(&self) -> Status {
        self.evaluation.status
    }

    /// Winning squares, if the game was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.evaluation.winning_line
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places a move without any checks; used to build corrupt states in tests.
    #[cfg(test)]
    pub(crate) fn record_unchecked(&mut self, mov: Move) {
        self.board.place(mov.index, mov.marker);
        self.history.push(mov);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a session for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Current board.
    pub board: Board,
    /// Player to move, present only while active.
    pub current_player: Option<Player>,
    /// Board status.
    pub status: Status,
    /// Winning squares, if won.
    pub winning_line: Option<[usize; 3]>,
    /// Accepted moves in order.
    pub history: Vec<Move>,
}

/// A tic-tac-toe game session.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    phase: Phase,
    players: Option<[Player; 2]>,
    state: SessionState,
    rng: StdRng,
    seed: u64,
}

/// Validates `config` and starts a session in one step.
///
/// # Errors
///
/// Returns [`SessionError::Configuration`] for an invalid configuration.
pub fn start_session(config: GameConfig) -> Result<Session, SessionError> {
    let mut session = Session::new(config)?;
    session.start()?;
    Ok(session)
}

impl Session {
    /// Creates a session in the configuring phase with a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Configuration`] for an invalid configuration.
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        let seed: u64 = rand::rng().random();
        Self::with_seed(config, seed)
    }

    /// Creates a session whose coin flips and random moves follow `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Configuration`] for an invalid configuration.
    #[instrument]
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;
        debug!("Session configured");
        Ok(Self {
            config,
            phase: Phase::Configuring,
            players: None,
            state: SessionState::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Assigns markers, builds the players and enters the active phase.
    ///
    /// Calling it again after [`Session::reset`] plays another game with
    /// the same configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidState`] unless configuring.
    #[instrument(skip(self), fields(mode = %self.config.mode, seed = self.seed))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Configuring {
            warn!(phase = %self.phase, "Start rejected");
            return Err(SessionError::invalid_state("start", self.phase));
        }

        let players = build_players(&self.config, &mut self.rng)?;
        info!(x = %players[0], o = %players[1], "Session started");
        self.players = Some(players);
        self.state = SessionState::new();
        self.phase = Phase::Active;
        Ok(())
    }

    /// Returns the session to the configuring phase, discarding the game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(phase = %self.phase, moves = self.state.history.len(), "Session reset");
        self.state = SessionState::new();
        self.players = None;
        self.phase = Phase::Configuring;
    }

    /// Resolves the current player's move and applies it.
    ///
    /// Human players need `index`; computer players ignore it.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidState`] unless active.
    /// - [`SessionError::IllegalMove`] for a missing, occupied or
    ///   out-of-range human square; the state is unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: Option<usize>) -> Result<MoveOutcome, SessionError> {
        let player = self.require_current("submit a move")?;
        let chosen = player
            .resolve_move(&self.state.board, index, &mut self.rng)
            .map_err(|e| {
                warn!(player = %player, ?index, error = %e, "Move rejected");
                SessionError::from(e)
            })?;
        self.apply(player.marker(), chosen)
    }

    /// Submits a square for the human whose turn it is.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] on a computer's turn or outside the
    /// active phase, otherwise as [`Session::submit_move`].
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<MoveOutcome, SessionError> {
        let player = self.require_current("submit a human move")?;
        if player.is_computer() {
            warn!(player = %player, "Human move submitted on a computer's turn");
            return Err(SessionError::invalid_state(
                "submit a human move on a computer's turn",
                self.phase,
            ));
        }
        self.submit_move(Some(index))
    }

    /// Lets the computer whose turn it is make one move.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] on a human's turn or outside the
    /// active phase.
    #[instrument(skip(self))]
    pub fn step_computer_turn(&mut self) -> Result<MoveOutcome, SessionError> {
        let player = self.require_current("step a computer turn")?;
        if !player.is_computer() {
            warn!(player = %player, "Computer step requested on a human's turn");
            return Err(SessionError::invalid_state(
                "step a computer turn on a human's turn",
                self.phase,
            ));
        }
        self.submit_move(None)
    }

    /// Plays computer turns until a human is to move or the game ends.
    ///
    /// Returns the outcomes in order; empty if a human is already to move.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidState`] outside the active phase.
    pub fn run_computer_turns(&mut self) -> Result<Vec<MoveOutcome>, SessionError> {
        self.require_current("run computer turns")?;
        let mut outcomes = Vec::new();
        while self.is_computer_turn() {
            outcomes.push(self.step_computer_turn()?);
        }
        Ok(outcomes)
    }

    /// Returns true if the session is active and a computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.current_player().is_some_and(|p| p.is_computer())
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the session's random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current game state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Both players, X first; `None` while configuring.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The player holding `marker`, once started.
    pub fn player(&self, marker: Marker) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|p| p.marker() == marker))
    }

    /// The player to move; `None` unless active.
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase != Phase::Active {
            return None;
        }
        self.player(self.state.current)
    }

    /// Copy of everything a display layer needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            board: self.state.board,
            current_player: self.current_player().copied(),
            status: self.state.status(),
            winning_line: self.state.winning_line(),
            history: self.state.history.clone(),
        }
    }

    fn require_current(&self, operation: &'static str) -> Result<Player, SessionError> {
        match self.current_player() {
            Some(player) => Ok(*player),
            None => {
                warn!(phase = %self.phase, operation, "Operation rejected");
                Err(SessionError::invalid_state(operation, self.phase))
            }
        }
    }

    fn apply(&mut self, marker: Marker, index: usize) -> Result<MoveOutcome, SessionError> {
        self.state.board.apply(index, marker)?;
        let placed = Move::new(marker, index);
        self.state.history.push(placed);
        self.state.evaluation = evaluate(&self.state.board);

        #[cfg(debug_assertions)]
        assert_invariants(&self.state);

        let terminal = if self.state.evaluation.is_terminal() {
            self.phase = Phase::Terminal;
            info!(
                outcome = %self.state.evaluation.status,
                line = ?self.state.evaluation.winning_line,
                moves = self.state.history.len(),
                "Session finished"
            );
            Some(self.state.evaluation)
        } else {
            self.state.current = marker.opponent();
            None
        };

        debug!(%placed, "Move applied");
        Ok(MoveOutcome {
            placed,
            board_after: self.state.board,
            next_turn: terminal.is_none().then_some(self.state.current),
            terminal,
        })
    }
}

/// Builds both players, X first.
///
/// X is always the first mover, whoever holds it. A random human marker
/// is decided here, once per game.
fn build_players<R: Rng>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<[Player; 2], ConfigurationError> {
    let difficulty = || {
        config
            .difficulty
            .ok_or_else(|| ConfigurationError::new("computer player requires a difficulty"))
    };

    let players = match config.mode {
        Mode::Pvp => [Player::human(Marker::X), Player::human(Marker::O)],
        Mode::Pvc => {
            let human = match config.human_marker {
                Some(MarkerChoice::X) => Marker::X,
                Some(MarkerChoice::O) => Marker::O,
                Some(MarkerChoice::Random) => {
                    if rng.random_bool(0.5) {
                        Marker::X
                    } else {
                        Marker::O
                    }
                }
                None => return Err(ConfigurationError::new("pvc mode requires a marker choice")),
            };
            let difficulty = difficulty()?;
            let for_marker = |marker: Marker| {
                if marker == human {
                    Player::human(marker)
                } else {
                    Player::computer(marker, difficulty)
                }
            };
            [for_marker(Marker::X), for_marker(Marker::O)]
        }
        Mode::Cvc => {
            let difficulty = difficulty()?;
            [
                Player::computer(Marker::X, difficulty),
                Player::computer(Marker::O, difficulty),
            ]
        }
    };
    Ok(players)
}

#[cfg(debug_assertions)]
fn assert_invariants(state: &SessionState) {
    use crate::invariants::{InvariantSet, SessionInvariants};

    if let Err(violations) = SessionInvariants::check_all(state) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Session invariant violated");
        }
        debug_assert!(false, "session invariants violated: {:?}", violations);
    }
}
