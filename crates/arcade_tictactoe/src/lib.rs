//! Tic-tac-toe engine for the terminal arcade.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid and move legality ([`Board`], [`Position`])
//! - **Rules**: pure win/tie/live evaluation ([`rules::evaluate`])
//! - **Search**: random and minimax move generators behind [`Difficulty`]
//! - **Players**: human or computer participants ([`Player`])
//! - **Session**: configuration, turn order and termination ([`Session`])
//!
//! The engine is synchronous and does no I/O. Pacing of computer moves
//! and cancellation of computer-vs-computer games belong to the caller.
//!
//! # Example
//!
//! ```
//! use arcade_tictactoe::{start_session, Difficulty, GameConfig, Status};
//!
//! let mut session = start_session(GameConfig::cvc(Difficulty::Hard))?;
//! let outcomes = session.run_computer_turns()?;
//! let last = outcomes.last().and_then(|o| o.terminal);
//! assert_eq!(last.map(|e| e.status), Some(Status::Tie));
//! # Ok::<(), arcade_tictactoe::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
pub mod invariants;
mod player;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use action::{Move, MoveOutcome};
pub use config::{GameConfig, MarkerChoice, Mode};
pub use error::{BoardParseError, ConfigurationError, MoveError, SessionError};
pub use player::{Player, PlayerKind};
pub use position::Position;
pub use rules::{evaluate, Evaluation, Status};
pub use search::{minimax_move, random_move, Difficulty, MinimaxSearch};
pub use session::{start_session, Phase, Session, SessionSnapshot, SessionState};
pub use types::{Board, Marker, Square, BOARD_SIZE};
