//! Unpaced computer-vs-computer batches.

use arcade_tictactoe::{evaluate, Board, Difficulty, Marker, MoveError, Status};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Totals from a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct SimulationReport {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: x won {}, o won {}, {} ties",
            self.games, self.x_wins, self.o_wins, self.ties
        )
    }
}

/// Plays one game between two difficulties and returns the final status.
///
/// X always moves first.
pub fn play_game(x: Difficulty, o: Difficulty, rng: &mut StdRng) -> Result<Status, MoveError> {
    let mut board = Board::new();
    let mut to_move = Marker::X;
    loop {
        let eval = evaluate(&board);
        if eval.is_terminal() {
            return Ok(eval.status);
        }
        let difficulty = match to_move {
            Marker::X => x,
            Marker::O => o,
        };
        let index = difficulty.choose_move(&board, to_move, rng)?;
        board.apply(index, to_move)?;
        to_move = to_move.opponent();
    }
}

/// Plays `games` games with one seeded random source.
#[instrument]
pub fn simulate(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: u64,
) -> Result<SimulationReport, MoveError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = SimulationReport {
        games,
        ..SimulationReport::default()
    };

    for game in 0..games {
        let status = play_game(x, o, &mut rng)?;
        debug!(game, %status, "Game finished");
        match status {
            Status::Win(Marker::X) => report.x_wins += 1,
            Status::Win(Marker::O) => report.o_wins += 1,
            Status::Tie => report.ties += 1,
            Status::Live => {}
        }
    }

    info!(%report, "Simulation complete");
    Ok(report)
}
