//! Command-line interface for terminal_arcade.

use arcade_tictactoe::{Difficulty, MarkerChoice, Mode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal Arcade - tic-tac-toe and rock-paper-scissors in a shell
#[derive(Parser, Debug)]
#[command(name = "terminal_arcade")]
#[command(about = "Small terminal arcade with a minimax tic-tac-toe opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the arcade config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "arcade.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the interactive shell)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive arcade shell
    Shell,

    /// Play one tic-tac-toe session directly
    Tictactoe {
        /// Game mode: pvp, pvc or cvc
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Human marker in pvc: x, o or random
        #[arg(long)]
        marker: Option<MarkerChoice>,

        /// Computer difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer players
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play rock-paper-scissors against the computer
    Rps {
        /// Points needed to win the match
        #[arg(short, long)]
        target: Option<u32>,

        /// Seed for the computer's choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run computer-vs-computer games without pacing and report results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty of the X player
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,

        /// Difficulty of the O player
        #[arg(long, default_value = "hard")]
        o_difficulty: Difficulty,

        /// Seed for the whole run
        #[arg(long)]
        seed: Option<u64>,
    },
}
