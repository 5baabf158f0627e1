//! Terminal Arcade - Unified CLI
//!
//! Interactive shell by default, with direct entry points for each game
//! and a batch simulator.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::Rng;
use terminal_arcade::{resolve_game_config, simulate, ArcadeConfig, Shell};
use tokio::io::{stdin, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArcadeConfig::load(&cli.config)?;
    initialize_tracing(config.log_level());

    let result = match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(config).await,
        Command::Tictactoe {
            mode,
            marker,
            difficulty,
            seed,
        } => run_tictactoe(config.with_seed(seed), mode, marker, difficulty).await,
        Command::Rps { target, seed } => run_rps(config.with_seed(seed), target).await,
        Command::Simulate {
            games,
            x_difficulty,
            o_difficulty,
            seed,
        } => run_simulate(config.with_seed(seed), games, x_difficulty, o_difficulty),
    };

    // A cancelled prompt leaves the stdin reader thread blocked; dropping
    // the runtime would wait on it forever.
    result?;
    std::process::exit(0)
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Forwards every Ctrl-C to the shell for as long as it is listening.
fn ctrl_c_interrupts() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            debug!("Ctrl-C received");
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

fn stdio_shell(config: ArcadeConfig) -> Shell<BufReader<tokio::io::Stdin>, std::io::Stdout> {
    Shell::new(BufReader::new(stdin()), std::io::stdout(), config)
        .with_interrupts(ctrl_c_interrupts())
}

/// Run the interactive arcade shell
#[instrument(skip(config))]
async fn run_shell(config: ArcadeConfig) -> Result<()> {
    info!("Starting arcade shell");
    stdio_shell(config).run().await
}

/// Run a single tic-tac-toe session
#[instrument(skip(config))]
async fn run_tictactoe(
    config: ArcadeConfig,
    mode: Option<arcade_tictactoe::Mode>,
    marker: Option<arcade_tictactoe::MarkerChoice>,
    difficulty: Option<arcade_tictactoe::Difficulty>,
) -> Result<()> {
    let game = resolve_game_config(config.tictactoe(), mode, marker, difficulty);
    info!(?game, "Starting tic-tac-toe");
    stdio_shell(config).play_tictactoe(game).await?;
    Ok(())
}

/// Run rock-paper-scissors
#[instrument(skip(config))]
async fn run_rps(config: ArcadeConfig, target: Option<u32>) -> Result<()> {
    let target = target.unwrap_or(*config.rps().target_score());
    info!(target, "Starting rock-paper-scissors");
    stdio_shell(config).play_rps(target).await?;
    Ok(())
}

/// Run a computer-vs-computer batch and print the totals
#[instrument(skip(config))]
fn run_simulate(
    config: ArcadeConfig,
    games: u32,
    x_difficulty: arcade_tictactoe::Difficulty,
    o_difficulty: arcade_tictactoe::Difficulty,
) -> Result<()> {
    let seed = (*config.seed()).unwrap_or_else(|| rand::rng().random());
    let report = simulate(games, x_difficulty, o_difficulty, seed)?;
    println!("x ({}) vs o ({}), seed {}", x_difficulty, o_difficulty, seed);
    println!("{}", report);
    Ok(())
}
