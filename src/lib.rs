//! Terminal Arcade library - shell and games around the tic-tac-toe engine
//!
//! The engine itself lives in `arcade_tictactoe`; this crate adds the
//! interactive shell, rock-paper-scissors, batch simulation and
//! TOML configuration.
//!
//! # Architecture
//!
//! - **Config**: arcade settings loaded from TOML ([`ArcadeConfig`])
//! - **Shell**: line-based command loop over any async reader ([`Shell`])
//! - **Rps**: first-to-target rock-paper-scissors ([`RpsMatch`])
//! - **Simulate**: unpaced computer-vs-computer batches ([`simulate()`])
//!
//! # Example
//!
//! ```
//! use terminal_arcade::{ArcadeConfig, Shell};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ArcadeConfig::default().with_delays(0, 0);
//! let script = "play tictactoe cvc hard\nhome\nquit\n";
//! let mut shell = Shell::new(script.as_bytes(), Vec::new(), config);
//! shell.run().await?;
//! let output = String::from_utf8(shell.into_output())?;
//! assert!(output.contains("tie game"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod rps;
mod shell;
mod simulate;

// Crate-level exports - Configuration
pub use config::{resolve_game_config, ArcadeConfig, ConfigError, RpsConfig};

// Crate-level exports - Rock-paper-scissors
pub use rps::{Choice, Round, RpsError, RpsMatch, Side};

// Crate-level exports - Shell
pub use shell::{CommandError, Exit, Shell, ShellCommand};

// Crate-level exports - Simulation
pub use simulate::{play_game, simulate, SimulationReport};
