//! Line-based arcade shell.
//!
//! The shell reads commands from any async line source and writes to any
//! [`Write`] sink, so the same loop drives stdin/stdout and scripted tests.

mod rps;
mod tictactoe;

use crate::config::{resolve_game_config, ArcadeConfig};
use arcade_tictactoe::{Difficulty, MarkerChoice, Mode};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, instrument};

const BANNER: &[&str] = &[
    "+----------------------+",
    "|   terminal  arcade   |",
    "+----------------------+",
];

const HELP: &str = "\
commands:
  help                                  show this list
  games                                 list the games
  play tictactoe [mode] [marker] [difficulty]
                                        mode: pvp, pvc, cvc
                                        marker: x, o, random (pvc only)
                                        difficulty: easy, medium, hard
  play rps                              rock-paper-scissors, first to the target score
  settings                              show the active settings
  clear                                 clear the screen
  quit                                  leave the arcade";

/// How a game handed control back to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Back to the shell prompt.
    Home,
    /// Leave the arcade.
    Quit,
}

/// Choice made on the game-over menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Again,
    Home,
    Quit,
}

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Blank line.
    Empty,
    /// Show the command list.
    Help,
    /// List the games.
    Games,
    /// Show the active settings.
    Settings,
    /// Clear the screen.
    Clear,
    /// Leave the arcade.
    Quit,
    /// Start tic-tac-toe, overriding the configured defaults.
    PlayTicTacToe {
        /// Game mode.
        mode: Option<Mode>,
        /// Human marker for player-vs-computer.
        marker: Option<MarkerChoice>,
        /// Computer difficulty.
        difficulty: Option<Difficulty>,
    },
    /// Start rock-paper-scissors.
    PlayRps,
}

/// Error parsing a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// First word is not a command.
    #[display("unknown command: {}", _0)]
    Unknown(#[error(not(source))] String),

    /// `play` without a game name.
    #[display("usage: play <tictactoe|rps> [options]")]
    MissingGame,

    /// `play` with a name that is not a game.
    #[display("unknown game: {}", _0)]
    UnknownGame(#[error(not(source))] String),

    /// Game option that is not a mode, marker or difficulty.
    #[display("unrecognised option: {}", _0)]
    UnknownOption(#[error(not(source))] String),
}

impl FromStr for ShellCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_ascii_lowercase();
        let mut words = lowered.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(ShellCommand::Empty);
        };

        match first {
            "help" | "?" => Ok(ShellCommand::Help),
            "games" | "ls" => Ok(ShellCommand::Games),
            "settings" => Ok(ShellCommand::Settings),
            "clear" | "cls" => Ok(ShellCommand::Clear),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            "play" => match words.next() {
                None => Err(CommandError::MissingGame),
                Some("tictactoe" | "tic-tac-toe" | "ttt") => parse_tictactoe_options(words),
                Some("rps" | "rock-paper-scissors") => Ok(ShellCommand::PlayRps),
                Some(other) => Err(CommandError::UnknownGame(other.to_string())),
            },
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_tictactoe_options<'a>(
    words: impl Iterator<Item = &'a str>,
) -> Result<ShellCommand, CommandError> {
    let (mut mode, mut marker, mut difficulty) = (None, None, None);
    for word in words {
        if let Ok(m) = word.parse::<Mode>() {
            mode = Some(m);
        } else if let Ok(d) = word.parse::<Difficulty>() {
            difficulty = Some(d);
        } else if let Ok(m) = word.parse::<MarkerChoice>() {
            marker = Some(m);
        } else {
            return Err(CommandError::UnknownOption(word.to_string()));
        }
    }
    Ok(ShellCommand::PlayTicTacToe {
        mode,
        marker,
        difficulty,
    })
}

/// Interactive arcade shell.
pub struct Shell<R, W> {
    input: Lines<R>,
    input_closed: bool,
    interrupts: Option<UnboundedReceiver<()>>,
    out: W,
    config: ArcadeConfig,
    rng: StdRng,
}

/// Resolves on the next interrupt; never resolves without a live source.
async fn next_interrupt(interrupts: &mut Option<UnboundedReceiver<()>>) {
    if let Some(rx) = interrupts
        && rx.recv().await.is_some()
    {
        return;
    }
    std::future::pending::<()>().await
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a shell reading lines from `input` and writing to `out`.
    ///
    /// Every game's randomness is drawn from one generator, seeded from
    /// the config when it carries a seed.
    pub fn new(input: R, out: W, config: ArcadeConfig) -> Self {
        let seed = (*config.seed()).unwrap_or_else(|| rand::rng().random());
        debug!(seed, "Seeding shell");
        Self {
            input: input.lines(),
            input_closed: false,
            interrupts: None,
            out,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Routes interrupts (Ctrl-C in the binary) into the shell.
    ///
    /// An interrupt cancels a paced computer move. Anywhere else it ends
    /// input, so the shell leaves as if `quit` had been typed.
    pub fn with_interrupts(mut self, interrupts: UnboundedReceiver<()>) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    /// Active settings.
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Consumes the shell, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the command loop until `quit` or end of input.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!("Arcade shell started");
        for line in BANNER {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "type help for commands")?;

        loop {
            self.prompt("")?;
            let Some(line) = self.read_line().await? else {
                break;
            };

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.out, "{}, type help for commands", e)?;
                    continue;
                }
            };
            debug!(?command, "Shell command");

            let exit = match command {
                ShellCommand::Empty => Exit::Home,
                ShellCommand::Help => {
                    writeln!(self.out, "{}", HELP)?;
                    Exit::Home
                }
                ShellCommand::Games => {
                    writeln!(self.out, "tictactoe  tic-tac-toe against a friend or the computer")?;
                    writeln!(self.out, "rps        rock-paper-scissors against the computer")?;
                    Exit::Home
                }
                ShellCommand::Settings => {
                    write!(self.out, "{}", toml::to_string(&self.config)?)?;
                    Exit::Home
                }
                ShellCommand::Clear => {
                    write!(self.out, "\x1b[2J\x1b[H")?;
                    Exit::Home
                }
                ShellCommand::Quit => Exit::Quit,
                ShellCommand::PlayTicTacToe {
                    mode,
                    marker,
                    difficulty,
                } => {
                    let game =
                        resolve_game_config(self.config.tictactoe(), mode, marker, difficulty);
                    self.play_tictactoe(game).await?
                }
                ShellCommand::PlayRps => {
                    let target = *self.config.rps().target_score();
                    self.play_rps(target).await?
                }
            };

            if exit == Exit::Quit {
                break;
            }
        }

        writeln!(self.out, "bye")?;
        info!("Arcade shell closed");
        Ok(())
    }

    /// Reads one line; `None` once input is exhausted or interrupted.
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        if self.input_closed {
            return Ok(None);
        }
        let line = tokio::select! {
            biased;
            _ = next_interrupt(&mut self.interrupts) => {
                info!("Interrupted at prompt");
                writeln!(self.out)?;
                self.input_closed = true;
                return Ok(None);
            }
            line = self.input.next_line() => line?,
        };
        if line.is_none() {
            self.input_closed = true;
        }
        Ok(line)
    }

    fn prompt(&mut self, path: &str) -> std::io::Result<()> {
        write!(self.out, "arcade/{}> ", path)?;
        self.out.flush()
    }

    /// Asks whether to play again; unknown answers ask again.
    async fn game_over_menu(&mut self, path: &str) -> anyhow::Result<MenuChoice> {
        loop {
            writeln!(self.out, "play again? (again/home)")?;
            self.prompt(path)?;
            let Some(line) = self.read_line().await? else {
                return Ok(MenuChoice::Quit);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "again" | "a" | "y" | "yes" | "play again" => return Ok(MenuChoice::Again),
                "home" | "h" | "n" | "no" | "back" => return Ok(MenuChoice::Home),
                "quit" | "exit" => return Ok(MenuChoice::Quit),
                _ => continue,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("".parse::<ShellCommand>(), Ok(ShellCommand::Empty));
        assert_eq!("  HELP ".parse::<ShellCommand>(), Ok(ShellCommand::Help));
        assert_eq!("exit".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
        assert_eq!("play rps".parse::<ShellCommand>(), Ok(ShellCommand::PlayRps));
    }

    #[test]
    fn test_parse_tictactoe_options_in_any_order() {
        assert_eq!(
            "play ttt hard o pvc".parse::<ShellCommand>(),
            Ok(ShellCommand::PlayTicTacToe {
                mode: Some(Mode::Pvc),
                marker: Some(MarkerChoice::O),
                difficulty: Some(Difficulty::Hard),
            })
        );
        assert_eq!(
            "play tictactoe".parse::<ShellCommand>(),
            Ok(ShellCommand::PlayTicTacToe {
                mode: None,
                marker: None,
                difficulty: None,
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "dance".parse::<ShellCommand>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!("play".parse::<ShellCommand>(), Err(CommandError::MissingGame));
        assert_eq!(
            "play chess".parse::<ShellCommand>(),
            Err(CommandError::UnknownGame("chess".to_string()))
        );
        assert_eq!(
            "play tictactoe impossible".parse::<ShellCommand>(),
            Err(CommandError::UnknownOption("impossible".to_string()))
        );
    }
}
