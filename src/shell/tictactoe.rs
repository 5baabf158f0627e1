//! Tic-tac-toe in the shell.

use super::{Exit, MenuChoice, Shell};
use arcade_tictactoe::{
    GameConfig, MoveError, MoveOutcome, Phase, Position, Session, SessionError, BOARD_SIZE,
};
use rand::Rng;
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{debug, info, instrument, warn};

const PATH: &str = "tictactoe";

/// Outcome of waiting out a computer move.
enum Pause {
    Elapsed,
    Cancelled,
}

/// Outcome of prompting the human for a square.
enum HumanTurn {
    Played(MoveOutcome),
    Left(Exit),
}

/// Parses a square typed by a human: 1-9 or a name such as "top-left".
pub fn parse_square(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return (1..=BOARD_SIZE).contains(&number).then(|| number - 1);
    }
    Position::from_label_or_number(input).map(Position::to_index)
}

fn is_stop(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "quit" | "exit" | "stop")
}

fn describe_illegal(err: MoveError) -> String {
    match err {
        MoveError::SquareOccupied(index) => format!("square {} is taken", index + 1),
        MoveError::OutOfRange(_) => "choose a square from 1 to 9".to_string(),
        other => other.to_string().to_lowercase(),
    }
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Plays tic-tac-toe until the player goes home or quits.
    ///
    /// A rejected configuration is reported and returns to the shell.
    #[instrument(skip(self))]
    pub async fn play_tictactoe(&mut self, config: GameConfig) -> anyhow::Result<Exit> {
        let mut session = match Session::with_seed(config, self.rng.random()) {
            Ok(session) => session,
            Err(SessionError::Configuration(e)) => {
                warn!(error = %e, "Rejected game settings");
                writeln!(self.out, "invalid settings: {}", e.message)?;
                return Ok(Exit::Home);
            }
            Err(e) => return Err(e.into()),
        };

        loop {
            session.start()?;
            if let Some(players) = session.players() {
                writeln!(self.out, "{} vs {}", players[0], players[1])?;
            }
            writeln!(self.out, "{}", session.state().board())?;

            if let Some(exit) = self.play_turns(&mut session).await? {
                return Ok(exit);
            }

            let state = session.state();
            writeln!(self.out, "{}", state.status())?;
            if let Some(line) = state.winning_line() {
                let squares: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
                writeln!(self.out, "winning line: {}", squares.join("-"))?;
            }
            info!(status = %state.status(), moves = state.history().len(), "Game over");

            tokio::time::sleep(self.config.game_over_delay()).await;
            match self.game_over_menu(PATH).await? {
                MenuChoice::Again => session.reset(),
                MenuChoice::Home => return Ok(Exit::Home),
                MenuChoice::Quit => return Ok(Exit::Quit),
            }
        }
    }

    /// Drives turns until the session is terminal, or returns early if
    /// the player leaves.
    async fn play_turns(&mut self, session: &mut Session) -> anyhow::Result<Option<Exit>> {
        let all_computer = session
            .players()
            .is_some_and(|players| players.iter().all(|p| p.is_computer()));

        while session.phase() == Phase::Active {
            writeln!(self.out, "{}'s turn", session.state().current())?;

            let outcome = if session.is_computer_turn() {
                match self.computer_pause(all_computer).await? {
                    Pause::Elapsed => session.step_computer_turn()?,
                    Pause::Cancelled => {
                        info!("Auto-play cancelled");
                        writeln!(self.out, "auto-play cancelled")?;
                        session.reset();
                        return Ok(Some(Exit::Home));
                    }
                }
            } else {
                match self.human_turn(session).await? {
                    HumanTurn::Played(outcome) => outcome,
                    HumanTurn::Left(exit) => {
                        session.reset();
                        return Ok(Some(exit));
                    }
                }
            };

            writeln!(self.out, "{}", outcome.placed)?;
            writeln!(self.out, "{}", outcome.board_after)?;
        }
        Ok(None)
    }

    /// Waits out the computer-move delay.
    ///
    /// An interrupt cancels. When `watch_input` is set, typing `quit`
    /// cancels too.
    async fn computer_pause(&mut self, watch_input: bool) -> anyhow::Result<Pause> {
        let delay = self.config.ai_move_delay();
        if delay.is_zero() {
            return Ok(Pause::Elapsed);
        }

        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                biased;
                _ = super::next_interrupt(&mut self.interrupts) => return Ok(Pause::Cancelled),
                _ = &mut sleep => return Ok(Pause::Elapsed),
                line = self.input.next_line(), if watch_input && !self.input_closed => {
                    match line? {
                        None => self.input_closed = true,
                        Some(line) if is_stop(&line) => return Ok(Pause::Cancelled),
                        Some(_) => writeln!(self.out, "computers are playing, type quit to stop")?,
                    }
                }
            }
        }
    }

    /// Prompts until the human enters a legal square or leaves.
    async fn human_turn(&mut self, session: &mut Session) -> anyhow::Result<HumanTurn> {
        loop {
            self.prompt(PATH)?;
            let Some(line) = self.read_line().await? else {
                return Ok(HumanTurn::Left(Exit::Quit));
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "" => continue,
                "quit" | "exit" => return Ok(HumanTurn::Left(Exit::Quit)),
                "home" | "back" => return Ok(HumanTurn::Left(Exit::Home)),
                "board" => {
                    writeln!(self.out, "{}", session.state().board())?;
                    continue;
                }
                "help" => {
                    writeln!(self.out, "enter a square 1-9 or a name like top-left, home to leave")?;
                    continue;
                }
                _ => {}
            }

            let Some(index) = parse_square(&line) else {
                writeln!(self.out, "unrecognised square: {}", line.trim())?;
                continue;
            };

            match session.submit_human_move(index) {
                Ok(outcome) => return Ok(HumanTurn::Played(outcome)),
                Err(SessionError::IllegalMove(e)) if e.is_illegal_move() => {
                    debug!(error = %e, "Rejected human move");
                    writeln!(self.out, "{}, try again", describe_illegal(e))?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
