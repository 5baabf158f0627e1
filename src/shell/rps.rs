//! Rock-paper-scissors in the shell.

use super::{Exit, MenuChoice, Shell};
use crate::rps::{Choice, RpsMatch};
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{info, instrument};

const PATH: &str = "rps";

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Plays first-to-`target` matches until the player goes home or quits.
    #[instrument(skip(self))]
    pub async fn play_rps(&mut self, target: u32) -> anyhow::Result<Exit> {
        loop {
            let mut game = RpsMatch::new(target)?;
            writeln!(self.out, "first to {} points wins", target)?;

            while !game.is_over() {
                writeln!(
                    self.out,
                    "round {}  p1: {}  p2: {}",
                    game.round(),
                    game.p1_score(),
                    game.p2_score()
                )?;
                self.prompt(PATH)?;
                let Some(line) = self.read_line().await? else {
                    return Ok(Exit::Quit);
                };

                let line = line.trim().to_ascii_lowercase();
                match line.as_str() {
                    "" => continue,
                    "quit" | "exit" => return Ok(Exit::Quit),
                    "home" | "back" => return Ok(Exit::Home),
                    _ => {}
                }
                let Ok(p1) = line.parse::<Choice>() else {
                    writeln!(self.out, "choose rock, paper or scissors (r/p/s)")?;
                    continue;
                };

                tokio::time::sleep(self.config.ai_move_delay()).await;
                let p2 = Choice::random(&mut self.rng);
                let round = game.play_round(p1, p2)?;
                writeln!(self.out, "p1: {}  p2: {}", p1, p2)?;
                writeln!(self.out, "{}", round)?;
            }

            if let Some(side) = game.winner() {
                writeln!(self.out, "game over, {} wins", side)?;
                info!(%side, rounds = game.round(), "Match over");
            }

            tokio::time::sleep(self.config.game_over_delay()).await;
            match self.game_over_menu(PATH).await? {
                MenuChoice::Again => continue,
                MenuChoice::Home => return Ok(Exit::Home),
                MenuChoice::Quit => return Ok(Exit::Quit),
            }
        }
    }
}
