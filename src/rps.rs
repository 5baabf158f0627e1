//! Rock-paper-scissors match engine.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// One hand shape.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Choice {
    /// Beats scissors.
    #[strum(to_string = "rock", serialize = "r")]
    Rock,
    /// Beats rock.
    #[strum(to_string = "paper", serialize = "p")]
    Paper,
    /// Beats paper.
    #[strum(to_string = "scissors", serialize = "s")]
    Scissors,
}

impl Choice {
    /// True if `self` wins against `other`.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }

    /// Uniformly random choice.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let all: Vec<Choice> = Choice::iter().collect();
        all[rng.random_range(0..all.len())]
    }
}

/// Side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The human.
    P1,
    /// The computer.
    P2,
}

/// Result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number, starting at 1.
    pub number: u32,
    /// Player one's shape.
    pub p1: Choice,
    /// Player two's shape.
    pub p2: Choice,
    /// Round winner; `None` for a tie.
    pub winner: Option<Side>,
    /// Match winner if this round decided it.
    pub match_winner: Option<Side>,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            None => write!(f, "round ended in a tie"),
            Some(Side::P1) => write!(f, "p1 wins: {} beats {}", self.p1, self.p2),
            Some(Side::P2) => write!(f, "p2 wins: {} beats {}", self.p2, self.p1),
        }
    }
}

/// Rock-paper-scissors errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RpsError {
    /// A round was played after the match was decided.
    #[display("Match is already over")]
    MatchOver,
    /// Target score of zero.
    #[display("Target score must be at least 1")]
    InvalidTarget,
}

/// First-to-target match between two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RpsMatch {
    target: u32,
    p1_score: u32,
    p2_score: u32,
    round: u32,
    winner: Option<Side>,
}

impl RpsMatch {
    /// Creates a match won by the first side to reach `target` points.
    pub fn new(target: u32) -> Result<Self, RpsError> {
        if target == 0 {
            return Err(RpsError::InvalidTarget);
        }
        Ok(Self {
            target,
            p1_score: 0,
            p2_score: 0,
            round: 1,
            winner: None,
        })
    }

    /// True once one side has reached the target.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Plays a round.
    ///
    /// The round counter only advances while the match stays live.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_round(&mut self, p1: Choice, p2: Choice) -> Result<Round, RpsError> {
        if self.is_over() {
            return Err(RpsError::MatchOver);
        }

        let winner = if p1.beats(p2) {
            self.p1_score += 1;
            Some(Side::P1)
        } else if p2.beats(p1) {
            self.p2_score += 1;
            Some(Side::P2)
        } else {
            None
        };

        if self.p1_score == self.target {
            self.winner = Some(Side::P1);
        } else if self.p2_score == self.target {
            self.winner = Some(Side::P2);
        }

        let round = Round {
            number: self.round,
            p1,
            p2,
            winner,
            match_winner: self.winner,
        };
        debug!(?winner, p1 = self.p1_score, p2 = self.p2_score, "Round played");

        match self.winner {
            Some(side) => info!(%side, "Match over"),
            None => self.round += 1,
        }
        Ok(round)
    }
}
