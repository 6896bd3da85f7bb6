//! Match, outcome and result types exchanged with the outside world

use serde::{Deserialize, Serialize};

use crate::player::{Color, DRAW_POINTS, WIN_POINTS};

/// Who sits at a table: two players, or one player with a bye
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pairing {
    Game { white: String, black: String },
    Bye { player: String },
}

/// One table of one round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based round number
    pub round: u32,
    /// 1-based table number (order in which the pair was committed)
    pub table: usize,
    pub pairing: Pairing,
}

impl Match {
    pub fn is_bye(&self) -> bool {
        matches!(self.pairing, Pairing::Bye { .. })
    }

    /// Names of everyone seated at this table
    pub fn players(&self) -> Vec<&str> {
        match &self.pairing {
            Pairing::Game { white, black } => vec![white.as_str(), black.as_str()],
            Pairing::Bye { player } => vec![player.as_str()],
        }
    }

    pub fn involves(&self, name: &str) -> bool {
        self.players().contains(&name)
    }

    /// Colour `name` received at this table
    pub fn color_of(&self, name: &str) -> Option<Color> {
        match &self.pairing {
            Pairing::Game { white, .. } if white == name => Some(Color::White),
            Pairing::Game { black, .. } if black == name => Some(Color::Black),
            Pairing::Bye { player } if player == name => Some(Color::Bye),
            _ => None,
        }
    }

    /// Opponent of `name` at this table (None for a bye or a stranger)
    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        match &self.pairing {
            Pairing::Game { white, black } if white == name => Some(black.as_str()),
            Pairing::Game { white, black } if black == name => Some(white.as_str()),
            _ => None,
        }
    }

    /// Convert a reported outcome into a result entry for the score tracker
    ///
    /// Decisive games list the winner first, draws list White first.
    /// Returns None when the outcome does not fit the table (a bye outcome
    /// for a game, or a game outcome for a bye).
    pub fn result(&self, outcome: Outcome) -> Option<RoundResult> {
        match (&self.pairing, outcome) {
            (Pairing::Game { white, black }, Outcome::WhiteWins) => {
                Some(RoundResult::game(white, WIN_POINTS, black, 0))
            }
            (Pairing::Game { white, black }, Outcome::BlackWins) => {
                Some(RoundResult::game(black, WIN_POINTS, white, 0))
            }
            (Pairing::Game { white, black }, Outcome::Draw) => {
                Some(RoundResult::game(white, DRAW_POINTS, black, DRAW_POINTS))
            }
            (Pairing::Bye { player }, Outcome::Bye) => Some(RoundResult::Bye {
                player: player.clone(),
            }),
            _ => None,
        }
    }
}

/// Outcome reported for one table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    Bye,
}

impl Outcome {
    /// Points for (white, black); a bye credits its player as "white"
    pub fn points(self) -> (u8, u8) {
        match self {
            Outcome::WhiteWins => (WIN_POINTS, 0),
            Outcome::BlackWins => (0, WIN_POINTS),
            Outcome::Draw => (DRAW_POINTS, DRAW_POINTS),
            Outcome::Bye => (WIN_POINTS, 0),
        }
    }
}

/// Result entry applied by the score tracker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    Game {
        first: String,
        first_points: u8,
        second: String,
        second_points: u8,
    },
    Bye {
        player: String,
    },
}

impl RoundResult {
    pub fn game(first: &str, first_points: u8, second: &str, second_points: u8) -> Self {
        RoundResult::Game {
            first: first.to_string(),
            first_points,
            second: second.to_string(),
            second_points,
        }
    }

    pub fn bye(player: &str) -> Self {
        RoundResult::Bye {
            player: player.to_string(),
        }
    }
}
