//! Player state - the per-competitor record owned by the registry

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points awarded for a win
pub const WIN_POINTS: u8 = 2;

/// Points awarded for a draw
pub const DRAW_POINTS: u8 = 1;

/// Points awarded for a bye
pub const BYE_POINTS: u8 = 2;

/// Colour assigned to a player for one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Bye,
}

impl Color {
    /// Single-letter marker used in pairing sheets
    pub fn marker(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
            Color::Bye => 'X',
        }
    }
}

/// Direct result against one opponent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadToHead {
    Win,
    Loss,
    Draw,
}

impl HeadToHead {
    /// The same result seen from the opponent's side
    pub fn mirrored(self) -> Self {
        match self {
            HeadToHead::Win => HeadToHead::Loss,
            HeadToHead::Loss => HeadToHead::Win,
            HeadToHead::Draw => HeadToHead::Draw,
        }
    }

    /// Derive the result from the points both sides scored
    pub fn from_points(points: u8, opponent_points: u8) -> Self {
        match points.cmp(&opponent_points) {
            std::cmp::Ordering::Greater => HeadToHead::Win,
            std::cmp::Ordering::Less => HeadToHead::Loss,
            std::cmp::Ordering::Equal => HeadToHead::Draw,
        }
    }
}

/// A registered competitor
///
/// Fields are crate-private: colours are only appended by the pairing
/// engine and scores/counters are only written by the score tracker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) score: u32,
    pub(crate) color_history: Vec<Color>,
    pub(crate) opponent_score_sum: f64,
    pub(crate) wins: u32,
    pub(crate) black_wins: u32,
    pub(crate) head_to_head: BTreeMap<String, HeadToHead>,
}

impl Player {
    /// Create a player with zeroed counters and empty history
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            color_history: Vec::new(),
            opponent_score_sum: 0.0,
            wins: 0,
            black_wins: 0,
            head_to_head: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accumulated points (win = 2, draw = 1, bye = 2)
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn color_history(&self) -> &[Color] {
        &self.color_history
    }

    /// Sum of opponents' scores, rounded to 2 decimals after each round
    pub fn opponent_score_sum(&self) -> f64 {
        self.opponent_score_sum
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn black_wins(&self) -> u32 {
        self.black_wins
    }

    pub fn head_to_head(&self) -> &BTreeMap<String, HeadToHead> {
        &self.head_to_head
    }

    /// Recorded result against `opponent`, if they have met
    pub fn result_against(&self, opponent: &str) -> Option<HeadToHead> {
        self.head_to_head.get(opponent).copied()
    }

    /// Number of rounds this player has been paired in (byes included)
    pub fn rounds_played(&self) -> usize {
        self.color_history.len()
    }

    /// Number of times this player had White
    pub fn white_count(&self) -> usize {
        self.count_color(Color::White)
    }

    /// Number of byes received
    pub fn bye_count(&self) -> usize {
        self.count_color(Color::Bye)
    }

    /// Colour of the most recent round, if any
    pub fn last_color(&self) -> Option<Color> {
        self.color_history.last().copied()
    }

    /// Colour in a given 1-based round
    pub fn color_in_round(&self, round: u32) -> Option<Color> {
        let idx = (round as usize).checked_sub(1)?;
        self.color_history.get(idx).copied()
    }

    fn count_color(&self, color: Color) -> usize {
        self.color_history.iter().filter(|&&c| c == color).count()
    }
}
