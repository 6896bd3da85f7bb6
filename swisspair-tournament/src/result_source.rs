//! Result capture - where round outcomes come from
//!
//! Level 3 - Step-level implementation

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use swisspair_core::{Match, Outcome};

use crate::error::TournamentError;

/// Supplies one outcome per table for a paired round
pub trait ResultSource {
    /// Outcomes for `matches`, in table order
    fn collect(&mut self, round: u32, matches: &[Match]) -> anyhow::Result<Vec<Outcome>>;
}

/// Random outcomes for simulation
pub struct RandomResults {
    rng: ChaCha8Rng,
    /// Probability that a game is drawn
    draw_rate: f64,
}

impl RandomResults {
    /// Create a source with a fixed seed
    ///
    /// `draw_rate` must be a probability in `[0, 1]`.
    pub fn new(seed: u64, draw_rate: f64) -> Result<Self, TournamentError> {
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            draw_rate: check_draw_rate(draw_rate)?,
        })
    }

    /// Create a source seeded from entropy
    pub fn from_entropy(draw_rate: f64) -> Result<Self, TournamentError> {
        Ok(Self {
            rng: ChaCha8Rng::from_entropy(),
            draw_rate: check_draw_rate(draw_rate)?,
        })
    }

    fn next_outcome(&mut self) -> Outcome {
        if self.rng.gen_bool(self.draw_rate) {
            Outcome::Draw
        } else if self.rng.gen_bool(0.5) {
            Outcome::WhiteWins
        } else {
            Outcome::BlackWins
        }
    }
}

impl ResultSource for RandomResults {
    fn collect(&mut self, _round: u32, matches: &[Match]) -> anyhow::Result<Vec<Outcome>> {
        Ok(matches
            .iter()
            .map(|m| {
                if m.is_bye() {
                    Outcome::Bye
                } else {
                    self.next_outcome()
                }
            })
            .collect())
    }
}

/// Reject NaN, infinities and anything outside `[0, 1]`
pub fn check_draw_rate(draw_rate: f64) -> Result<f64, TournamentError> {
    if (0.0..=1.0).contains(&draw_rate) {
        Ok(draw_rate)
    } else {
        Err(TournamentError::InvalidConfig(format!(
            "draw rate {} is not a probability between 0 and 1",
            draw_rate
        )))
    }
}

/// Pre-recorded outcomes, one list per round
pub struct ScriptedResults {
    rounds: std::vec::IntoIter<Vec<Outcome>>,
}

impl ScriptedResults {
    pub fn new(rounds: Vec<Vec<Outcome>>) -> Self {
        Self {
            rounds: rounds.into_iter(),
        }
    }
}

impl ResultSource for ScriptedResults {
    fn collect(&mut self, round: u32, _matches: &[Match]) -> anyhow::Result<Vec<Outcome>> {
        self.rounds
            .next()
            .ok_or_else(|| anyhow::anyhow!("No scripted results for round {}", round))
    }
}
