//! Tournament execution - Swiss rounds over a player registry
//!
//! Level 1 - Orchestration and Level 2 - Phases

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use swisspair_core::{
    apply_results, pair_round, rank_players, Match, Outcome, PlayedPairs, PlayerRegistry,
    RoundResult, Standing, SwissError,
};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::result_source::ResultSource;
use crate::summary::TournamentSummary;

/// A completed round: pairings and the outcome reported at each table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub matches: Vec<Match>,
    pub outcomes: Vec<Outcome>,
}

impl RoundRecord {
    /// Matches paired with their outcomes, in table order
    pub fn tables(&self) -> impl Iterator<Item = (&Match, Outcome)> {
        self.matches.iter().zip(self.outcomes.iter().copied())
    }
}

/// A Swiss tournament in progress
///
/// Each round is paired with `pair_next_round`, then closed with
/// `submit_results`. Only one round can be open at a time.
pub struct Tournament {
    config: TournamentConfig,
    registry: PlayerRegistry,
    played: PlayedPairs,
    rng: ChaCha8Rng,
    history: Vec<RoundRecord>,
    pending: Option<Vec<Match>>,
    ended_early: bool,
}

impl Tournament {
    /// Register the roster and check the configuration
    pub fn new<I, S>(names: I, config: TournamentConfig) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = PlayerRegistry::from_names(names)?;
        config.validate(registry.len())?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        tracing::info!(
            "New tournament: {} players, {} rounds",
            registry.len(),
            config.rounds
        );

        Ok(Self {
            config,
            registry,
            played: PlayedPairs::new(),
            rng,
            history: Vec::new(),
            pending: None,
            ended_early: false,
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Read-only view of every player
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn played_pairs(&self) -> &PlayedPairs {
        &self.played
    }

    /// Completed rounds, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Pairings of the round awaiting results, if any
    pub fn pending(&self) -> Option<&[Match]> {
        self.pending.as_deref()
    }

    pub fn rounds_completed(&self) -> u32 {
        self.history.len() as u32
    }

    /// Whether every configured round has been scored, or pairing ran dry
    pub fn is_complete(&self) -> bool {
        self.ended_early || self.rounds_completed() >= self.config.rounds
    }

    /// Whether the tournament stopped before its last round
    pub fn ended_early(&self) -> bool {
        self.ended_early
    }

    /// Current standings
    pub fn standings(&self) -> Vec<Standing> {
        rank_players(&self.registry)
    }

    /// Full summary: standings, rounds and per-player cross-table
    pub fn summary(&self) -> TournamentSummary {
        TournamentSummary::build(&self.registry, &self.history)
    }

    // ========================================================================
    // Level 1 - Orchestration
    // ========================================================================

    /// Play every remaining round against `source`
    ///
    /// Stops early, without error, if a round cannot be paired.
    pub fn run<S: ResultSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> anyhow::Result<TournamentSummary> {
        while !self.is_complete() {
            let round = self.rounds_completed() + 1;
            let matches = match self.pair_next_round() {
                Ok(matches) => matches.to_vec(),
                Err(TournamentError::Core(SwissError::PairingExhausted { .. })) => {
                    tracing::warn!("Unable to pair round {}; ending tournament early", round);
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let outcomes = source.collect(round, &matches)?;
            self.submit_results(&outcomes)?;
        }

        tracing::info!("Tournament finished after {} rounds", self.rounds_completed());
        Ok(self.summary())
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Pair the next round
    ///
    /// A pairing failure ends the tournament. Scores and colour histories
    /// are untouched, but the registry keeps the pairing order it was
    /// sorted into.
    pub fn pair_next_round(&mut self) -> Result<&[Match], TournamentError> {
        if let Some(matches) = &self.pending {
            let round = matches.first().map(|m| m.round).unwrap_or_default();
            return Err(TournamentError::RoundPending(round));
        }
        if self.is_complete() {
            return Err(TournamentError::TournamentComplete);
        }

        let round = self.rounds_completed() + 1;
        let matches = match pair_round(&mut self.registry, &self.played, round, &mut self.rng) {
            Ok(matches) => matches,
            Err(e @ SwissError::PairingExhausted { .. }) => {
                self.ended_early = true;
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!("Round {} paired: {} tables", round, matches.len());
        Ok(self.pending.insert(matches).as_slice())
    }

    /// Close the pending round with one outcome per table
    ///
    /// Either the whole round is applied or nothing is.
    pub fn submit_results(&mut self, outcomes: &[Outcome]) -> Result<(), TournamentError> {
        let matches = self.pending.as_ref().ok_or(TournamentError::NoPendingRound)?;
        let results = round_results(matches, outcomes)?;

        apply_results(&mut self.registry, &results)?;

        let matches = self.pending.take().unwrap_or_default();
        register_pairs(&mut self.played, &matches)?;

        let round = matches.first().map(|m| m.round).unwrap_or_default();
        tracing::info!("Round {} scored", round);
        self.history.push(RoundRecord {
            round,
            matches,
            outcomes: outcomes.to_vec(),
        });
        Ok(())
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Turn table outcomes into score-tracker entries
fn round_results(matches: &[Match], outcomes: &[Outcome]) -> Result<Vec<RoundResult>, TournamentError> {
    if matches.len() != outcomes.len() {
        return Err(TournamentError::OutcomeCountMismatch {
            expected: matches.len(),
            actual: outcomes.len(),
        });
    }

    matches
        .iter()
        .zip(outcomes)
        .map(|(m, &outcome)| {
            m.result(outcome)
                .ok_or(TournamentError::OutcomeMismatch { table: m.table })
        })
        .collect()
}

/// Record every game of a scored round as played (byes are not pairs)
fn register_pairs(played: &mut PlayedPairs, matches: &[Match]) -> Result<(), SwissError> {
    for m in matches {
        if let swisspair_core::Pairing::Game { white, black } = &m.pairing {
            played.insert(white, black)?;
        }
    }
    Ok(())
}
