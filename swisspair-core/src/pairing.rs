//! Pairing engine - greedy Swiss pairing with rematch avoidance
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: pair_round (orchestration)
//! - Level 2: order_players, plan_pairs, commit_plan (phases)
//! - Level 3: choose_colors (steps)
//!
//! The matching pass is single-pass and non-backtracking: each unpaired
//! player takes the first later player they have not met. It can fail to
//! find a complete pairing even when one exists; that case is reported as
//! `SwissError::PairingExhausted` and no colours are written.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SwissError};
use crate::matches::{Match, Pairing};
use crate::player::{Color, Player};
use crate::registry::{PlayedPairs, PlayerRegistry, MIN_ROSTER};

/// A committed pair before colours are written: (white index, black index)
type PlannedPair = (usize, usize);

/// Planned round: pairs in table order plus the optional bye
struct RoundPlan {
    pairs: Vec<PlannedPair>,
    bye: Option<usize>,
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Pair one round
///
/// Round 1 shuffles the roster with `rng`; later rounds sort it by
/// `(score, opponent_score_sum)` descending. Appends each player's colour
/// for this round to their history. Does not touch scores or `played`;
/// the caller registers the committed pairs once the round is scored.
///
/// # Arguments
/// * `registry` - Players; reordered into pairing order as a side effect
/// * `played` - Pairs that have already met
/// * `round` - 1-based round number
/// * `rng` - Randomness source for the round-1 shuffle
///
/// # Returns
/// Matches in table order, every player appearing exactly once
pub fn pair_round<R: Rng + ?Sized>(
    registry: &mut PlayerRegistry,
    played: &PlayedPairs,
    round: u32,
    rng: &mut R,
) -> Result<Vec<Match>> {
    if round == 0 {
        return Err(SwissError::InvalidRound(round));
    }
    if registry.len() < MIN_ROSTER {
        return Err(SwissError::TooFewPlayers(registry.len()));
    }

    order_players(registry, round, rng);

    let plan = plan_pairs(registry.players(), played);
    let unpaired = unpaired_names(registry.players(), &plan);
    if !unpaired.is_empty() {
        tracing::warn!(
            "Round {}: greedy pairing left {} player(s) without an opponent",
            round,
            unpaired.len()
        );
        return Err(SwissError::PairingExhausted { round, unpaired });
    }

    Ok(commit_plan(registry, plan, round))
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Put the registry into pairing order for `round`
fn order_players<R: Rng + ?Sized>(registry: &mut PlayerRegistry, round: u32, rng: &mut R) {
    if round == 1 {
        registry.reorder(|players| players.shuffle(rng));
    } else {
        // Stable: equal keys keep the previous round's order
        registry.reorder(|players| {
            players.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| b.opponent_score_sum.total_cmp(&a.opponent_score_sum))
            })
        });
    }
}

/// Greedy forward scan over players in pairing order
fn plan_pairs(players: &[Player], played: &PlayedPairs) -> RoundPlan {
    let n = players.len();
    let mut paired = vec![false; n];
    let mut pairs = Vec::with_capacity(n / 2);

    for i in 0..n {
        if paired[i] {
            continue;
        }

        for j in (i + 1)..n {
            if paired[j] || played.contains(&players[i].name, &players[j].name) {
                continue;
            }

            let pair = if choose_colors(&players[i], &players[j]) {
                (i, j)
            } else {
                (j, i)
            };
            pairs.push(pair);
            paired[i] = true;
            paired[j] = true;
            break;
        }
    }

    let leftovers: Vec<usize> = (0..n).filter(|&i| !paired[i]).collect();
    let bye = match leftovers.as_slice() {
        [single] => Some(*single),
        _ => None,
    };

    RoundPlan { pairs, bye }
}

/// Names left without a seat after planning (empty on success)
fn unpaired_names(players: &[Player], plan: &RoundPlan) -> Vec<String> {
    let mut seated = vec![false; players.len()];
    for &(w, b) in &plan.pairs {
        seated[w] = true;
        seated[b] = true;
    }
    if let Some(bye) = plan.bye {
        seated[bye] = true;
    }

    players
        .iter()
        .zip(seated)
        .filter(|(_, s)| !s)
        .map(|(p, _)| p.name.clone())
        .collect()
}

/// Write colours and build the match list
fn commit_plan(registry: &mut PlayerRegistry, plan: RoundPlan, round: u32) -> Vec<Match> {
    let mut matches = Vec::with_capacity(plan.pairs.len() + 1);

    for (w, b) in plan.pairs {
        registry.player_at_mut(w).color_history.push(Color::White);
        registry.player_at_mut(b).color_history.push(Color::Black);

        let white = registry.players()[w].name.clone();
        let black = registry.players()[b].name.clone();
        tracing::debug!(
            "Round {} table {}: {} (White) vs {} (Black)",
            round,
            matches.len() + 1,
            white,
            black
        );

        matches.push(Match {
            round,
            table: matches.len() + 1,
            pairing: Pairing::Game { white, black },
        });
    }

    if let Some(idx) = plan.bye {
        let player = registry.player_at_mut(idx);
        player.color_history.push(Color::Bye);
        tracing::debug!("Round {}: {} receives a bye", round, player.name);

        matches.push(Match {
            round,
            table: matches.len() + 1,
            pairing: Pairing::Bye {
                player: player.name.clone(),
            },
        });
    }

    matches
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Decide whether `first` (the earlier-scanned player) takes White
///
/// Fewer prior Whites gets White. On equal counts, a player who had White
/// last round gets Black; otherwise `first` gets White.
fn choose_colors(first: &Player, second: &Player) -> bool {
    let first_whites = first.white_count();
    let second_whites = second.white_count();

    if first_whites != second_whites {
        return first_whites < second_whites;
    }

    first.last_color() != Some(Color::White)
}
