//! Score tracker - applies one round's results to the registry
//!
//! A round is applied as a batch: every entry is validated first, and the
//! registry is only mutated when the whole batch is valid.

use rustc_hash::FxHashSet;

use crate::error::{Result, SwissError};
use crate::matches::RoundResult;
use crate::player::{Color, HeadToHead, Player, BYE_POINTS, WIN_POINTS};
use crate::registry::PlayerRegistry;

/// Total points distributed by every game
const POINTS_PER_GAME: u8 = 2;

/// Apply one round of results
///
/// For each game, both sides' points are added before each side
/// accumulates the other's updated score into `opponent_score_sum`. After
/// the batch, every opponent score sum is rounded to two decimals.
pub fn apply_results(registry: &mut PlayerRegistry, results: &[RoundResult]) -> Result<()> {
    validate_batch(registry, results)?;

    for result in results {
        match result {
            RoundResult::Game {
                first,
                first_points,
                second,
                second_points,
            } => apply_game(registry, first, *first_points, second, *second_points)?,
            RoundResult::Bye { player } => apply_bye(registry, player)?,
        }
    }

    for player in registry.players_mut() {
        player.opponent_score_sum = round2(player.opponent_score_sum);
    }

    Ok(())
}

/// Check every entry before anything is written
fn validate_batch(registry: &PlayerRegistry, results: &[RoundResult]) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for result in results {
        match result {
            RoundResult::Game {
                first,
                first_points,
                second,
                second_points,
            } => {
                if first == second {
                    return Err(SwissError::SelfPairing(first.clone()));
                }
                let first_player = known(registry, first)?;
                known(registry, second)?;

                if !valid_points(*first_points, *second_points) {
                    return Err(SwissError::InvalidPoints {
                        player: first.clone(),
                        points: *first_points,
                        opponent_points: *second_points,
                    });
                }
                if first_player.head_to_head.contains_key(second.as_str()) {
                    return Err(SwissError::Rematch {
                        first: first.clone(),
                        second: second.clone(),
                    });
                }

                for name in [first, second] {
                    if !seen.insert(name.as_str()) {
                        return Err(SwissError::DuplicateResult(name.clone()));
                    }
                }
            }
            RoundResult::Bye { player } => {
                known(registry, player)?;
                if !seen.insert(player.as_str()) {
                    return Err(SwissError::DuplicateResult(player.clone()));
                }
            }
        }
    }

    Ok(())
}

fn apply_game(
    registry: &mut PlayerRegistry,
    first: &str,
    first_points: u8,
    second: &str,
    second_points: u8,
) -> Result<()> {
    let first_idx = index(registry, first)?;
    let second_idx = index(registry, second)?;

    credit_points(registry.player_at_mut(first_idx), first_points);
    credit_points(registry.player_at_mut(second_idx), second_points);

    let first_score = registry.players()[first_idx].score;
    let second_score = registry.players()[second_idx].score;
    let outcome = HeadToHead::from_points(first_points, second_points);

    let p1 = registry.player_at_mut(first_idx);
    p1.opponent_score_sum += f64::from(second_score);
    p1.head_to_head.insert(second.to_string(), outcome);

    let p2 = registry.player_at_mut(second_idx);
    p2.opponent_score_sum += f64::from(first_score);
    p2.head_to_head.insert(first.to_string(), outcome.mirrored());

    Ok(())
}

fn apply_bye(registry: &mut PlayerRegistry, name: &str) -> Result<()> {
    let idx = index(registry, name)?;
    let player = registry.player_at_mut(idx);
    player.score += u32::from(BYE_POINTS);
    player.wins += 1;
    Ok(())
}

/// Add points; a win also counts toward wins, and black wins when this
/// round's colour was Black
fn credit_points(player: &mut Player, points: u8) {
    player.score += u32::from(points);
    if points == WIN_POINTS {
        player.wins += 1;
        if player.last_color() == Some(Color::Black) {
            player.black_wins += 1;
        }
    }
}

fn valid_points(a: u8, b: u8) -> bool {
    a <= POINTS_PER_GAME && b <= POINTS_PER_GAME && a + b == POINTS_PER_GAME
}

fn known<'a>(registry: &'a PlayerRegistry, name: &str) -> Result<&'a Player> {
    registry
        .get(name)
        .ok_or_else(|| SwissError::UnknownPlayer(name.to_string()))
}

fn index(registry: &PlayerRegistry, name: &str) -> Result<usize> {
    registry
        .index_of(name)
        .ok_or_else(|| SwissError::UnknownPlayer(name.to_string()))
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_colors(entries: &[(&str, Color)]) -> PlayerRegistry {
        let mut reg = PlayerRegistry::from_names(entries.iter().map(|(n, _)| *n)).unwrap();
        for (name, color) in entries {
            let idx = reg.index_of(name).unwrap();
            reg.player_at_mut(idx).color_history.push(*color);
        }
        reg
    }

    fn scenario_a() -> PlayerRegistry {
        registry_with_colors(&[
            ("A", Color::White),
            ("B", Color::Black),
            ("C", Color::White),
            ("D", Color::Black),
        ])
    }

    #[test]
    fn test_win_and_draw_scenario() {
        let mut reg = scenario_a();
        let results = vec![
            RoundResult::game("A", 2, "B", 0),
            RoundResult::game("C", 1, "D", 1),
        ];
        apply_results(&mut reg, &results).unwrap();

        let a = reg.get("A").unwrap();
        let b = reg.get("B").unwrap();
        let c = reg.get("C").unwrap();
        let d = reg.get("D").unwrap();

        assert_eq!((a.score(), b.score(), c.score(), d.score()), (2, 0, 1, 1));
        assert_eq!(a.wins(), 1);
        assert_eq!(b.wins(), 0);
        assert_eq!(c.wins(), 0);
        assert_eq!(a.result_against("B"), Some(HeadToHead::Win));
        assert_eq!(b.result_against("A"), Some(HeadToHead::Loss));
        assert_eq!(c.result_against("D"), Some(HeadToHead::Draw));
        assert_eq!(d.result_against("C"), Some(HeadToHead::Draw));
    }

    #[test]
    fn test_opponent_sum_uses_updated_scores() {
        let mut reg = scenario_a();
        let results = vec![
            RoundResult::game("A", 2, "B", 0),
            RoundResult::game("C", 1, "D", 1),
        ];
        apply_results(&mut reg, &results).unwrap();

        // Winner collects the loser's 0, loser collects the winner's 2
        assert_eq!(reg.get("A").unwrap().opponent_score_sum(), 0.0);
        assert_eq!(reg.get("B").unwrap().opponent_score_sum(), 2.0);
        assert_eq!(reg.get("C").unwrap().opponent_score_sum(), 1.0);
        assert_eq!(reg.get("D").unwrap().opponent_score_sum(), 1.0);
    }

    #[test]
    fn test_black_win_counted() {
        let mut reg = registry_with_colors(&[("A", Color::White), ("B", Color::Black)]);
        apply_results(&mut reg, &[RoundResult::game("B", 2, "A", 0)]).unwrap();

        let b = reg.get("B").unwrap();
        assert_eq!(b.wins(), 1);
        assert_eq!(b.black_wins(), 1);

        let mut reg = registry_with_colors(&[("A", Color::White), ("B", Color::Black)]);
        apply_results(&mut reg, &[RoundResult::game("A", 2, "B", 0)]).unwrap();
        assert_eq!(reg.get("A").unwrap().black_wins(), 0);
    }

    #[test]
    fn test_bye_awards_points_only() {
        let mut reg = registry_with_colors(&[
            ("A", Color::White),
            ("B", Color::Black),
            ("C", Color::Bye),
        ]);
        let results = vec![RoundResult::game("A", 1, "B", 1), RoundResult::bye("C")];
        apply_results(&mut reg, &results).unwrap();

        let c = reg.get("C").unwrap();
        assert_eq!(c.score(), 2);
        assert_eq!(c.wins(), 1);
        assert_eq!(c.black_wins(), 0);
        assert_eq!(c.opponent_score_sum(), 0.0);
        assert!(c.head_to_head().is_empty());
    }

    #[test]
    fn test_invalid_points_rejects_whole_batch() {
        let mut reg = scenario_a();
        let results = vec![
            RoundResult::game("A", 2, "B", 0),
            RoundResult::game("C", 2, "D", 1),
        ];
        let err = apply_results(&mut reg, &results).unwrap_err();

        assert_eq!(
            err,
            SwissError::InvalidPoints {
                player: "C".to_string(),
                points: 2,
                opponent_points: 1
            }
        );
        assert_eq!(reg.get("A").unwrap().score(), 0);
        assert!(reg.get("A").unwrap().head_to_head().is_empty());
    }

    #[test]
    fn test_points_out_of_range_rejected() {
        let mut reg = scenario_a();
        let err = apply_results(&mut reg, &[RoundResult::game("A", 3, "B", 255)]).unwrap_err();
        assert!(matches!(err, SwissError::InvalidPoints { .. }));
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut reg = scenario_a();
        let results = vec![
            RoundResult::game("A", 2, "B", 0),
            RoundResult::game("C", 1, "Zed", 1),
        ];
        assert_eq!(
            apply_results(&mut reg, &results).unwrap_err(),
            SwissError::UnknownPlayer("Zed".to_string())
        );
        assert_eq!(reg.get("A").unwrap().score(), 0);
    }

    #[test]
    fn test_player_reported_twice_rejected() {
        let mut reg = scenario_a();
        let results = vec![
            RoundResult::game("A", 2, "B", 0),
            RoundResult::game("C", 2, "A", 0),
        ];
        assert_eq!(
            apply_results(&mut reg, &results).unwrap_err(),
            SwissError::DuplicateResult("A".to_string())
        );
    }

    #[test]
    fn test_rematch_result_rejected() {
        let mut reg = scenario_a();
        apply_results(&mut reg, &[RoundResult::game("A", 2, "B", 0)]).unwrap();

        let err = apply_results(&mut reg, &[RoundResult::game("B", 2, "A", 0)]).unwrap_err();
        assert!(matches!(err, SwissError::Rematch { .. }));
        assert_eq!(reg.get("B").unwrap().score(), 0);
    }

    #[test]
    fn test_self_game_rejected() {
        let mut reg = scenario_a();
        assert_eq!(
            apply_results(&mut reg, &[RoundResult::game("A", 1, "A", 1)]).unwrap_err(),
            SwissError::SelfPairing("A".to_string())
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(2.126), 2.13);
        assert_eq!(round2(7.0), 7.0);
    }
}
