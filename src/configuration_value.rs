//! Closed-form configuration value for airport games with airline structure
//!
//! For a movement `i` with tier `τ(i)` operated by airlines `B(i)`:
//!
//! ```text
//! CV_i = Σ_{a ∈ B(i)} Σ_{t=1}^{τ(i)} (c_t - c_{t-1}) / (|A_{≥t}| · |N^a_{≥t}|)
//! ```
//!
//! where `A_{≥t}` is the set of airlines with at least one movement of tier
//! `≥ t` and `N^a_{≥t}` the movements of airline `a` with tier `≥ t`. Terms
//! with a zero denominator contribute nothing. With singleton airlines this
//! reduces to the Shapley value of the airport game.

use crate::{
    error::{Result, ShapleyError},
    game::{ConfigurationGame, CooperativeGame},
    solver::ShapleySolver,
    types::{Algorithm, Allocation},
};
use std::{collections::HashMap, time::Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationValueSolver;

/// Per-threshold counts shared by every player's share
///
/// Both tables are indexed by threshold `t` in `1..=T`; slot 0 is unused.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ThresholdCounts<'g> {
    /// `|N^a_{≥t}|` per airline
    pub members_at_least: HashMap<&'g str, Vec<usize>>,
    /// `|A_{≥t}|`
    pub groups_at_least: Vec<usize>,
}

impl<'g> ThresholdCounts<'g> {
    pub fn build(game: &'g ConfigurationGame) -> Self {
        let max_tier = game.max_tier();
        let tiers: HashMap<&str, usize> = game
            .players()
            .iter()
            .filter_map(|p| p.tier.map(|t| (p.id.as_str(), t)))
            .collect();

        let mut members_at_least = HashMap::with_capacity(game.group_index().group_count());
        let mut groups_at_least = vec![0; max_tier + 1];

        for (group, members) in game.group_index().iter_groups() {
            let mut counts = vec![0; max_tier + 1];
            for member in members {
                let tier = tiers.get(member.as_str()).copied().unwrap_or(0);
                for count in counts.iter_mut().take(tier + 1).skip(1) {
                    *count += 1;
                }
            }
            for (t, &count) in counts.iter().enumerate().skip(1) {
                if count > 0 {
                    groups_at_least[t] += 1;
                }
            }
            members_at_least.insert(group.as_str(), counts);
        }

        ThresholdCounts {
            members_at_least,
            groups_at_least,
        }
    }
}

impl ConfigurationValueSolver {
    /// Configuration value of every player, in the game's player order
    pub fn configuration_values(&self, game: &ConfigurationGame) -> Vec<f64> {
        let counts = ThresholdCounts::build(game);
        let steps = game.steps();
        let index = game.group_index();

        game.players()
            .iter()
            .map(|player| {
                let tier = player.tier.unwrap_or(0);
                let Some(groups) = index.groups_of(&player.id) else {
                    return 0.0;
                };

                let mut share = 0.0;
                for group in groups {
                    let Some(members) = counts.members_at_least.get(group.as_str()) else {
                        continue;
                    };
                    for t in 1..=tier {
                        let denom = counts.groups_at_least[t] * members[t];
                        if denom == 0 {
                            continue;
                        }
                        share += (steps[t] - steps[t - 1]) / denom as f64;
                    }
                }
                share
            })
            .collect()
    }

    /// Allocation for a configuration game
    pub fn solve_configuration(&self, game: &ConfigurationGame) -> Result<Allocation> {
        let start = Instant::now();
        let values = self.configuration_values(game);
        let total_worth = game.total_worth();

        Ok(Allocation::new(
            game.players()
                .iter()
                .map(|p| p.id.as_str())
                .zip(values),
            total_worth,
            start.elapsed().as_secs_f64(),
            Algorithm::ConfigurationValue,
        ))
    }
}

impl ShapleySolver for ConfigurationValueSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ConfigurationValue
    }

    fn solve(&self, game: &dyn CooperativeGame) -> Result<Allocation> {
        let game = game
            .as_configuration()
            .ok_or_else(|| ShapleyError::UnsupportedGame {
                algorithm: Algorithm::ConfigurationValue.to_string(),
            })?;
        self.solve_configuration(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        exact::ExactSolver,
        game::AirportGame,
        types::{Player, Players},
    };

    fn code_share_game() -> ConfigurationGame {
        ConfigurationGame::new(
            Players::from_players(vec![
                Player::with_tier("M1", 1, ["AF"]),
                Player::with_tier("M2", 2, ["AF", "KL"]),
                Player::with_tier("M3", 3, ["KL"]),
                Player::with_tier("M4", 1, ["LH"]),
            ]),
            &[6.0, 10.0, 16.0],
        )
        .unwrap()
    }

    #[test]
    fn test_threshold_counts() {
        let game = code_share_game();
        let counts = ThresholdCounts::build(&game);

        assert_eq!(counts.groups_at_least, vec![0, 3, 2, 1]);
        assert_eq!(counts.members_at_least["AF"], vec![0, 2, 1, 0]);
        assert_eq!(counts.members_at_least["KL"], vec![0, 2, 2, 1]);
        assert_eq!(counts.members_at_least["LH"], vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_code_share_values() {
        let game = code_share_game();
        let values = ConfigurationValueSolver.configuration_values(&game);

        // t=1 costs 6 over 3 airlines, t=2 costs 4 over 2, t=3 costs 6 over 1
        let m1 = 6.0 / (3.0 * 2.0);
        let m2 = 6.0 / (3.0 * 2.0) + 4.0 / (2.0 * 1.0) + 6.0 / (3.0 * 2.0) + 4.0 / (2.0 * 2.0);
        let m3 = 6.0 / (3.0 * 2.0) + 4.0 / (2.0 * 2.0) + 6.0 / (1.0 * 1.0);
        let m4 = 6.0 / 3.0;
        for (value, expected) in values.iter().zip([m1, m2, m3, m4]) {
            assert!((value - expected).abs() < 1e-12, "{value} vs {expected}");
        }
    }

    #[test]
    fn test_singleton_groups_match_exact() {
        let game = ConfigurationGame::new(
            Players::from_players(vec![
                Player::with_tier("M1", 2, ["A"]),
                Player::with_tier("M2", 1, ["B"]),
                Player::with_tier("M3", 3, ["C"]),
                Player::with_tier("M4", 2, ["D"]),
            ]),
            &[3.0, 8.0, 9.5],
        )
        .unwrap();

        let closed_form = ConfigurationValueSolver.solve(&game).unwrap();
        let exact = ExactSolver::new().solve(&game).unwrap();

        assert_eq!(closed_form.algorithm, Algorithm::ConfigurationValue);
        assert_eq!(closed_form.total_worth, 9.5);
        for (cv, sv) in closed_form.values.iter().zip(&exact.values) {
            assert_eq!(cv.player_id, sv.player_id);
            assert!((cv.value - sv.value).abs() < 1e-9, "{cv} vs {sv}");
        }
    }

    #[test]
    fn test_plain_game_rejected() {
        let game =
            AirportGame::new(Players::from_players(vec![Player::with_cost("P1", 1.0)])).unwrap();
        assert!(matches!(
            ConfigurationValueSolver.solve(&game),
            Err(ShapleyError::UnsupportedGame { .. })
        ));
    }
}
