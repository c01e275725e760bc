//! Exact Shapley values by full permutation enumeration
//!
//! Every ordering of the N players is walked, so the cost is O(N * N!) worth
//! evaluations. This is only usable for small games; `max_players` rejects
//! inputs that would not finish in reasonable time.

use crate::{
    error::{Result, ShapleyError},
    game::CooperativeGame,
    solver::{ShapleySolver, accumulate_marginals, sum_partials},
    types::{Algorithm, Allocation},
    utils::{FACTORIAL_LIMIT, factorial, next_permutation},
};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactSolver {
    max_players: usize,
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExactSolver {
    /// 12! is already close to half a billion orderings
    pub const DEFAULT_MAX_PLAYERS: usize = 12;

    pub fn new() -> Self {
        Self::with_max_players(Self::DEFAULT_MAX_PLAYERS)
    }

    /// Largest ceiling whose `N!` is still exact
    pub const MAX_SUPPORTED_PLAYERS: usize = FACTORIAL_LIMIT - 1;

    /// Ceilings above `MAX_SUPPORTED_PLAYERS` are clamped to it
    pub fn with_max_players(max_players: usize) -> Self {
        if max_players > Self::MAX_SUPPORTED_PLAYERS {
            log::warn!(
                "exact player ceiling {} clamped to {}",
                max_players,
                Self::MAX_SUPPORTED_PLAYERS
            );
        }
        ExactSolver {
            max_players: max_players.min(Self::MAX_SUPPORTED_PLAYERS),
        }
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    /// Shapley value of every player, in the game's player order
    pub fn shapley_values(&self, game: &dyn CooperativeGame) -> Result<Vec<f64>> {
        let players = game.players();
        let n = players.len();
        if n == 0 {
            return Err(ShapleyError::NoPlayers);
        }
        if n > self.max_players {
            return Err(ShapleyError::TooManyPlayers {
                count: n,
                limit: self.max_players,
            });
        }

        let n_orderings = factorial(n).ok_or(ShapleyError::TooManyPlayers {
            count: n,
            limit: Self::MAX_SUPPORTED_PLAYERS,
        })?;
        log::debug!("enumerating {} orderings of {} players", n_orderings, n);

        // Orderings are partitioned by their first player
        let partials: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|lead| {
                let mut rest: Vec<usize> = (0..n).filter(|&i| i != lead).collect();
                let mut order = Vec::with_capacity(n);
                let mut coalition = Vec::with_capacity(n);
                let mut totals = vec![0.0; n];

                loop {
                    order.clear();
                    order.push(lead);
                    order.extend_from_slice(&rest);
                    accumulate_marginals(game, players, &order, &mut coalition, &mut totals);

                    if !next_permutation(&mut rest) {
                        break;
                    }
                }
                totals
            })
            .collect();

        let n_orderings = n_orderings as f64;
        Ok(sum_partials(partials, n)
            .into_iter()
            .map(|total| total / n_orderings)
            .collect())
    }
}

impl ShapleySolver for ExactSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Exact
    }

    fn solve(&self, game: &dyn CooperativeGame) -> Result<Allocation> {
        let start = Instant::now();
        let values = self.shapley_values(game)?;
        let total_worth = game.total_worth();

        Ok(Allocation::new(
            game.players()
                .iter()
                .map(|p| p.id.as_str())
                .zip(values),
            total_worth,
            start.elapsed().as_secs_f64(),
            Algorithm::Exact,
        ))
    }
}
