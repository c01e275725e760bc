//! Monte Carlo estimate of the Shapley value
//!
//! Uniformly random orderings are drawn and the marginal-contribution walk of
//! the exact solver is averaged over them. The estimator is unbiased and its
//! error shrinks with the square root of the sample count.

use crate::{
    error::{Result, ShapleyError},
    game::CooperativeGame,
    solver::{DEFAULT_NUM_SAMPLES, ShapleySolver, accumulate_marginals, sum_partials},
    types::{Algorithm, Allocation},
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rayon::prelude::*;
use std::time::Instant;

/// Orderings drawn per worker task
const SAMPLES_PER_CHUNK: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateSolver {
    num_samples: usize,
    seed: Option<u64>,
}

impl Default for ApproximateSolver {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_SAMPLES)
    }
}

impl ApproximateSolver {
    pub fn new(num_samples: usize) -> Self {
        ApproximateSolver {
            num_samples,
            seed: None,
        }
    }

    /// Fix the random source so repeated solves give identical results
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Estimate Shapley values drawing randomness from `rng`
    ///
    /// Each chunk of samples gets its own generator seeded from `rng`, so the
    /// result only depends on `rng`'s state, not on how rayon schedules chunks.
    pub fn shapley_values_with_rng<R: Rng + ?Sized>(
        &self,
        game: &dyn CooperativeGame,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let players = game.players();
        let n = players.len();
        if n == 0 {
            return Err(ShapleyError::NoPlayers);
        }
        if self.num_samples == 0 {
            return Err(ShapleyError::InvalidSampleCount);
        }

        let chunks: Vec<(usize, u64)> = (0..self.num_samples)
            .step_by(SAMPLES_PER_CHUNK)
            .map(|first| {
                let size = SAMPLES_PER_CHUNK.min(self.num_samples - first);
                (size, rng.r#gen::<u64>())
            })
            .collect();

        log::debug!(
            "sampling {} orderings of {} players in {} chunks",
            self.num_samples,
            n,
            chunks.len()
        );

        let partials: Vec<Vec<f64>> = chunks
            .into_par_iter()
            .map(|(size, seed)| {
                let mut local_rng = StdRng::seed_from_u64(seed);
                let mut order: Vec<usize> = (0..n).collect();
                let mut coalition = Vec::with_capacity(n);
                let mut totals = vec![0.0; n];

                for _ in 0..size {
                    order.shuffle(&mut local_rng);
                    accumulate_marginals(game, players, &order, &mut coalition, &mut totals);
                }
                totals
            })
            .collect();

        let n_samples = self.num_samples as f64;
        Ok(sum_partials(partials, n)
            .into_iter()
            .map(|total| total / n_samples)
            .collect())
    }

    /// Full allocation using an injected random source
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        game: &dyn CooperativeGame,
        rng: &mut R,
    ) -> Result<Allocation> {
        let start = Instant::now();
        let values = self.shapley_values_with_rng(game, rng)?;
        // Reported worth is exact; only the shares are estimates
        let total_worth = game.total_worth();

        Ok(Allocation::new(
            game.players()
                .iter()
                .map(|p| p.id.as_str())
                .zip(values),
            total_worth,
            start.elapsed().as_secs_f64(),
            Algorithm::Approximate,
        ))
    }
}

impl ShapleySolver for ApproximateSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Approximate
    }

    fn solve(&self, game: &dyn CooperativeGame) -> Result<Allocation> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.solve_with_rng(game, &mut rng)
    }
}
