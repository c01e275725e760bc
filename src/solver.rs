use crate::{
    approximate::ApproximateSolver,
    configuration_value::ConfigurationValueSolver,
    error::Result,
    exact::ExactSolver,
    game::CooperativeGame,
    types::{Algorithm, Allocation, Player},
};

/// Default number of Monte Carlo permutations
pub const DEFAULT_NUM_SAMPLES: usize = 1000;

/// A strategy that turns a game into a per-player cost allocation
pub trait ShapleySolver: Send + Sync {
    /// Identifier reported in the allocation
    fn algorithm(&self) -> Algorithm;

    /// Compute the allocation for a game
    fn solve(&self, game: &dyn CooperativeGame) -> Result<Allocation>;
}

/// Solver parameters not carried by the game itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    pub num_samples: Option<usize>,
    pub seed: Option<u64>,
    pub max_exact_players: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            num_samples: None,
            seed: None,
            max_exact_players: ExactSolver::DEFAULT_MAX_PLAYERS,
        }
    }
}

/// Build the solver matching an algorithm identifier
pub fn create_solver(algorithm: Algorithm, options: SolverOptions) -> Box<dyn ShapleySolver> {
    match algorithm {
        Algorithm::Exact => Box::new(ExactSolver::with_max_players(options.max_exact_players)),
        Algorithm::Approximate => {
            let samples = options.num_samples.unwrap_or(DEFAULT_NUM_SAMPLES);
            let solver = ApproximateSolver::new(samples);
            match options.seed {
                Some(seed) => Box::new(solver.seeded(seed)),
                None => Box::new(solver),
            }
        }
        Algorithm::ConfigurationValue => Box::new(ConfigurationValueSolver),
    }
}

/// Add each player's marginal contribution along one ordering to `totals`
///
/// `order` holds indices into `players`; `coalition` is scratch space reused
/// across calls.
pub(crate) fn accumulate_marginals<'a>(
    game: &dyn CooperativeGame,
    players: &'a [Player],
    order: &[usize],
    coalition: &mut Vec<&'a Player>,
    totals: &mut [f64],
) {
    coalition.clear();
    let mut current = game.worth(coalition.as_slice());
    for &idx in order {
        coalition.push(&players[idx]);
        let next = game.worth(coalition.as_slice());
        totals[idx] += next - current;
        current = next;
    }
}

/// Sum per-player vectors in the order given
pub(crate) fn sum_partials(partials: Vec<Vec<f64>>, n_players: usize) -> Vec<f64> {
    partials
        .into_iter()
        .fold(vec![0.0; n_players], |mut acc, partial| {
            for (total, value) in acc.iter_mut().zip(partial) {
                *total += value;
            }
            acc
        })
}
