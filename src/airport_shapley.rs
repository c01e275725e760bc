use crate::{
    error::Result,
    exact::ExactSolver,
    game::{AirportGame, ConfigurationGame, CooperativeGame},
    solver::{SolverOptions, create_solver},
    types::{Algorithm, Allocation, Players},
    validation::check_inputs,
};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cost-sharing run: players, algorithm and its parameters
#[derive(Debug, Clone, PartialEq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirportShapley {
    #[builder(setter(into))]
    players: Players,
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    algorithm: Algorithm,
    /// Monte Carlo orderings; 1000 when unset
    #[builder(setter(strip_option), default)]
    #[cfg_attr(feature = "serde", serde(default))]
    num_samples: Option<usize>,
    /// `[c1, .., cT]` for the configuration value
    #[builder(setter(strip_option), default)]
    #[cfg_attr(feature = "serde", serde(default))]
    runway_cost_steps: Option<Vec<f64>>,
    #[builder(setter(strip_option), default)]
    #[cfg_attr(feature = "serde", serde(default))]
    seed: Option<u64>,
    #[builder(default = "ExactSolver::DEFAULT_MAX_PLAYERS")]
    #[cfg_attr(feature = "serde", serde(default = "default_max_exact_players"))]
    max_exact_players: usize,
}

#[cfg(feature = "serde")]
fn default_max_exact_players() -> usize {
    ExactSolver::DEFAULT_MAX_PLAYERS
}

impl AirportShapley {
    /// Validate inputs, build the matching game and solver, and run it
    pub fn compute(&self) -> Result<Allocation> {
        let options = self.solver_options();
        check_inputs(&self.players, self.algorithm, &options)?;

        log::info!(
            "starting simulation with {} players using {} algorithm",
            self.players.len(),
            self.algorithm
        );

        let game: Box<dyn CooperativeGame> = match self.algorithm {
            Algorithm::ConfigurationValue => Box::new(ConfigurationGame::new(
                self.players.clone(),
                self.runway_cost_steps.as_deref().unwrap_or_default(),
            )?),
            Algorithm::Exact | Algorithm::Approximate => {
                Box::new(AirportGame::new(self.players.clone())?)
            }
        };

        let allocation = create_solver(self.algorithm, options).solve(game.as_ref())?;

        log::info!(
            "simulation completed in {:.4} seconds",
            allocation.elapsed_seconds
        );
        Ok(allocation)
    }

    fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            num_samples: self.num_samples,
            seed: self.seed,
            max_exact_players: self.max_exact_players,
        }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Replace the player list, keeping every other setting
    pub fn with_players(mut self, players: Players) -> Self {
        self.players = players;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = Some(num_samples);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
