//! Airport game Shapley value computation library
//!
//! This library splits the cost of a shared facility (a runway) among the
//! agents using it, according to the Shapley value of the airport game. It
//! offers exact enumeration, Monte Carlo estimation, and the closed-form
//! configuration value for games where airlines group several movements.

pub mod airport_shapley;
pub mod approximate;
pub mod configuration_value;
pub mod error;
pub mod exact;
pub mod game;
pub mod solver;
pub mod types;
mod utils;
mod validation;

// Re-export main types and functions
pub use airport_shapley::{AirportShapley, AirportShapleyBuilder};
pub use approximate::ApproximateSolver;
pub use configuration_value::ConfigurationValueSolver;
pub use error::{Result, ShapleyError};
pub use exact::ExactSolver;
pub use game::{AirportGame, Coalition, ConfigurationGame, CooperativeGame, GroupIndex};
pub use solver::{DEFAULT_NUM_SAMPLES, ShapleySolver, SolverOptions, create_solver};
pub use types::{Algorithm, Allocation, Player, PlayerBuilder, Players, ShapleyValue};
