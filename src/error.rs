use crate::{airport_shapley::AirportShapleyBuilderError, types::PlayerBuilderError};
use thiserror::Error;

/// Error types for the Shapley computation system
#[derive(Debug, Error)]
pub enum ShapleyError {
    /// A game needs at least one player
    #[error("The game has no players; at least one player is required.")]
    NoPlayers,

    /// Player ids must be unique
    #[error("Player id {id} appears more than once.")]
    DuplicatePlayerId { id: String },

    /// A field required by the selected algorithm is absent
    #[error("Missing required field `{field}` for players: {players:?}")]
    MissingField {
        field: &'static str,
        players: Vec<String>,
    },

    /// A field is present but out of range
    #[error("Invalid value for field `{field}` on players: {players:?}")]
    InvalidField {
        field: &'static str,
        players: Vec<String>,
    },

    /// Configuration mode without a cost-step schedule
    #[error("The configuration value requires runway_cost_steps = [c1..cT].")]
    MissingCostSchedule,

    /// Cost-step schedule does not cover every tier in the game
    #[error(
        "runway_cost_steps has length {len} but the maximum player type is {max_type}; need at least {max_type} entries."
    )]
    CostScheduleTooShort { len: usize, max_type: usize },

    /// A cost step is not finite, is negative, or drops below the previous step
    #[error("runway_cost_steps entry c{tier} = {value} is invalid: {reason}.")]
    InvalidCostSchedule {
        tier: usize,
        value: f64,
        reason: &'static str,
    },

    /// Algorithm identifier not recognised
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Too many players for exhaustive enumeration
    #[error("There are too many players ({count}) for the exact algorithm; the limit is {limit}.")]
    TooManyPlayers { count: usize, limit: usize },

    /// Approximate mode needs a positive sample count
    #[error("The number of samples must be positive.")]
    InvalidSampleCount,

    /// Solver handed a game variant it cannot evaluate
    #[error("The {algorithm} algorithm cannot be applied to this game variant.")]
    UnsupportedGame { algorithm: String },

    #[error("AirportShapley configuration build error: {0}")]
    Build(#[from] AirportShapleyBuilderError),

    #[error("Player build error: {0}")]
    PlayerBuild(#[from] PlayerBuilderError),

    /// CSV input could not be read
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type alias for Shapley operations
pub type Result<T> = std::result::Result<T, ShapleyError>;
