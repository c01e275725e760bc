use crate::{
    error::{Result, ShapleyError},
    exact::ExactSolver,
    solver::SolverOptions,
    types::{Algorithm, Player, Players},
};
use std::collections::HashSet;

/// Run-level checks made before any game is built
///
/// Per-player fields are checked by the game constructors.
pub(crate) fn check_inputs(
    players: &Players,
    algorithm: Algorithm,
    options: &SolverOptions,
) -> Result<()> {
    if players.is_empty() {
        return Err(ShapleyError::NoPlayers);
    }

    match algorithm {
        Algorithm::Exact => {
            let limit = ExactSolver::with_max_players(options.max_exact_players).max_players();
            if players.len() > limit {
                return Err(ShapleyError::TooManyPlayers {
                    count: players.len(),
                    limit,
                });
            }
            Ok(())
        }
        Algorithm::Approximate if options.num_samples == Some(0) => {
            Err(ShapleyError::InvalidSampleCount)
        }
        _ => Ok(()),
    }
}

/// Plain airport game: every player needs a finite, non-negative cost
pub(crate) fn check_plain_players(players: &Players) -> Result<()> {
    check_unique_ids(players)?;

    let missing = players_where(players, |p| p.cost.is_none());
    if !missing.is_empty() {
        return Err(ShapleyError::MissingField {
            field: "cost",
            players: missing,
        });
    }

    let invalid = players_where(players, |p| {
        p.cost.is_some_and(|c| !c.is_finite() || c < 0.0)
    });
    if !invalid.is_empty() {
        return Err(ShapleyError::InvalidField {
            field: "cost",
            players: invalid,
        });
    }

    Ok(())
}

/// Configuration game: every player needs a positive tier and an airline,
/// and the schedule must reach the highest tier
pub(crate) fn check_configuration_players(
    players: &Players,
    runway_cost_steps: &[f64],
) -> Result<()> {
    if players.is_empty() {
        return Err(ShapleyError::NoPlayers);
    }
    check_unique_ids(players)?;

    if runway_cost_steps.is_empty() {
        return Err(ShapleyError::MissingCostSchedule);
    }
    check_cost_schedule(runway_cost_steps)?;

    let missing = players_where(players, |p| p.tier.is_none());
    if !missing.is_empty() {
        return Err(ShapleyError::MissingField {
            field: "type",
            players: missing,
        });
    }

    let zero_tier = players_where(players, |p| p.tier == Some(0));
    if !zero_tier.is_empty() {
        return Err(ShapleyError::InvalidField {
            field: "type",
            players: zero_tier,
        });
    }

    let no_airlines = players_where(players, |p| p.airlines.is_empty());
    if !no_airlines.is_empty() {
        return Err(ShapleyError::MissingField {
            field: "airlines",
            players: no_airlines,
        });
    }

    let max_type = players.max_tier().unwrap_or(0);
    if runway_cost_steps.len() < max_type {
        return Err(ShapleyError::CostScheduleTooShort {
            len: runway_cost_steps.len(),
            max_type,
        });
    }

    Ok(())
}

/// Steps are cumulative costs: finite, non-negative and non-decreasing
fn check_cost_schedule(runway_cost_steps: &[f64]) -> Result<()> {
    let mut previous = 0.0;
    for (i, &value) in runway_cost_steps.iter().enumerate() {
        let reason = if !value.is_finite() {
            "steps must be finite"
        } else if value < 0.0 {
            "steps must be non-negative"
        } else if value < previous {
            "steps must be non-decreasing"
        } else {
            previous = value;
            continue;
        };
        return Err(ShapleyError::InvalidCostSchedule {
            tier: i + 1,
            value,
            reason,
        });
    }
    Ok(())
}

fn check_unique_ids(players: &Players) -> Result<()> {
    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if !seen.insert(player.id.as_str()) {
            return Err(ShapleyError::DuplicatePlayerId {
                id: player.id.clone(),
            });
        }
    }
    Ok(())
}

fn players_where(players: &Players, pred: impl Fn(&Player) -> bool) -> Vec<String> {
    players
        .iter()
        .filter(|p| pred(p))
        .map(|p| p.id.clone())
        .collect()
}
