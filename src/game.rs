//! Characteristic-function games over airport players
//!
//! A game owns its player list and maps any coalition (a subset of those
//! players) to its worth, here the cost of the shared facility. The empty
//! coalition is always worth 0.

use crate::{
    error::Result,
    types::{Player, Players},
    validation::{check_configuration_players, check_plain_players},
};
use std::collections::{BTreeMap, BTreeSet};

/// A coalition is any subset of the game's players
pub type Coalition<'a> = [&'a Player];

/// Transferable-utility cooperative game
pub trait CooperativeGame: Send + Sync {
    /// Players of the grand coalition, in input order
    fn players(&self) -> &[Player];

    /// Worth (cost) of a coalition
    fn worth(&self, coalition: &Coalition<'_>) -> f64;

    /// Worth of the grand coalition
    fn total_worth(&self) -> f64 {
        let everyone: Vec<&Player> = self.players().iter().collect();
        self.worth(&everyone)
    }

    /// Downcast hook for solvers specialised to the configuration game
    fn as_configuration(&self) -> Option<&ConfigurationGame> {
        None
    }
}

/// Classic airport game: a coalition pays for its most demanding member
#[derive(Debug, Clone)]
pub struct AirportGame {
    players: Players,
}

impl AirportGame {
    /// Requires a finite, non-negative `cost` on every player
    pub fn new(players: Players) -> Result<Self> {
        check_plain_players(&players)?;
        Ok(AirportGame { players })
    }
}

impl CooperativeGame for AirportGame {
    fn players(&self) -> &[Player] {
        &self.players.players
    }

    fn worth(&self, coalition: &Coalition<'_>) -> f64 {
        coalition
            .iter()
            .filter_map(|p| p.cost)
            .fold(0.0, f64::max)
    }
}

/// Which groups each player belongs to, and which players each group owns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupIndex {
    members: BTreeMap<String, BTreeSet<String>>,
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl GroupIndex {
    pub fn build(players: &Players) -> Self {
        let mut index = GroupIndex::default();
        for player in players {
            let groups = index.groups.entry(player.id.clone()).or_default();
            for airline in &player.airlines {
                groups.insert(airline.clone());
                index
                    .members
                    .entry(airline.clone())
                    .or_default()
                    .insert(player.id.clone());
            }
        }
        index
    }

    /// Players operated by a group
    pub fn members(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.members.get(group)
    }

    /// Groups a player belongs to
    pub fn groups_of(&self, player_id: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(player_id)
    }

    /// Iterate groups with their member ids
    pub fn iter_groups(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.members.iter()
    }

    pub fn group_count(&self) -> usize {
        self.members.len()
    }
}

/// Airport game with the coalition structure induced by airlines
///
/// Each player (movement) has a runway tier and is operated by one or more
/// airlines. A coalition costs `c[t]` where `t` is its highest tier.
#[derive(Debug, Clone)]
pub struct ConfigurationGame {
    players: Players,
    /// `steps[0] == 0.0`, `steps[t]` is the cumulative cost up to tier `t`
    steps: Vec<f64>,
    index: GroupIndex,
    max_tier: usize,
}

impl ConfigurationGame {
    /// `runway_cost_steps` is `[c1, .., cT]`; `c0 = 0` is prepended
    pub fn new(players: Players, runway_cost_steps: &[f64]) -> Result<Self> {
        check_configuration_players(&players, runway_cost_steps)?;
        let max_tier = players.max_tier().unwrap_or(0);

        let mut steps = Vec::with_capacity(runway_cost_steps.len() + 1);
        steps.push(0.0);
        steps.extend_from_slice(runway_cost_steps);

        let index = GroupIndex::build(&players);

        Ok(ConfigurationGame {
            players,
            steps,
            index,
            max_tier,
        })
    }

    /// Cost-step schedule including the implicit `c0`
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    pub fn group_index(&self) -> &GroupIndex {
        &self.index
    }

    /// Highest tier present among the players
    pub fn max_tier(&self) -> usize {
        self.max_tier
    }
}

impl CooperativeGame for ConfigurationGame {
    fn players(&self) -> &[Player] {
        &self.players.players
    }

    fn worth(&self, coalition: &Coalition<'_>) -> f64 {
        coalition
            .iter()
            .filter_map(|p| p.tier)
            .max()
            .and_then(|t| self.steps.get(t).copied())
            .unwrap_or(0.0)
    }

    fn as_configuration(&self) -> Option<&ConfigurationGame> {
        Some(self)
    }
}
