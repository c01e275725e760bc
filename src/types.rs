use derive_builder::Builder;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

use crate::error::{Result, ShapleyError};

/// An agent sharing the facility, e.g. one aircraft movement
///
/// `cost` is read by the plain airport game, `tier` and `airlines` by the
/// configuration game. Either set may be absent for the other mode.
#[derive(Debug, Clone, PartialEq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    #[builder(setter(into))]
    pub id: String,
    #[builder(setter(into), default)]
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[builder(setter(strip_option), default)]
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cost: Option<f64>,
    #[builder(setter(strip_option), default)]
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub tier: Option<usize>,
    #[builder(setter(into), default)]
    #[cfg_attr(feature = "serde", serde(default, alias = "group_ids"))]
    pub airlines: Vec<String>,
}

impl Player {
    /// Player for the plain airport game
    pub fn with_cost(id: impl Into<String>, cost: f64) -> Self {
        let id = id.into();
        Player {
            name: id.clone(),
            id,
            cost: Some(cost),
            tier: None,
            airlines: Vec::new(),
        }
    }

    /// Player for the configuration game
    pub fn with_tier<S: Into<String>>(
        id: impl Into<String>,
        tier: usize,
        airlines: impl IntoIterator<Item = S>,
    ) -> Self {
        let id = id.into();
        Player {
            name: id.clone(),
            id,
            cost: None,
            tier: Some(tier),
            airlines: airlines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered list of players taking part in a game
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Players {
    pub players: Vec<Player>,
}

impl Players {
    /// Create from a vector of players
    pub fn from_players(players: Vec<Player>) -> Self {
        Players { players }
    }

    /// Get the number of players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Highest tier carried by any player
    pub fn max_tier(&self) -> Option<usize> {
        self.players.iter().filter_map(|p| p.tier).max()
    }
}

impl From<Vec<Player>> for Players {
    fn from(players: Vec<Player>) -> Self {
        Players::from_players(players)
    }
}

impl<'a> IntoIterator for &'a Players {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// Supported Shapley value algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Algorithm {
    #[default]
    Exact,
    Approximate,
    ConfigurationValue,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Exact => "exact",
            Algorithm::Approximate => "approximate",
            Algorithm::ConfigurationValue => "configuration_value",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ShapleyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" => Ok(Algorithm::Exact),
            "approximate" => Ok(Algorithm::Approximate),
            "configuration_value" => Ok(Algorithm::ConfigurationValue),
            other => Err(ShapleyError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Represents a Shapley value result for a player
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
pub struct ShapleyValue {
    pub player_id: String,
    pub value: f64,
    #[cfg_attr(feature = "serde", tabled(display = "display_as_percent"))]
    pub percent: f64,
}

#[cfg(feature = "serde")]
fn display_as_percent(percent: &f64) -> String {
    format!("{:.2}%", percent * 100.0)
}

impl ShapleyValue {
    /// Create a new Shapley value result
    pub fn new(player_id: String, value: f64, percent: f64) -> Self {
        ShapleyValue {
            player_id,
            value,
            percent,
        }
    }
}

impl Display for ShapleyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player: {}, value: {}, percent: {}",
            self.player_id, self.value, self.percent
        )
    }
}

/// Outcome of one solver run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Allocation {
    /// One entry per player, in the order the players were given
    pub values: Vec<ShapleyValue>,
    /// Worth of the grand coalition
    pub total_worth: f64,
    pub elapsed_seconds: f64,
    pub algorithm: Algorithm,
}

impl Allocation {
    /// Build an allocation from raw per-player shares
    pub fn new<'a, I>(
        shares: I,
        total_worth: f64,
        elapsed_seconds: f64,
        algorithm: Algorithm,
    ) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let values = shares
            .into_iter()
            .map(|(id, value)| {
                let percent = if total_worth != 0.0 {
                    value / total_worth
                } else {
                    0.0
                };
                ShapleyValue::new(id.to_string(), value, percent)
            })
            .collect();

        Allocation {
            values,
            total_worth,
            elapsed_seconds,
            algorithm,
        }
    }

    /// Share assigned to a player id
    pub fn share(&self, player_id: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|sv| sv.player_id == player_id)
            .map(|sv| sv.value)
    }

    /// Sum of all shares
    pub fn sum(&self) -> f64 {
        self.values.iter().map(|sv| sv.value).sum()
    }

    /// Distance between the distributed shares and the grand coalition worth
    pub fn efficiency_gap(&self) -> f64 {
        (self.sum() - self.total_worth).abs()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(feature = "serde")]
mod csv_support {
    use super::*;
    use serde::{Deserialize, Deserializer};
    use std::path::Path;

    fn deserialize_na_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.trim();
        if s == "NA" || s.is_empty() {
            Ok(None)
        } else {
            s.parse::<T>().map(Some).map_err(serde::de::Error::custom)
        }
    }

    #[derive(Debug, Deserialize)]
    struct PlayerRecord {
        #[serde(rename = "Id")]
        id: String,
        #[serde(rename = "Name", default)]
        name: String,
        #[serde(rename = "Cost", default, deserialize_with = "deserialize_na_option")]
        cost: Option<f64>,
        #[serde(rename = "Type", default, deserialize_with = "deserialize_na_option")]
        tier: Option<usize>,
        #[serde(rename = "Airlines", default)]
        airlines: String,
    }

    impl PlayerRecord {
        fn into_player(self) -> Player {
            let airlines = self
                .airlines
                .split(';')
                .map(str::trim)
                .filter(|a| !a.is_empty() && *a != "NA")
                .map(str::to_string)
                .collect();
            let name = if self.name.is_empty() {
                self.id.clone()
            } else {
                self.name
            };

            Player {
                id: self.id,
                name,
                cost: self.cost,
                tier: self.tier,
                airlines,
            }
        }
    }

    impl Players {
        /// Read players from a CSV file with columns `Id,Name,Cost,Type,Airlines`
        ///
        /// Airlines are `;`-separated. Empty cells and `NA` mean the field is absent.
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
            let reader =
                csv::Reader::from_path(path).map_err(|e| ShapleyError::Csv(e.to_string()))?;
            Self::from_csv_reader(reader)
        }

        /// Read players from any CSV source
        pub fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
            let mut players = Vec::new();
            for result in reader.deserialize() {
                let record: PlayerRecord = result.map_err(|e| ShapleyError::Csv(e.to_string()))?;
                players.push(record.into_player());
            }

            Ok(Players::from_players(players))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_builder_defaults() {
        let player = PlayerBuilder::default()
            .id("P1")
            .cost(10.0)
            .build()
            .unwrap();
        assert_eq!(player.id, "P1");
        assert_eq!(player.name, "");
        assert_eq!(player.cost, Some(10.0));
        assert_eq!(player.tier, None);
        assert!(player.airlines.is_empty());
    }

    #[test]
    fn test_player_builder_requires_id() {
        let result = PlayerBuilder::default().cost(10.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_player_constructors() {
        let plain = Player::with_cost("P1", 12.5);
        assert_eq!(plain.name, "P1");
        assert_eq!(plain.cost, Some(12.5));

        let movement = Player::with_tier("M1", 2, ["AF", "KL"]);
        assert_eq!(movement.tier, Some(2));
        assert_eq!(movement.airlines, vec!["AF".to_string(), "KL".to_string()]);
        assert_eq!(movement.cost, None);
    }

    #[test]
    fn test_players_operations() {
        let players = Players::from_players(vec![
            Player::with_tier("M1", 1, ["A"]),
            Player::with_tier("M2", 3, ["B"]),
            Player::with_cost("P3", 5.0),
        ]);
        assert_eq!(players.len(), 3);
        assert!(!players.is_empty());
        assert_eq!(players.max_tier(), Some(3));

        let empty = Players::default();
        assert!(empty.is_empty());
        assert_eq!(empty.max_tier(), None);
    }

    #[test]
    fn test_algorithm_round_trip_names() {
        for algorithm in [
            Algorithm::Exact,
            Algorithm::Approximate,
            Algorithm::ConfigurationValue,
        ] {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!(matches!(
            "shapley".parse::<Algorithm>(),
            Err(ShapleyError::UnknownAlgorithm(name)) if name == "shapley"
        ));
    }

    #[test]
    fn test_allocation_accessors() {
        let allocation = Allocation::new(
            [("P1", 10.0), ("P2", 30.0)],
            40.0,
            0.001,
            Algorithm::Exact,
        );
        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation.share("P2"), Some(30.0));
        assert_eq!(allocation.share("P9"), None);
        assert_eq!(allocation.sum(), 40.0);
        assert_eq!(allocation.efficiency_gap(), 0.0);
        assert_eq!(allocation.values[0].percent, 0.25);
        assert_eq!(allocation.values[1].player_id, "P2");
    }

    #[test]
    fn test_allocation_zero_worth_percent() {
        let allocation = Allocation::new([("P1", 0.0)], 0.0, 0.0, Algorithm::Exact);
        assert_eq!(allocation.values[0].percent, 0.0);
    }
}
