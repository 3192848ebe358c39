//! Configuration shared by the CLI commands
//!
//! Every field has a default, so a JSON file only needs to name what it
//! changes. Command-line flags are applied on top of the loaded values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    search::{Algorithm, Limits, NamedHeuristic},
    tictactoe::{Difficulty, Player},
};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Serialization`] if it is not valid configuration JSON.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Write this configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(|source| crate::Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }

    fn validate(&self) -> crate::Result<()> {
        match self.search.cost_limit {
            Some(limit) if !(limit.is_finite() && limit >= 0.0) => {
                Err(crate::Error::InvalidConfiguration {
                    message: format!("cost_limit must be finite and non-negative, got {limit}"),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Defaults for `s2p search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: NamedHeuristic,
    /// Depth bound for depth-limited search
    pub depth_limit: usize,
    /// Cost budget for IDA*; unbounded when absent
    pub cost_limit: Option<f64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            algorithm: Algorithm::default(),
            heuristic: NamedHeuristic::default(),
            depth_limit: limits.depth,
            cost_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_heuristic(mut self, heuristic: NamedHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_cost_limit(mut self, cost_limit: f64) -> Self {
        self.cost_limit = Some(cost_limit);
        self
    }

    pub fn limits(&self) -> Limits {
        Limits {
            depth: self.depth_limit,
            cost: self.cost_limit.unwrap_or(f64::INFINITY),
        }
    }
}

/// Defaults for `s2p play`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// The side the human plays
    pub human: Player,
    /// Seed for the easy opponent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            human: Player::X,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"search": {"algorithm": "a-star"}}"#).unwrap();
        assert_eq!(config.search.algorithm, Algorithm::AStar);
        assert_eq!(config.search.heuristic, NamedHeuristic::Manhattan);
        assert_eq!(config.search.depth_limit, 10);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn builders_override() {
        let search = SearchConfig::default()
            .with_algorithm(Algorithm::IterativeDeepeningAStar)
            .with_cost_limit(3.5)
            .with_depth_limit(4);
        let limits = search.limits();
        assert_eq!(limits.depth, 4);
        assert_eq!(limits.cost, 3.5);
        assert_eq!(SearchConfig::default().limits().cost, f64::INFINITY);

        let game = GameConfig::default()
            .with_difficulty(Difficulty::Easy)
            .with_human(Player::O)
            .with_seed(9);
        assert_eq!(game.seed, Some(9));
        assert_eq!(game.human, Player::O);
    }

    #[test]
    fn saved_algorithms_reload_and_parse_as_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s2p.json");
        for algorithm in Algorithm::ALL {
            let config = AppConfig {
                search: SearchConfig::default().with_algorithm(algorithm),
                ..Default::default()
            };
            config.save(&path).unwrap();
            assert_eq!(AppConfig::load(&path).unwrap(), config);

            let saved: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            let name = saved["search"]["algorithm"].as_str().unwrap();
            assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
        }

        let config: AppConfig =
            serde_json::from_str(r#"{"search": {"algorithm": "ida-star"}}"#).unwrap();
        assert_eq!(config.search.algorithm, Algorithm::IterativeDeepeningAStar);
    }

    #[test]
    fn negative_cost_limit_is_rejected() {
        let config = AppConfig {
            search: SearchConfig::default().with_cost_limit(-1.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
