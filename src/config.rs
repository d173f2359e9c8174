//! Configuration System
//!
//! Loads scenario parameters from tuning.toml for easy adjustment without
//! recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::variate::{
    ConstantVariate, TriangularVariate, UniformVariate, VariateError, VariateSource,
};

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<ScenarioConfig>,
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub steps: u64,
    pub seed: u64,
}

/// One scenario: a model configuration run for the configured number of steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub num_agents: usize,
    pub default_production: f64,
    #[serde(default)]
    pub variate: VariateConfig,
}

/// Variate source selection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariateConfig {
    #[default]
    None,
    Constant {
        factor: f64,
    },
    Uniform {
        low: f64,
        high: f64,
    },
    Triangular {
        low: f64,
        high: f64,
        mode: f64,
    },
}

impl VariateConfig {
    /// Build the configured variate source
    pub fn build(&self) -> Result<Option<Box<dyn VariateSource>>, VariateError> {
        match *self {
            VariateConfig::None => Ok(None),
            VariateConfig::Constant { factor } => Ok(Some(Box::new(ConstantVariate(factor)))),
            VariateConfig::Uniform { low, high } => {
                Ok(Some(Box::new(UniformVariate::new(low, high)?)))
            }
            VariateConfig::Triangular { low, high, mode } => {
                Ok(Some(Box::new(TriangularVariate::new(low, high, mode)?)))
            }
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig { steps: 5, seed: 42 },
            scenarios: vec![
                ScenarioConfig {
                    name: "triangular_variate".to_string(),
                    num_agents: 1,
                    default_production: 10.0,
                    variate: VariateConfig::Triangular {
                        low: 0.75,
                        high: 1.25,
                        mode: 1.0,
                    },
                },
                ScenarioConfig {
                    name: "uniform_variate".to_string(),
                    num_agents: 2,
                    default_production: 10.0,
                    variate: VariateConfig::Uniform {
                        low: 0.75,
                        high: 1.25,
                    },
                },
            ],
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.steps, 5);
        assert_eq!(config.scenarios.len(), 2);
        assert_eq!(config.scenarios[0].num_agents, 1);
        assert_eq!(config.scenarios[1].num_agents, 2);
    }

    #[test]
    fn test_parse_scenarios() {
        let config: Config = toml::from_str(
            r#"
            [simulation]
            steps = 3
            seed = 7

            [[scenario]]
            name = "flat"
            num_agents = 4
            default_production = 12.5

            [[scenario]]
            name = "noisy"
            num_agents = 2
            default_production = 10.0
            variate = { kind = "uniform", low = 0.5, high = 1.5 }
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.steps, 3);
        assert_eq!(config.scenarios.len(), 2);
        assert!(matches!(config.scenarios[0].variate, VariateConfig::None));
        assert!(matches!(
            config.scenarios[1].variate,
            VariateConfig::Uniform { .. }
        ));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_variate_kind_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [simulation]
            steps = 1
            seed = 1

            [[scenario]]
            name = "bad"
            num_agents = 1
            default_production = 10.0
            variate = { kind = "gaussian", mean = 1.0 }
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_rejects_invalid_triangular() {
        let config = VariateConfig::Triangular {
            low: 0.75,
            high: 1.25,
            mode: 0.25,
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_load_config_file() {
        // This test requires the tuning.toml file to exist
        if Path::new(DEFAULT_TUNING_PATH).exists() {
            let config = Config::load(DEFAULT_TUNING_PATH).unwrap();
            assert!(config.simulation.steps > 0);
        }
    }
}
