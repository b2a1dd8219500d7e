//! Simulator configuration.
//!
//! Loaded from JSON; every field is optional and falls back to its default.
//!
//! ```json
//! {
//!   "quantum": 3,
//!   "seed": 7,
//!   "algorithms": ["fcfs", "round_robin", "srtf"],
//!   "scenarios": ["standard", "mixed_processes"]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scenarios::{ScenarioKind, DEFAULT_SEED};
use crate::scheduler::AlgorithmKind;

/// Default Round-Robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Run configuration for a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Round-Robin time quantum.
    pub quantum: i64,
    /// Scenario generator seed.
    pub seed: u64,
    /// Algorithms to compare, in display order.
    pub algorithms: Vec<AlgorithmKind>,
    /// Scenarios to generate, in generation order.
    pub scenarios: Vec<ScenarioKind>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            seed: DEFAULT_SEED,
            algorithms: AlgorithmKind::ALL.to_vec(),
            scenarios: ScenarioKind::ALL.to_vec(),
        }
    }
}

impl SimulatorConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Restricts the algorithm list.
    pub fn with_algorithms(mut self, algorithms: Vec<AlgorithmKind>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Restricts the scenario list.
    pub fn with_scenarios(mut self, scenarios: Vec<ScenarioKind>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] for a non-positive quantum or an empty
    /// algorithm or scenario list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quantum <= 0 {
            return Err(ConfigError::Invalid(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::Invalid("no algorithms selected".into()));
        }
        if self.scenarios.is_empty() {
            return Err(ConfigError::Invalid("no scenarios selected".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.quantum, 2);
        assert_eq!(config.seed, 42);
        assert_eq!(config.algorithms.len(), 6);
        assert_eq!(config.scenarios.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = SimulatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{ "quantum": 4, "algorithms": ["round_robin", "hrrn"] }"#;
        let config = SimulatorConfig::from_json_str(json).unwrap();
        assert_eq!(config.quantum, 4);
        assert_eq!(config.seed, 42);
        assert_eq!(
            config.algorithms,
            vec![AlgorithmKind::RoundRobin, AlgorithmKind::Hrrn]
        );
        assert_eq!(config.scenarios, ScenarioKind::ALL.to_vec());
    }

    #[test]
    fn test_scenario_names() {
        let json = r#"{ "scenarios": ["simultaneous_arrival", "priority_variation"] }"#;
        let config = SimulatorConfig::from_json_str(json).unwrap();
        assert_eq!(
            config.scenarios,
            vec![ScenarioKind::SimultaneousArrival, ScenarioKind::PriorityVariation]
        );
    }

    #[test]
    fn test_invalid_quantum() {
        let err = SimulatorConfig::from_json_str(r#"{ "quantum": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_lists_rejected() {
        let config = SimulatorConfig::default().with_algorithms(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        let config = SimulatorConfig::default().with_scenarios(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let err = SimulatorConfig::from_json_str(r#"{ "algorithms": ["lottery"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulatorConfig::from_path("/nonexistent/sim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sim.json"));
    }

    #[test]
    fn test_builders() {
        let config = SimulatorConfig::default().with_quantum(5).with_seed(9);
        assert_eq!(config.quantum, 5);
        assert_eq!(config.seed, 9);
    }
}
