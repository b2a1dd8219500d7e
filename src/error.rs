//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a single simulation run.
///
/// The simulation is a pure function of its input, so every error is an
/// input or usage error. No partial result accompanies an error.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The process set violates a precondition.
    #[error("invalid process set: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Round-Robin quantum must be positive.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// Aggregates are undefined over an empty timeline.
    #[error("cannot aggregate metrics: total time {total_time}, {completed} completed processes")]
    DegenerateTimeline { total_time: i64, completed: usize },
}

/// Failure to load or validate a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
