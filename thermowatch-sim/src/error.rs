//! Error types for the simulation surface

use std::path::PathBuf;

use thermowatch_core::EvaluationError;
use thiserror::Error;

/// Result type for simulator operations
pub type SimResult<T> = Result<T, SimError>;

/// Failures outside the core evaluation
#[derive(Error, Debug)]
pub enum SimError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`SimConfig`](crate::SimConfig)
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config values cannot drive a simulation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Core evaluation failed
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    /// Consumer side of the sample channel went away
    #[error("Sample channel closed")]
    ChannelClosed,

    /// Consumer thread panicked
    #[error("Monitor thread panicked")]
    ConsumerPanicked,
}
