//! Pipeline errors.

use super::{ConfigError, LinearizeError, ParseError, SourceError};

/// Errors that can occur during a graph generation run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Linearization error: {0}")]
    Linearize(#[from] LinearizeError),
}
