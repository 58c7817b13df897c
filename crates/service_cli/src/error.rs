//! CLI error type.

use thiserror::Error;

use crate::config::ConfigError;
use sampler_core::SamplerError;

/// Errors surfaced by `gauss` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
