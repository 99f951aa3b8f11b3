//! CLI error types.

use docnav_config::ConfigError;
use docnav_site::BuildFailure;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Build failed after stage '{}': {}", .0.stage, .0.error)]
    Build(#[from] BuildFailure),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}
