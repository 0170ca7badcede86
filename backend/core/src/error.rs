use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for Armonia tooling.
///
/// Rendering itself never fails; these cover reading inputs around it.
#[derive(Debug, Error)]
pub enum ArmoniaError {
    #[error("failed to read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read prompt template {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model result is not valid JSON: {0}")]
    InvalidReply(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
