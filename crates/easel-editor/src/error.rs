use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading editor configuration.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Failure signal delivered by the image generation collaborator.
///
/// Receiving one never mutates the scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation rejected with status {0}")]
    Rejected(u16),
    #[error("generation returned no image")]
    EmptyResponse,
    #[error("generation transport failed: {0}")]
    Transport(String),
}
