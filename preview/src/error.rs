use std::path::PathBuf;

use moonshot_core::{ConfigError, StatsError};

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No numeric value in {0:?}")]
    Unparseable(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
