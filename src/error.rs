use std::path::PathBuf;
use thiserror::Error;

/// Every failure the crate can raise. `code()` gives the machine-readable category.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to save config at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("Audio playback failed: {0}")]
    Audio(String),
}

impl NotificationError {
    pub fn code(&self) -> &'static str {
        match self {
            NotificationError::ConfigRead { .. }
            | NotificationError::ConfigParse { .. }
            | NotificationError::ConfigWrite { .. } => "CONFIG_ERROR",
            NotificationError::Validation(_) => "VALIDATION_ERROR",
            NotificationError::Audio(_) => "AUDIO_ERROR",
        }
    }
}
