use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for cpd operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Player key would not stay inside its data directory.
    #[error("Invalid player key '{0}': must be non-empty and contain no path separators")]
    InvalidPlayerKey(String),

    /// Text is not a UUID in simple or hyphenated form.
    #[error("Invalid UUID '{0}'")]
    InvalidUuid(String),

    /// Profile service reports no player with this name.
    #[error("Player '{0}' not found by the profile service")]
    PlayerNotFound(String),

    /// Profile lookup failed after exhausting all attempts.
    #[error("Failed to resolve UUID for '{name}' after {attempts} attempt(s): {details}")]
    ResolutionFailed { name: String, attempts: u32, details: String },

    /// Removing a player data file or directory failed.
    #[error("Failed to delete {}: {source}", .path.display())]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Command line could not be parsed.
    #[error("{0}")]
    Usage(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
