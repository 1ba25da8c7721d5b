//! Error types for the guides cleaner.

use crate::project::SchemaVersion;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure aborts the running command; nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed manifest {path}: {reason}")]
    MalformedManifest { path: PathBuf, reason: String },

    #[error(
        "Projects have different structure versions: {dest} is {dest_version}, {src} is {src_version}"
    )]
    IncompatibleVersions {
        dest: PathBuf,
        dest_version: SchemaVersion,
        src: PathBuf,
        src_version: SchemaVersion,
    },

    #[error("Failed to build reference pattern: {0}")]
    Pattern(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render output: {0}")]
    Output(String),
}

impl CleanerError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanerError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CleanerError::MalformedManifest {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<config::ConfigError> for CleanerError {
    fn from(err: config::ConfigError) -> Self {
        CleanerError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for CleanerError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        match path {
            Some(path) => match err.into_io_error() {
                Some(source) => CleanerError::Io { path, source },
                None => CleanerError::Walk(format!("filesystem loop at {}", path.display())),
            },
            None => CleanerError::Walk(err.to_string()),
        }
    }
}
