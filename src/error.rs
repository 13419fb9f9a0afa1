//! Error types for dataset loading and control dispatch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or parsing one of the telemetry tables.
///
/// Any of these aborts the whole dataset load; the chart never renders
/// from a partially loaded dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} has no header row or no subject columns")]
    EmptyTable { path: PathBuf },
}

impl LoadError {
    /// Attach a file path to an error produced while parsing in-memory text
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            LoadError::Io { source, .. } => LoadError::Io { path, source },
            LoadError::EmptyTable { .. } => LoadError::EmptyTable { path },
        }
    }
}

/// Errors from the string-based control dispatcher
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("unknown control field '{0}'")]
    UnknownField(String),

    #[error("invalid value '{value}' for control '{field}'")]
    InvalidValue { field: String, value: String },
}
