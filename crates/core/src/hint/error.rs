//! Error types for the hint module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a file for a path hint.
#[derive(Debug, Error)]
pub enum HintError {
    /// The file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HintError {
    /// Creates a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
