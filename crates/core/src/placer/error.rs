//! Error types for the placer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file placement.
#[derive(Debug, Error)]
pub enum PlacerError {
    /// Source file not found.
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Relative path is empty after normalization.
    #[error("Invalid target path: {path:?}")]
    InvalidTarget { path: String },

    /// Relative path would resolve outside the destination root.
    #[error("Target path escapes the project directory: {path}")]
    EscapesRoot { path: String },

    /// Failed to create destination directory.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy file.
    #[error("Failed to copy file from {from} to {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlacerError {
    /// Creates a copy failed error.
    pub fn copy_failed(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::CopyFailed { from, to, source }
    }
}
