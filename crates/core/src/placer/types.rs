//! Types for the placer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Information about a placed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFile {
    /// Relative path after normalization.
    pub relative_path: String,
    /// Final destination path.
    pub destination: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of directories created to host the file.
    pub directories_created: usize,
}
