//! Trait definitions for the placer module.

use async_trait::async_trait;
use std::path::Path;

use super::error::PlacerError;
use super::types::PlacedFile;

/// A placer that copies files into the project tree.
#[async_trait]
pub trait Placer: Send + Sync {
    /// Returns the name of this placer implementation.
    fn name(&self) -> &str;

    /// Root directory that relative paths resolve against.
    fn destination_root(&self) -> &Path;

    /// Copies `source` to `relative_path` under the destination root.
    async fn place(&self, source: &Path, relative_path: &str) -> Result<PlacedFile, PlacerError>;
}
