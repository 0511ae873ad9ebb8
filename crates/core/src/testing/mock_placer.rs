//! Mock placer for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::placer::{normalize_relative_path, PlacedFile, Placer, PlacerError};

/// A recorded placement for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPlacement {
    /// Source file that was submitted.
    pub source: PathBuf,
    /// Relative path as requested by the caller.
    pub relative_path: String,
    /// Whether the placement succeeded.
    pub success: bool,
}

/// Mock implementation of the Placer trait.
///
/// Provides controllable behavior for testing:
/// - Track placements for assertions
/// - Simulate failures for specific target paths
/// - Never touches the file system
///
/// # Example
///
/// ```rust,ignore
/// use hintsort_core::testing::MockPlacer;
///
/// let placer = MockPlacer::new("/project");
/// placer.fail_on("docs/readme.md").await;
///
/// let result = placer.place(Path::new("readme.md"), "docs/readme.md").await;
/// assert!(result.is_err());
///
/// let placements = placer.recorded_placements().await;
/// assert_eq!(placements.len(), 1);
/// assert!(!placements[0].success);
/// ```
#[derive(Debug)]
pub struct MockPlacer {
    root: PathBuf,
    /// Recorded placements.
    placements: Arc<RwLock<Vec<RecordedPlacement>>>,
    /// Normalized relative paths that fail with a copy error.
    failing: Arc<RwLock<HashSet<String>>>,
}

impl MockPlacer {
    /// Create a new mock placer rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            placements: Arc::new(RwLock::new(Vec::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Make placements to `relative_path` fail.
    pub async fn fail_on(&self, relative_path: impl Into<String>) {
        self.failing.write().await.insert(relative_path.into());
    }

    /// All placements attempted so far, in call order.
    pub async fn recorded_placements(&self) -> Vec<RecordedPlacement> {
        self.placements.read().await.clone()
    }

    /// Clear recorded placements.
    pub async fn clear(&self) {
        self.placements.write().await.clear();
    }
}

#[async_trait]
impl Placer for MockPlacer {
    fn name(&self) -> &str {
        "mock"
    }

    fn destination_root(&self) -> &Path {
        &self.root
    }

    async fn place(&self, source: &Path, relative_path: &str) -> Result<PlacedFile, PlacerError> {
        let result = match normalize_relative_path(relative_path, true) {
            Ok(normalized) => {
                let destination = self.root.join(&normalized);
                if self.failing.read().await.contains(&normalized) {
                    Err(PlacerError::copy_failed(
                        source.to_path_buf(),
                        destination,
                        std::io::Error::other("simulated copy failure"),
                    ))
                } else {
                    Ok(PlacedFile {
                        relative_path: normalized,
                        destination,
                        size_bytes: 0,
                        directories_created: 0,
                    })
                }
            }
            Err(e) => Err(e),
        };

        self.placements.write().await.push(RecordedPlacement {
            source: source.to_path_buf(),
            relative_path: relative_path.to_string(),
            success: result.is_ok(),
        });

        result
    }
}
