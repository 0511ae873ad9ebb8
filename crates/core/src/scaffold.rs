//! Project directory skeleton.
//!
//! The scaffold is plain data: a list of relative directories created under
//! the project root before any file is placed. Directories that already
//! exist are left alone, so running the scaffolder twice creates nothing the
//! second time.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

/// Default project layout.
pub const DEFAULT_SCAFFOLD: &[&str] = &[
    // Frontend
    "frontend/public",
    "frontend/src/assets",
    "frontend/src/components/layout",
    "frontend/src/components/common",
    "frontend/src/components/projects",
    "frontend/src/components/users",
    "frontend/src/components/admin",
    "frontend/src/views",
    "frontend/src/router",
    "frontend/src/store/modules",
    "frontend/src/services",
    "frontend/src/utils",
    // Backend
    "backend/src/modules/users/dto",
    "backend/src/modules/users/entities",
    "backend/src/modules/projects/dto",
    "backend/src/modules/projects/entities",
    "backend/src/modules/categories/dto",
    "backend/src/modules/categories/entities",
    "backend/src/modules/reports/dto",
    "backend/src/modules/reports/entities",
    "backend/src/common/guards",
    "backend/src/common/decorators",
    "backend/src/common/filters",
    "backend/src/common/interceptors",
    "backend/src/common/dto",
    "backend/src/prisma",
    "backend/src/auth",
    "backend/prisma/migrations",
    // Docker
    "docker/frontend",
    "docker/backend",
    "docker/database",
    "docker/nginx/ssl",
    "docker/scripts",
    // Docs
    "docs/api",
    "docs/user-guide",
    "docs/dev-guide",
    "docs/deployment",
];

/// Failure to create one scaffold directory.
#[derive(Debug, Error)]
#[error("Failed to create scaffold directory {path}: {source}")]
pub struct ScaffoldError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Outcome of a scaffolding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldSummary {
    /// Directories created by this pass.
    pub created: usize,
    /// Directories that were already present.
    pub existing: usize,
    /// Directories that could not be created, with the error message.
    pub failed: Vec<(String, String)>,
}

/// Creates the configured directory skeleton under a project root.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
    directories: Vec<String>,
}

impl Scaffolder {
    /// Creates a scaffolder for the given root and directory list.
    pub fn new(root: impl Into<PathBuf>, directories: Vec<String>) -> Self {
        Self {
            root: root.into(),
            directories,
        }
    }

    /// Creates a scaffolder using [`DEFAULT_SCAFFOLD`].
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, default_directories())
    }

    /// Creates every missing directory.
    ///
    /// Failures are collected in the summary; they never abort the pass.
    pub async fn create(&self) -> ScaffoldSummary {
        let mut summary = ScaffoldSummary::default();

        for dir in &self.directories {
            let full_path = self.root.join(dir);
            if full_path.is_dir() {
                summary.existing += 1;
                continue;
            }

            match create_dir(&full_path).await {
                Ok(()) => {
                    debug!("Created scaffold directory {}", full_path.display());
                    summary.created += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    summary.failed.push((dir.clone(), e.source.to_string()));
                }
            }
        }

        summary
    }
}

/// [`DEFAULT_SCAFFOLD`] as owned strings.
pub fn default_directories() -> Vec<String> {
    DEFAULT_SCAFFOLD.iter().map(|dir| dir.to_string()).collect()
}

async fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).await.map_err(|e| ScaffoldError {
        path: path.to_path_buf(),
        source: e,
    })
}
