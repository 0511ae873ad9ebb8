//! Organizer run loop.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::hint;
use crate::placer::{FsPlacer, Placer};
use crate::scaffold::Scaffolder;

use super::types::{OrganizerError, PlacementResult, RunReport};

/// Reason recorded when neither a comment nor the filename yields a path.
pub const REASON_NOT_FOUND: &str = "No target path found in comments or filename";

/// A regular file in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as listed in the source directory.
    pub name: String,
    /// Full path inside the source directory.
    pub path: PathBuf,
}

/// Returns the filename itself as a target path when it contains a `/`.
pub fn filename_fallback(name: &str) -> Option<&str> {
    name.contains('/').then_some(name)
}

/// Sorts the files of a source directory into the project tree.
pub struct Organizer<P: Placer> {
    source_dir: PathBuf,
    placer: P,
    scaffolder: Scaffolder,
}

impl Organizer<FsPlacer> {
    /// Creates an organizer backed by the file system placer.
    pub fn from_config(config: &Config) -> Self {
        let placer = FsPlacer::new(&config.project_dir, config.placer.clone());
        let scaffolder = Scaffolder::new(&config.project_dir, config.scaffold.clone());
        Self::new(&config.source_dir, placer, scaffolder)
    }
}

impl<P: Placer> Organizer<P> {
    /// Creates a new organizer.
    pub fn new(source_dir: impl Into<PathBuf>, placer: P, scaffolder: Scaffolder) -> Self {
        Self {
            source_dir: source_dir.into(),
            placer,
            scaffolder,
        }
    }

    /// The placer files are handed to.
    pub fn placer(&self) -> &P {
        &self.placer
    }

    /// Runs a full pass over the source directory.
    ///
    /// Only the fatal preconditions are returned as errors; every per-file
    /// failure ends up in the report.
    pub async fn run(&self) -> Result<RunReport, OrganizerError> {
        let started_at = Utc::now();

        match fs::metadata(&self.source_dir).await {
            Ok(meta) if meta.is_dir() => {}
            _ => {
                return Err(OrganizerError::SourceMissing {
                    path: self.source_dir.clone(),
                })
            }
        }

        let root = self.placer.destination_root();
        if !root.is_dir() {
            fs::create_dir_all(root)
                .await
                .map_err(|e| OrganizerError::DestinationUncreatable {
                    path: root.to_path_buf(),
                    source: e,
                })?;
            info!("Created project directory {}", root.display());
        }

        let scaffold = self.scaffolder.create().await;
        info!(
            "Created {} directories in the project structure",
            scaffold.created
        );
        if !scaffold.failed.is_empty() {
            warn!(
                "{} scaffold directories could not be created",
                scaffold.failed.len()
            );
        }

        let files = self.list_source_files().await?;
        info!(
            "Organizing {} files from {} using placer '{}'",
            files.len(),
            self.source_dir.display(),
            self.placer.name()
        );

        let mut report = RunReport::new(started_at, scaffold.created);
        for file in files {
            let result = self.organize_file(&file.name, &file.path).await;
            report = report.record(file.name, result);
        }

        Ok(report.finish())
    }

    /// Decides where one file goes and places it.
    ///
    /// A hint in the leading comments wins; otherwise a filename containing
    /// `/` is used as-is. Without either, nothing is written.
    pub async fn organize_file(&self, name: &str, path: &Path) -> PlacementResult {
        let (hinted, read_error) = match hint::scan_file(path).await {
            Ok(found) => (found.map(|h| h.path), None),
            Err(e) => {
                warn!("{}", e);
                (None, Some(e))
            }
        };

        let target = hinted.or_else(|| filename_fallback(name).map(str::to_string));

        let Some(target) = target else {
            let reason = match read_error {
                Some(e) => format!("Could not read file: {}", e),
                None => REASON_NOT_FOUND.to_string(),
            };
            warn!("{}: {}", name, reason);
            return PlacementResult::NotFound { reason };
        };

        match self.placer.place(path, &target).await {
            Ok(placed) => {
                info!("Copied: {} -> {}", name, placed.relative_path);
                PlacementResult::Success {
                    relative_path: placed.relative_path,
                    destination: placed.destination,
                }
            }
            Err(e) => {
                warn!("Failed to copy {}: {}", name, e);
                PlacementResult::CopyError {
                    reason: format!("Failed to copy file: {}", e),
                }
            }
        }
    }

    /// Lists the files of the source directory, sorted by name.
    ///
    /// Entries whose metadata cannot be read (e.g. dangling symlinks) are
    /// kept so they show up in the report.
    async fn list_source_files(&self) -> Result<Vec<SourceFile>, OrganizerError> {
        let unreadable = |e: std::io::Error| OrganizerError::SourceUnreadable {
            path: self.source_dir.clone(),
            source: e,
        };

        let mut entries = fs::read_dir(&self.source_dir).await.map_err(unreadable)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            // Follows symlinks
            match fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => files.push(SourceFile { name, path }),
                Ok(_) => debug!("Skipping non-file entry {}", name),
                Err(e) => {
                    warn!("Cannot stat {}: {}", name, e);
                    files.push(SourceFile { name, path });
                }
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}
