//! Types for the organizer module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run before any file is processed.
#[derive(Debug, Error)]
pub enum OrganizerError {
    /// Source directory does not exist or is not a directory.
    #[error(
        "Source directory {path} does not exist; create it and put the files to organize inside"
    )]
    SourceMissing { path: PathBuf },

    /// Source directory exists but could not be listed.
    #[error("Failed to list source directory {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination root could not be created.
    #[error("Failed to create project directory {path}: {source}")]
    DestinationUncreatable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of organizing a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlacementResult {
    /// File was copied to `destination`.
    Success {
        relative_path: String,
        destination: PathBuf,
    },
    /// No target path could be derived.
    NotFound { reason: String },
    /// A target path was found but placing the file failed.
    CopyError { reason: String },
}

/// Kind of problem recorded in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    NotFound,
    CopyError,
}

/// A file that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// File name in the source directory.
    pub file: String,
    pub kind: ProblemKind,
    /// Human-readable reason.
    pub reason: String,
}

/// A file that was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// File name in the source directory.
    pub file: String,
    pub relative_path: String,
    pub destination: PathBuf,
}

/// Aggregate result of a run.
///
/// Built by folding [`PlacementResult`]s with [`RunReport::record`], in the
/// order files were processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub success_count: usize,
    pub not_found_count: usize,
    pub error_count: usize,
    pub placements: Vec<Placement>,
    pub problems: Vec<Problem>,
    /// Scaffold directories created by this run.
    pub directories_created: usize,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    /// Creates an empty report.
    pub fn new(started_at: DateTime<Utc>, directories_created: usize) -> Self {
        Self {
            success_count: 0,
            not_found_count: 0,
            error_count: 0,
            placements: Vec::new(),
            problems: Vec::new(),
            directories_created,
            started_at,
            finished_at: None,
        }
    }

    /// Folds one file's outcome into the report.
    pub fn record(mut self, file: impl Into<String>, result: PlacementResult) -> Self {
        let file = file.into();
        match result {
            PlacementResult::Success {
                relative_path,
                destination,
            } => {
                self.success_count += 1;
                self.placements.push(Placement {
                    file,
                    relative_path,
                    destination,
                });
            }
            PlacementResult::NotFound { reason } => {
                self.not_found_count += 1;
                self.problems.push(Problem {
                    file,
                    kind: ProblemKind::NotFound,
                    reason,
                });
            }
            PlacementResult::CopyError { reason } => {
                self.error_count += 1;
                self.problems.push(Problem {
                    file,
                    kind: ProblemKind::CopyError,
                    reason,
                });
            }
        }
        self
    }

    /// Stamps the finish time.
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    /// Number of files processed.
    pub fn total_files(&self) -> usize {
        self.success_count + self.not_found_count + self.error_count
    }
}
