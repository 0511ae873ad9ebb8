//! Organizer: sorts a flat directory of files into the project tree.
//!
//! For every regular file in the source directory the organizer:
//! - looks for a path hint in the first lines ([`crate::hint`])
//! - falls back to the filename when it contains a `/`
//! - copies the file with a [`crate::placer::Placer`]
//! - folds the outcome into a [`RunReport`]
//!
//! Files are processed one at a time, in filename order.

mod runner;
mod types;

pub use runner::{filename_fallback, Organizer, SourceFile, REASON_NOT_FOUND};
pub use types::{OrganizerError, Placement, PlacementResult, Problem, ProblemKind, RunReport};
