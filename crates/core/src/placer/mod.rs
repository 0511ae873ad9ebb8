//! Placer module for copying files into the project tree.
//!
//! This module provides the `Placer` trait and a file system implementation
//! that copies a source file to `<destination root>/<relative path>`.
//!
//! # Features
//!
//! - Exactly one leading `/` is stripped from the relative path
//! - Relative paths that would leave the destination root are rejected
//! - Missing parent directories are created
//! - Existing destination files are overwritten (last write wins)
//! - Buffered copies with a configurable buffer size
//!
//! # Example
//!
//! ```ignore
//! use hintsort_core::placer::{FsPlacer, Placer, PlacerConfig};
//!
//! let placer = FsPlacer::new("./student-project", PlacerConfig::default());
//!
//! let placed = placer
//!     .place(Path::new("downloaded_files/Navbar.vue"), "frontend/src/components/Navbar.vue")
//!     .await?;
//! println!("Placed {} ({} bytes)", placed.destination.display(), placed.size_bytes);
//! ```

mod config;
mod error;
mod fs_placer;
mod traits;
mod types;

pub use config::PlacerConfig;
pub use error::PlacerError;
pub use fs_placer::{normalize_relative_path, FsPlacer};
pub use traits::Placer;
pub use types::PlacedFile;
