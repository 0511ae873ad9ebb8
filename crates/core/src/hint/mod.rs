//! Path hint extraction from leading comments.
//!
//! A loose file announces where it belongs in the project with a comment on
//! one of its first lines, for example:
//!
//! ```text
//! // frontend/src/components/Navbar.vue
//! <!-- frontend/public/index.html -->
//! # scripts/deploy.sh
//! /* frontend/src/assets/main.css */
//! ```
//!
//! Only the first [`SCAN_LINES`] lines are inspected. Every candidate must
//! pass [`is_valid_path`] before it is accepted.
//!
//! # Example
//!
//! ```ignore
//! use hintsort_core::hint::{extract_path, scan_file};
//!
//! assert_eq!(
//!     extract_path("// docs/readme.md\n# Readme"),
//!     Some("docs/readme.md".to_string()),
//! );
//!
//! let hint = scan_file(Path::new("downloaded_files/Navbar.vue")).await?;
//! ```

mod error;
mod extract;
mod syntax;
mod validate;

pub use error::HintError;
pub use extract::{extract_path, find_hint, scan_file, PathHint, SCAN_LINES};
pub use syntax::CommentSyntax;
pub use validate::is_valid_path;
