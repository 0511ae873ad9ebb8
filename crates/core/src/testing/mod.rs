//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use hintsort_core::testing::{fixtures, MockPlacer};
//!
//! let placer = MockPlacer::new("/project");
//! placer.fail_on("docs/readme.md").await;
//!
//! fixtures::write_sources(&source_dir, fixtures::SAMPLE_SOURCES)?;
//! ```

mod mock_placer;

pub use mock_placer::{MockPlacer, RecordedPlacement};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::Path;

    /// Loose files covering every comment syntax, plus one file without a hint.
    ///
    /// Each entry is `(file name, content, expected relative path)`.
    pub const SAMPLE_SOURCES: &[(&str, &str, Option<&str>)] = &[
        (
            "Navbar.vue",
            "// frontend/src/components/layout/Navbar.vue\n<template>\n  <nav/>\n</template>\n",
            Some("frontend/src/components/layout/Navbar.vue"),
        ),
        (
            "index.html",
            "<!-- frontend/public/index.html -->\n<!DOCTYPE html>\n<html></html>\n",
            Some("frontend/public/index.html"),
        ),
        (
            "deploy.sh",
            "#!/bin/sh\n# docker/scripts/deploy.sh\nset -e\n",
            Some("docker/scripts/deploy.sh"),
        ),
        (
            "main.css",
            "/* frontend/src/assets/main.css */\nbody { margin: 0; }\n",
            Some("frontend/src/assets/main.css"),
        ),
        (
            "notes.txt",
            "Remember to update the README.\nNo path here.\n",
            None,
        ),
    ];

    /// Writes `(name, content, _)` entries into `dir`.
    pub fn write_sources(
        dir: &Path,
        sources: &[(&str, &str, Option<&str>)],
    ) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        for (name, content, _) in sources {
            std::fs::write(dir.join(name), content)?;
        }
        Ok(())
    }

    /// Number of entries in `sources` that carry a hint.
    pub fn hinted_count(sources: &[(&str, &str, Option<&str>)]) -> usize {
        sources.iter().filter(|(_, _, hint)| hint.is_some()).count()
    }
}
