//! Human-readable rendering of a [`RunReport`].

use std::fmt;
use std::path::Path;

use crate::hint::SCAN_LINES;
use crate::organizer::RunReport;

/// Console view of a finished run.
pub struct ReportView<'a> {
    report: &'a RunReport,
    project_dir: &'a Path,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a RunReport, project_dir: &'a Path) -> Self {
        Self {
            report,
            project_dir,
        }
    }
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;

        writeln!(f, "=== File organization finished ===")?;
        writeln!(f, "Successfully copied: {} files", report.success_count)?;

        if report.has_problems() {
            writeln!(f)?;
            writeln!(f, "=== PROBLEMS ===")?;
            writeln!(f, "Files without a target path: {}", report.not_found_count)?;
            writeln!(f, "Files that failed to copy: {}", report.error_count)?;

            writeln!(f)?;
            writeln!(f, "Files with problems:")?;
            for (idx, problem) in report.problems.iter().enumerate() {
                writeln!(f, "{}. {} - {}", idx + 1, problem.file, problem.reason)?;
            }

            writeln!(f)?;
            writeln!(f, "HOW TO FIX:")?;
            writeln!(
                f,
                "1. Make sure every file has a path comment within its first {} lines",
                SCAN_LINES
            )?;
            writeln!(
                f,
                "   Expected format, e.g.: \"// frontend/src/components/Navbar.vue\""
            )?;
            writeln!(f, "2. Check that the path in the comment contains a \"/\"")?;
            writeln!(
                f,
                "3. Or rename the file to its full path (e.g. \"frontend/src/components/Navbar.vue\")"
            )?;
        }

        writeln!(f)?;
        write!(f, "Check the project directory: {}", self.project_dir.display())
    }
}

/// Renders `report` as the final console summary.
pub fn render(report: &RunReport, project_dir: &Path) -> String {
    ReportView::new(report, project_dir).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organizer::PlacementResult;
    use chrono::Utc;
    use std::path::PathBuf;

    #[test]
    fn test_render_success_only() {
        let report = RunReport::new(Utc::now(), 0).record(
            "readme.md",
            PlacementResult::Success {
                relative_path: "docs/readme.md".to_string(),
                destination: PathBuf::from("./student-project/docs/readme.md"),
            },
        );

        let text = render(&report, Path::new("./student-project"));

        assert!(text.contains("Successfully copied: 1 files"));
        assert!(!text.contains("PROBLEMS"));
        assert!(!text.contains("HOW TO FIX"));
        assert!(text.ends_with("Check the project directory: ./student-project"));
    }

    #[test]
    fn test_render_lists_problems_in_order() {
        let report = RunReport::new(Utc::now(), 0)
            .record(
                "notes.txt",
                PlacementResult::NotFound {
                    reason: "No target path found in comments or filename".to_string(),
                },
            )
            .record(
                "locked.ts",
                PlacementResult::CopyError {
                    reason: "Failed to copy file: denied".to_string(),
                },
            );

        let text = render(&report, Path::new("out"));

        assert!(text.contains("Successfully copied: 0 files"));
        assert!(text.contains("Files without a target path: 1"));
        assert!(text.contains("Files that failed to copy: 1"));
        let first = text
            .find("1. notes.txt - No target path found in comments or filename")
            .unwrap();
        let second = text
            .find("2. locked.ts - Failed to copy file: denied")
            .unwrap();
        assert!(first < second);
        assert!(text.contains("HOW TO FIX:"));
        assert!(text.contains("within its first 3 lines"));
    }
}
