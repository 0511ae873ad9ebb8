//! Scanning file content for a path hint.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::error::HintError;
use super::syntax::CommentSyntax;

/// Number of leading lines inspected for a hint.
pub const SCAN_LINES: usize = 3;

/// A validated path hint and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHint {
    /// The hinted relative path, as written in the comment.
    pub path: String,
    /// Comment syntax that carried the hint.
    pub syntax: CommentSyntax,
    /// 1-based line number of the hint.
    pub line: usize,
}

/// Finds the first valid hint in the first [`SCAN_LINES`] lines of `content`.
///
/// Lines are visited in order and, within a line, syntaxes in
/// [`CommentSyntax::ALL`] order. A candidate that fails validation does not
/// end the search.
pub fn find_hint(content: &str) -> Option<PathHint> {
    content
        .split('\n')
        .take(SCAN_LINES)
        .enumerate()
        .find_map(|(idx, line)| {
            CommentSyntax::ALL.iter().find_map(|&syntax| {
                syntax.match_path(line).map(|path| PathHint {
                    path: path.to_string(),
                    syntax,
                    line: idx + 1,
                })
            })
        })
}

/// Returns the hinted relative path from `content`, if any.
pub fn extract_path(content: &str) -> Option<String> {
    find_hint(content).map(|hint| hint.path)
}

/// Reads the first [`SCAN_LINES`] lines of the file at `path` and looks
/// for a hint.
///
/// Lines are read whole, however long they are; the rest of the file is
/// never touched. Content is decoded as lossy UTF-8.
pub async fn scan_file(path: &Path) -> Result<Option<PathHint>, HintError> {
    let file = File::open(path)
        .await
        .map_err(|e| HintError::read(path, e))?;
    let mut reader = BufReader::new(file);

    let mut head = Vec::new();
    for _ in 0..SCAN_LINES {
        let read = reader
            .read_until(b'\n', &mut head)
            .await
            .map_err(|e| HintError::read(path, e))?;
        if read == 0 {
            break;
        }
    }

    let content = String::from_utf8_lossy(&head);
    let hint = find_hint(&content);
    if let Some(ref h) = hint {
        tracing::debug!(
            "Found hint {} ({}) on line {} of {}",
            h.path,
            h.syntax,
            h.line,
            path.display()
        );
    }
    Ok(hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_line_comment_on_first_line() {
        let content = "// frontend/src/components/Navbar.vue\n<template></template>\n";
        assert_eq!(
            extract_path(content),
            Some("frontend/src/components/Navbar.vue".to_string())
        );
    }

    #[test]
    fn test_hash_comment_on_first_line() {
        let content = "# scripts/deploy.sh\nset -e\n";
        assert_eq!(extract_path(content), Some("scripts/deploy.sh".to_string()));
    }

    #[test]
    fn test_no_delimiters_returns_none() {
        let content = "plain text\nmore text\nstill nothing\n";
        assert_eq!(extract_path(content), None);
        assert_eq!(extract_path(""), None);
    }

    #[test]
    fn test_hint_on_fourth_line_is_ignored() {
        let content = "line one\nline two\nline three\n// docs/api/readme.md\n";
        assert_eq!(extract_path(content), None);
    }

    #[test]
    fn test_hint_on_third_line_is_found() {
        let content = "#!/bin/sh\nset -e\n# docker/scripts/entrypoint.sh\n";
        let hint = find_hint(content).unwrap();
        assert_eq!(hint.path, "docker/scripts/entrypoint.sh");
        assert_eq!(hint.syntax, CommentSyntax::HashComment);
        assert_eq!(hint.line, 3);
    }

    #[test]
    fn test_invalid_candidate_does_not_stop_search() {
        // Line 1 has a comment without a separator, line 2 carries the hint.
        let content = "// Navbar component\n<!-- frontend/src/components/Navbar.vue -->\n";
        let hint = find_hint(content).unwrap();
        assert_eq!(hint.path, "frontend/src/components/Navbar.vue");
        assert_eq!(hint.syntax, CommentSyntax::MarkupComment);
        assert_eq!(hint.line, 2);
    }

    #[test]
    fn test_later_syntax_on_same_line() {
        // The '//' capture is rejected, the block comment on the same line wins.
        let content = "// x /* frontend/src/assets/main.css */\n";
        let hint = find_hint(content).unwrap();
        assert_eq!(hint.path, "frontend/src/assets/main.css");
        assert_eq!(hint.syntax, CommentSyntax::BlockComment);
        assert_eq!(hint.line, 1);
    }

    #[test]
    fn test_syntax_order_within_line() {
        // Both '//' and '#' match; line comments are tried first.
        let content = "// backend/src/main.ts # docs/other.md\n";
        let hint = find_hint(content).unwrap();
        assert_eq!(hint.path, "backend/src/main.ts");
        assert_eq!(hint.syntax, CommentSyntax::LineComment);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "// backend/src/app.module.ts\r\nimport x from 'y';\r\n";
        assert_eq!(
            extract_path(content),
            Some("backend/src/app.module.ts".to_string())
        );
    }

    #[test]
    fn test_leading_separator_is_kept() {
        assert_eq!(
            extract_path("// /frontend/x.vue\n"),
            Some("/frontend/x.vue".to_string())
        );
    }

    #[tokio::test]
    async fn test_scan_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Navbar.vue");
        tokio::fs::write(&path, "<!-- frontend/src/components/layout/Navbar.vue -->\n<template/>")
            .await
            .unwrap();

        let hint = scan_file(&path).await.unwrap().unwrap();
        assert_eq!(hint.path, "frontend/src/components/layout/Navbar.vue");
        assert_eq!(hint.syntax, CommentSyntax::MarkupComment);
    }

    #[tokio::test]
    async fn test_scan_file_without_hint() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        tokio::fs::write(&path, "nothing to see here\n").await.unwrap();

        assert!(scan_file(&path).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_file_binary_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.png");
        tokio::fs::write(&path, [0x89, b'P', b'N', b'G', 0xff, 0xfe, b'\n', 0x00])
            .await
            .unwrap();

        assert!(scan_file(&path).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_file_single_huge_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.min.css");
        let mut content = String::from("/* frontend/src/assets/app.min.css */ ");
        content.push_str(&"body{margin:0}".repeat(6 * 1024));
        tokio::fs::write(&path, content).await.unwrap();

        let hint = scan_file(&path).await.unwrap().unwrap();
        assert_eq!(hint.path, "frontend/src/assets/app.min.css");
        assert_eq!(hint.syntax, CommentSyntax::BlockComment);
    }

    #[tokio::test]
    async fn test_scan_file_stops_after_third_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("late.ts");
        let mut content = "a\nb\nc\n// backend/src/late.ts\n".to_string();
        content.push_str(&"x".repeat(100 * 1024));
        tokio::fs::write(&path, content).await.unwrap();

        assert!(scan_file(&path).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = scan_file(&temp.path().join("missing.txt")).await;
        assert!(matches!(result, Err(HintError::Read { .. })));
    }
}
