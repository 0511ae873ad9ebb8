//! Comment syntaxes that may carry a path hint.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validate::is_valid_path;

// Characters allowed in a hint: ASCII word characters, '/', '.' and '-'.
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//\s*([\w/.\-]+)(?:\s|$)").expect("valid line comment pattern"));
static MARKUP_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s*([\w/.\-]+)(?:\s|-->)").expect("valid markup pattern"));
static HASH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\s*([\w/.\-]+)(?:\s|$)").expect("valid hash comment pattern"));
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*\s*([\w/.\-]+)(?:\s|\*/)").expect("valid block comment pattern"));

/// A comment style recognised on the first lines of a file.
///
/// Variants are tried in the order of [`CommentSyntax::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentSyntax {
    /// `// path` (JavaScript, TypeScript, CSS preprocessors, Rust, ...).
    LineComment,
    /// `<!-- path -->` (HTML, XML, Vue templates, Markdown).
    MarkupComment,
    /// `# path` (shell, Python, YAML, Dockerfiles, env files).
    HashComment,
    /// `/* path */` (CSS, C-like block comments).
    BlockComment,
}

impl CommentSyntax {
    /// All syntaxes in matching priority order.
    pub const ALL: [CommentSyntax; 4] = [
        CommentSyntax::LineComment,
        CommentSyntax::MarkupComment,
        CommentSyntax::HashComment,
        CommentSyntax::BlockComment,
    ];

    /// Opening delimiter; a line without it is never matched against this syntax.
    pub fn opener(self) -> &'static str {
        match self {
            CommentSyntax::LineComment => "//",
            CommentSyntax::MarkupComment => "<!--",
            CommentSyntax::HashComment => "#",
            CommentSyntax::BlockComment => "/*",
        }
    }

    /// Closing delimiter, if the syntax has one.
    pub fn closer(self) -> Option<&'static str> {
        match self {
            CommentSyntax::MarkupComment => Some("-->"),
            CommentSyntax::BlockComment => Some("*/"),
            CommentSyntax::LineComment | CommentSyntax::HashComment => None,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            CommentSyntax::LineComment => &*LINE_COMMENT,
            CommentSyntax::MarkupComment => &*MARKUP_COMMENT,
            CommentSyntax::HashComment => &*HASH_COMMENT,
            CommentSyntax::BlockComment => &*BLOCK_COMMENT,
        }
    }

    /// Returns the raw candidate following the first opener on `line`,
    /// without validating it.
    pub fn capture(self, line: &str) -> Option<&str> {
        if !line.contains(self.opener()) {
            return None;
        }
        self.pattern()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Returns the candidate on `line` only if it is a valid path.
    pub fn match_path(self, line: &str) -> Option<&str> {
        self.capture(line).filter(|candidate| is_valid_path(candidate))
    }
}

impl fmt::Display for CommentSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.closer() {
            Some(closer) => write!(f, "{} {}", self.opener(), closer),
            None => f.write_str(self.opener()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment() {
        let syntax = CommentSyntax::LineComment;
        assert_eq!(
            syntax.capture("// frontend/src/main.js"),
            Some("frontend/src/main.js")
        );
        assert_eq!(syntax.capture("//frontend/src/main.js"), Some("frontend/src/main.js"));
        assert_eq!(syntax.capture("const a = 1;"), None);
    }

    #[test]
    fn test_line_comment_requires_terminator() {
        // ';' is outside the allowed characters and is not whitespace
        assert_eq!(CommentSyntax::LineComment.capture("// a/b;"), None);
        assert_eq!(
            CommentSyntax::LineComment.capture("// a/b trailing words"),
            Some("a/b")
        );
    }

    #[test]
    fn test_line_comment_skips_url_scheme() {
        assert_eq!(
            CommentSyntax::LineComment.capture("// https://example.com/docs"),
            Some("example.com/docs")
        );
    }

    #[test]
    fn test_markup_comment() {
        let syntax = CommentSyntax::MarkupComment;
        assert_eq!(
            syntax.capture("<!-- frontend/public/index.html -->"),
            Some("frontend/public/index.html")
        );
        assert_eq!(
            syntax.capture("<!--frontend/public/index.html-->"),
            Some("frontend/public/index.html")
        );
        assert_eq!(syntax.capture("<!-- frontend/public/index.html"), None);
    }

    #[test]
    fn test_hash_comment() {
        assert_eq!(
            CommentSyntax::HashComment.capture("# scripts/deploy.sh"),
            Some("scripts/deploy.sh")
        );
        assert_eq!(CommentSyntax::HashComment.capture("#!/bin/bash"), None);
    }

    #[test]
    fn test_block_comment() {
        let syntax = CommentSyntax::BlockComment;
        assert_eq!(
            syntax.capture("/* frontend/src/assets/main.css */"),
            Some("frontend/src/assets/main.css")
        );
        assert_eq!(
            syntax.capture("/*frontend/src/assets/main.css*/"),
            Some("frontend/src/assets/main.css")
        );
    }

    #[test]
    fn test_match_path_validates() {
        assert_eq!(CommentSyntax::HashComment.match_path("# Title"), None);
        assert_eq!(CommentSyntax::HashComment.capture("# Title"), Some("Title"));
        assert_eq!(
            CommentSyntax::HashComment.match_path("# docker/scripts/init.sh"),
            Some("docker/scripts/init.sh")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CommentSyntax::LineComment.to_string(), "//");
        assert_eq!(CommentSyntax::MarkupComment.to_string(), "<!-- -->");
        assert_eq!(CommentSyntax::BlockComment.to_string(), "/* */");
    }
}
