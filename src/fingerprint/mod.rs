//! Tooling fingerprint scanner
//!
//! Given a flat list of relative file paths, classify which linters and
//! formatters the project already has configured. Matching is against the
//! basename only — a config file in a subdirectory counts exactly as much as
//! one at the project root — and is exact and case-sensitive, so near-miss
//! names like `g.eslintrc.js` never match.
//!
//! The scanner is pure: it touches no filesystem, reads no environment, and
//! cannot fail. Enumerating the actual project tree is the caller's job (see
//! [`walker`]).

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod patterns;
pub mod walker;

pub use patterns::{ToolPattern, TOOL_PATTERNS};
pub use walker::{ProjectWalker, WalkConfig, WalkError};

/// A detectable linter or formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Eslint,
    Biome,
    Prettier,
}

impl ToolKind {
    /// Whether this tool can serve as a linter
    pub fn lints(&self) -> bool {
        matches!(self, ToolKind::Eslint | ToolKind::Biome)
    }

    /// Whether this tool can serve as a formatter
    pub fn formats(&self) -> bool {
        matches!(self, ToolKind::Prettier | ToolKind::Biome)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Eslint => "eslint",
            ToolKind::Biome => "biome",
            ToolKind::Prettier => "prettier",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one fingerprint scan
///
/// Each field is `None` when no evidence for that role was found anywhere in
/// the input, and otherwise holds the detected tools in first-detected order
/// with no duplicates. An empty vector is unreachable by construction: "no
/// evidence" is always `None`, so callers can treat `Some` as non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub linters: Option<Vec<ToolKind>>,
    pub formatters: Option<Vec<ToolKind>>,
}

impl Report {
    /// Whether the scan found any tooling evidence at all
    pub fn is_empty(&self) -> bool {
        self.linters.is_none() && self.formatters.is_none()
    }

    /// First detected linter, if any
    pub fn default_linter(&self) -> Option<ToolKind> {
        self.linters.as_ref().and_then(|l| l.first().copied())
    }

    /// First detected formatter, if any
    pub fn default_formatter(&self) -> Option<ToolKind> {
        self.formatters.as_ref().and_then(|f| f.first().copied())
    }

    /// Whether the given tool was detected in either role
    pub fn contains(&self, kind: ToolKind) -> bool {
        let in_role = |role: &Option<Vec<ToolKind>>| {
            role.as_ref().map(|v| v.contains(&kind)).unwrap_or(false)
        };
        in_role(&self.linters) || in_role(&self.formatters)
    }
}

/// Final path segment of a relative path, or the whole string if it has no
/// separator
fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Scans a path listing for linter and formatter configuration evidence
///
/// Accepts any iterator of relative path strings. Duplicate paths and paths
/// that match nothing are harmless; an empty input yields a report with both
/// fields `None`.
pub fn scan<I, S>(paths: I) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut linters: Vec<ToolKind> = Vec::new();
    let mut formatters: Vec<ToolKind> = Vec::new();

    for path in paths {
        let name = basename(path.as_ref());

        for pattern in TOOL_PATTERNS {
            if !pattern.config_files.contains(&name) {
                continue;
            }

            tracing::debug!(path = path.as_ref(), tool = %pattern.kind, "Matched tool config");

            // A dual-capability tool feeds both collections from one match.
            if pattern.kind.lints() && !linters.contains(&pattern.kind) {
                linters.push(pattern.kind);
            }
            if pattern.kind.formats() && !formatters.contains(&pattern.kind) {
                formatters.push(pattern.kind);
            }
        }
    }

    Report {
        linters: non_empty(linters),
        formatters: non_empty(formatters),
    }
}

fn non_empty(tools: Vec<ToolKind>) -> Option<Vec<ToolKind>> {
    if tools.is_empty() {
        None
    } else {
        Some(tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_extraction() {
        assert_eq!(basename("src/index.ts"), "index.ts");
        assert_eq!(basename("a/b/c/.eslintrc"), ".eslintrc");
        assert_eq!(basename("index.ts"), "index.ts");
        assert_eq!(basename(""), "");
        assert_eq!(basename("src/"), "");
    }

    #[test]
    fn test_empty_input_yields_null_report() {
        let report = scan(Vec::<String>::new());
        assert_eq!(report.linters, None);
        assert_eq!(report.formatters, None);
        assert!(report.is_empty());
    }

    #[test]
    fn test_no_config_files_yields_null_report() {
        let report = scan(["src/index.ts", "index.ts", "data.json", "index.test.ts"]);
        assert_eq!(report.linters, None);
        assert_eq!(report.formatters, None);
    }

    #[test]
    fn test_near_miss_basename_never_matches() {
        let report = scan(["src/g.eslintrc.js", "index.ts"]);
        assert_eq!(report.linters, None);

        let report = scan(["geslint.config.js", "eslintrc"]);
        assert_eq!(report.linters, None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let report = scan([".ESLintrc.js", "Biome.json"]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_eslint_detected_regardless_of_depth() {
        for path in [
            "eslint.config.js",
            "src/eslint.config.js",
            "packages/config/eslint.config.js",
        ] {
            let report = scan(["data.json", "index.ts", path]);
            assert_eq!(report.linters, Some(vec![ToolKind::Eslint]), "path: {path}");
            assert_eq!(report.formatters, None);
        }
    }

    #[test]
    fn test_multiple_configs_for_one_tool_dedupe() {
        let report = scan([".eslintrc.js", "eslint.config.js", ".eslintrc"]);
        assert_eq!(report.linters, Some(vec![ToolKind::Eslint]));
    }

    #[test]
    fn test_duplicate_paths_dedupe() {
        let report = scan(["biome.json", "biome.json", "pkg/biome.json"]);
        assert_eq!(report.linters, Some(vec![ToolKind::Biome]));
        assert_eq!(report.formatters, Some(vec![ToolKind::Biome]));
    }

    #[test]
    fn test_biome_feeds_both_collections() {
        let report = scan(["biome.json"]);
        assert_eq!(report.linters, Some(vec![ToolKind::Biome]));
        assert_eq!(report.formatters, Some(vec![ToolKind::Biome]));
    }

    #[test]
    fn test_prettier_is_formatter_only() {
        let report = scan([".prettierrc", "src/app.ts"]);
        assert_eq!(report.linters, None);
        assert_eq!(report.formatters, Some(vec![ToolKind::Prettier]));
    }

    #[test]
    fn test_first_detected_order_is_stable() {
        let report = scan(["biome.json", ".eslintrc.json", ".prettierrc"]);
        assert_eq!(
            report.linters,
            Some(vec![ToolKind::Biome, ToolKind::Eslint])
        );
        assert_eq!(
            report.formatters,
            Some(vec![ToolKind::Biome, ToolKind::Prettier])
        );

        let report = scan([".eslintrc.json", ".prettierrc", "biome.json"]);
        assert_eq!(
            report.linters,
            Some(vec![ToolKind::Eslint, ToolKind::Biome])
        );
        assert_eq!(
            report.formatters,
            Some(vec![ToolKind::Prettier, ToolKind::Biome])
        );
    }

    #[test]
    fn test_malformed_paths_are_ignored() {
        let report = scan(["", "/", "src/", "///", "no-extension"]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_defaults() {
        let report = scan([".prettierrc", "biome.json"]);
        assert_eq!(report.default_linter(), Some(ToolKind::Biome));
        assert_eq!(report.default_formatter(), Some(ToolKind::Prettier));
        assert!(report.contains(ToolKind::Biome));
        assert!(!report.contains(ToolKind::Eslint));
    }

    #[test]
    fn test_report_serializes_none_as_null() {
        let report = scan(["eslint.config.mjs"]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["linters"], serde_json::json!(["eslint"]));
        assert_eq!(json["formatters"], serde_json::Value::Null);
    }
}
