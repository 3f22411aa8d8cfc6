//! Recognized configuration filenames per tool
//!
//! These tables are the single source of truth for tooling detection. When a
//! tool introduces a new config-file convention, it is added here and nowhere
//! else; the matcher and the test suites both read from these slices.

use super::ToolKind;

/// One tool's set of recognized configuration basenames
#[derive(Debug, Clone, Copy)]
pub struct ToolPattern {
    pub kind: ToolKind,
    pub config_files: &'static [&'static str],
}

/// Configuration files that mark a project as using ESLint
pub const ESLINT_CONFIG_FILES: &[&str] = &[
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc.yaml",
    "eslint.config.js",
    "eslint.config.cjs",
    "eslint.config.mjs",
    "eslint.config.ts",
];

/// Configuration files that mark a project as using Biome
pub const BIOME_CONFIG_FILES: &[&str] = &["biome.json", "biome.jsonc"];

/// Configuration files that mark a project as using Prettier
pub const PRETTIER_CONFIG_FILES: &[&str] = &[
    ".prettierrc",
    ".prettierrc.js",
    ".prettierrc.cjs",
    ".prettierrc.json",
    ".prettierrc.yml",
    ".prettierrc.yaml",
    "prettier.config.js",
    "prettier.config.cjs",
];

/// All tool patterns, in detection precedence order
pub const TOOL_PATTERNS: &[ToolPattern] = &[
    ToolPattern {
        kind: ToolKind::Eslint,
        config_files: ESLINT_CONFIG_FILES,
    },
    ToolPattern {
        kind: ToolKind::Biome,
        config_files: BIOME_CONFIG_FILES,
    },
    ToolPattern {
        kind: ToolKind::Prettier,
        config_files: PRETTIER_CONFIG_FILES,
    },
];
