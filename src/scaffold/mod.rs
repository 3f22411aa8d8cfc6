//! Scaffold planning
//!
//! Turns CLI flags plus fingerprint evidence into a concrete plan: which
//! linter and formatter the new project should use, and which config files
//! the generator still needs to write. The plan is pure data; prompting the
//! user and rendering templates happen outside this crate.

use crate::fingerprint::{Report, ToolKind};
use serde::{Deserialize, Serialize};

pub mod package_manager;

pub use package_manager::PackageManager;

/// Tool choices requested explicitly on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolFlags {
    pub eslint: bool,
    pub biome: bool,
    pub prettier: bool,
}

/// Resolved linter/formatter choice for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSelection {
    pub linter: Option<ToolKind>,
    pub formatter: Option<ToolKind>,
}

impl ToolSelection {
    /// Resolves flags against detected evidence
    ///
    /// Explicit flags win over detection. When both biome and a single-role
    /// tool are requested, the single-role tool takes that role: `--eslint`
    /// displaces biome as the linter and `--prettier` displaces it as the
    /// formatter. With no flags at all, the first detected tool for each
    /// role becomes the default.
    pub fn resolve(flags: ToolFlags, report: &Report) -> Self {
        let any_flag = flags.eslint || flags.biome || flags.prettier;

        let linter = if flags.eslint {
            Some(ToolKind::Eslint)
        } else if flags.biome {
            Some(ToolKind::Biome)
        } else if any_flag {
            None
        } else {
            report.default_linter()
        };

        let formatter = if flags.prettier {
            Some(ToolKind::Prettier)
        } else if flags.biome {
            Some(ToolKind::Biome)
        } else if any_flag {
            None
        } else {
            report.default_formatter()
        };

        Self { linter, formatter }
    }

    fn tools(&self) -> impl Iterator<Item = ToolKind> {
        let mut tools = Vec::new();
        if let Some(linter) = self.linter {
            tools.push(linter);
        }
        if let Some(formatter) = self.formatter {
            if self.linter != Some(formatter) {
                tools.push(formatter);
            }
        }
        tools.into_iter()
    }
}

/// Canonical config file the generator writes for a chosen tool
fn default_config_file(kind: ToolKind) -> &'static str {
    match kind {
        ToolKind::Eslint => "eslint.config.js",
        ToolKind::Biome => "biome.json",
        ToolKind::Prettier => ".prettierrc",
    }
}

/// What the scaffolder would do for one target directory
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPlan {
    pub root: String,
    pub package_manager: PackageManager,
    pub linter: Option<ToolKind>,
    pub formatter: Option<ToolKind>,
    /// Config files the generator still needs to write
    pub configs_to_write: Vec<&'static str>,
    /// Selected tools the target already has config evidence for
    pub already_configured: Vec<ToolKind>,
}

impl ScaffoldPlan {
    pub fn new(
        root: impl Into<String>,
        selection: ToolSelection,
        report: &Report,
        package_manager: PackageManager,
    ) -> Self {
        let mut configs_to_write = Vec::new();
        let mut already_configured = Vec::new();

        for tool in selection.tools() {
            if report.contains(tool) {
                already_configured.push(tool);
            } else {
                configs_to_write.push(default_config_file(tool));
            }
        }

        Self {
            root: root.into(),
            package_manager,
            linter: selection.linter,
            formatter: selection.formatter,
            configs_to_write,
            already_configured,
        }
    }
}
