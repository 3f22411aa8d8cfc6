//! Output formatting for detection reports and scaffold plans
//!
//! JSON output is machine-readable and stable; human output is for terminal
//! use. Both render the same data.

use anyhow::{Context, Result};

use crate::fingerprint::{Report, ToolKind};
use crate::scaffold::ScaffoldPlan;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for reports and plans
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a fingerprint report
    pub fn format_report(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            }
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    /// Formats a scaffold plan
    pub fn format_plan(&self, plan: &ScaffoldPlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")
            }
            OutputFormat::Human => Ok(self.format_plan_human(plan)),
        }
    }

    fn format_report_human(&self, report: &Report) -> String {
        let mut out = String::new();
        out.push_str(&format!("Linters:    {}\n", role_list(&report.linters)));
        out.push_str(&format!("Formatters: {}\n", role_list(&report.formatters)));
        out
    }

    fn format_plan_human(&self, plan: &ScaffoldPlan) -> String {
        let mut out = String::new();
        out.push_str(&format!("Project:         {}\n", plan.root));
        out.push_str(&format!("Package manager: {}\n", plan.package_manager));
        out.push_str(&format!("Linter:          {}\n", tool_or_none(plan.linter)));
        out.push_str(&format!("Formatter:       {}\n", tool_or_none(plan.formatter)));

        if plan.configs_to_write.is_empty() {
            out.push_str("Configs to write: none\n");
        } else {
            out.push_str(&format!(
                "Configs to write: {}\n",
                plan.configs_to_write.join(", ")
            ));
        }

        if !plan.already_configured.is_empty() {
            let names: Vec<&str> = plan
                .already_configured
                .iter()
                .map(|t| t.name())
                .collect();
            out.push_str(&format!("Already configured: {}\n", names.join(", ")));
        }

        out
    }
}

fn role_list(tools: &Option<Vec<ToolKind>>) -> String {
    match tools {
        Some(tools) => tools
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", "),
        None => "none found".to_string(),
    }
}

fn tool_or_none(tool: Option<ToolKind>) -> &'static str {
    tool.map(|t| t.name()).unwrap_or("none")
}
