//! Command handlers
//!
//! Each handler runs one subcommand end to end and returns a process exit
//! code. Errors are reported on stderr; machine output goes to stdout.

use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

use super::commands::{DetectArgs, PlanArgs};
use super::output::OutputFormatter;
use crate::fingerprint::{self, ProjectWalker, Report, WalkConfig};
use crate::scaffold::{PackageManager, ScaffoldPlan, ToolFlags, ToolSelection};

pub fn handle_detect(args: &DetectArgs) -> i32 {
    match run_detect(args) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn run_detect(args: &DetectArgs) -> Result<String> {
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| Path::new(".").to_path_buf());

    let walker = ProjectWalker::new(&path)?.with_config(WalkConfig {
        max_depth: args.max_depth,
        ..Default::default()
    });

    let paths = walker.list();
    let report = fingerprint::scan(&paths);

    info!(
        files = paths.len(),
        linters = ?report.linters,
        formatters = ?report.formatters,
        "Fingerprint scan completed"
    );

    OutputFormatter::new(args.format.into()).format_report(&report)
}

pub fn handle_plan(args: &PlanArgs) -> i32 {
    match run_plan(args) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}

fn run_plan(args: &PlanArgs) -> Result<String> {
    // A missing target is a fresh scaffold: no evidence, flags decide.
    let report = if args.path.is_dir() {
        let paths = ProjectWalker::new(&args.path)?.list();
        fingerprint::scan(&paths)
    } else {
        debug!(path = %args.path.display(), "Target does not exist, planning a fresh scaffold");
        Report {
            linters: None,
            formatters: None,
        }
    };

    let flags = ToolFlags {
        eslint: args.eslint,
        biome: args.biome,
        prettier: args.prettier,
    };
    let selection = ToolSelection::resolve(flags, &report);
    let plan = ScaffoldPlan::new(
        args.path.to_string_lossy().into_owned(),
        selection,
        &report,
        PackageManager::from_env(),
    );

    OutputFormatter::new(args.format.into()).format_plan(&plan)
}
