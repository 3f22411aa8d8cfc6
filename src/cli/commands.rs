use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Project scaffolding with linter/formatter fingerprint detection
#[derive(Parser, Debug)]
#[command(
    name = "mkapp",
    about = "Project scaffolding with linter/formatter fingerprint detection",
    version,
    long_about = "mkapp inspects a project tree for linter and formatter configuration \
                  files and plans which tooling a scaffolded project should use."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Detect configured linters and formatters in a project",
        long_about = "Walks the project tree and reports which linters and formatters \
                      already have configuration files.\n\n\
                      Examples:\n  \
                      mkapp detect\n  \
                      mkapp detect /path/to/project\n  \
                      mkapp detect --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Plan the tooling for a scaffolded project",
        long_about = "Resolves --eslint/--biome/--prettier flags against detected \
                      configuration in the target directory and prints which config \
                      files the scaffolder would write.\n\n\
                      Examples:\n  \
                      mkapp plan my-app --biome\n  \
                      mkapp plan my-app --eslint --prettier --format json"
    )]
    Plan(PlanArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to project (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "DEPTH",
        default_value = "10",
        help = "Maximum directory depth to walk"
    )]
    pub max_depth: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    #[arg(value_name = "PATH", help = "Target project directory")]
    pub path: PathBuf,

    #[arg(long, help = "Scaffold with an eslint config")]
    pub eslint: bool,

    #[arg(long, help = "Scaffold with a biome config")]
    pub biome: bool,

    #[arg(long, help = "Scaffold with a prettier config")]
    pub prettier: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_detect_args() {
        let args = CliArgs::parse_from(["mkapp", "detect"]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.format, OutputFormatArg::Human);
                assert_eq!(detect_args.max_depth, 10);
                assert!(detect_args.path.is_none());
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_detect_with_path_and_format() {
        let args = CliArgs::parse_from(["mkapp", "detect", "/tmp/project", "--format", "json"]);
        match args.command {
            Commands::Detect(detect_args) => {
                assert_eq!(detect_args.path, Some(PathBuf::from("/tmp/project")));
                assert_eq!(detect_args.format, OutputFormatArg::Json);
            }
            _ => panic!("Expected Detect command"),
        }
    }

    #[test]
    fn test_plan_requires_path() {
        assert!(CliArgs::try_parse_from(["mkapp", "plan"]).is_err());
    }

    #[test]
    fn test_plan_with_tool_flags() {
        let args = CliArgs::parse_from(["mkapp", "plan", "my-app", "--eslint", "--prettier"]);
        match args.command {
            Commands::Plan(plan_args) => {
                assert_eq!(plan_args.path, PathBuf::from("my-app"));
                assert!(plan_args.eslint);
                assert!(plan_args.prettier);
                assert!(!plan_args.biome);
            }
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_global_verbose_and_quiet_conflict() {
        let args = CliArgs::parse_from(["mkapp", "-v", "detect"]);
        assert!(args.verbose);
        assert!(!args.quiet);

        assert!(CliArgs::try_parse_from(["mkapp", "-v", "-q", "detect"]).is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["mkapp", "--log-level", "debug", "detect"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
