//! mkapp - project scaffolding with tooling fingerprint detection
//!
//! This library inspects a project tree for linter and formatter
//! configuration files and plans which code-quality tooling a scaffolded
//! project should use.
//!
//! # Core Concepts
//!
//! - **Fingerprint scanner**: pure classification of a relative-path listing
//!   into detected linters and formatters ([`fingerprint::scan`])
//! - **Pattern registry**: compiled-in tables of recognized config filenames
//!   per tool ([`fingerprint::patterns`])
//! - **Scaffold planning**: resolving CLI flags plus detected evidence into
//!   a linter/formatter choice and the config files still to write
//!   ([`scaffold`])
//!
//! # Example Usage
//!
//! ```
//! use mkapp::fingerprint::{scan, ToolKind};
//!
//! let report = scan(["src/index.ts", "packages/config/eslint.config.js"]);
//! assert_eq!(report.linters, Some(vec![ToolKind::Eslint]));
//! assert_eq!(report.formatters, None);
//! ```

// Public modules
pub mod cli;
pub mod fingerprint;
pub mod scaffold;
pub mod util;

// Re-export key types for convenient access
pub use fingerprint::{scan, Report, ToolKind};
pub use fingerprint::{ProjectWalker, WalkConfig, WalkError};
pub use scaffold::{PackageManager, ScaffoldPlan, ToolFlags, ToolSelection};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
