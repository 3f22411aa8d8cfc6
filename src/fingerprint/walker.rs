//! Project tree enumeration
//!
//! Produces the relative path listing the scanner consumes. Respects
//! `.gitignore`, keeps hidden files (dotfile configs are the point of the
//! scan), and skips `.git` and `node_modules` outright.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Directories never worth descending into
const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("project path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("project path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to resolve project path {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub max_depth: usize,
    pub max_files: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_files: 10_000,
        }
    }
}

/// Enumerates a project directory into relative, forward-slash paths
#[derive(Debug)]
pub struct ProjectWalker {
    root: PathBuf,
    config: WalkConfig,
}

impl ProjectWalker {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, WalkError> {
        let root = root.into();
        if !root.exists() {
            return Err(WalkError::NotFound(root));
        }
        if !root.is_dir() {
            return Err(WalkError::NotADirectory(root));
        }

        let root = root.canonicalize().map_err(|source| WalkError::Resolve {
            path: root.clone(),
            source,
        })?;

        debug!(root = %root.display(), "ProjectWalker initialized");

        Ok(Self {
            root,
            config: WalkConfig::default(),
        })
    }

    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// Lists every file under the root as a path relative to it
    ///
    /// Unreadable entries are skipped with a warning rather than aborting the
    /// walk; the listing is truncated once `max_files` is reached.
    pub fn list(&self) -> Vec<String> {
        let mut paths = Vec::new();

        for result in WalkBuilder::new(&self.root)
            .max_depth(Some(self.config.max_depth))
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map(|name| !EXCLUDED_DIRS.contains(&name))
                    .unwrap_or(true)
            })
            .build()
        {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.path().is_file() {
                continue;
            }

            if paths.len() >= self.config.max_files {
                warn!(
                    max_files = self.config.max_files,
                    "Reached file limit, truncating listing"
                );
                break;
            }

            if let Some(rel) = self.relative(entry.path()) {
                paths.push(rel);
            }
        }

        debug!(files = paths.len(), "Project tree enumerated");
        paths
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let rel = rel.to_string_lossy();
        // Scanner basenames split on '/' only; normalize Windows separators.
        if std::path::MAIN_SEPARATOR == '\\' {
            Some(rel.replace('\\', "/"))
        } else {
            Some(rel.into_owned())
        }
    }
}
