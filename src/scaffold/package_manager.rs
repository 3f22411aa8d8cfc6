//! Package manager detection
//!
//! The scaffolder invokes whichever package manager launched it. Detection
//! reads the `npm_config_user_agent` variable that npm-compatible managers
//! set when running scripts; anything unrecognized falls back to npm.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn from_env() -> Self {
        env::var("npm_config_user_agent")
            .map(|ua| Self::from_user_agent(&ua))
            .unwrap_or(PackageManager::Npm)
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.starts_with("yarn") {
            PackageManager::Yarn
        } else if user_agent.starts_with("pnpm") {
            PackageManager::Pnpm
        } else if user_agent.starts_with("bun") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_user_agent() {
        assert_eq!(
            PackageManager::from_user_agent("yarn/1.22.19 npm/? node/v18"),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::from_user_agent("pnpm/8.6.0 npm/? node/v20"),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::from_user_agent("bun/1.0.0 npm/? node/v20"),
            PackageManager::Bun
        );
        assert_eq!(
            PackageManager::from_user_agent("npm/9.8.1 node/v18"),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_unknown_agent_defaults_to_npm() {
        assert_eq!(PackageManager::from_user_agent(""), PackageManager::Npm);
        assert_eq!(
            PackageManager::from_user_agent("cargo/1.70"),
            PackageManager::Npm
        );
    }
}
