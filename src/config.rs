//! Implementation of the configuration file.
//!
//! An optional `warden.toml` at the project root supplies defaults for the
//! path to scan, the policy file to use, and common display options. Every
//! command-line flag overrides the matching configuration value.

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::Mode;
use crate::cli::Args;

/// Represents the configuration for the `warden` CLI tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    /// The project root to scan, if not given on the command line.
    pub root: Option<PathBuf>,
    /// The policy file to read, if not given on the command line.
    pub policy: Option<PathBuf>,
    /// Common display options.
    #[serde(default)]
    pub common: CommonConfig,
}

/// Shared display configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CommonConfig {
    /// Display color output.
    pub color: bool,
    /// The report mode.
    pub report_mode: Option<Mode>,
}

impl Config {
    /// Reads a configuration file from the specified path.
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file `{}`", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file `{}`", path.display()))
    }

    /// Applies this configuration's defaults to the given arguments,
    /// preferring whatever was explicitly given on the command line.
    pub fn apply(&self, mut args: Args) -> Args {
        if args.root == Path::new(".") {
            if let Some(root) = &self.root {
                args.root = root.clone();
            }
        }
        if args.policy == Path::new(".importrules") {
            if let Some(policy) = &self.policy {
                args.policy = policy.clone();
            }
        }
        args.no_color = args.no_color || !self.common.color;
        args.report_mode = args.report_mode.or(self.common.report_mode);
        args
    }
}
