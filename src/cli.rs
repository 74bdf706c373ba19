//! Command line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::InfoLevel;
use clap_verbosity_flag::Verbosity;

use crate::Mode;

/// Checks a project against an architectural import-boundary policy.
///
/// Reads `.importrules` from the project root, extracts each source file's
/// imports, and fails if any import violates the policy.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// The project root to scan.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// The path to the policy file, relative to the project root.
    #[arg(long, value_name = "PATH", default_value = ".importrules")]
    pub policy: PathBuf,

    /// An optional configuration file overriding the defaults above and the
    /// display options below.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disables color output.
    #[arg(long)]
    pub no_color: bool,

    /// The report mode.
    #[arg(short = 'm', long, value_name = "MODE")]
    pub report_mode: Option<Mode>,

    /// The verbosity of diagnostic output.
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}
