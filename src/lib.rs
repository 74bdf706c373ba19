//! Enforces architectural import boundaries in a source tree.
//!
//! This crate is the thin orchestrator: it reads a `.importrules` policy,
//! lexes and parses it with [`warden_policy`], extracts per-file imports
//! with [`warden_extract`], evaluates them with [`warden_analysis`], and
//! renders the results. It performs no rule logic of its own.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]

use std::io::IsTerminal as _;

use clap::ValueEnum;
use codespan_reporting::term::termcolor::ColorChoice;
use codespan_reporting::term::termcolor::StandardStream;
use codespan_reporting::term::Config as TermConfig;
use codespan_reporting::term::DisplayStyle;
use serde::Deserialize;
use serde::Serialize;

pub mod cli;
pub mod commands;
pub mod config;
pub mod report;

/// The diagnostic mode to use for reporting diagnostics and violations.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Prints diagnostics as multiple lines.
    #[default]
    Full,

    /// Prints diagnostics as one line.
    OneLine,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Full => write!(f, "full"),
            Mode::OneLine => write!(f, "one-line"),
        }
    }
}

/// Gets the display config and output stream to use for reporting.
pub(crate) fn display_config(report_mode: Mode, no_color: bool) -> (TermConfig, StandardStream) {
    let display_style = match report_mode {
        Mode::Full => DisplayStyle::Rich,
        Mode::OneLine => DisplayStyle::Short,
    };

    let config = TermConfig {
        display_style,
        ..Default::default()
    };

    let color_choice = if no_color {
        ColorChoice::Never
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    (config, StandardStream::stderr(color_choice))
}
