//! Reporting of diagnostics and violations to the terminal.

use anyhow::Context;
use anyhow::Result;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::emit;
use codespan_reporting::term::termcolor::StandardStream;
use codespan_reporting::term::Config as TermConfig;
use colored::Colorize as _;
use warden_analysis::Violation;
use warden_policy::Diagnostic;

use crate::Mode;
use crate::display_config;

/// A reporter for `warden`.
#[derive(Debug)]
pub struct Reporter {
    /// The codespan display configuration.
    config: TermConfig,
    /// The stream diagnostics are written to.
    stream: StandardStream,
    /// Whether color output is disabled, for the plain-text violation report.
    no_color: bool,
}

impl Reporter {
    /// Creates a new [`Reporter`] from the user's display preferences.
    pub fn new(report_mode: Mode, no_color: bool) -> Self {
        let (config, stream) = display_config(report_mode, no_color);
        Self {
            config,
            stream,
            no_color,
        }
    }

    /// Emits lex or parse diagnostics for a single policy source file.
    pub fn emit_diagnostics(&mut self, policy_path: &str, source: &str, diagnostics: &[Diagnostic]) -> Result<()> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(policy_path, source);

        for diagnostic in diagnostics {
            emit(
                &mut self.stream,
                &self.config,
                &files,
                &diagnostic.to_codespan(file_id),
            )
            .context("failed to emit diagnostic")?;
        }

        Ok(())
    }

    /// Reports a list of policy violations, one per line.
    pub fn report_violations(&mut self, violations: &[Violation]) -> Result<()> {
        use std::io::Write as _;

        for violation in violations {
            let label = if self.no_color {
                "error:".to_string()
            } else {
                "error:".red().bold().to_string()
            };
            writeln!(&mut self.stream, "{label} {violation}").context("failed to write violation")?;
        }

        Ok(())
    }
}
