//! The runner: ties the lexer, parser, extractor, and evaluator together.
//!
//! This module performs no rule logic of its own; it only sequences the
//! other crates and reports their output.

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use tracing::info;

use crate::cli::Args;
use crate::report::Reporter;

/// Runs the full check pipeline for the given arguments.
///
/// On success, returns `Ok(())`. Any policy lex/parse error or policy
/// violation is reported to the terminal and returned as an `Err`, so the
/// caller can translate it into a non-zero exit code.
pub fn run(args: &Args) -> Result<()> {
    let policy_path = if args.policy.is_absolute() {
        args.policy.clone()
    } else {
        args.root.join(&args.policy)
    };

    let source = std::fs::read_to_string(&policy_path)
        .with_context(|| format!("failed to read policy file `{}`", policy_path.display()))?;

    let report_mode = args.report_mode.unwrap_or_default();
    let mut reporter = Reporter::new(report_mode, args.no_color);

    let (policy, errors) = warden_policy::parse_str(&source);
    if !errors.is_empty() {
        reporter
            .emit_diagnostics(&policy_path.display().to_string(), &source, &errors)
            .context("failed to emit policy diagnostics")?;
        bail!(
            "failing due to {errors} error{s} in `{path}`",
            errors = errors.len(),
            s = if errors.len() == 1 { "" } else { "s" },
            path = policy_path.display(),
        );
    }
    // SAFETY: `errors` is empty, so the parser must have returned a policy.
    let policy = policy.expect("a policy is always returned alongside an empty error list");

    info!(
        "scanning `{}` sources under `{}`",
        policy.language,
        args.root.display()
    );

    let imports = warden_extract::extract(policy.language, &args.root, &policy.import_base)
        .with_context(|| format!("failed to extract imports under `{}`", args.root.display()))?;

    info!("evaluating {} file(s) against the policy", imports.len());

    let violations = warden_analysis::evaluate(&policy, &imports);
    if !violations.is_empty() {
        reporter
            .report_violations(&violations)
            .context("failed to report violations")?;
        bail!(
            "failing due to {violations} violation{s}",
            violations = violations.len(),
            s = if violations.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
