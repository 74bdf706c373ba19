//! The Warden command line binary.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

use std::io::IsTerminal as _;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use colored::Colorize as _;
use tracing_log::AsTrace as _;

use warden::cli::Args;
use warden::config::Config;

fn init_logging(args: &Args) {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set global subscriber");
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let args = match &args.config {
        Some(path) => Config::read(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?
            .apply(args),
        None => args,
    };

    warden::commands::check::run(&args)
}

fn main() {
    if let Err(error) = try_main() {
        eprintln!(
            "{label} {error:#}",
            label = if std::io::stderr().is_terminal() {
                "error:".red().bold().to_string()
            } else {
                "error:".to_string()
            }
        );
        std::process::exit(1);
    }
}
