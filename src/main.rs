//! SizeScope — directory usage visualiser.
//!
//! Thin binary entry point: parse the one CLI argument, walk the tree, and
//! hand the two chart models to the viewer. All logic lives in the
//! `sizescope-core` and `sizescope-gui` crates.
//!
//! Exit codes: 0 after both charts are dismissed; 1 for a missing argument,
//! a path that is not a directory, or a directory that yields no records.
//! The fatal messages go to stdout; diagnostics go to stderr via `tracing`.

use clap::Parser;
use sizescope_core::analysis::{file_type_distribution, usage_bar_chart};
use sizescope_core::scanner::scan;
use sizescope_core::UsageError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sizescope", version, about = "Visualise disk usage for a directory tree")]
struct Cli {
    /// Directory to analyse
    directory: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    // try_parse instead of parse: a missing argument is a usage error that
    // must print to stdout and exit 1, not clap's default exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            println!("{err}");
            return ExitCode::from(1);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.directory.is_dir() {
        return Err(UsageError::InvalidDirectory(cli.directory).into());
    }

    println!("Analyzing directory: {}", cli.directory.display());
    let outcome = scan(&cli.directory);

    if !outcome.skipped.is_empty() {
        tracing::warn!(
            "{} entries could not be read and were skipped",
            outcome.skipped.len()
        );
    }
    if outcome.records.is_empty() {
        return Err(UsageError::NoData.into());
    }
    tracing::info!("collected {} usage records", outcome.records.len());

    println!("Generating disk usage visualization...");
    let usage = usage_bar_chart(&outcome.records, "Disk Usage for All Files and Directories");

    println!("Generating file type distribution visualization...");
    let file_types = file_type_distribution(&outcome.records);

    sizescope_gui::show_charts(usage, file_types)
}
