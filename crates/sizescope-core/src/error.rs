/// Fatal error taxonomy.
///
/// Only two conditions abort a run; everything else the scanner can hit
/// is collected per entry in [`crate::scanner::ScanOutcome::skipped`].
use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate the run with exit code 1.
///
/// The `Display` strings are the exact one-line messages the CLI prints.
#[derive(Debug, Error)]
pub enum UsageError {
    /// The supplied path does not name an existing directory.
    #[error("Invalid directory!")]
    InvalidDirectory(PathBuf),

    /// The walk produced no records at all — the directory is empty or
    /// every entry was unreadable.
    #[error("No data found in the directory.")]
    NoData,
}
