/// Scanner — single-pass directory walk producing usage records.
///
/// The walk is depth-first, serial, and synchronous: the behavior contract
/// is one thread of control from the first `read_dir` to the last record.
/// Every directory reachable from the root is visited exactly once
/// (symlinks are not followed during traversal).
///
/// Emitted records:
/// - one `Directory` record per visited directory, sized as the byte sum of
///   its **immediate file children only** (subdirectories are excluded from
///   the sum);
/// - one `File` record per visited file.
///
/// The scan root itself is never emitted; only its descendants are measured.
///
/// Error policy: a per-entry failure (permission denied, entry vanished
/// mid-scan, broken symlink) never aborts the walk. The entry is omitted
/// from the records and reported in [`ScanOutcome::skipped`] so callers and
/// tests can see exactly what was left out.
use crate::model::UsageRecord;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// An entry the walk could not measure, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a single walk produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// One record per measurable descendant, in walk order.
    pub records: Vec<UsageRecord>,
    /// Entries that failed to stat, in the order the failures occurred.
    pub skipped: Vec<SkippedEntry>,
}

/// Walk `root` and measure every descendant entry.
///
/// Record order follows the walk order and is not sorted; the chart
/// builders impose their own ordering.
pub fn scan(root: &Path) -> ScanOutcome {
    let start = Instant::now();
    let mut outcome = ScanOutcome::default();
    let mut files_found: u64 = 0;
    let mut dirs_found: u64 = 0;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // jwalk errors are typically access-denied on directories.
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                skip(&mut outcome, path, err.to_string());
                continue;
            }
        };

        let path = entry.path();

        // The root is the scan origin, not a measured entry.
        if path == root {
            continue;
        }

        if !entry.file_type().is_dir() {
            // Stat through symlinks, so a broken link fails here and a link
            // that resolves to a directory falls through to be measured as one.
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => {}
                Ok(meta) => {
                    outcome.records.push(UsageRecord::file(path, meta.len()));
                    files_found += 1;
                    continue;
                }
                Err(err) => {
                    skip(&mut outcome, path, err.to_string());
                    continue;
                }
            }
        }

        match immediate_file_total(&path) {
            Ok(bytes) => {
                outcome.records.push(UsageRecord::directory(path, bytes));
                dirs_found += 1;
            }
            Err(err) => skip(&mut outcome, path, err.to_string()),
        }
    }

    info!(
        "scan of {} complete: {} files, {} dirs, {} skipped in {:?}",
        root.display(),
        files_found,
        dirs_found,
        outcome.skipped.len(),
        start.elapsed()
    );

    outcome
}

/// Record a per-entry failure and keep walking.
fn skip(outcome: &mut ScanOutcome, path: PathBuf, reason: String) {
    debug!("skipping {}: {reason}", path.display());
    outcome.skipped.push(SkippedEntry { path, reason });
}

/// Sum the byte sizes of the immediate file children of `dir`.
///
/// Subdirectories are not recursed into. A child that cannot be stat'd is
/// left out of the total (the walk's own visit of that child reports it);
/// only a failure to list the directory itself propagates.
fn immediate_file_total(dir: &Path) -> io::Result<u64> {
    let mut total: u64 = 0;
    for child in std::fs::read_dir(dir)? {
        let child = child?;
        match std::fs::metadata(child.path()) {
            Ok(meta) if meta.is_file() => total += meta.len(),
            _ => {}
        }
    }
    Ok(total)
}
