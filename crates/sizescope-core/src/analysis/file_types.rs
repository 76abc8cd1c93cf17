/// File-type distribution — per-extension counts for the pie chart.
use crate::model::{EntryKind, UsageRecord};
use compact_str::CompactString;
use std::collections::HashMap;

/// One pie slice: a distinct extension, how many files carry it, and its
/// share of all counted files (0.0–100.0).
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub extension: CompactString,
    pub count: u64,
    pub percent: f64,
}

/// Pie chart model. `slices` is sorted by count descending (ties broken by
/// extension so the order is deterministic).
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

/// Extension of a path label: the substring after the final `.`.
///
/// The search runs over the whole path string, not just the file name, so
/// a dotted ancestor directory can contribute to a dotless file's
/// extension. Labels with no dot, or ending in one, yield `None` — such
/// files belong to no slice rather than a "no extension" bucket.
pub fn extension_of(label: &str) -> Option<&str> {
    match label.rfind('.') {
        Some(idx) if idx + 1 < label.len() => Some(&label[idx + 1..]),
        _ => None,
    }
}

/// Count files per distinct extension and compute each extension's share.
///
/// Only `File` records are considered; files without an extension are
/// excluded from the distribution entirely.
pub fn file_type_distribution(records: &[UsageRecord]) -> PieChart {
    let mut counts: HashMap<CompactString, u64> = HashMap::new();

    for record in records {
        if record.kind != EntryKind::File {
            continue;
        }
        let label = record.path.to_string_lossy();
        if let Some(ext) = extension_of(&label) {
            *counts.entry(CompactString::new(ext)).or_insert(0) += 1;
        }
    }

    let total: u64 = counts.values().sum();
    let mut slices: Vec<Slice> = counts
        .into_iter()
        .map(|(extension, count)| Slice {
            extension,
            count,
            percent: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect();

    slices.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.extension.cmp(&b.extension))
    });

    PieChart {
        title: "File Type Distribution".to_owned(),
        slices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(path: &str) -> UsageRecord {
        UsageRecord::file(PathBuf::from(path), 100)
    }

    // ── extension_of ─────────────────────────────────────────────────────

    #[test]
    fn extension_after_final_dot() {
        assert_eq!(extension_of("notes.txt"), Some("txt"));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
    }

    #[test]
    fn no_dot_yields_none() {
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(""), None);
    }

    #[test]
    fn trailing_dot_yields_none() {
        assert_eq!(extension_of("weird."), None);
    }

    #[test]
    fn hidden_file_dot_counts() {
        assert_eq!(extension_of("/home/u/.bashrc"), Some("bashrc"));
    }

    /// The dot search spans the whole path, so a dotted parent directory
    /// leaks into a dotless file's extension. Preserved source behavior.
    #[test]
    fn extension_spans_path_separators_after_last_dot() {
        assert_eq!(extension_of("builds.v2/README"), Some("v2/README"));
    }

    // ── file_type_distribution ───────────────────────────────────────────

    #[test]
    fn counts_per_extension() {
        let records = vec![file("x.txt"), file("y.txt"), file("z.md")];
        let chart = file_type_distribution(&records);

        assert_eq!(chart.title, "File Type Distribution");
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].extension, "txt");
        assert_eq!(chart.slices[0].count, 2);
        assert_eq!(chart.slices[1].extension, "md");
        assert_eq!(chart.slices[1].count, 1);
    }

    /// A file with no dot contributes to no slice at all.
    #[test]
    fn dotless_files_are_excluded() {
        let records = vec![file("x.txt"), file("y.txt"), file("z.md"), file("README")];
        let chart = file_type_distribution(&records);

        let total: u64 = chart.slices.iter().map(|s| s.count).sum();
        assert_eq!(total, 3, "README must not be counted anywhere");
    }

    /// Directory records never contribute, even with dotted names.
    #[test]
    fn directories_are_excluded() {
        let records = vec![
            file("a.rs"),
            UsageRecord::directory(PathBuf::from("target.d"), 1_000),
        ];
        let chart = file_type_distribution(&records);
        assert_eq!(chart.slices.len(), 1);
        assert_eq!(chart.slices[0].extension, "rs");
    }

    /// Percentages are shares of *counted* files: 2 of 3 → 66.7% when
    /// rendered to one decimal place.
    #[test]
    fn percentages_sum_over_counted_files() {
        let records = vec![file("x.txt"), file("y.txt"), file("z.md")];
        let chart = file_type_distribution(&records);

        let txt = &chart.slices[0];
        assert!((txt.percent - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.1}%", txt.percent), "66.7%");

        let sum: f64 = chart.slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_records_yield_empty_chart() {
        let chart = file_type_distribution(&[]);
        assert!(chart.slices.is_empty());
    }

    /// Count ties are broken alphabetically so the slice order is stable
    /// across runs.
    #[test]
    fn ties_break_by_extension() {
        let records = vec![file("a.md"), file("b.txt")];
        let chart = file_type_distribution(&records);
        assert_eq!(chart.slices[0].extension, "md");
        assert_eq!(chart.slices[1].extension, "txt");
    }
}
