/// Usage bar chart model — one horizontal bar per record, largest first.
use crate::model::UsageRecord;

/// One horizontal bar: a path label and its size in megabytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub size_mb: f64,
}

/// Bar chart model. `bars` is sorted by size descending, so the first
/// element draws as the topmost (longest) bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

/// Build the disk-usage bar chart from a record set.
///
/// Every record contributes one bar, directories included. Ordering is
/// strictly non-increasing in `size_mb`.
pub fn usage_bar_chart(records: &[UsageRecord], title: &str) -> BarChart {
    let mut bars: Vec<Bar> = records
        .iter()
        .map(|record| Bar {
            label: record.path.to_string_lossy().into_owned(),
            size_mb: record.size_mb,
        })
        .collect();

    bars.sort_by(|a, b| b.size_mb.total_cmp(&a.size_mb));

    BarChart {
        title: title.to_owned(),
        bars,
    }
}
