/// Chart-model builders.
///
/// Each builder returns a plain data object describing one chart; the
/// caller decides how to display it. That keeps the chart contents
/// assertable in tests without a render surface.
pub mod file_types;
pub mod usage_bars;

pub use file_types::{file_type_distribution, PieChart, Slice};
pub use usage_bars::{usage_bar_chart, Bar, BarChart};
