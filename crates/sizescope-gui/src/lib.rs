/// SizeScope GUI — egui-based chart viewer.
///
/// This crate contains all UI code. Chart models come from `sizescope-core`.
pub mod app;
pub mod widgets;

pub use app::{show_charts, ChartPage, ChartViewer};
