/// Size conversion and formatting helpers.
///
/// The scanner measures in `u64` bytes; records and charts carry megabytes
/// as `f64`. Formatting lives here so the conversion factor appears in
/// exactly one place.

/// Bytes per megabyte (binary: 1024 * 1024).
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Convert a byte count to megabytes.
#[inline]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Format a megabyte value for display, e.g. `"1.50 MB"`.
pub fn format_mb(size_mb: f64) -> String {
    format!("{size_mb:.2} MB")
}
