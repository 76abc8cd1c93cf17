/// Chart-drawing widgets.
pub mod bar_chart;
pub mod pie_chart;

use egui::Color32;

/// Series palette for pie slices and legend dots (dark-mode friendly).
pub(crate) const PALETTE: [Color32; 9] = [
    Color32::from_rgb(0x89, 0xb4, 0xfa),
    Color32::from_rgb(0xf9, 0xe2, 0xaf),
    Color32::from_rgb(0xf3, 0x8b, 0xa8),
    Color32::from_rgb(0xcb, 0xa6, 0xf7),
    Color32::from_rgb(0xfa, 0xb3, 0x87),
    Color32::from_rgb(0xa6, 0xe3, 0xa1),
    Color32::from_rgb(0x94, 0xe2, 0xd5),
    Color32::from_rgb(0xeb, 0xa0, 0xac),
    Color32::from_rgb(0x6c, 0x70, 0x86),
];

/// Colour for the n-th data series, cycling through the palette.
pub(crate) fn series_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Interpolate between green (small) and pink (large) based on the bar's
/// fill fraction (0.0–1.0).
pub(crate) fn bar_fill_color(frac: f32) -> Color32 {
    let t = frac.clamp(0.0, 1.0);
    let a = Color32::from_rgb(0xa6, 0xe3, 0xa1); // green
    let b = Color32::from_rgb(0xf3, 0x8b, 0xa8); // pink
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}
