/// Horizontal usage bars — longest bar at the top.
///
/// Each record gets a label row (path + size in MB) and a proportional
/// fill bar beneath it, scaled against the largest record. The whole
/// chart scrolls vertically since a deep tree produces many rows.
use egui::{Rect, RichText, ScrollArea, Sense, Ui, Vec2};
use sizescope_core::analysis::BarChart;
use sizescope_core::model::size::format_mb;

pub fn bar_chart(ui: &mut Ui, chart: &BarChart) {
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();
    let bar_track_bg = ui.visuals().extreme_bg_color;

    // Bars arrive sorted descending, so the first one sets the scale.
    let max_mb = chart.bars.first().map_or(0.0, |bar| bar.size_mb);

    ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
        for bar in &chart.bars {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&bar.label)
                        .monospace()
                        .color(color_normal)
                        .size(11.0),
                );
                ui.label(
                    RichText::new(format_mb(bar.size_mb))
                        .color(color_muted)
                        .size(11.0),
                );
            });

            let bar_width = ui.available_width() - 16.0;
            let bar_height = 6.0;
            let (bar_rect, _) =
                ui.allocate_exact_size(Vec2::new(bar_width, bar_height), Sense::hover());
            let painter = ui.painter_at(bar_rect);
            painter.rect_filled(bar_rect, 2.0, bar_track_bg);

            let frac = if max_mb > 0.0 {
                (bar.size_mb / max_mb) as f32
            } else {
                0.0
            };
            let fill_w = bar_width * frac.clamp(0.0, 1.0);
            if fill_w > 0.5 {
                let fill_rect = Rect::from_min_size(bar_rect.min, Vec2::new(fill_w, bar_height));
                painter.rect_filled(fill_rect, 2.0, super::bar_fill_color(frac));
            }

            ui.add_space(3.0);
        }
    });
}
