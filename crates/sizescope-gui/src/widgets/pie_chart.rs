/// Pie chart of file-extension counts, with percentage labels and a legend.
use egui::epaint::Shape;
use egui::{Align2, Color32, FontId, Pos2, RichText, ScrollArea, Sense, Stroke, Ui, Vec2};
use sizescope_core::analysis::PieChart;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Minimum slice share (percent) that still gets an on-slice label;
/// thinner slices rely on the legend.
const LABEL_MIN_PERCENT: f64 = 4.0;

pub fn pie_chart(ui: &mut Ui, chart: &PieChart) {
    let color_normal = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();

    if chart.slices.is_empty() {
        ui.label(
            RichText::new("No file extensions to chart.")
                .color(color_muted)
                .size(12.0),
        );
        return;
    }

    let total: u64 = chart.slices.iter().map(|slice| slice.count).sum();

    ui.horizontal_top(|ui| {
        // ── Pie ───────────────────────────────────────────────────────
        let side = ui
            .available_height()
            .min(ui.available_width() * 0.55)
            .max(160.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = side * 0.45;

        // Start at 12 o'clock and sweep clockwise.
        let mut angle = -FRAC_PI_2;
        for (i, slice) in chart.slices.iter().enumerate() {
            let sweep = (slice.count as f32 / total as f32) * TAU;
            sector(&painter, center, radius, angle, sweep, super::series_color(i));

            if slice.percent >= LABEL_MIN_PERCENT {
                let mid = angle + sweep / 2.0;
                let pos = Pos2::new(
                    center.x + radius * 0.62 * mid.cos(),
                    center.y + radius * 0.62 * mid.sin(),
                );
                painter.text(
                    pos,
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", slice.percent),
                    FontId::proportional(12.0),
                    Color32::from_rgb(0x1e, 0x1e, 0x2e),
                );
            }

            angle += sweep;
        }

        ui.add_space(12.0);

        // ── Legend ────────────────────────────────────────────────────
        ui.vertical(|ui| {
            ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                for (i, slice) in chart.slices.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (dot_rect, _) =
                            ui.allocate_exact_size(Vec2::new(10.0, 10.0), Sense::hover());
                        ui.painter_at(dot_rect).circle_filled(
                            dot_rect.center(),
                            4.0,
                            super::series_color(i),
                        );

                        ui.label(
                            RichText::new(format!(".{}", slice.extension))
                                .monospace()
                                .color(color_normal)
                                .size(12.0),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} file{}",
                                slice.count,
                                if slice.count == 1 { "" } else { "s" }
                            ))
                            .color(color_normal)
                            .size(12.0),
                        );
                        ui.label(
                            RichText::new(format!("({:.1}%)", slice.percent))
                                .color(color_muted)
                                .size(11.0),
                        );
                    });
                    ui.add_space(2.0);
                }
            });
        });
    });
}

/// Paint one pie sector as a fan of convex polygons.
///
/// `Shape::convex_polygon` tessellates incorrectly past ~180°, so wide
/// slices are painted in chunks of at most a quarter turn.
fn sector(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    let mut chunk_start = start;
    let mut remaining = sweep;
    while remaining > 1e-4 {
        let chunk = remaining.min(FRAC_PI_2);
        let steps = ((chunk / 0.05).ceil() as usize).max(2);

        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let a = chunk_start + chunk * s as f32 / steps as f32;
            points.push(Pos2::new(
                center.x + radius * a.cos(),
                center.y + radius * a.sin(),
            ));
        }
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));

        chunk_start += chunk;
        remaining -= chunk;
    }
}
