/// Chart viewer — presents the generated charts one at a time.
///
/// The usage bar chart shows first; dismissing it advances to the file-type
/// pie chart, and dismissing that closes the window. A desktop process gets
/// exactly one winit event loop, so the two sequential blocking displays
/// are pages of a single blocking window rather than two windows.
use crate::widgets;
use sizescope_core::analysis::{BarChart, PieChart};

/// One displayable chart page.
pub enum ChartPage {
    Usage(BarChart),
    FileTypes(PieChart),
}

impl ChartPage {
    /// Heading shown above the chart.
    pub fn title(&self) -> &str {
        match self {
            Self::Usage(chart) => &chart.title,
            Self::FileTypes(chart) => &chart.title,
        }
    }
}

/// The viewer application: an ordered page list and a cursor.
pub struct ChartViewer {
    pages: Vec<ChartPage>,
    current: usize,
}

impl ChartViewer {
    /// Build a viewer showing `usage` first, then `file_types`.
    pub fn new(usage: BarChart, file_types: PieChart) -> Self {
        Self {
            pages: vec![ChartPage::Usage(usage), ChartPage::FileTypes(file_types)],
            current: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> &ChartPage {
        &self.pages[self.current]
    }

    /// Whether a further chart remains after the current one.
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    /// Advance to the next chart; no-op on the last page.
    pub fn advance(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let label = if self.has_next() { "Next chart" } else { "Close" };
                if ui.button(label).clicked() {
                    if self.has_next() {
                        self.advance();
                    } else {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
                ui.label(
                    egui::RichText::new(format!(
                        "Chart {} of {}",
                        self.current + 1,
                        self.pages.len()
                    ))
                    .color(ui.visuals().weak_text_color())
                    .size(11.0),
                );
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.current_page().title());
            ui.add_space(6.0);
            match self.current_page() {
                ChartPage::Usage(chart) => widgets::bar_chart::bar_chart(ui, chart),
                ChartPage::FileTypes(chart) => widgets::pie_chart::pie_chart(ui, chart),
            }
        });
    }
}

/// Open the viewer window and block until the user dismisses both charts.
pub fn show_charts(usage: BarChart, file_types: PieChart) -> anyhow::Result<()> {
    tracing::info!(
        "opening chart viewer: {} bars, {} slices",
        usage.bars.len(),
        file_types.slices.len()
    );

    let viewer = ChartViewer::new(usage, file_types);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("SizeScope")
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SizeScope",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(viewer))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
