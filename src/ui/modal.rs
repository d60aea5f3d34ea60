use eframe::egui::{Context, RichText, ScrollArea, Spinner, Ui, Window};
use egui_plot::{Axis, AxisHints, Legend, Line, Plot, PlotPoints};

use crate::domain::Sku;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::variation_palette;
use crate::ui::text::UI_TEXT;
use crate::utils::time_utils;

/// The analysis window for one product: a per-variation stock chart on top,
/// the generated insight (or its spinner) below.
///
/// The SKU snapshot is frozen when the modal opens; period changes behind it
/// do not re-derive the chart.
pub struct AnalysisModal {
    pub sku: Sku,
    pub analysis: String,
    pub loading: bool,
}

impl AnalysisModal {
    pub fn new(sku: Sku) -> Self {
        Self {
            sku,
            analysis: String::new(),
            loading: true,
        }
    }

    /// Returns false once the user closes the window.
    pub fn render(&mut self, ctx: &Context) -> bool {
        let mut open = true;

        Window::new(format!("{} {}", UI_TEXT.modal_title_prefix, self.sku.name))
            .collapsible(false)
            .resizable(true)
            .default_width(680.0)
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_chart(ui);
                ui.separator();
                self.render_analysis(ui);
            });

        open
    }

    fn render_chart(&self, ui: &mut Ui) {
        let palette = variation_palette(self.sku.variations.len());

        let x_axis = AxisHints::new(Axis::X)
            .label(UI_TEXT.axis_date)
            .formatter(|mark, _range| time_utils::epoch_ms_to_br_date(mark.value as i64));
        let y_axis = AxisHints::new(Axis::Y).label(UI_TEXT.axis_stock);

        Plot::new(("sku_history", &self.sku.id))
            .height(UI_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .label_formatter(|_, _| String::new())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (i, variation) in self.sku.variations.iter().enumerate() {
                    let points: Vec<[f64; 2]> = variation
                        .history
                        .iter()
                        .map(|h| [h.timestamp_ms as f64, h.stock as f64])
                        .collect();

                    plot_ui.line(
                        Line::new(variation.name.clone(), PlotPoints::new(points))
                            .color(palette[i])
                            .width(2.0),
                    );
                }
            });
    }

    fn render_analysis(&self, ui: &mut Ui) {
        if self.loading {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.add(Spinner::new().size(28.0));
                ui.label(UI_TEXT.generating_insights);
                ui.add_space(12.0);
            });
            return;
        }

        ScrollArea::vertical()
            .max_height(280.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.label(RichText::new(&self.analysis).color(UI_CONFIG.colors.subheading));
            });
    }
}
