use eframe::egui::{Align2, CentralPanel, Context, RichText, Spinner, Window};

use crate::ui::config::UI_CONFIG;
use crate::ui::text::UI_TEXT;

/// Fullscreen spinner while the initial catalog fetch is in flight.
pub fn render_loading_screen(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.set_max_width(300.0);
                ui.vertical_centered(|ui| {
                    ui.add(Spinner::new().size(48.0));
                    ui.add_space(12.0);
                    ui.heading(UI_TEXT.loading);
                });
            });
        });
}

/// Page-level banner for the case where no data source produced a catalog.
pub fn render_failure_screen(ctx: &Context, message: &str) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.add_space(24.0);
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.visuals_mut().override_text_color = Some(UI_CONFIG.colors.heading);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.error_title)
                            .strong()
                            .color(UI_CONFIG.colors.negative),
                    );
                    ui.label(message);
                });
            });
        });
}

/// Blocking-style alert used when the API fetch failed and the sample
/// catalog was substituted. Returns true once dismissed.
pub fn render_alert_window(ctx: &Context, message: &str) -> bool {
    let mut dismissed = false;

    Window::new(UI_TEXT.alert_title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(UI_TEXT.alert_ok).clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}
