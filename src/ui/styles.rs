use colorgrad::Gradient;
use eframe::egui::{Color32, Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.subheading;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

/// Green for restock, red for sell-through, gray for flat.
pub fn delta_color(delta: i64) -> Color32 {
    if delta > 0 {
        UI_CONFIG.colors.positive
    } else if delta < 0 {
        UI_CONFIG.colors.negative
    } else {
        UI_CONFIG.colors.label
    }
}

/// Signed rendering: gains carry an explicit plus.
pub fn delta_text(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Distinct line colors for variation series, sampled from a fixed gradient.
pub fn variation_palette(count: usize) -> Vec<Color32> {
    let gradient = colorgrad::GradientBuilder::new()
        .colors(&[
            colorgrad::Color::from_html("#3b82f6").unwrap(), // Blue
            colorgrad::Color::from_html("#22c55e").unwrap(), // Green
            colorgrad::Color::from_html("#f59e0b").unwrap(), // Amber
            colorgrad::Color::from_html("#ef4444").unwrap(), // Red
            colorgrad::Color::from_html("#a855f7").unwrap(), // Purple
        ])
        .build::<colorgrad::LinearGradient>()
        .expect("Failed to build variation palette gradient");

    (0..count)
        .map(|i| {
            let t = if count <= 1 {
                0.0
            } else {
                i as f32 / (count - 1) as f32
            };
            let rgba = gradient.at(t).to_rgba8();
            Color32::from_rgb(rgba[0], rgba[1], rgba[2])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_text_is_signed() {
        assert_eq!(delta_text(5), "+5");
        assert_eq!(delta_text(-3), "-3");
        assert_eq!(delta_text(0), "0");
    }

    #[test]
    fn palette_yields_one_color_per_series() {
        assert_eq!(variation_palette(1).len(), 1);
        let palette = variation_palette(4);
        assert_eq!(palette.len(), 4);
        assert_ne!(palette[0], palette[3]);
    }
}
