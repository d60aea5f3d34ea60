use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subheading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub row_hover: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub favorite: Color32,
    pub alert: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Below this width the board renders stacked cards instead of the table
    pub compact_max_width: f32,
    pub table_row_height: f32,
    pub chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(156, 163, 175),
        heading: Color32::WHITE,
        subheading: Color32::from_rgb(209, 213, 219),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),
        row_hover: Color32::from_rgb(55, 65, 81),
        positive: Color32::from_rgb(34, 197, 94),
        negative: Color32::from_rgb(239, 68, 68),
        favorite: Color32::from_rgb(250, 204, 21),
        alert: Color32::from_rgb(153, 27, 27),
    },
    compact_max_width: 700.0,
    table_row_height: 30.0,
    chart_height: 280.0,
};

impl UiConfig {
    /// Frame for the header toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    // Frame for the board area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
