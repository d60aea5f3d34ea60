mod board;
mod cards;
mod config;
mod modal;
mod render;
mod screens;
mod styles;
mod table;
mod text;

pub use board::{BoardContext, Panel, SkuBoardEvent, render_sku_board};
pub use config::UI_CONFIG;
pub use modal::AnalysisModal;
pub use screens::{render_alert_window, render_failure_screen, render_loading_screen};
pub use styles::setup_custom_visuals;
pub use text::UI_TEXT;
