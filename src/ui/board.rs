use std::collections::{BTreeSet, HashSet};

use eframe::egui::Ui;

use crate::analysis::{SortColumn, SortDirection};
use crate::domain::Sku;
use crate::ui::cards::SkuCardsPanel;
use crate::ui::config::UI_CONFIG;
use crate::ui::table::SkuTablePanel;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Everything a board panel needs to draw one frame.
pub struct BoardContext<'a> {
    pub skus: &'a [Sku],
    pub favorites: &'a BTreeSet<String>,
    pub expanded: &'a HashSet<String>,
    pub sort_col: SortColumn,
    pub sort_dir: SortDirection,
}

#[derive(Debug, Clone)]
pub enum SkuBoardEvent {
    /// Header click: toggles direction on the active column, selects otherwise
    SortBy(SortColumn),
    /// Compact-mode ComboBox: selects the column without toggling
    SetSortColumn(SortColumn),
    ToggleSortDirection,
    ToggleFavorite(String),
    ToggleExpand(String),
    OpenUrl(String),
    Analyze(String),
}

/// Wide windows get the table, narrow ones the stacked cards.
pub fn render_sku_board(ui: &mut Ui, ctx: &BoardContext<'_>) -> Vec<SkuBoardEvent> {
    if ui.available_width() < UI_CONFIG.compact_max_width {
        SkuCardsPanel::new(ctx).render(ui)
    } else {
        SkuTablePanel::new(ctx).render(ui)
    }
}
