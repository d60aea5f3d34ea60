use eframe::egui::{Align, Grid, Label, Layout, RichText, ScrollArea, Sense, Ui, vec2};

use crate::analysis::{SortColumn, SortDirection};
use crate::domain::Sku;
use crate::ui::board::{BoardContext, Panel, SkuBoardEvent};
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::{delta_color, delta_text};
use crate::ui::text::UI_TEXT;

const COL_FAV: f32 = 36.0;
const COL_STOCK: f32 = 120.0;
const COL_DELTA: f32 = 120.0;
const COL_ACTIONS: f32 = 150.0;
const MIN_NAME_WIDTH: f32 = 140.0;

/// The wide-window product board: sortable header, one row per SKU, and an
/// expandable per-variation grid under each row.
pub struct SkuTablePanel<'a> {
    ctx: &'a BoardContext<'a>,
}

impl<'a> SkuTablePanel<'a> {
    pub fn new(ctx: &'a BoardContext<'a>) -> Self {
        Self { ctx }
    }

    fn name_width(ui: &Ui) -> f32 {
        (ui.available_width() - COL_FAV - COL_STOCK - COL_DELTA - COL_ACTIONS).max(MIN_NAME_WIDTH)
    }

    fn sort_indicator(&self, column: SortColumn) -> &'static str {
        if self.ctx.sort_col != column {
            return "";
        }
        match self.ctx.sort_dir {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }

    fn header_cell(
        &self,
        ui: &mut Ui,
        width: f32,
        column: SortColumn,
        label: &str,
        events: &mut Vec<SkuBoardEvent>,
    ) {
        let text = RichText::new(format!("{}{}", label, self.sort_indicator(column)))
            .strong()
            .color(UI_CONFIG.colors.subheading);
        let cell = ui.allocate_ui_with_layout(
            vec2(width, UI_CONFIG.table_row_height),
            Layout::left_to_right(Align::Center),
            |ui| ui.add(Label::new(text).sense(Sense::click())),
        );
        if cell.inner.clicked() {
            events.push(SkuBoardEvent::SortBy(column));
        }
    }

    fn render_header(&self, ui: &mut Ui, events: &mut Vec<SkuBoardEvent>) {
        let name_width = Self::name_width(ui);
        ui.horizontal(|ui| {
            ui.allocate_space(vec2(COL_FAV, UI_CONFIG.table_row_height));
            self.header_cell(ui, name_width, SortColumn::Name, UI_TEXT.col_product, events);
            self.header_cell(ui, COL_STOCK, SortColumn::TotalStock, UI_TEXT.col_total_stock, events);
            self.header_cell(ui, COL_DELTA, SortColumn::TotalDelta, UI_TEXT.col_total_delta, events);
            ui.allocate_ui_with_layout(
                vec2(COL_ACTIONS, UI_CONFIG.table_row_height),
                Layout::left_to_right(Align::Center),
                |ui| {
                    ui.label(
                        RichText::new(UI_TEXT.col_actions)
                            .strong()
                            .color(UI_CONFIG.colors.subheading),
                    )
                },
            );
        });
        ui.separator();
    }

    fn render_row(&self, ui: &mut Ui, sku: &Sku, events: &mut Vec<SkuBoardEvent>) {
        let name_width = Self::name_width(ui);
        let is_favorite = self.ctx.favorites.contains(&sku.id);
        let is_expanded = self.ctx.expanded.contains(&sku.id);

        ui.horizontal(|ui| {
            // Favorite star
            let star = if is_favorite { UI_TEXT.fav_on } else { UI_TEXT.fav_off };
            let star_color = if is_favorite {
                UI_CONFIG.colors.favorite
            } else {
                UI_CONFIG.colors.label
            };
            let star_cell = ui.allocate_ui_with_layout(
                vec2(COL_FAV, UI_CONFIG.table_row_height),
                Layout::left_to_right(Align::Center),
                |ui| {
                    ui.add(Label::new(RichText::new(star).size(18.0).color(star_color)).sense(Sense::click()))
                        .on_hover_text(UI_TEXT.fav_hover)
                },
            );
            if star_cell.inner.clicked() {
                events.push(SkuBoardEvent::ToggleFavorite(sku.id.clone()));
            }

            // Product name doubles as the expand toggle
            let name_cell = ui.allocate_ui_with_layout(
                vec2(name_width, UI_CONFIG.table_row_height),
                Layout::left_to_right(Align::Center),
                |ui| {
                    ui.selectable_label(
                        is_expanded,
                        RichText::new(&sku.name).size(15.0).color(UI_CONFIG.colors.heading),
                    )
                },
            );
            if name_cell.inner.clicked() {
                events.push(SkuBoardEvent::ToggleExpand(sku.id.clone()));
            }

            ui.allocate_ui_with_layout(
                vec2(COL_STOCK, UI_CONFIG.table_row_height),
                Layout::right_to_left(Align::Center),
                |ui| ui.label(RichText::new(sku.total_stock.to_string()).size(15.0)),
            );
            ui.allocate_ui_with_layout(
                vec2(COL_DELTA, UI_CONFIG.table_row_height),
                Layout::right_to_left(Align::Center),
                |ui| {
                    ui.label(
                        RichText::new(delta_text(sku.total_delta))
                            .size(15.0)
                            .strong()
                            .color(delta_color(sku.total_delta)),
                    )
                },
            );

            // Actions
            ui.allocate_ui_with_layout(
                vec2(COL_ACTIONS, UI_CONFIG.table_row_height),
                Layout::left_to_right(Align::Center),
                |ui| {
                    if ui
                        .button(UI_TEXT.action_view)
                        .on_hover_text(UI_TEXT.action_view_hover)
                        .clicked()
                    {
                        events.push(SkuBoardEvent::OpenUrl(sku.url.clone()));
                    }
                    if ui
                        .button(UI_TEXT.action_analyze)
                        .on_hover_text(UI_TEXT.action_analyze_hover)
                        .clicked()
                    {
                        events.push(SkuBoardEvent::Analyze(sku.id.clone()));
                    }
                },
            );
        });
    }

    fn render_variations(&self, ui: &mut Ui, sku: &Sku) {
        ui.indent(("variations", &sku.id), |ui| {
            Grid::new(("var_grid", &sku.id))
                .striped(true)
                .num_columns(3)
                .min_col_width(140.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(UI_TEXT.col_variation).strong());
                    ui.label(RichText::new(UI_TEXT.col_current_stock).strong());
                    ui.label(RichText::new(UI_TEXT.col_period_delta).strong());
                    ui.end_row();

                    for v in &sku.variations {
                        ui.label(&v.name);
                        ui.label(v.current_stock.to_string());
                        ui.colored_label(delta_color(v.delta), delta_text(v.delta));
                        ui.end_row();
                    }
                });
        });
        ui.add_space(4.0);
    }
}

impl<'a> Panel for SkuTablePanel<'a> {
    type Event = SkuBoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        self.render_header(ui, &mut events);

        if self.ctx.skus.is_empty() {
            ui.label(RichText::new(UI_TEXT.empty_catalog).color(UI_CONFIG.colors.label));
            return events;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for sku in self.ctx.skus {
                    self.render_row(ui, sku, &mut events);
                    if self.ctx.expanded.contains(&sku.id) {
                        self.render_variations(ui, sku);
                    }
                    ui.separator();
                }
            });

        events
    }
}
