use eframe::egui::{Align, ComboBox, Label, Layout, RichText, ScrollArea, Sense, Ui};
use strum::IntoEnumIterator;

use crate::analysis::{SortColumn, SortDirection};
use crate::domain::Sku;
use crate::ui::board::{BoardContext, Panel, SkuBoardEvent};
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::{delta_color, delta_text};
use crate::ui::text::UI_TEXT;

/// Narrow-window rendition of the board: one stacked card per SKU. The table
/// headers are gone, so sorting moves into a ComboBox.
pub struct SkuCardsPanel<'a> {
    ctx: &'a BoardContext<'a>,
}

impl<'a> SkuCardsPanel<'a> {
    pub fn new(ctx: &'a BoardContext<'a>) -> Self {
        Self { ctx }
    }

    fn render_sort_bar(&self, ui: &mut Ui, events: &mut Vec<SkuBoardEvent>) {
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.sort_by);

            let mut selected = self.ctx.sort_col;
            ComboBox::from_id_salt("card_sort_col")
                .selected_text(selected.to_string())
                .show_ui(ui, |ui| {
                    for column in SortColumn::iter() {
                        if ui
                            .selectable_value(&mut selected, column, column.to_string())
                            .clicked()
                        {
                            events.push(SkuBoardEvent::SetSortColumn(column));
                        }
                    }
                });

            let arrow = match self.ctx.sort_dir {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            };
            if ui.button(arrow).clicked() {
                events.push(SkuBoardEvent::ToggleSortDirection);
            }
        });
    }

    fn render_card(&self, ui: &mut Ui, sku: &Sku, events: &mut Vec<SkuBoardEvent>) {
        let is_favorite = self.ctx.favorites.contains(&sku.id);
        let is_expanded = self.ctx.expanded.contains(&sku.id);

        ui.group(|ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                let name = ui.selectable_label(
                    is_expanded,
                    RichText::new(&sku.name).size(16.0).color(UI_CONFIG.colors.heading),
                );
                if name.clicked() {
                    events.push(SkuBoardEvent::ToggleExpand(sku.id.clone()));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let star = if is_favorite { UI_TEXT.fav_on } else { UI_TEXT.fav_off };
                    let star_color = if is_favorite {
                        UI_CONFIG.colors.favorite
                    } else {
                        UI_CONFIG.colors.label
                    };
                    if ui
                        .add(Label::new(RichText::new(star).size(18.0).color(star_color)).sense(Sense::click()))
                        .on_hover_text(UI_TEXT.fav_hover)
                        .clicked()
                    {
                        events.push(SkuBoardEvent::ToggleFavorite(sku.id.clone()));
                    }
                });
            });

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(UI_TEXT.col_total_stock).small().color(UI_CONFIG.colors.label));
                    ui.label(RichText::new(sku.total_stock.to_string()).size(15.0));
                });
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(UI_TEXT.col_total_delta).small().color(UI_CONFIG.colors.label));
                    ui.label(
                        RichText::new(delta_text(sku.total_delta))
                            .size(15.0)
                            .strong()
                            .color(delta_color(sku.total_delta)),
                    );
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(UI_TEXT.action_analyze)
                        .on_hover_text(UI_TEXT.action_analyze_hover)
                        .clicked()
                    {
                        events.push(SkuBoardEvent::Analyze(sku.id.clone()));
                    }
                    if ui
                        .button(UI_TEXT.action_view)
                        .on_hover_text(UI_TEXT.action_view_hover)
                        .clicked()
                    {
                        events.push(SkuBoardEvent::OpenUrl(sku.url.clone()));
                    }
                });
            });

            if is_expanded {
                ui.separator();
                for v in &sku.variations {
                    ui.horizontal(|ui| {
                        ui.label(&v.name);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.colored_label(delta_color(v.delta), delta_text(v.delta));
                            ui.label(v.current_stock.to_string());
                        });
                    });
                }
            }
        });
        ui.add_space(6.0);
    }
}

impl<'a> Panel for SkuCardsPanel<'a> {
    type Event = SkuBoardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        self.render_sort_bar(ui, &mut events);
        ui.add_space(6.0);

        if self.ctx.skus.is_empty() {
            ui.label(RichText::new(UI_TEXT.empty_catalog).color(UI_CONFIG.colors.label));
            return events;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for sku in self.ctx.skus {
                    self.render_card(ui, sku, &mut events);
                }
            });

        events
    }
}
