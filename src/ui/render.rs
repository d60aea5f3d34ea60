use eframe::egui::{CentralPanel, Context, OpenUrl, RichText, TopBottomPanel, Ui};

use crate::analysis::{Period, SortDirection};
use crate::app::App;
use crate::data::DataSource;
use crate::ui::board::{BoardContext, SkuBoardEvent, render_sku_board};
use crate::ui::config::UI_CONFIG;
use crate::ui::text::UI_TEXT;

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                    if self.data_source == DataSource::Sample {
                        ui.label(
                            RichText::new(UI_TEXT.sample_badge)
                                .small()
                                .color(UI_CONFIG.colors.favorite),
                        );
                    }
                });
                ui.label(RichText::new(UI_TEXT.app_subtitle).color(UI_CONFIG.colors.label));
            });
    }

    fn render_period_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.period_label);
            let before = self.period;
            ui.selectable_value(&mut self.period, Period::OneDay, UI_TEXT.period_one_day);
            ui.selectable_value(&mut self.period, Period::SevenDays, UI_TEXT.period_seven_days);
            if self.period != before {
                self.refresh_view();
            }
        });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.render_period_bar(ui);
                ui.add_space(8.0);

                let events = {
                    let board = BoardContext {
                        skus: &self.view,
                        favorites: &self.favorites,
                        expanded: &self.expanded,
                        sort_col: self.sort_col,
                        sort_dir: self.sort_dir,
                    };
                    render_sku_board(ui, &board)
                };
                self.handle_board_events(ctx, events);
            });
    }

    pub(crate) fn handle_board_events(&mut self, ctx: &Context, events: Vec<SkuBoardEvent>) {
        for event in events {
            match event {
                SkuBoardEvent::SortBy(column) => {
                    if self.sort_col == column {
                        self.sort_dir = self.sort_dir.toggle();
                    } else {
                        self.sort_col = column;
                        self.sort_dir = SortDirection::Ascending;
                    }
                    self.refresh_view();
                }
                SkuBoardEvent::SetSortColumn(column) => {
                    self.sort_col = column;
                    self.refresh_view();
                }
                SkuBoardEvent::ToggleSortDirection => {
                    self.sort_dir = self.sort_dir.toggle();
                    self.refresh_view();
                }
                SkuBoardEvent::ToggleFavorite(id) => self.toggle_favorite(&id),
                SkuBoardEvent::ToggleExpand(id) => self.toggle_expand(&id),
                SkuBoardEvent::OpenUrl(url) => ctx.open_url(OpenUrl::new_tab(url)),
                SkuBoardEvent::Analyze(id) => self.open_analysis(&id),
            }
        }
    }
}
