use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key},
    },
    serde::{Deserialize, Serialize},
    std::{
        collections::{BTreeSet, HashSet},
        mem,
        sync::mpsc::{self, Receiver, Sender, TryRecvError},
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    analysis::{Period, SortColumn, SortDirection, derive_skus, sort_skus},
    app::{AppState, favorites},
    config::PERSISTENCE,
    data::{DataSource, FetchReport, fetch_catalog},
    domain::{RawSku, Sku},
    insight::{ANALYSIS_FALLBACK_TEXT, InsightClient, build_insight_prompt},
    ui::{
        AnalysisModal, UI_TEXT, render_alert_window, render_failure_screen, render_loading_screen,
        setup_custom_visuals,
    },
    utils::time_utils,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Persisted across sessions via the APP_KEY blob.
    pub(crate) period: Period,
    pub(crate) sort_col: SortColumn,
    pub(crate) sort_dir: SortDirection,

    // Persisted separately under its own storage key.
    #[serde(skip)]
    pub(crate) favorites: BTreeSet<String>,

    // Session-only state.
    #[serde(skip)]
    pub(crate) raw_skus: Vec<RawSku>,
    #[serde(skip)]
    pub(crate) view: Vec<Sku>,
    #[serde(skip)]
    pub(crate) expanded: HashSet<String>,
    #[serde(skip)]
    pub(crate) data_source: DataSource,
    #[serde(skip)]
    pub(crate) fetch_notice: Option<String>,
    #[serde(skip)]
    pub(crate) modal: Option<AnalysisModal>,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<anyhow::Result<FetchReport>>>,
    #[serde(skip)]
    pub(crate) insight_tx: Option<Sender<String>>,
    #[serde(skip)]
    pub(crate) insight_rx: Option<Receiver<String>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            period: Period::default(),
            sort_col: SortColumn::default(),
            sort_dir: SortDirection::default(),
            favorites: BTreeSet::new(),
            raw_skus: Vec::new(),
            view: Vec::new(),
            expanded: HashSet::new(),
            data_source: DataSource::default(),
            fetch_notice: None,
            modal: None,
            state: AppState::default(),
            data_rx: None,
            insight_tx: None,
            insight_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.favorites = favorites::decode(
            cc.storage
                .and_then(|s| s.get_string(PERSISTENCE.app.favorites_key)),
        );
        app.state = AppState::Loading;

        let (data_tx, data_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);

        // One long-lived insight channel; every request clones the sender, so
        // overlapping requests race and the last completion wins the display.
        let (insight_tx, insight_rx) = mpsc::channel();
        app.insight_tx = Some(insight_tx);
        app.insight_rx = Some(insight_rx);

        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            rt.block_on(async move {
                let report = fetch_catalog(&args).await;
                let _ = data_tx.send(report);
            });
        });

        app
    }

    /// Re-derive and re-sort the board. Pure function of the raw catalog plus
    /// the current period, sort config and favorites.
    pub(crate) fn refresh_view(&mut self) {
        let mut skus = derive_skus(&self.raw_skus, self.period, time_utils::now_timestamp_ms());
        sort_skus(&mut skus, self.sort_col, self.sort_dir, &self.favorites);
        self.view = skus;
    }

    pub(crate) fn toggle_favorite(&mut self, id: &str) {
        favorites::toggle(&mut self.favorites, id);

        #[cfg(debug_assertions)]
        if DF.log_sort {
            log::info!("Favorites now: {:?}", self.favorites);
        }

        // Favorites pin to the top, so the order changes too.
        self.refresh_view();
    }

    pub(crate) fn toggle_expand(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Open the analysis modal for a derived SKU and fire the insight request.
    pub(crate) fn open_analysis(&mut self, id: &str) {
        let Some(sku) = self.view.iter().find(|s| s.id == id).cloned() else {
            log::warn!("Analysis requested for unknown SKU id {id}");
            return;
        };

        #[cfg(debug_assertions)]
        if DF.log_insight {
            log::info!("Insight requested for '{}'", sku.name);
        }

        self.request_insight(&sku);
        self.modal = Some(AnalysisModal::new(sku));
    }

    /// Fire-and-forget: no cancellation, no generation guard. A failed call
    /// resolves to the fixed fallback text instead of an error.
    fn request_insight(&self, sku: &Sku) {
        let Some(tx) = self.insight_tx.clone() else {
            return;
        };
        let prompt = build_insight_prompt(&sku.name, &sku.variations);

        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            rt.block_on(async move {
                let analysis = match InsightClient::from_env() {
                    Ok(client) => match client.generate(&prompt).await {
                        Ok(text) => text,
                        Err(err) => {
                            log::error!("Insight generation failed: {err:#}");
                            ANALYSIS_FALLBACK_TEXT.to_string()
                        }
                    },
                    Err(err) => {
                        log::error!("Insight client unavailable: {err:#}");
                        ANALYSIS_FALLBACK_TEXT.to_string()
                    }
                };
                let _ = tx.send(analysis);
            });
        });
    }

    fn poll_insight(&mut self) {
        if let Some(rx) = &self.insight_rx {
            while let Ok(analysis) = rx.try_recv() {
                if let Some(modal) = &mut self.modal {
                    modal.analysis = analysis;
                    modal.loading = false;
                }
                // No modal open: the result is stale, drop it.
            }
        }
    }

    fn ingest_report(&mut self, report: FetchReport) -> AppState {
        self.raw_skus = report.skus;
        self.data_source = report.source;
        self.fetch_notice = report.notice;
        self.refresh_view();
        AppState::Running
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in a text box, don't trigger global hotkeys.
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.modal = None;
            }
        });
    }

    fn tick_loading(&mut self, ctx: &Context) -> AppState {
        ctx.request_repaint();

        if let Some(rx) = &self.data_rx {
            match rx.try_recv() {
                Ok(Ok(report)) => return self.ingest_report(report),
                Ok(Err(err)) => {
                    log::error!("Catalog fetch failed terminally: {err:#}");
                    return AppState::Failed(UI_TEXT.fetch_failed.to_string());
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    return AppState::Failed(UI_TEXT.fetch_failed.to_string());
                }
            }
        }

        render_loading_screen(ctx);
        AppState::Loading
    }

    /// RUNNING PHASE MAIN LOOP
    fn tick_running(&mut self, ctx: &Context) -> AppState {
        self.poll_insight();
        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);

        if let Some(notice) = self.fetch_notice.clone() {
            if render_alert_window(ctx, &notice) {
                self.fetch_notice = None;
            }
        }

        if let Some(modal) = &mut self.modal {
            if modal.loading {
                // Keep polling until the insight lands.
                ctx.request_repaint();
            }
            if !modal.render(ctx) {
                self.modal = None;
            }
        }

        AppState::Running
    }

    fn tick_failed(&mut self, ctx: &Context, message: String) -> AppState {
        render_failure_screen(ctx, &message);
        AppState::Failed(message)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading => self.tick_loading(ctx),
            AppState::Running => self.tick_running(ctx),
            AppState::Failed(message) => self.tick_failed(ctx, message),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        storage.set_string(
            PERSISTENCE.app.favorites_key,
            favorites::encode(&self.favorites),
        );
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
