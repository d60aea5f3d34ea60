/// Top-level phases of a dashboard session.
pub(crate) enum AppState {
    /// Initial catalog fetch still in flight
    Loading,
    /// Board visible, insight requests allowed
    Running,
    /// No data source produced a catalog
    Failed(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading
    }
}
