//! File persistence and serialization configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
    /// Storage key holding the JSON-encoded list of favorited SKU ids
    pub favorites_key: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".estoque_state.json",
        favorites_key: "favoriteSkus",
    },
};
