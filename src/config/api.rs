/// REST access to the stock history service.
pub struct StockApiConfig {
    /// Default base URL, overridable with `--api-url`
    pub base_url: &'static str,
    /// Path of the catalog endpoint
    pub skus_path: &'static str,
    pub timeout_ms: u64,
}

pub const API: StockApiConfig = StockApiConfig {
    base_url: "http://localhost:3001",
    skus_path: "/api/skus",
    timeout_ms: 10_000,
};
