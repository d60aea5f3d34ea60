/// Settings for the Gemini text-generation service.
pub struct InsightConfig {
    pub base_url: &'static str,
    pub model: &'static str,
    /// Environment variable carrying the API credential
    pub api_key_env: &'static str,
    pub timeout_ms: u64,
    /// Readings kept from each end of a variation's history when sampling
    /// for the prompt, to keep the outbound payload small.
    pub sample_edge: usize,
}

pub const INSIGHT: InsightConfig = InsightConfig {
    base_url: "https://generativelanguage.googleapis.com",
    model: "gemini-2.5-flash",
    api_key_env: "GEMINI_API_KEY",
    timeout_ms: 30_000,
    sample_edge: 3,
};
