//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit verbose logging for catalog fetches and provider fallbacks.
    pub log_fetch: bool,

    /// Log every window derivation pass (period, counts, totals).
    pub log_derive: bool,

    /// Log sort/favorite interactions.
    pub log_sort: bool,

    /// Log insight prompt sizes and request lifecycle.
    pub log_insight: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,

    log_derive: false,
    log_sort: false,
    log_insight: false,
};
