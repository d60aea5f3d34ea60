//! Configuration module for the stock dashboard.

// Can all be private because we have a public re-export.
mod api;
mod debug;
mod insight;
mod persistence;
mod sample;

// Re-export commonly used items
pub use api::{API, StockApiConfig};
pub use debug::DF;
pub use insight::{INSIGHT, InsightConfig};
pub use persistence::PERSISTENCE;
pub use sample::{SAMPLE, SampleSku, SampleVariation};
