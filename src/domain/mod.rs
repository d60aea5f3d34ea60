mod sku;

pub use sku::{HistoryEntry, RawHistoryEntry, RawSku, RawVariation, Sku, Variation};
