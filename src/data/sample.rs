use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;

use crate::config::{SAMPLE, SampleVariation};
use crate::data::{DataSource, StockDataProvider};
use crate::domain::{RawHistoryEntry, RawSku, RawVariation};
use crate::utils::TimeUtils;
use crate::utils::time_utils;

/// Serves the built-in demo catalog with a fresh random walk per load.
/// Nothing is persisted; every fetch re-rolls the histories.
pub struct SampleProvider;

#[async_trait]
impl StockDataProvider for SampleProvider {
    fn signature(&self) -> &'static str {
        "sample data"
    }

    fn source(&self) -> DataSource {
        DataSource::Sample
    }

    async fn fetch_skus(&self) -> Result<Vec<RawSku>> {
        Ok(generate_catalog(time_utils::now_timestamp_ms()))
    }
}

/// Build the sample catalog with histories ending at `now_ms`.
pub fn generate_catalog(now_ms: i64) -> Vec<RawSku> {
    SAMPLE
        .skus
        .iter()
        .map(|sku| RawSku {
            id: sku.id.to_string(),
            name: sku.name.to_string(),
            url: sku.url.to_string(),
            variations: sku
                .variations
                .iter()
                .map(|v| RawVariation {
                    name: v.name.to_string(),
                    history: generate_history(v, now_ms),
                })
                .collect(),
        })
        .collect()
}

/// Daily readings walking from `start_stock` by `daily_change` with uniform
/// noise, clamped at zero. Oldest first.
fn generate_history(variation: &SampleVariation, now_ms: i64) -> Vec<RawHistoryEntry> {
    let mut rng = rand::thread_rng();

    (0..=SAMPLE.days)
        .rev()
        .map(|age_days| {
            let timestamp_ms = now_ms - age_days * TimeUtils::MS_IN_D;
            let drift = (SAMPLE.days - age_days) as f64 * variation.daily_change;
            let noise = rng.gen_range(-SAMPLE.noise_amplitude..=SAMPLE.noise_amplitude);
            let stock = (variation.start_stock as f64 + drift + noise).round().max(0.0) as i64;

            RawHistoryEntry {
                timestamp: time_utils::epoch_ms_to_iso(timestamp_ms),
                stock,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_750_000_000_000;

    #[test]
    fn catalog_matches_configured_shape() {
        let catalog = generate_catalog(NOW_MS);
        assert_eq!(catalog.len(), SAMPLE.skus.len());
        for (sku, entry) in catalog.iter().zip(SAMPLE.skus) {
            assert_eq!(sku.variations.len(), entry.variations.len());
            for v in &sku.variations {
                assert_eq!(v.history.len(), (SAMPLE.days + 1) as usize);
            }
        }
    }

    #[test]
    fn histories_are_chronological_and_non_negative() {
        for sku in generate_catalog(NOW_MS) {
            for v in sku.variations {
                let stamps: Vec<i64> = v
                    .history
                    .iter()
                    .map(|h| time_utils::parse_iso_to_ms(&h.timestamp).unwrap())
                    .collect();
                assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
                assert!(v.history.iter().all(|h| h.stock >= 0));
            }
        }
    }

    #[test]
    fn histories_end_at_now() {
        let catalog = generate_catalog(NOW_MS);
        let last = catalog[0].variations[0].history.last().unwrap();
        assert_eq!(time_utils::parse_iso_to_ms(&last.timestamp).unwrap(), NOW_MS);
    }
}
