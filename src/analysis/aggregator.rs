use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::domain::{HistoryEntry, RawSku, RawVariation, Sku, Variation};
use crate::utils::TimeUtils;
use crate::utils::time_utils;

/// Lookback window for stock deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    OneDay,
    #[default]
    SevenDays,
}

impl Period {
    pub fn days(&self) -> i64 {
        match self {
            Period::OneDay => 1,
            Period::SevenDays => 7,
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.days() * TimeUtils::MS_IN_D
    }
}

/// Derive display-ready products from the wire catalog.
///
/// Pure function of (raw, period, now): recomputed whenever the window or the
/// source data changes, never mutating the raw catalog.
pub fn derive_skus(raw: &[RawSku], period: Period, now_ms: i64) -> Vec<Sku> {
    let window_start = now_ms - period.window_ms();

    let skus: Vec<Sku> = raw
        .iter()
        .map(|sku| {
            let variations: Vec<Variation> = sku
                .variations
                .iter()
                .map(|v| derive_variation(v, window_start, now_ms))
                .collect();

            let total_stock = variations.iter().map(|v| v.current_stock).sum();
            let total_delta = variations.iter().map(|v| v.delta).sum();

            Sku {
                id: sku.id.clone(),
                name: sku.name.clone(),
                url: sku.url.clone(),
                variations,
                total_stock,
                total_delta,
            }
        })
        .collect();

    #[cfg(debug_assertions)]
    if DF.log_derive {
        log::info!(
            "Derived {} SKUs over the last {}d (window start {})",
            skus.len(),
            period.days(),
            window_start
        );
    }

    skus
}

fn derive_variation(raw: &RawVariation, window_start: i64, now_ms: i64) -> Variation {
    let mut history: Vec<HistoryEntry> = raw
        .history
        .iter()
        .filter_map(|entry| match time_utils::parse_iso_to_ms(&entry.timestamp) {
            Ok(timestamp_ms) => Some(HistoryEntry {
                timestamp_ms,
                stock: entry.stock,
            }),
            Err(err) => {
                log::warn!("Dropping unparseable reading for '{}': {}", raw.name, err);
                None
            }
        })
        .filter(|entry| entry.timestamp_ms >= window_start)
        .collect();

    // An empty window degenerates to a single zero-stock reading stamped "now",
    // so both window ends read zero and the delta is zero.
    if history.is_empty() {
        history.push(HistoryEntry {
            timestamp_ms: now_ms,
            stock: 0,
        });
    }

    let first = history[0];
    let last = history[history.len() - 1];

    Variation {
        name: raw.name.clone(),
        current_stock: last.stock,
        delta: last.stock - first.stock,
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawHistoryEntry;

    const NOW_MS: i64 = 1_750_000_000_000;

    fn reading(age_days: i64, stock: i64) -> RawHistoryEntry {
        RawHistoryEntry {
            timestamp: time_utils::epoch_ms_to_iso(NOW_MS - age_days * TimeUtils::MS_IN_D),
            stock,
        }
    }

    fn sku(variations: Vec<RawVariation>) -> RawSku {
        RawSku {
            id: "SKU-1".into(),
            name: "Produto".into(),
            url: "https://example.com".into(),
            variations,
        }
    }

    fn variation(history: Vec<RawHistoryEntry>) -> RawVariation {
        RawVariation {
            name: "Única".into(),
            history,
        }
    }

    #[test]
    fn empty_window_degenerates_to_zero() {
        // All readings are older than the window.
        let raw = sku(vec![variation(vec![reading(10, 50), reading(9, 40)])]);
        let derived = derive_skus(&[raw], Period::SevenDays, NOW_MS);

        let v = &derived[0].variations[0];
        assert_eq!(v.current_stock, 0);
        assert_eq!(v.delta, 0);
        assert_eq!(v.history.len(), 1);
        assert_eq!(v.history[0].timestamp_ms, NOW_MS);
    }

    #[test]
    fn single_reading_has_zero_delta() {
        let raw = sku(vec![variation(vec![reading(0, 42)])]);
        let derived = derive_skus(&[raw], Period::OneDay, NOW_MS);

        let v = &derived[0].variations[0];
        assert_eq!(v.current_stock, 42);
        assert_eq!(v.delta, 0);
    }

    #[test]
    fn worked_example_from_seven_day_window() {
        // 100 six days ago, 90 now, period 7 => current 90, delta -10.
        let raw = sku(vec![variation(vec![reading(6, 100), reading(0, 90)])]);
        let derived = derive_skus(&[raw], Period::SevenDays, NOW_MS);

        let v = &derived[0].variations[0];
        assert_eq!(v.current_stock, 90);
        assert_eq!(v.delta, -10);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        // A reading exactly at (now - 1 day) survives the >= filter.
        let raw = sku(vec![variation(vec![reading(1, 70), reading(0, 65)])]);
        let derived = derive_skus(&[raw], Period::OneDay, NOW_MS);

        let v = &derived[0].variations[0];
        assert_eq!(v.history.len(), 2);
        assert_eq!(v.delta, -5);
    }

    #[test]
    fn out_of_window_readings_are_excluded() {
        // The 3-day-old reading must not act as the window start for a 1-day period.
        let raw = sku(vec![variation(vec![
            reading(3, 200),
            reading(1, 100),
            reading(0, 95),
        ])]);
        let derived = derive_skus(&[raw], Period::OneDay, NOW_MS);

        let v = &derived[0].variations[0];
        assert_eq!(v.delta, -5);
        assert_eq!(v.history.len(), 2);
    }

    #[test]
    fn totals_are_sums_over_variations() {
        let raw = sku(vec![
            variation(vec![reading(2, 30), reading(0, 20)]),
            variation(vec![reading(2, 10), reading(0, 15)]),
        ]);
        let derived = derive_skus(&[raw], Period::SevenDays, NOW_MS);

        assert_eq!(derived[0].total_stock, 35);
        assert_eq!(derived[0].total_delta, -5);
        let sum_stock: i64 = derived[0].variations.iter().map(|v| v.current_stock).sum();
        let sum_delta: i64 = derived[0].variations.iter().map(|v| v.delta).sum();
        assert_eq!(derived[0].total_stock, sum_stock);
        assert_eq!(derived[0].total_delta, sum_delta);
    }

    #[test]
    fn unparseable_timestamps_are_dropped() {
        let mut history = vec![reading(0, 90)];
        history.push(RawHistoryEntry {
            timestamp: "definitely not a date".into(),
            stock: 999,
        });
        let raw = sku(vec![variation(history)]);
        let derived = derive_skus(&[raw], Period::SevenDays, NOW_MS);

        let v = &derived[0].variations[0];
        assert_eq!(v.history.len(), 1);
        assert_eq!(v.current_stock, 90);
    }
}
