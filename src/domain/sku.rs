use serde::{Deserialize, Serialize};

// Wire types, exactly as `GET /api/skus` serializes them.

/// One stock reading as received from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHistoryEntry {
    /// ISO-8601 timestamp string
    pub timestamp: String,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVariation {
    pub name: String,
    /// Chronologically ordered readings, oldest first
    pub history: Vec<RawHistoryEntry>,
}

/// Wire representation of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSku {
    pub id: String,
    pub name: String,
    pub url: String,
    pub variations: Vec<RawVariation>,
}

// Derived types, produced by the window aggregation and consumed by the UI.

/// A reading with its timestamp parsed to epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp_ms: i64,
    pub stock: i64,
}

/// A variation enriched with the window-derived stock figures.
#[derive(Debug, Clone)]
pub struct Variation {
    pub name: String,
    /// In-window readings only
    pub history: Vec<HistoryEntry>,
    /// Stock at the end of the window
    pub current_stock: i64,
    /// Stock change across the window
    pub delta: i64,
}

/// A product enriched with totals across its variations.
#[derive(Debug, Clone)]
pub struct Sku {
    pub id: String,
    pub name: String,
    pub url: String,
    pub variations: Vec<Variation>,
    pub total_stock: i64,
    pub total_delta: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_sku_parses_from_wire_json() {
        let json = r#"[
            {
                "id": "TS-BL-01",
                "name": "Camiseta",
                "url": "https://example.com/camiseta",
                "variations": [
                    {
                        "name": "Azul - P",
                        "history": [
                            { "timestamp": "2025-07-28T12:00:00.000Z", "stock": 150 },
                            { "timestamp": "2025-07-29T12:00:00.000Z", "stock": 147 }
                        ]
                    }
                ]
            }
        ]"#;

        let skus: Vec<RawSku> = serde_json::from_str(json).unwrap();
        assert_eq!(skus.len(), 1);
        assert_eq!(skus[0].id, "TS-BL-01");
        assert_eq!(skus[0].variations[0].history[1].stock, 147);
    }
}
