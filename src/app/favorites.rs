//! The persisted favorite set: one storage entry holding a JSON-encoded
//! array of SKU ids, read with parse-or-fallback semantics.

use std::collections::BTreeSet;

/// Decode the stored list; any missing or corrupt value falls back to empty.
pub(crate) fn decode(stored: Option<String>) -> BTreeSet<String> {
    stored
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

pub(crate) fn encode(favorites: &BTreeSet<String>) -> String {
    serde_json::to_string(&favorites.iter().collect::<Vec<_>>()).unwrap_or_else(|_| "[]".into())
}

/// Add the id when absent, remove it when present.
pub(crate) fn toggle(favorites: &mut BTreeSet<String>, id: &str) {
    if !favorites.remove(id) {
        favorites.insert(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        let mut favorites: BTreeSet<String> = ["TS-BL-01".to_string()].into();
        let original = favorites.clone();

        toggle(&mut favorites, "CL-DN-05");
        assert!(favorites.contains("CL-DN-05"));
        toggle(&mut favorites, "CL-DN-05");
        assert_eq!(favorites, original);
    }

    #[test]
    fn round_trips_through_storage_encoding() {
        let favorites: BTreeSet<String> = ["a".to_string(), "b".to_string()].into();
        assert_eq!(decode(Some(encode(&favorites))), favorites);
    }

    #[test]
    fn corrupt_or_missing_values_fall_back_to_empty() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("not json".into())).is_empty());
        assert!(decode(Some("{\"wrong\": \"shape\"}".into())).is_empty());
    }
}
