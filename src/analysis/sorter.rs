use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Sku;
use crate::ui::UI_TEXT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sortable columns of the product board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum SortColumn {
    #[default]
    Name,
    TotalStock,
    TotalDelta,
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::Name => write!(f, "{}", UI_TEXT.col_product),
            SortColumn::TotalStock => write!(f, "{}", UI_TEXT.col_total_stock),
            SortColumn::TotalDelta => write!(f, "{}", UI_TEXT.col_total_delta),
        }
    }
}

/// Total order of the board: favorited ids always lead, in both directions;
/// within each partition the chosen column decides. `sort_by` is stable, so
/// equal keys keep their relative order.
pub fn sort_skus(
    skus: &mut [Sku],
    column: SortColumn,
    direction: SortDirection,
    favorites: &BTreeSet<String>,
) {
    skus.sort_by(|a, b| {
        match (favorites.contains(&a.id), favorites.contains(&b.id)) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let ordering = match column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::TotalStock => a.total_stock.cmp(&b.total_stock),
            SortColumn::TotalDelta => a.total_delta.cmp(&b.total_delta),
        };

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sku(id: &str, name: &str, total_stock: i64, total_delta: i64) -> Sku {
        Sku {
            id: id.into(),
            name: name.into(),
            url: String::new(),
            variations: Vec::new(),
            total_stock,
            total_delta,
        }
    }

    fn board() -> Vec<Sku> {
        vec![
            sku("a", "Camiseta", 300, -12),
            sku("b", "Calça", 100, -3),
            sku("c", "Tênis", 200, 5),
        ]
    }

    #[test]
    fn sorts_by_each_column() {
        let favorites = BTreeSet::new();

        let mut skus = board();
        sort_skus(&mut skus, SortColumn::Name, SortDirection::Ascending, &favorites);
        assert_eq!(skus[0].id, "b"); // Calça < Camiseta < Tênis

        let mut skus = board();
        sort_skus(&mut skus, SortColumn::TotalStock, SortDirection::Descending, &favorites);
        assert_eq!(skus[0].total_stock, 300);

        let mut skus = board();
        sort_skus(&mut skus, SortColumn::TotalDelta, SortDirection::Ascending, &favorites);
        assert_eq!(skus[0].total_delta, -12);
    }

    #[test]
    fn favorites_lead_under_every_column_and_direction() {
        let favorites: BTreeSet<String> = ["c".to_string()].into();

        for column in SortColumn::iter() {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let mut skus = board();
                sort_skus(&mut skus, column, direction, &favorites);
                assert_eq!(skus[0].id, "c", "{column} {direction:?}");
            }
        }
    }

    #[test]
    fn favorites_partition_is_sorted_internally() {
        let favorites: BTreeSet<String> = ["a".to_string(), "c".to_string()].into();

        let mut skus = board();
        sort_skus(&mut skus, SortColumn::TotalStock, SortDirection::Ascending, &favorites);
        assert_eq!(skus[0].id, "c"); // 200 < 300 within favorites
        assert_eq!(skus[1].id, "a");
        assert_eq!(skus[2].id, "b");
    }

    #[test]
    fn ties_keep_relative_order() {
        let favorites = BTreeSet::new();
        let mut skus = vec![
            sku("x", "Meia", 50, 0),
            sku("y", "Boné", 50, 0),
        ];
        sort_skus(&mut skus, SortColumn::TotalStock, SortDirection::Ascending, &favorites);
        assert_eq!(skus[0].id, "x");
        assert_eq!(skus[1].id, "y");
    }

    #[test]
    fn direction_toggle_round_trips() {
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
        assert_eq!(SortDirection::Ascending.toggle().toggle(), SortDirection::Ascending);
    }
}
