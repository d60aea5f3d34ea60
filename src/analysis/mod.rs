mod aggregator;
mod sorter;

pub use aggregator::{Period, derive_skus};
pub use sorter::{SortColumn, SortDirection, sort_skus};
