mod fetcher;
mod provider;
mod sample;

pub use {
    fetcher::{DataSource, FetchReport, fetch_catalog},
    provider::{ApiProvider, StockDataProvider},
    sample::{SampleProvider, generate_catalog},
};
