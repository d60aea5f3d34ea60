use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::API;
use crate::data::DataSource;
use crate::domain::RawSku;

/// Abstract interface for fetching the product catalog.
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Human-readable tag used in logs and the fetch report.
    fn signature(&self) -> &'static str;

    fn source(&self) -> DataSource;

    /// Fetch every SKU with its full variation history.
    async fn fetch_skus(&self) -> Result<Vec<RawSku>>;
}

/// Live catalog over HTTP. One GET, no retry, no pagination.
pub struct ApiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl ApiProvider {
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(API.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| API.base_url.to_string()),
        })
    }
}

#[async_trait]
impl StockDataProvider for ApiProvider {
    fn signature(&self) -> &'static str {
        "stock API"
    }

    fn source(&self) -> DataSource {
        DataSource::Api
    }

    async fn fetch_skus(&self) -> Result<Vec<RawSku>> {
        let url = format!("{}{}", self.base_url, API.skus_path);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let skus: Vec<RawSku> = response.json().await?;
        Ok(skus)
    }
}
