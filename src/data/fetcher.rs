use anyhow::Result;

use crate::Cli;
use crate::config::DF;
use crate::data::{ApiProvider, SampleProvider, StockDataProvider};
use crate::domain::RawSku;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    #[default]
    Api,
    Sample,
}

/// Outcome of the startup fetch: the catalog, where it came from, and an
/// optional user-facing notice when the API path failed.
pub struct FetchReport {
    pub skus: Vec<RawSku>,
    pub source: DataSource,
    pub notice: Option<String>,
}

/// Try the API, then the sample generator; the first provider that yields a
/// catalog wins. When the API fails the report carries both the substitution
/// and the notice for the alert window.
pub async fn fetch_catalog(args: &Cli) -> Result<FetchReport> {
    let providers: Vec<Box<dyn StockDataProvider>> = if args.sample_data {
        log::info!("Sample data forced via --sample-data");
        vec![Box::new(SampleProvider)]
    } else {
        match ApiProvider::new(args.api_url.clone()) {
            Ok(api) => vec![Box::new(api), Box::new(SampleProvider)],
            Err(err) => {
                log::error!("Could not build the HTTP client: {err:#}");
                vec![Box::new(SampleProvider)]
            }
        }
    };

    run_chain(&providers).await
}

async fn run_chain(providers: &[Box<dyn StockDataProvider>]) -> Result<FetchReport> {
    let mut notice = None;

    for provider in providers {
        match provider.fetch_skus().await {
            Ok(skus) => {
                if DF.log_fetch {
                    log::info!("Fetched {} SKUs via {}", skus.len(), provider.signature());
                }
                return Ok(FetchReport {
                    skus,
                    source: provider.source(),
                    notice,
                });
            }
            Err(err) => {
                log::error!("{} fetch failed: {err:#}", provider.signature());
                notice = Some(format!(
                    "Erro ao conectar com o servidor: {err:#}. Exibindo dados de exemplo."
                ));
            }
        }
    }

    anyhow::bail!("every catalog provider failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl StockDataProvider for FailingProvider {
        fn signature(&self) -> &'static str {
            "failing provider"
        }

        fn source(&self) -> DataSource {
            DataSource::Api
        }

        async fn fetch_skus(&self) -> Result<Vec<RawSku>> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn api_failure_substitutes_sample_data_with_notice() {
        let providers: Vec<Box<dyn StockDataProvider>> =
            vec![Box::new(FailingProvider), Box::new(SampleProvider)];

        let report = run_chain(&providers).await.unwrap();
        assert_eq!(report.source, DataSource::Sample);
        assert!(!report.skus.is_empty());
        let notice = report.notice.unwrap();
        assert!(notice.contains("Erro ao conectar com o servidor"));
        assert!(notice.contains("dados de exemplo"));
    }

    #[tokio::test]
    async fn exhausted_chain_is_an_error() {
        let providers: Vec<Box<dyn StockDataProvider>> = vec![Box::new(FailingProvider)];
        assert!(run_chain(&providers).await.is_err());
    }

    #[tokio::test]
    async fn healthy_first_provider_reports_no_notice() {
        let providers: Vec<Box<dyn StockDataProvider>> = vec![Box::new(SampleProvider)];
        let report = run_chain(&providers).await.unwrap();
        assert_eq!(report.source, DataSource::Sample);
        assert!(report.notice.is_none());
    }
}
