//! [`MeasureSource`] implementation backed by the SonarQube REST API

use async_trait::async_trait;
use qualidash_source_api::{
    ConnectionResult,
    MeasureSource,
    MetricSet,
    SourceConfig,
    SourceResult,
};
use reqwest::Client;

use crate::client::SonarqubeClient;

pub struct SonarqubeSource {
    client: SonarqubeClient,
}

impl SonarqubeSource {
    /// The HTTP client carries the request and connect timeouts; build it
    /// once and share it across calls.
    pub fn new(http_client: Client) -> Self {
        Self {
            client: SonarqubeClient::new(http_client),
        }
    }
}

#[async_trait]
impl MeasureSource for SonarqubeSource {
    async fn fetch_release_info(&self, config: &SourceConfig) -> SourceResult<MetricSet> {
        self.client.fetch_release_info(config).await
    }

    async fn test_connection(&self, config: &SourceConfig) -> ConnectionResult {
        self.client.test_connection(config).await
    }
}
