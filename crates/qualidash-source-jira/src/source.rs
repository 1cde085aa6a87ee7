//! [`SprintSource`] implementation backed by the Jira Agile REST API

use async_trait::async_trait;
use qualidash_source_api::{
    ConnectionResult,
    SourceConfig,
    SourceResult,
    Sprint,
    SprintSource,
};
use reqwest::Client;

use crate::client::JiraClient;

pub struct JiraSource {
    client: JiraClient,
}

impl JiraSource {
    /// The HTTP client carries the request and connect timeouts; build it
    /// once and share it across calls.
    pub fn new(http_client: Client) -> Self {
        Self {
            client: JiraClient::new(http_client),
        }
    }
}

#[async_trait]
impl SprintSource for JiraSource {
    async fn fetch_active_sprints(&self, config: &SourceConfig) -> SourceResult<Vec<Sprint>> {
        self.client.fetch_active_sprints(config).await
    }

    async fn test_connection(&self, config: &SourceConfig) -> ConnectionResult {
        self.client.test_connection(config).await
    }
}
