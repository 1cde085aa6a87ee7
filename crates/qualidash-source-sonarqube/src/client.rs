//! SonarQube measures API client

use qualidash_source_api::{
    ConnectionResult,
    MetricSet,
    SourceConfig,
    SourceError,
    SourceResult,
};
use reqwest::{
    Client,
    Response,
    StatusCode,
};
use tracing::debug;

use crate::decoder;
use crate::types::MeasureResponse;

const MSG_URI_NOT_ABSOLUTE: &str = "URI is not absolute";
const MSG_UNREACHABLE: &str = "Failed to reach the SonarQube server, base URL may be wrong";
const MSG_UNKNOWN_COMPONENT: &str =
    "Connected to SonarQube, but the component was not found, component key may be wrong";
const MSG_BAD_TOKEN: &str =
    "Connected to SonarQube, but authorization failed, access token may be wrong";

/// Client for the SonarQube measures endpoint.
///
/// Holds only the shared HTTP client; connection settings arrive as a
/// [`SourceConfig`] per call.
pub(crate) struct SonarqubeClient {
    client: Client,
}

impl SonarqubeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Issues the one measures request both operations share.
    async fn request_measures(&self, config: &SourceConfig) -> Result<Response, reqwest::Error> {
        let url = format!("{}/api/measures/component", config.trimmed_base_url());
        debug!(component = %config.target_id, "Requesting SonarQube measures");

        self.client
            .get(&url)
            .query(&[
                ("component", config.target_id.as_str()),
                ("metricKeys", decoder::metric_keys_param().as_str()),
            ])
            .bearer_auth(&config.token)
            .send()
            .await
    }

    /// Fetches and decodes the seven release measures for the configured
    /// component.
    pub async fn fetch_release_info(&self, config: &SourceConfig) -> SourceResult<MetricSet> {
        if config.parsed_base_url().is_none() {
            return Err(SourceError::Network(format!(
                "Invalid SonarQube base URL: '{}'",
                config.base_url
            )));
        }

        let response = self
            .request_measures(config)
            .await
            .map_err(|e| SourceError::Network(format!("Failed to reach SonarQube: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::UnknownTarget(format!(
                "SonarQube component '{}' not found",
                config.target_id
            )));
        }
        if !status.is_success() {
            return Err(SourceError::RequestRejected(format!(
                "SonarQube rejected the request with HTTP {status}"
            )));
        }

        // A 2xx body that is not a measure response at all violates the same
        // schema contract as one with missing keys.
        let body: MeasureResponse = response.json().await.map_err(|_| {
            SourceError::decode(decoder::METRIC_KEYS.iter().map(|k| k.to_string()).collect())
        })?;

        decoder::decode_measures(&body.component.measures)
    }

    /// Runs the identical request and classifies the outcome, in priority
    /// order: absolute-URI check, reachability, unknown component, rejected
    /// credentials. Any 2xx is a pass regardless of the body.
    pub async fn test_connection(&self, config: &SourceConfig) -> ConnectionResult {
        if config.parsed_base_url().is_none() {
            return ConnectionResult::failure(MSG_URI_NOT_ABSOLUTE);
        }

        let response = match self.request_measures(config).await {
            Ok(response) => response,
            Err(_) => return ConnectionResult::failure(MSG_UNREACHABLE),
        };

        let status = response.status();
        if status.is_success() {
            ConnectionResult::success()
        } else if status == StatusCode::NOT_FOUND {
            ConnectionResult::failure(MSG_UNKNOWN_COMPONENT)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ConnectionResult::failure(MSG_BAD_TOKEN)
        } else {
            ConnectionResult::failure(format!("SonarQube connection failed with HTTP {status}"))
        }
    }
}
