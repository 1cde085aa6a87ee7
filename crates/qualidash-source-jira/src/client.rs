//! Jira Agile board API client

use base64::Engine;
use qualidash_source_api::{
    ConnectionResult,
    SourceConfig,
    SourceError,
    SourceResult,
    Sprint,
};
use reqwest::{
    Client,
    Response,
    StatusCode,
};
use tracing::debug;

use crate::mapper;
use crate::types::SprintResponse;

const MSG_URI_NOT_ABSOLUTE: &str = "URI is not absolute";
const MSG_UNREACHABLE: &str = "Failed to reach the Jira server, base URL may be wrong";
const MSG_UNKNOWN_BOARD: &str =
    "Connected to Jira, but the board was not found, board id may be wrong";
const MSG_BAD_CREDENTIALS: &str =
    "Connected to Jira, but authorization failed, user email or API token may be wrong";

pub(crate) struct JiraClient {
    client: Client,
}

impl JiraClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Jira Cloud expects `email:api_token` as a Basic credential.
    fn basic_auth_header(config: &SourceConfig) -> String {
        let identity = config.user_identity.as_deref().unwrap_or_default();
        let credentials = format!("{}:{}", identity, config.token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes())
        )
    }

    /// Issues the one board-sprints request both operations share.
    async fn request_active_sprints(
        &self, config: &SourceConfig,
    ) -> Result<Response, reqwest::Error> {
        let url = format!(
            "{}/rest/agile/1.0/board/{}/sprint",
            config.trimmed_base_url(),
            config.target_id
        );
        debug!(board = %config.target_id, "Requesting active Jira sprints");

        self.client
            .get(&url)
            .query(&[("state", "active")])
            .header("Authorization", Self::basic_auth_header(config))
            .send()
            .await
    }

    /// Fetches the sprints currently active on the configured board.
    pub async fn fetch_active_sprints(&self, config: &SourceConfig) -> SourceResult<Vec<Sprint>> {
        if config.parsed_base_url().is_none() {
            return Err(SourceError::Network(format!(
                "Invalid Jira base URL: '{}'",
                config.base_url
            )));
        }

        let response = self
            .request_active_sprints(config)
            .await
            .map_err(|e| SourceError::Network(format!("Failed to reach Jira: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::UnknownTarget(format!(
                "Jira board '{}' not found",
                config.target_id
            )));
        }
        if !status.is_success() {
            return Err(SourceError::RequestRejected(format!(
                "Jira rejected the request with HTTP {status}"
            )));
        }

        let body: SprintResponse = response
            .json()
            .await
            .map_err(|_| SourceError::decode(vec!["values".to_string()]))?;

        // The query already filters by state; keep only active sprints in
        // case a server ignores the parameter.
        Ok(body
            .values
            .into_iter()
            .filter(|sprint| sprint.state == "active")
            .map(mapper::map_sprint)
            .collect())
    }

    /// Same ordered classification as the measure source, with
    /// board-flavoured messages.
    pub async fn test_connection(&self, config: &SourceConfig) -> ConnectionResult {
        if config.parsed_base_url().is_none() {
            return ConnectionResult::failure(MSG_URI_NOT_ABSOLUTE);
        }

        let response = match self.request_active_sprints(config).await {
            Ok(response) => response,
            Err(_) => return ConnectionResult::failure(MSG_UNREACHABLE),
        };

        let status = response.status();
        if status.is_success() {
            ConnectionResult::success()
        } else if status == StatusCode::NOT_FOUND {
            ConnectionResult::failure(MSG_UNKNOWN_BOARD)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ConnectionResult::failure(MSG_BAD_CREDENTIALS)
        } else {
            ConnectionResult::failure(format!("Jira connection failed with HTTP {status}"))
        }
    }
}
