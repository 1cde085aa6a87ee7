use std::time::Duration;

use reqwest::Client;

use crate::domain::{
    CoreError,
    CoreResult,
};

/// Outbound HTTP settings for the source clients.
///
/// The external sources are untrusted third parties; every call carries a
/// bounded timeout. Settings are passed in at construction, never read from
/// process-wide state.
#[derive(Debug, Clone, Copy)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl HttpSettings {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn build_client(&self) -> CoreResult<Client> {
        Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to create HTTP client: {e}")))
    }
}
