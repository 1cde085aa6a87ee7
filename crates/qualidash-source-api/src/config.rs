use serde::{
    Deserialize,
    Serialize,
};
use url::Url;

/// Connection settings for one external source, owned by the product
/// directory and passed in per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the source server (e.g., https://sonarcloud.io)
    pub base_url: String,
    /// Target identifier inside the source: component key or board id
    pub target_id: String,
    /// Access token used to authenticate outbound requests
    pub token: String,
    /// Account identity for sources using basic auth (e.g., Jira user email)
    #[serde(default)]
    pub user_identity: Option<String>,
}

impl SourceConfig {
    pub fn new(
        base_url: impl Into<String>, target_id: impl Into<String>, token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            target_id: target_id.into(),
            token: token.into(),
            user_identity: None,
        }
    }

    pub fn with_user_identity(mut self, user_identity: impl Into<String>) -> Self {
        self.user_identity = Some(user_identity.into());
        self
    }

    /// Base URL parsed as an absolute URI, or `None` when it is empty or
    /// relative.
    pub fn parsed_base_url(&self) -> Option<Url> {
        Url::parse(&self.base_url).ok()
    }

    /// A config is valid when the base URL is an absolute URI and a target
    /// identifier is present. Both must hold before any call is attempted.
    pub fn is_valid(&self) -> bool {
        self.parsed_base_url().is_some() && !self.target_id.trim().is_empty()
    }

    /// Base URL without a trailing slash, for request-path assembly.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SourceConfig::new("https://sonarcloud.io", "my-component", "token");
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_base_url_is_invalid() {
        let config = SourceConfig::new("", "my-component", "token");
        assert!(!config.is_valid());
    }

    #[test]
    fn test_relative_base_url_is_invalid() {
        let config = SourceConfig::new("sonarcloud.io/path", "my-component", "token");
        assert!(!config.is_valid());
    }

    #[test]
    fn test_missing_target_is_invalid() {
        let config = SourceConfig::new("https://sonarcloud.io", "  ", "token");
        assert!(!config.is_valid());
    }

    #[test]
    fn test_trimmed_base_url() {
        let config = SourceConfig::new("https://sonarcloud.io/", "c", "t");
        assert_eq!(config.trimmed_base_url(), "https://sonarcloud.io");
    }
}
