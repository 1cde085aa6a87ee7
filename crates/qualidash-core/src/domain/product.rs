use qualidash_source_api::SourceConfig;
use serde::{
    Deserialize,
    Serialize,
};

/// A tracked product and its per-source connection settings, as resolved by
/// the product directory. Borrowed read-only for the duration of one
/// aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sonarqube: Option<SourceConfig>,
    #[serde(default)]
    pub jira: Option<SourceConfig>,
}

impl Product {
    /// A source contributes to the snapshot only when it is validly
    /// configured: absolute base URL and a present target identifier.
    pub fn valid_sonarqube(&self) -> Option<&SourceConfig> {
        self.sonarqube.as_ref().filter(|config| config.is_valid())
    }

    pub fn valid_jira(&self) -> Option<&SourceConfig> {
        self.jira.as_ref().filter(|config| config.is_valid())
    }
}
