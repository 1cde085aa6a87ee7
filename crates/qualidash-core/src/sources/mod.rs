//! Constructs the concrete source gateways
//!
//! The two external sources are fixed for this system; both share one HTTP
//! client carrying the configured timeouts.

use std::sync::Arc;

use qualidash_source_api::{
    MeasureSource,
    SprintSource,
};
use qualidash_source_jira::JiraSource;
use qualidash_source_sonarqube::SonarqubeSource;

use crate::domain::CoreResult;
use crate::infrastructure::HttpSettings;

pub struct Sources {
    pub sonarqube: Arc<dyn MeasureSource>,
    pub jira: Arc<dyn SprintSource>,
}

impl Sources {
    pub fn new(settings: &HttpSettings) -> CoreResult<Self> {
        let http_client = settings.build_client()?;

        Ok(Self {
            sonarqube: Arc::new(SonarqubeSource::new(http_client.clone())),
            jira: Arc::new(JiraSource::new(http_client)),
        })
    }
}
