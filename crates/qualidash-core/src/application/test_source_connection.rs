//! Connection diagnosis for a product's configured sources

use std::sync::Arc;

use qualidash_source_api::{
    ConnectionResult,
    MeasureSource,
    SprintSource,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::domain::{
    CoreResult,
    ProductDirectory,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Sonarqube,
    Jira,
}

pub struct TestSourceConnection {
    directory: Arc<dyn ProductDirectory>,
    sonarqube: Arc<dyn MeasureSource>,
    jira: Arc<dyn SprintSource>,
}

impl TestSourceConnection {
    pub fn new(
        directory: Arc<dyn ProductDirectory>, sonarqube: Arc<dyn MeasureSource>,
        jira: Arc<dyn SprintSource>,
    ) -> Self {
        Self {
            directory,
            sonarqube,
            jira,
        }
    }

    /// Diagnoses the product's configuration for one source kind.
    ///
    /// Every outcome short of an unknown product is a [`ConnectionResult`]
    /// value, including a source that is not configured at all.
    pub async fn execute(&self, product_id: i64, kind: SourceKind) -> CoreResult<ConnectionResult> {
        let product = self.directory.get_product(product_id).await?;

        let result = match kind {
            SourceKind::Sonarqube => match &product.sonarqube {
                Some(config) => self.sonarqube.test_connection(config).await,
                None => {
                    ConnectionResult::failure("No SonarQube source configured for this product")
                }
            },
            SourceKind::Jira => match &product.jira {
                Some(config) => self.jira.test_connection(config).await,
                None => ConnectionResult::failure("No Jira source configured for this product"),
            },
        };

        Ok(result)
    }
}
