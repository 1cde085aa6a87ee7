//! Aggregation orchestrator: one run collects every configured source's
//! contribution and appends a single release snapshot.

use std::sync::Arc;

use chrono::Utc;
use qualidash_source_api::{
    MeasureSource,
    SprintSource,
};
use tracing::{
    debug,
    info,
};

use crate::domain::quality_level;
use crate::domain::{
    CoreError,
    CoreResult,
    ProductDirectory,
    ReleaseSnapshot,
    SnapshotStore,
};

pub struct CollectReleaseData {
    directory: Arc<dyn ProductDirectory>,
    store: Arc<dyn SnapshotStore>,
    sonarqube: Arc<dyn MeasureSource>,
    jira: Arc<dyn SprintSource>,
}

impl CollectReleaseData {
    pub fn new(
        directory: Arc<dyn ProductDirectory>, store: Arc<dyn SnapshotStore>,
        sonarqube: Arc<dyn MeasureSource>, jira: Arc<dyn SprintSource>,
    ) -> Self {
        Self {
            directory,
            store,
            sonarqube,
            jira,
        }
    }

    /// Runs one aggregation for the product.
    ///
    /// A source that is not validly configured contributes an absent quality
    /// set or an empty sprint list; a configured source that fails aborts
    /// the run and nothing is persisted. The two source calls are
    /// independent and run concurrently; the snapshot is assembled only
    /// after both have completed.
    pub async fn execute(&self, product_id: i64) -> CoreResult<ReleaseSnapshot> {
        let product = self.directory.get_product(product_id).await?;

        let quality_task = async {
            match product.valid_sonarqube() {
                Some(config) => self
                    .sonarqube
                    .fetch_release_info(config)
                    .await
                    .map(Some)
                    .map_err(|error| CoreError::source("sonarqube", error)),
                None => {
                    debug!(product_id, "No valid SonarQube config, quality contribution absent");
                    Ok(None)
                }
            }
        };

        let sprints_task = async {
            match product.valid_jira() {
                Some(config) => self
                    .jira
                    .fetch_active_sprints(config)
                    .await
                    .map_err(|error| CoreError::source("jira", error)),
                None => {
                    debug!(product_id, "No valid Jira config, sprint contribution empty");
                    Ok(Vec::new())
                }
            }
        };

        let (quality, sprints) = tokio::join!(quality_task, sprints_task);
        let quality = quality?;
        let sprints = sprints?;

        let snapshot = ReleaseSnapshot {
            id: None,
            product_id,
            created_at: Utc::now(),
            quality_level: quality_level::compute(quality.as_ref()),
            quality,
            sprints,
        };

        info!(
            product_id,
            quality_level = snapshot.quality_level,
            sprint_count = snapshot.sprints.len(),
            "Appending release snapshot"
        );

        self.store.append(product_id, snapshot).await
    }
}
