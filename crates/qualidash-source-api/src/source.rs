use async_trait::async_trait;

use crate::config::SourceConfig;
use crate::connection::ConnectionResult;
use crate::error::SourceResult;
use crate::types::{
    MetricSet,
    Sprint,
};

/// A source providing code-quality measures for a component.
#[async_trait]
pub trait MeasureSource: Send + Sync {
    /// Fetches the full measure set for the configured component.
    ///
    /// One best-effort request; transport and HTTP failures map onto the
    /// closed [`crate::SourceError`] taxonomy, a 2xx body that violates the
    /// expected schema is a decode error and is never reclassified.
    async fn fetch_release_info(&self, config: &SourceConfig) -> SourceResult<MetricSet>;

    /// Answers whether the source is reachable and the credentials are
    /// accepted with this configuration. Never fails; all outcomes are
    /// [`ConnectionResult`] values.
    async fn test_connection(&self, config: &SourceConfig) -> ConnectionResult;
}

/// A source providing sprint/issue-tracking data for a board.
#[async_trait]
pub trait SprintSource: Send + Sync {
    /// Fetches the sprints currently active on the configured board.
    async fn fetch_active_sprints(&self, config: &SourceConfig) -> SourceResult<Vec<Sprint>>;

    /// Same diagnosis contract as [`MeasureSource::test_connection`].
    async fn test_connection(&self, config: &SourceConfig) -> ConnectionResult;
}
