use chrono::{
    DateTime,
    Utc,
};
use qualidash_source_api::{
    MetricSet,
    Sprint,
};
use serde::{
    Deserialize,
    Serialize,
};

/// One immutable aggregation result for a product.
///
/// Snapshots form an append-only history ordered by creation time; the core
/// never updates or deletes an entry once it is handed to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseSnapshot {
    /// Assigned by the snapshot store on append
    pub id: Option<i64>,
    pub product_id: i64,
    pub created_at: DateTime<Utc>,
    /// `None` marks a product with no quality-analysis source configured
    pub quality: Option<MetricSet>,
    /// Empty when no sprint-tracking source is configured
    pub sprints: Vec<Sprint>,
    /// Derived overall level in `[0, 1]`, see `quality_level`
    pub quality_level: f64,
}
