use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

/// The complete set of code-quality measures for one analysed component.
///
/// A `MetricSet` is only ever constructed with all seven values present;
/// a payload missing any of them is a decode error, not a partial set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    pub security_rating: f64,
    pub reliability_rating: f64,
    pub maintainability_rating: f64,
    pub security_issues: f64,
    pub reliability_issues: f64,
    /// Remediation effort in minutes
    pub maintainability_debt: f64,
    pub maintainability_smells: f64,
}

/// One active sprint as reported by the sprint-tracking source.
///
/// Passed through into the snapshot unchanged; the core does not interpret
/// these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: i64,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub goal: Option<String>,
}
