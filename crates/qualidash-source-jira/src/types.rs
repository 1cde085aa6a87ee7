//! Wire types for the Jira Agile board API

use chrono::{
    DateTime,
    Utc,
};
use serde::Deserialize;

/// Response of `GET /rest/agile/1.0/board/{boardId}/sprint`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SprintResponse {
    #[serde(default)]
    pub values: Vec<JiraSprint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JiraSprint {
    pub id: i64,
    pub state: String,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub goal: Option<String>,
}
