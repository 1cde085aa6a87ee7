//! Wire types for the SonarQube measures API

use serde::Deserialize;

/// Response of `GET /api/measures/component`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MeasureResponse {
    pub component: ComponentMeasures,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ComponentMeasures {
    #[serde(default)]
    pub measures: Vec<Measure>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Measure {
    pub metric: String,
    /// SonarQube reports every measure value as a string; absent for
    /// metrics without a current value.
    #[serde(default)]
    pub value: Option<String>,
}
