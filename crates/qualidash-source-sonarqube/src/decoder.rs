//! Decodes a SonarQube measure payload into a complete [`MetricSet`]

use std::collections::{
    BTreeSet,
    HashMap,
};

use qualidash_source_api::{
    MetricSet,
    SourceError,
    SourceResult,
};

use crate::types::Measure;

pub(crate) const SECURITY_RATING: &str = "security_rating";
pub(crate) const RELIABILITY_RATING: &str = "reliability_rating";
pub(crate) const MAINTAINABILITY_RATING: &str = "sqale_rating";
pub(crate) const SECURITY_ISSUES: &str = "vulnerabilities";
pub(crate) const RELIABILITY_ISSUES: &str = "bugs";
pub(crate) const MAINTAINABILITY_DEBT: &str = "sqale_index";
pub(crate) const MAINTAINABILITY_SMELLS: &str = "code_smells";

/// The seven measures a release snapshot is built from, in request order.
pub(crate) const METRIC_KEYS: [&str; 7] = [
    SECURITY_RATING,
    RELIABILITY_RATING,
    MAINTAINABILITY_RATING,
    SECURITY_ISSUES,
    RELIABILITY_ISSUES,
    MAINTAINABILITY_DEBT,
    MAINTAINABILITY_SMELLS,
];

pub(crate) fn metric_keys_param() -> String {
    METRIC_KEYS.join(",")
}

/// Builds a [`MetricSet`] from the measure list, or fails with every
/// offending key named.
///
/// A key is offending when it is missing, carries a non-numeric value, or
/// appears more than once with conflicting values. Duplicates with an
/// identical value are tolerated. A partial set is never produced.
pub(crate) fn decode_measures(measures: &[Measure]) -> SourceResult<MetricSet> {
    let mut values: HashMap<&str, f64> = HashMap::new();
    let mut offending: BTreeSet<String> = BTreeSet::new();

    for measure in measures {
        let Some(key) = METRIC_KEYS.iter().copied().find(|&k| k == measure.metric) else {
            continue;
        };

        let parsed = measure.value.as_deref().and_then(|v| v.parse::<f64>().ok());
        match parsed {
            Some(value) => match values.get(key) {
                Some(existing) if *existing != value => {
                    offending.insert(key.to_string());
                }
                _ => {
                    values.insert(key, value);
                }
            },
            None => {
                offending.insert(key.to_string());
            }
        }
    }

    for key in METRIC_KEYS {
        if !values.contains_key(key) {
            offending.insert(key.to_string());
        }
    }

    if !offending.is_empty() {
        return Err(SourceError::decode(offending.into_iter().collect()));
    }

    Ok(MetricSet {
        security_rating: values[SECURITY_RATING],
        reliability_rating: values[RELIABILITY_RATING],
        maintainability_rating: values[MAINTAINABILITY_RATING],
        security_issues: values[SECURITY_ISSUES],
        reliability_issues: values[RELIABILITY_ISSUES],
        maintainability_debt: values[MAINTAINABILITY_DEBT],
        maintainability_smells: values[MAINTAINABILITY_SMELLS],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(metric: &str, value: &str) -> Measure {
        Measure {
            metric: metric.to_string(),
            value: Some(value.to_string()),
        }
    }

    fn full_measures() -> Vec<Measure> {
        vec![
            measure(SECURITY_RATING, "1.0"),
            measure(RELIABILITY_RATING, "2.0"),
            measure(MAINTAINABILITY_RATING, "3.0"),
            measure(SECURITY_ISSUES, "0"),
            measure(RELIABILITY_ISSUES, "5"),
            measure(MAINTAINABILITY_DEBT, "120"),
            measure(MAINTAINABILITY_SMELLS, "42"),
        ]
    }

    #[test]
    fn test_decode_complete_payload_round_trips() {
        let result = decode_measures(&full_measures()).unwrap();

        assert_eq!(result.security_rating, 1.0);
        assert_eq!(result.reliability_rating, 2.0);
        assert_eq!(result.maintainability_rating, 3.0);
        assert_eq!(result.security_issues, 0.0);
        assert_eq!(result.reliability_issues, 5.0);
        assert_eq!(result.maintainability_debt, 120.0);
        assert_eq!(result.maintainability_smells, 42.0);
    }

    #[test]
    fn test_decode_missing_key_names_it() {
        let measures: Vec<Measure> = full_measures()
            .into_iter()
            .filter(|m| m.metric != RELIABILITY_ISSUES)
            .collect();

        let err = decode_measures(&measures).unwrap_err();
        match err {
            SourceError::Decode { offending_keys } => {
                assert_eq!(offending_keys, vec![RELIABILITY_ISSUES.to_string()]);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_payload_names_all_keys() {
        let err = decode_measures(&[]).unwrap_err();
        match err {
            SourceError::Decode { offending_keys } => {
                assert_eq!(offending_keys.len(), METRIC_KEYS.len());
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_numeric_value_is_rejected() {
        let mut measures = full_measures();
        measures[0] = measure(SECURITY_RATING, "not-a-number");

        let err = decode_measures(&measures).unwrap_err();
        match err {
            SourceError::Decode { offending_keys } => {
                assert_eq!(offending_keys, vec![SECURITY_RATING.to_string()]);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_missing_value_is_rejected() {
        let mut measures = full_measures();
        measures[3] = Measure {
            metric: SECURITY_ISSUES.to_string(),
            value: None,
        };

        let err = decode_measures(&measures).unwrap_err();
        match err {
            SourceError::Decode { offending_keys } => {
                assert_eq!(offending_keys, vec![SECURITY_ISSUES.to_string()]);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_conflicting_duplicate_is_rejected() {
        let mut measures = full_measures();
        measures.push(measure(RELIABILITY_ISSUES, "6"));

        let err = decode_measures(&measures).unwrap_err();
        match err {
            SourceError::Decode { offending_keys } => {
                assert_eq!(offending_keys, vec![RELIABILITY_ISSUES.to_string()]);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_identical_duplicate_is_tolerated() {
        let mut measures = full_measures();
        measures.push(measure(RELIABILITY_ISSUES, "5"));

        assert!(decode_measures(&measures).is_ok());
    }

    #[test]
    fn test_decode_unknown_keys_are_ignored() {
        let mut measures = full_measures();
        measures.push(measure("coverage", "87.5"));

        assert!(decode_measures(&measures).is_ok());
    }
}
