//! Derived overall quality level
//!
//! The formula is a versioned contract: snapshots computed with different
//! versions are not comparable, so any change here must bump
//! [`FORMULA_VERSION`] and be recorded alongside stored history.

use qualidash_source_api::MetricSet;

pub const FORMULA_VERSION: u32 = 1;

const SECURITY_WEIGHT: f64 = 0.4;
const RELIABILITY_WEIGHT: f64 = 0.35;
const MAINTAINABILITY_WEIGHT: f64 = 0.25;

const RATINGS_SHARE: f64 = 0.7;
const ISSUES_SHARE: f64 = 0.3;

/// Maps a SonarQube rating (1.0 = A .. 5.0 = E) onto `[0, 1]`, best first.
fn rating_score(rating: f64) -> f64 {
    ((5.0 - rating) / 4.0).clamp(0.0, 1.0)
}

/// Computes the overall quality level in `[0, 1]` from a quality
/// contribution; an absent contribution yields the defined default `0.0`.
///
/// Ratings dominate; issue counts are blended in with security weighted
/// heaviest and remediation effort converted from minutes to hours.
pub fn compute(metrics: Option<&MetricSet>) -> f64 {
    let Some(metrics) = metrics else {
        return 0.0;
    };

    let ratings = SECURITY_WEIGHT * rating_score(metrics.security_rating)
        + RELIABILITY_WEIGHT * rating_score(metrics.reliability_rating)
        + MAINTAINABILITY_WEIGHT * rating_score(metrics.maintainability_rating);

    let weighted_issues = 10.0 * metrics.security_issues
        + 5.0 * metrics.reliability_issues
        + metrics.maintainability_smells
        + metrics.maintainability_debt / 60.0;
    let issues = 1.0 / (1.0 + weighted_issues / 100.0);

    (RATINGS_SHARE * ratings + ISSUES_SHARE * issues).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(
        security: f64, reliability: f64, maintainability: f64, vulns: f64, bugs: f64, debt: f64,
        smells: f64,
    ) -> MetricSet {
        MetricSet {
            security_rating: security,
            reliability_rating: reliability,
            maintainability_rating: maintainability,
            security_issues: vulns,
            reliability_issues: bugs,
            maintainability_debt: debt,
            maintainability_smells: smells,
        }
    }

    #[test]
    fn test_absent_metrics_default_to_zero() {
        assert_eq!(compute(None), 0.0);
    }

    #[test]
    fn test_perfect_project_scores_one() {
        let perfect = metrics(1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        assert!((compute(Some(&perfect)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_worst_ratings_score_only_issue_share() {
        // All ratings E, no counted issues: only the issue share remains
        let worst = metrics(5.0, 5.0, 5.0, 0.0, 0.0, 0.0, 0.0);
        let level = compute(Some(&worst));
        assert!((level - ISSUES_SHARE).abs() < 1e-9);
    }

    #[test]
    fn test_level_is_bounded() {
        let heavy = metrics(5.0, 5.0, 5.0, 1e9, 1e9, 1e9, 1e9);
        let level = compute(Some(&heavy));
        assert!((0.0..=1.0).contains(&level));
    }

    #[test]
    fn test_more_issues_never_raise_the_level() {
        let few = metrics(2.0, 2.0, 2.0, 1.0, 2.0, 60.0, 10.0);
        let many = metrics(2.0, 2.0, 2.0, 10.0, 20.0, 600.0, 100.0);
        assert!(compute(Some(&many)) < compute(Some(&few)));
    }

    #[test]
    fn test_deterministic() {
        let m = metrics(1.0, 2.0, 3.0, 0.0, 5.0, 120.0, 42.0);
        assert_eq!(compute(Some(&m)), compute(Some(&m)));
    }
}
