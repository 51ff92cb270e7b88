//! Tuning knobs for [`GreedyPlanner`](crate::GreedyPlanner).

use wanderplan_core::{LocationMatch, PlanError};

/// Hours of sightseeing a single day may hold unless configured otherwise.
pub const DEFAULT_DAILY_HOURS_LIMIT: f64 = 12.0;

/// Whether the per-day budget share gates selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BudgetPolicy {
    /// Track spending against the daily budget but never reject on it.
    #[default]
    Informational,
    /// Reject candidates that would push a day past its budget share.
    Enforced,
}

/// What happens to a candidate that does not fit into the current day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OverflowPolicy {
    /// Drop the candidate for the rest of the allocation.
    #[default]
    Discard,
    /// Return the candidate to the front of the queue for the next day.
    ///
    /// Deferred candidates still count against the slots of the day that
    /// popped them and are dropped once the last day is filled.
    Defer,
}

/// Configuration for [`GreedyPlanner`](crate::GreedyPlanner).
///
/// # Examples
/// ```
/// use wanderplan_planner::{BudgetPolicy, GreedyPlannerConfig, OverflowPolicy};
///
/// let config = GreedyPlannerConfig {
///     daily_hours_limit: 8.0,
///     budget_policy: BudgetPolicy::Enforced,
///     overflow_policy: OverflowPolicy::Defer,
///     ..GreedyPlannerConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GreedyPlannerConfig {
    /// Maximum summed visit time per day, in hours.
    pub daily_hours_limit: f64,
    /// Whether the daily budget share gates selection.
    pub budget_policy: BudgetPolicy,
    /// Handling of candidates that do not fit the current day.
    pub overflow_policy: OverflowPolicy,
    /// How the requested location is matched against catalog rows.
    pub location_match: LocationMatch,
}

impl Default for GreedyPlannerConfig {
    fn default() -> Self {
        Self {
            daily_hours_limit: DEFAULT_DAILY_HOURS_LIMIT,
            budget_policy: BudgetPolicy::default(),
            overflow_policy: OverflowPolicy::default(),
            location_match: LocationMatch::default(),
        }
    }
}

impl GreedyPlannerConfig {
    /// Reject limits that would make every day unschedulable or unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidHoursLimit`] for a non-finite or
    /// non-positive limit.
    pub const fn validate(&self) -> Result<(), PlanError> {
        if self.daily_hours_limit.is_finite() && self.daily_hours_limit > 0.0 {
            Ok(())
        } else {
            Err(PlanError::InvalidHoursLimit {
                limit: self.daily_hours_limit,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_keep_budget_informational_and_discard_overflow() {
        let config = GreedyPlannerConfig::default();
        assert!((config.daily_hours_limit - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.budget_policy, BudgetPolicy::Informational);
        assert_eq!(config.overflow_policy, OverflowPolicy::Discard);
        assert_eq!(config.location_match, LocationMatch::CaseInsensitive);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn unusable_hour_limits_are_rejected(#[case] limit: f64) {
        let config = GreedyPlannerConfig {
            daily_hours_limit: limit,
            ..GreedyPlannerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PlanError::InvalidHoursLimit { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case("\"informational\"", BudgetPolicy::Informational)]
    #[case("\"enforced\"", BudgetPolicy::Enforced)]
    fn budget_policies_use_kebab_case(#[case] json: &str, #[case] expected: BudgetPolicy) {
        let parsed: BudgetPolicy = serde_json::from_str(json).expect("known policy");
        assert_eq!(parsed, expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn partial_config_falls_back_to_defaults() {
        let config: GreedyPlannerConfig =
            serde_json::from_str(r#"{"overflow_policy":"defer","location_match":"exact"}"#)
                .expect("partial config");
        assert_eq!(config.overflow_policy, OverflowPolicy::Defer);
        assert_eq!(config.location_match, LocationMatch::Exact);
        assert_eq!(config.budget_policy, BudgetPolicy::Informational);
    }
}
