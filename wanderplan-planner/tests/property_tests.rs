//! Property-based tests for the greedy planner.
//!
//! # Invariants tested
//!
//! - **Day count:** the itinerary has exactly one day per requested day.
//! - **Totals:** itinerary totals equal the sums of the per-day aggregates.
//! - **No double booking:** an attraction name appears at most once.
//! - **Hour cap:** no day exceeds the configured daily hour limit.
//! - **Budget cap:** with an enforced budget, no day exceeds its share.

use std::collections::HashSet;

use proptest::prelude::*;
use wanderplan_core::{Attraction, Itinerary, MemoryCatalog};
use wanderplan_planner::{BudgetPolicy, GreedyPlanner, GreedyPlannerConfig, OverflowPolicy};

const LOCATION: &str = "Hampi";

fn attraction_strategy() -> impl Strategy<Value = Attraction> {
    (
        0_u8..12,
        0_u8..=50,
        0_u16..=500,
        0_u8..=28,
        prop::bool::weighted(0.8),
    )
        .prop_map(|(name, rating, price, half_hours, local)| {
            let location = if local { LOCATION } else { "Mysuru" };
            Attraction::new(
                location,
                format!("site-{name}"),
                f64::from(rating) / 10.0,
                f64::from(price),
                f64::from(half_hours) / 2.0,
            )
            .expect("generated attractions are valid")
        })
}

fn catalog_strategy() -> impl Strategy<Value = MemoryCatalog> {
    prop::collection::vec(attraction_strategy(), 0..24).prop_map(MemoryCatalog::new)
}

fn config_strategy() -> impl Strategy<Value = GreedyPlannerConfig> {
    (
        prop_oneof![Just(BudgetPolicy::Informational), Just(BudgetPolicy::Enforced)],
        prop_oneof![Just(OverflowPolicy::Discard), Just(OverflowPolicy::Defer)],
        prop_oneof![Just(12.0), Just(6.0), Just(1.5)],
    )
        .prop_map(|(budget_policy, overflow_policy, daily_hours_limit)| {
            GreedyPlannerConfig {
                daily_hours_limit,
                budget_policy,
                overflow_policy,
                ..GreedyPlannerConfig::default()
            }
        })
}

fn names_are_unique(itinerary: &Itinerary) -> bool {
    let mut seen = HashSet::new();
    itinerary
        .days
        .iter()
        .flat_map(|day| &day.attractions)
        .all(|attraction| seen.insert(attraction.name.clone()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: one day plan per requested day, numbered from one.
    #[test]
    fn day_count_matches_request(
        catalog in catalog_strategy(),
        config in config_strategy(),
        days in 1_u32..=7,
        budget in 0_u32..=5000,
    ) {
        let planner = GreedyPlanner::with_config(catalog, config);
        let itinerary = planner
            .allocate(LOCATION, f64::from(budget), days)
            .expect("valid request");
        prop_assert_eq!(itinerary.days.len(), usize::try_from(days).expect("small day count"));
        prop_assert_eq!(itinerary.total_days, days);
        for (index, day) in itinerary.days.iter().enumerate() {
            prop_assert_eq!(usize::try_from(day.day).expect("small day number"), index + 1);
        }
    }

    /// Property: totals, uniqueness and the hour cap hold for every plan.
    #[test]
    fn itinerary_invariants_hold(
        catalog in catalog_strategy(),
        config in config_strategy(),
        days in 1_u32..=7,
        budget in 0_u32..=5000,
    ) {
        let limit = config.daily_hours_limit;
        let planner = GreedyPlanner::with_config(catalog, config);
        let itinerary = planner
            .allocate(LOCATION, f64::from(budget), days)
            .expect("valid request");

        prop_assert!(itinerary.is_consistent());
        prop_assert!(names_are_unique(&itinerary));
        for day in &itinerary.days {
            prop_assert!(
                day.daily_hours_spent <= limit,
                "day {} spends {} hours over a {} hour limit",
                day.day,
                day.daily_hours_spent,
                limit
            );
        }
    }

    /// Property: an enforced budget keeps every day within its share.
    #[test]
    fn enforced_budget_is_respected(
        catalog in catalog_strategy(),
        days in 1_u32..=7,
        budget in 0_u32..=2000,
    ) {
        let config = GreedyPlannerConfig {
            budget_policy: BudgetPolicy::Enforced,
            ..GreedyPlannerConfig::default()
        };
        let planner = GreedyPlanner::with_config(catalog, config);
        let itinerary = planner
            .allocate(LOCATION, f64::from(budget), days)
            .expect("valid request");
        for day in &itinerary.days {
            prop_assert!(day.daily_spending <= day.daily_budget);
        }
    }

    /// Property: only attractions of the requested location are scheduled.
    #[test]
    fn only_requested_location_is_scheduled(
        attractions in prop::collection::vec(attraction_strategy(), 0..24),
        days in 1_u32..=4,
    ) {
        let local: HashSet<_> = attractions
            .iter()
            .filter(|a| a.location == LOCATION)
            .map(|a| a.name.clone())
            .collect();
        let planner = GreedyPlanner::new(MemoryCatalog::new(attractions));
        let itinerary = planner
            .allocate(LOCATION, 1000.0, days)
            .expect("valid request");
        for attraction in itinerary.days.iter().flat_map(|day| &day.attractions) {
            prop_assert!(local.contains(&attraction.name));
        }
    }
}
