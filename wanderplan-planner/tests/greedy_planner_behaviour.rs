//! Behavioural tests for `GreedyPlanner` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wanderplan_core::test_support::{attraction, three_attraction_catalog};
use wanderplan_core::{Itinerary, MemoryCatalog, PlanError, PlanRequest, Planner};
use wanderplan_planner::{GreedyPlanner, GreedyPlannerConfig, OverflowPolicy};

#[derive(Debug)]
struct PlannerWorld {
    catalog: RefCell<MemoryCatalog>,
    config: RefCell<GreedyPlannerConfig>,
    outcome: RefCell<Option<Result<Itinerary, PlanError>>>,
}

impl PlannerWorld {
    fn new() -> Self {
        Self {
            catalog: RefCell::new(MemoryCatalog::default()),
            config: RefCell::new(GreedyPlannerConfig::default()),
            outcome: RefCell::new(None),
        }
    }

    fn itinerary(&self) -> Itinerary {
        match self.outcome.borrow().as_ref() {
            Some(Ok(itinerary)) => itinerary.clone(),
            Some(Err(err)) => panic!("expected an itinerary, planning failed: {err}"),
            None => panic!("a trip must be planned before assertions"),
        }
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::new()
}

#[expect(clippy::float_arithmetic, reason = "tolerance-based comparison")]
fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[given("a catalog of three attractions in X")]
fn given_three_attractions(world: &PlannerWorld) {
    world.catalog.replace(three_attraction_catalog());
}

#[given("a catalog whose second attraction overflows the first day")]
fn given_overflow_catalog(world: &PlannerWorld) {
    world.catalog.replace(MemoryCatalog::new(vec![
        attraction("X", "A", 9.0, 0.0, 8.0),
        attraction("X", "B", 8.0, 0.0, 6.0),
        attraction("X", "C", 7.0, 0.0, 3.0),
        attraction("X", "D", 6.0, 0.0, 2.0),
    ]));
}

#[given("overflowing attractions are deferred")]
fn given_deferral(world: &PlannerWorld) {
    world.config.borrow_mut().overflow_policy = OverflowPolicy::Defer;
}

#[when("a {days} day trip to {location} with a budget of {budget} is planned")]
fn when_planned(world: &PlannerWorld, days: u32, location: String, budget: f64) {
    let planner = GreedyPlanner::with_config(world.catalog.borrow().clone(), *world.config.borrow());
    let outcome = planner.plan(&PlanRequest::new(location, budget, days));
    world.outcome.replace(Some(outcome));
}

#[then("day {number} visits {names}")]
fn then_day_visits(world: &PlannerWorld, number: u32, names: String) {
    let itinerary = world.itinerary();
    let plan = itinerary
        .days
        .iter()
        .find(|day| day.day == number)
        .unwrap_or_else(|| panic!("day {number} missing"));
    let actual: Vec<_> = plan.attractions.iter().map(|a| a.name.as_str()).collect();
    let expected: Vec<_> = names.trim_matches('"').split(", ").collect();
    assert_eq!(actual, expected);
}

#[then("the trip spends {spending} over {hours} hours")]
fn then_totals(world: &PlannerWorld, spending: f64, hours: f64) {
    let itinerary = world.itinerary();
    assert!(approx(itinerary.total_spending, spending));
    assert!(approx(itinerary.total_hours_spent, hours));
    assert!(itinerary.is_consistent());
}

#[then("every one of the {count} days is empty")]
fn then_days_empty(world: &PlannerWorld, count: usize) {
    let itinerary = world.itinerary();
    assert_eq!(itinerary.days.len(), count);
    assert!(itinerary.days.iter().all(|day| day.attractions.is_empty()));
}

#[then("the plan is rejected as invalid")]
fn then_rejected(world: &PlannerWorld) {
    match world.outcome.borrow().as_ref() {
        Some(Err(PlanError::InvalidRequest(_))) => {}
        other => panic!("expected an invalid request error, got {other:?}"),
    }
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 0)]
fn highest_rated_first(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 1)]
fn zero_days_rejected(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 2)]
fn overflow_deferred(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/greedy_planner.feature", index = 3)]
fn unknown_location_empty(world: PlannerWorld) {
    let _ = world;
}
