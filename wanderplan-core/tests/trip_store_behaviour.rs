//! Behavioural coverage for per-trip ledgers in the in-memory store.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wanderplan_core::{
    DayPlan, ExpenseEntry, Itinerary, ItineraryId, MemoryTripStore, TaskEntry, TripStore,
    TripStoreError, total_expenses,
};

/// Scenario state shared between steps.
#[derive(Debug)]
struct TripWorld {
    store: RefCell<MemoryTripStore>,
    trips: RefCell<Vec<Itinerary>>,
    write_result: RefCell<Option<Result<(), TripStoreError>>>,
}

impl TripWorld {
    fn trip(&self, index: usize) -> Itinerary {
        self.trips
            .borrow()
            .get(index)
            .cloned()
            .unwrap_or_else(|| panic!("trip {index} must be planned first"))
    }
}

fn empty_itinerary(location: &str) -> Itinerary {
    Itinerary::assemble(
        ItineraryId::new(),
        location,
        200.0,
        vec![DayPlan::new(1, 100.0), DayPlan::new(2, 100.0)],
    )
}

#[fixture]
fn world() -> TripWorld {
    TripWorld {
        store: RefCell::new(MemoryTripStore::default()),
        trips: RefCell::new(Vec::new()),
        write_result: RefCell::new(None),
    }
}

#[given("two planned trips saved in the store")]
fn two_trips(#[from(world)] world: &TripWorld) {
    let mut store = world.store.borrow_mut();
    for location in ["Goa", "Jaipur"] {
        let itinerary = empty_itinerary(location);
        store
            .save_itinerary(&itinerary)
            .unwrap_or_else(|err| panic!("save {location}: {err}"));
        world.trips.borrow_mut().push(itinerary);
    }
}

#[given("an empty trip store")]
fn empty_store(#[from(world)] world: &TripWorld) {
    assert!(world.store.borrow().is_empty());
}

#[given("a task is recorded on the first trip")]
fn task_on_first(#[from(world)] world: &TripWorld) {
    record_task(world, 0);
}

#[given("a task is recorded on the second trip")]
fn task_on_second(#[from(world)] world: &TripWorld) {
    record_task(world, 1);
}

fn record_task(world: &TripWorld, index: usize) {
    let trip = world.trip(index);
    let task = TaskEntry::new("Confirm hotel booking")
        .unwrap_or_else(|err| panic!("valid task: {err}"));
    world
        .store
        .borrow_mut()
        .add_task(&trip.id, task)
        .unwrap_or_else(|err| panic!("add task: {err}"));
}

#[when("riya records an expense of 120 on the first trip")]
fn record_expense(#[from(world)] world: &TripWorld) {
    let trip = world.trip(0);
    let entry =
        ExpenseEntry::now("riya", 120.0).unwrap_or_else(|err| panic!("valid expense: {err}"));
    let result = world.store.borrow_mut().add_expense(&trip.id, entry);
    world.write_result.replace(Some(result));
}

#[when("the first trip is saved again")]
fn resave_first(#[from(world)] world: &TripWorld) {
    let trip = world.trip(0);
    let result = world.store.borrow_mut().save_itinerary(&trip);
    world.write_result.replace(Some(result));
}

#[when("a task is recorded on an unknown trip")]
fn task_on_unknown(#[from(world)] world: &TripWorld) {
    let task = TaskEntry::new("Buy a map").unwrap_or_else(|err| panic!("valid task: {err}"));
    let result = world
        .store
        .borrow_mut()
        .add_task(&ItineraryId::new(), task);
    world.write_result.replace(Some(result));
}

#[then("the first trip has one expense totalling 120")]
fn first_trip_expense(#[from(world)] world: &TripWorld) {
    let trip = world.trip(0);
    let expenses = world
        .store
        .borrow()
        .expenses(&trip.id)
        .unwrap_or_else(|err| panic!("read expenses: {err}"));
    assert_eq!(expenses.len(), 1);
    assert!((total_expenses(&expenses) - 120.0).abs() < 1e-9);
}

#[then("the second trip has no expenses")]
fn second_trip_no_expenses(#[from(world)] world: &TripWorld) {
    let trip = world.trip(1);
    let expenses = world
        .store
        .borrow()
        .expenses(&trip.id)
        .unwrap_or_else(|err| panic!("read expenses: {err}"));
    assert!(expenses.is_empty());
}

#[then("the first trip has no tasks")]
fn first_trip_no_tasks(#[from(world)] world: &TripWorld) {
    let trip = world.trip(0);
    let tasks = world
        .store
        .borrow()
        .tasks(&trip.id)
        .unwrap_or_else(|err| panic!("read tasks: {err}"));
    assert!(tasks.is_empty());
}

#[then("the second trip still has its task")]
fn second_trip_keeps_task(#[from(world)] world: &TripWorld) {
    let trip = world.trip(1);
    let tasks = world
        .store
        .borrow()
        .tasks(&trip.id)
        .unwrap_or_else(|err| panic!("read tasks: {err}"));
    assert_eq!(tasks.len(), 1);
}

#[then("the store reports an unknown trip")]
fn unknown_trip_reported(#[from(world)] world: &TripWorld) {
    let binding = world.write_result.borrow();
    match binding.as_ref() {
        Some(Err(TripStoreError::UnknownTrip { .. })) => {}
        other => panic!("expected an unknown trip error, got {other:?}"),
    }
}

#[scenario(path = "tests/features/trip_store.feature", index = 0)]
fn expenses_are_per_trip(world: TripWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_store.feature", index = 1)]
fn resaving_clears_ledgers(world: TripWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_store.feature", index = 2)]
fn unknown_trips_are_rejected(world: TripWorld) {
    let _ = world;
}
