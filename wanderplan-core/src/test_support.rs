//! Builders shared by unit and behaviour tests.

use crate::{Attraction, DayPlan, Itinerary, ItineraryId, MemoryCatalog, SelectedAttraction};

/// Build an attraction, panicking on invalid input.
///
/// # Panics
///
/// Panics when the values fail [`Attraction::new`] validation.
#[must_use]
pub fn attraction(
    location: &str,
    name: &str,
    rating: f64,
    price: f64,
    time_hours: f64,
) -> Attraction {
    Attraction::new(location, name, rating, price, time_hours)
        .unwrap_or_else(|err| panic!("invalid test attraction {name}: {err}"))
}

/// Catalog for location `X` with three attractions of falling rating:
/// `A` (9, 100, 5h), `B` (8, 50, 4h) and `C` (7, 30, 10h).
#[must_use]
pub fn three_attraction_catalog() -> MemoryCatalog {
    MemoryCatalog::new(vec![
        attraction("X", "A", 9.0, 100.0, 5.0),
        attraction("X", "B", 8.0, 50.0, 4.0),
        attraction("X", "C", 7.0, 30.0, 10.0),
    ])
}

/// A two-day itinerary with a fresh id, matching the greedy plan of
/// [`three_attraction_catalog`] for a 300 budget.
#[must_use]
pub fn sample_itinerary() -> Itinerary {
    let mut first = DayPlan::new(1, 150.0);
    let mut second = DayPlan::new(2, 150.0);
    let catalog = three_attraction_catalog();
    for (index, item) in catalog.attractions().iter().enumerate() {
        let day = if index < 2 { &mut first } else { &mut second };
        day.push(SelectedAttraction::from(item));
    }
    Itinerary::assemble(ItineraryId::new(), "X", 300.0, vec![first, second])
}
