//! Core domain types for the Wanderplan itinerary engine.
//!
//! The crate defines the attraction catalog model, the day-by-day
//! [`Itinerary`] produced by a [`Planner`], and the per-trip ledgers kept by a
//! [`TripStore`]. Constructors validate their input and return `Result` so
//! that malformed data is surfaced before it reaches the planner.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attraction;
pub mod catalog;
pub mod itinerary;
pub mod ledger;
pub mod planner;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attraction::{Attraction, AttractionError, SelectedAttraction};
pub use catalog::{
    AttractionCatalog, CatalogError, CatalogRowError, LocationMatch, MemoryCatalog,
};
pub use itinerary::{DayPlan, Itinerary, ItineraryId, ItineraryIdError};
pub use ledger::{ExpenseEntry, LedgerError, MemberTotal, TaskEntry, expense_totals, total_expenses};
pub use planner::{PlanError, PlanRequest, PlanRequestError, Planner};
pub use store::{MemoryTripStore, TripStore, TripStoreError};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteTripStore, SqliteTripStoreError};
