//! Facade crate for the Wanderplan trip planner.
//!
//! This crate re-exports the core domain types and the greedy planner, and
//! exposes the optional trip store and catalog implementations behind feature
//! flags.
//!
//! # Examples
//! ```
//! use wanderplan::{Attraction, GreedyPlanner, MemoryCatalog, TripStore, MemoryTripStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = MemoryCatalog::new(vec![
//!     Attraction::new("X", "A", 9.0, 100.0, 5.0)?,
//!     Attraction::new("X", "B", 8.0, 50.0, 4.0)?,
//!     Attraction::new("X", "C", 7.0, 30.0, 10.0)?,
//! ]);
//! let itinerary = GreedyPlanner::new(catalog).allocate("X", 300.0, 2)?;
//! assert_eq!(itinerary.total_spending, 180.0);
//!
//! let mut store = MemoryTripStore::default();
//! store.save_itinerary(&itinerary)?;
//! assert_eq!(store.itinerary(&itinerary.id)?, Some(itinerary));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use wanderplan_core::{
    Attraction, AttractionCatalog, AttractionError, CatalogError, CatalogRowError, DayPlan,
    ExpenseEntry, Itinerary, ItineraryId, ItineraryIdError, LedgerError, LocationMatch,
    MemberTotal, MemoryCatalog, MemoryTripStore, PlanError, PlanRequest, PlanRequestError,
    Planner, SelectedAttraction, TaskEntry, TripStore, TripStoreError, expense_totals,
    total_expenses,
};
pub use wanderplan_planner::{
    BudgetPolicy, DEFAULT_DAILY_HOURS_LIMIT, GreedyPlanner, GreedyPlannerConfig, OverflowPolicy,
};

#[cfg(feature = "store-sqlite")]
pub use wanderplan_core::{SqliteTripStore, SqliteTripStoreError};

#[cfg(feature = "catalog-csv")]
pub use wanderplan_data::{CatalogOptions, CsvAttractionCatalog, RowPolicy, read_catalog};

#[cfg(feature = "test-support")]
pub use wanderplan_core::test_support;
