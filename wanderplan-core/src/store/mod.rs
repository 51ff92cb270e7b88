//! Persistence of itineraries and their per-trip ledgers.
//!
//! The [`TripStore`] trait replaces a single global "current trip" slot with
//! an explicit [`ItineraryId`] threaded through every call, so several trips
//! can be planned and tracked side by side.

use thiserror::Error;

use crate::{ExpenseEntry, Itinerary, ItineraryId, TaskEntry};

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::MemoryTripStore;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteTripStore, SqliteTripStoreError};

/// Errors shared by every [`TripStore`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripStoreError {
    /// A ledger write referenced a trip that has not been saved.
    #[error("no itinerary is stored under id {id}")]
    UnknownTrip {
        /// Identifier that was looked up.
        id: ItineraryId,
    },
}

/// Storage for itineraries and the expense and task ledgers keyed by them.
///
/// Saving an itinerary under an id that is already present replaces it and
/// clears that trip's ledgers; other trips are unaffected. Ledger entries are
/// returned in insertion order.
///
/// # Examples
///
/// ```rust
/// use wanderplan_core::{
///     DayPlan, Itinerary, ItineraryId, MemoryTripStore, TaskEntry, TripStore,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let itinerary = Itinerary::assemble(ItineraryId::new(), "Goa", 0.0, vec![DayPlan::new(1, 0.0)]);
/// let mut store = MemoryTripStore::default();
/// store.save_itinerary(&itinerary)?;
/// store.add_task(&itinerary.id, TaskEntry::new("Pack sunscreen")?)?;
///
/// assert_eq!(store.itinerary(&itinerary.id)?, Some(itinerary.clone()));
/// assert_eq!(store.tasks(&itinerary.id)?.len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait TripStore {
    /// Error type raised by the backing storage.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store an itinerary under its own id.
    fn save_itinerary(&mut self, itinerary: &Itinerary) -> Result<(), Self::Error>;

    /// Fetch an itinerary by id.
    fn itinerary(&self, id: &ItineraryId) -> Result<Option<Itinerary>, Self::Error>;

    /// Ids of every stored itinerary, in ascending order.
    fn itinerary_ids(&self) -> Result<Vec<ItineraryId>, Self::Error>;

    /// Append an expense to a stored trip.
    fn add_expense(&mut self, id: &ItineraryId, entry: ExpenseEntry) -> Result<(), Self::Error>;

    /// Expenses recorded for a trip; empty for unknown trips.
    fn expenses(&self, id: &ItineraryId) -> Result<Vec<ExpenseEntry>, Self::Error>;

    /// Append a task to a stored trip.
    fn add_task(&mut self, id: &ItineraryId, entry: TaskEntry) -> Result<(), Self::Error>;

    /// Tasks recorded for a trip; empty for unknown trips.
    fn tasks(&self, id: &ItineraryId) -> Result<Vec<TaskEntry>, Self::Error>;
}
