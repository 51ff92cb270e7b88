//! In-memory trip store.

use std::collections::HashMap;

use crate::{ExpenseEntry, Itinerary, ItineraryId, TaskEntry};

use super::{TripStore, TripStoreError};

#[derive(Debug, Clone)]
struct TripRecord {
    itinerary: Itinerary,
    expenses: Vec<ExpenseEntry>,
    tasks: Vec<TaskEntry>,
}

/// [`TripStore`] keeping every trip in a hash map.
///
/// Wrap the store in a `Mutex` to share it between threads; writes take
/// `&mut self` so the borrow checker serialises them.
#[derive(Debug, Default, Clone)]
pub struct MemoryTripStore {
    trips: HashMap<ItineraryId, TripRecord>,
}

impl MemoryTripStore {
    /// Number of stored trips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether no trip has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    fn record_mut(&mut self, id: &ItineraryId) -> Result<&mut TripRecord, TripStoreError> {
        self.trips
            .get_mut(id)
            .ok_or(TripStoreError::UnknownTrip { id: *id })
    }
}

impl TripStore for MemoryTripStore {
    type Error = TripStoreError;

    fn save_itinerary(&mut self, itinerary: &Itinerary) -> Result<(), Self::Error> {
        self.trips.insert(
            itinerary.id,
            TripRecord {
                itinerary: itinerary.clone(),
                expenses: Vec::new(),
                tasks: Vec::new(),
            },
        );
        Ok(())
    }

    fn itinerary(&self, id: &ItineraryId) -> Result<Option<Itinerary>, Self::Error> {
        Ok(self.trips.get(id).map(|record| record.itinerary.clone()))
    }

    fn itinerary_ids(&self) -> Result<Vec<ItineraryId>, Self::Error> {
        let mut ids: Vec<_> = self.trips.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn add_expense(&mut self, id: &ItineraryId, entry: ExpenseEntry) -> Result<(), Self::Error> {
        self.record_mut(id)?.expenses.push(entry);
        Ok(())
    }

    fn expenses(&self, id: &ItineraryId) -> Result<Vec<ExpenseEntry>, Self::Error> {
        Ok(self
            .trips
            .get(id)
            .map(|record| record.expenses.clone())
            .unwrap_or_default())
    }

    fn add_task(&mut self, id: &ItineraryId, entry: TaskEntry) -> Result<(), Self::Error> {
        self.record_mut(id)?.tasks.push(entry);
        Ok(())
    }

    fn tasks(&self, id: &ItineraryId) -> Result<Vec<TaskEntry>, Self::Error> {
        Ok(self
            .trips
            .get(id)
            .map(|record| record.tasks.clone())
            .unwrap_or_default())
    }
}
