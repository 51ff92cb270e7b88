//! `GreedyPlanner` implementation.
//!
//! Candidates are ranked once per request and consumed from a queue; every
//! day pops a fixed number of them and keeps those that fit.

use std::collections::{HashSet, VecDeque};

use log::{debug, info};
use wanderplan_core::{
    Attraction, AttractionCatalog, DayPlan, Itinerary, ItineraryId, PlanError, PlanRequest,
    Planner, SelectedAttraction,
};

use crate::config::{BudgetPolicy, GreedyPlannerConfig, OverflowPolicy};

/// Rating-first itinerary allocator over an [`AttractionCatalog`].
///
/// Each request takes its own copy of the matching catalog rows, so one
/// planner can serve concurrent requests.
///
/// # Examples
/// ```
/// use wanderplan_core::{Attraction, MemoryCatalog};
/// use wanderplan_planner::GreedyPlanner;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = MemoryCatalog::new(vec![
///     Attraction::new("Goa", "Baga Beach", 4.4, 0.0, 4.0)?,
///     Attraction::new("Goa", "Fort Aguada", 4.3, 150.0, 2.0)?,
/// ]);
/// let planner = GreedyPlanner::new(catalog);
/// let itinerary = planner.allocate("Goa", 1000.0, 2)?;
/// assert_eq!(itinerary.days.len(), 2);
/// assert_eq!(itinerary.attraction_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<C> {
    catalog: C,
    config: GreedyPlannerConfig,
}

impl<C: AttractionCatalog> GreedyPlanner<C> {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, GreedyPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(catalog: C, config: GreedyPlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &GreedyPlannerConfig {
        &self.config
    }

    /// Plan `total_days` days in `location` for `total_budget`.
    ///
    /// A location without matching attractions is not an error: the result
    /// holds `total_days` empty days.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] for zero days or a negative
    /// budget, [`PlanError::InvalidHoursLimit`] for an unusable configured
    /// limit and [`PlanError::Catalog`] when the catalog cannot be read.
    pub fn allocate(
        &self,
        location: &str,
        total_budget: f64,
        total_days: u32,
    ) -> Result<Itinerary, PlanError> {
        self.build(&PlanRequest::new(location, total_budget, total_days))
    }

    fn build(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        request.validate()?;
        self.config.validate()?;

        let mut queue = self.ranked_candidates(&request.location)?;
        let slots = DaySlots::new(queue.len(), request.total_days);
        let daily_budget = request.daily_budget();
        let mut selected = HashSet::new();
        let mut days = Vec::new();

        for (index, number) in (1..=request.total_days).enumerate() {
            let mut day = DayPlan::new(number, daily_budget);
            let mut deferred = Vec::new();
            for _ in 0..slots.for_day(index) {
                let Some(candidate) = queue.pop_front() else {
                    break;
                };
                if selected.contains(&candidate.name) {
                    debug!("skipping {} as it is already scheduled", candidate.name);
                    continue;
                }
                if self.fits(&day, &candidate) {
                    selected.insert(candidate.name.clone());
                    day.push(SelectedAttraction::from(&candidate));
                } else {
                    match self.config.overflow_policy {
                        OverflowPolicy::Discard => {
                            debug!("day {number}: discarding {}", candidate.name);
                        }
                        OverflowPolicy::Defer => deferred.push(candidate),
                    }
                }
            }
            for candidate in deferred.into_iter().rev() {
                queue.push_front(candidate);
            }
            debug!(
                "day {number}: {} attractions, spending {} of {}, {} hours",
                day.attractions.len(),
                day.daily_spending,
                day.daily_budget,
                day.daily_hours_spent
            );
            days.push(day);
        }

        let itinerary = Itinerary::assemble(
            ItineraryId::new(),
            request.location.as_str(),
            request.total_budget,
            days,
        );
        info!(
            "planned {} days in {}: spending {} of {}, {} hours",
            itinerary.total_days,
            itinerary.location,
            itinerary.total_spending,
            itinerary.total_budget,
            itinerary.total_hours_spent
        );
        Ok(itinerary)
    }

    /// Matching attractions, best rating first, ties broken by name and then
    /// catalog order.
    fn ranked_candidates(&self, location: &str) -> Result<VecDeque<Attraction>, PlanError> {
        let mut candidates = self
            .catalog
            .fetch_attractions(location, self.config.location_match)?;
        candidates.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| a.name.cmp(&b.name))
        });
        if candidates.is_empty() {
            debug!("no attractions match {location:?}");
        }
        Ok(candidates.into())
    }

    fn fits(&self, day: &DayPlan, candidate: &Attraction) -> bool {
        let within_hours = day.has_time_for(candidate.time_hours, self.config.daily_hours_limit);
        match self.config.budget_policy {
            BudgetPolicy::Informational => within_hours,
            BudgetPolicy::Enforced => within_hours && day.has_budget_for(candidate.price),
        }
    }
}

impl<C> Planner for GreedyPlanner<C>
where
    C: AttractionCatalog + Send + Sync,
{
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        self.build(request)
    }
}

/// Number of candidates each day may pop.
///
/// Candidates are shared out evenly; the first `remainder` days take one
/// extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DaySlots {
    base: usize,
    remainder: usize,
}

impl DaySlots {
    fn new(candidates: usize, total_days: u32) -> Self {
        let days = usize::try_from(total_days).unwrap_or(usize::MAX).max(1);
        Self {
            base: candidates.div_euclid(days),
            remainder: candidates.rem_euclid(days),
        }
    }

    /// Slots for the day at zero-based `index`.
    fn for_day(self, index: usize) -> usize {
        self.base + usize::from(index < self.remainder)
    }
}
