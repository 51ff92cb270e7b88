//! Day-by-day itineraries produced by a planner.
//!
//! An [`Itinerary`] is created once per planning request and never mutated
//! afterwards; re-planning produces a new itinerary with a fresh
//! [`ItineraryId`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

use crate::SelectedAttraction;

/// Tolerance used when checking that totals match the per-day sums.
const TOTALS_TOLERANCE: f64 = 1e-9;

/// Opaque identifier of an itinerary and of the trip ledgers keyed by it.
///
/// # Examples
/// ```
/// use wanderplan_core::ItineraryId;
///
/// let id = ItineraryId::new();
/// let parsed: ItineraryId = id.to_string().parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItineraryId(Uuid);

/// Error returned when parsing an [`ItineraryId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid itinerary id {input:?}")]
pub struct ItineraryIdError {
    /// Rejected input.
    pub input: String,
}

impl ItineraryId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItineraryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for ItineraryId {
    type Err = ItineraryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ItineraryIdError {
                input: s.to_owned(),
            })
    }
}

/// The attractions and running aggregates for a single day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// One-based day number.
    pub day: u32,
    /// Attractions in visiting order.
    pub attractions: Vec<SelectedAttraction>,
    /// Share of the total budget allotted to this day.
    pub daily_budget: f64,
    /// Sum of the prices of the scheduled attractions.
    pub daily_spending: f64,
    /// Sum of the visit durations of the scheduled attractions.
    pub daily_hours_spent: f64,
}

impl DayPlan {
    /// Create an empty day.
    ///
    /// # Examples
    /// ```
    /// use wanderplan_core::DayPlan;
    ///
    /// let day = DayPlan::new(1, 150.0);
    /// assert!(day.attractions.is_empty());
    /// assert_eq!(day.daily_spending, 0.0);
    /// ```
    #[must_use]
    pub const fn new(day: u32, daily_budget: f64) -> Self {
        Self {
            day,
            attractions: Vec::new(),
            daily_budget,
            daily_spending: 0.0,
            daily_hours_spent: 0.0,
        }
    }

    /// Append an attraction and update the day's aggregates.
    #[expect(
        clippy::float_arithmetic,
        reason = "day aggregates are running sums of prices and hours"
    )]
    pub fn push(&mut self, attraction: SelectedAttraction) {
        self.daily_spending += attraction.price;
        self.daily_hours_spent += attraction.time_hours;
        self.attractions.push(attraction);
    }

    /// Whether adding `time_hours` keeps the day within `hours_limit`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "compares a projected hour sum")]
    pub const fn has_time_for(&self, time_hours: f64, hours_limit: f64) -> bool {
        self.daily_hours_spent + time_hours <= hours_limit
    }

    /// Whether adding `price` keeps the day within its budget share.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "compares a projected spend")]
    pub const fn has_budget_for(&self, price: f64) -> bool {
        self.daily_spending + price <= self.daily_budget
    }
}

/// A complete multi-day plan for one location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Identifier used to store and retrieve the itinerary.
    pub id: ItineraryId,
    /// Requested location.
    pub location: String,
    /// Requested overall budget.
    pub total_budget: f64,
    /// Number of days; always equals `days.len()`.
    pub total_days: u32,
    /// Day plans in order, day 1 first.
    pub days: Vec<DayPlan>,
    /// Sum of `daily_spending` across all days.
    pub total_spending: f64,
    /// Sum of `daily_hours_spent` across all days.
    pub total_hours_spent: f64,
}

impl Itinerary {
    /// Build an itinerary from finished day plans.
    ///
    /// Totals are derived by summing the days in order, so the totals
    /// invariant holds by construction.
    ///
    /// # Examples
    /// ```
    /// use wanderplan_core::{DayPlan, Itinerary, ItineraryId, SelectedAttraction};
    ///
    /// let mut day = DayPlan::new(1, 100.0);
    /// day.push(SelectedAttraction {
    ///     name: "Museum".into(),
    ///     rating: 4.0,
    ///     price: 20.0,
    ///     time_hours: 2.0,
    /// });
    /// let itinerary = Itinerary::assemble(ItineraryId::new(), "Goa", 100.0, vec![day]);
    /// assert_eq!(itinerary.total_days, 1);
    /// assert_eq!(itinerary.total_spending, 20.0);
    /// ```
    #[must_use]
    pub fn assemble(
        id: ItineraryId,
        location: impl Into<String>,
        total_budget: f64,
        days: Vec<DayPlan>,
    ) -> Self {
        let total_spending = days.iter().map(|day| day.daily_spending).sum();
        let total_hours_spent = days.iter().map(|day| day.daily_hours_spent).sum();
        let total_days = u32::try_from(days.len()).unwrap_or(u32::MAX);
        Self {
            id,
            location: location.into(),
            total_budget,
            total_days,
            days,
            total_spending,
            total_hours_spent,
        }
    }

    /// Budget share allotted to each day.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "splits the budget evenly")]
    pub fn daily_budget(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        self.total_budget / f64::from(self.total_days)
    }

    /// Budget left after all scheduled spending; negative when overspent.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "difference of two money values")]
    pub const fn remaining_budget(&self) -> f64 {
        self.total_budget - self.total_spending
    }

    /// Number of attractions scheduled across all days.
    #[must_use]
    pub fn attraction_count(&self) -> usize {
        self.days.iter().map(|day| day.attractions.len()).sum()
    }

    /// Check the structural invariants of the itinerary.
    ///
    /// The day count must match `total_days`, totals must match the per-day
    /// sums within floating-point tolerance and no attraction name may be
    /// scheduled twice.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "tolerance-based comparison")]
    pub fn is_consistent(&self) -> bool {
        let spending: f64 = self.days.iter().map(|day| day.daily_spending).sum();
        let hours: f64 = self.days.iter().map(|day| day.daily_hours_spent).sum();
        let mut names = std::collections::HashSet::new();
        let unique = self
            .days
            .iter()
            .flat_map(|day| &day.attractions)
            .all(|attraction| names.insert(attraction.name.as_str()));
        usize::try_from(self.total_days).is_ok_and(|days| days == self.days.len())
            && (spending - self.total_spending).abs() <= TOTALS_TOLERANCE
            && (hours - self.total_hours_spent).abs() <= TOTALS_TOLERANCE
            && unique
    }
}
