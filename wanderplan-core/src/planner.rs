//! Planning requests and the planner contract.

use thiserror::Error;

use crate::{CatalogError, Itinerary};

/// Parameters for a planning request.
///
/// # Examples
/// ```rust
/// use wanderplan_core::PlanRequest;
///
/// let request = PlanRequest::new("Jaipur", 6000.0, 3);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.daily_budget(), 2000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Destination to plan for.
    pub location: String,
    /// Overall budget for the trip.
    pub total_budget: f64,
    /// Trip length in days.
    pub total_days: u32,
}

/// Validation failures for a [`PlanRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestError {
    /// A trip must last at least one day.
    #[error("total_days must be at least 1")]
    ZeroDays,
    /// The budget was negative, NaN or infinite.
    #[error("total_budget {budget} must be a finite, non-negative number")]
    InvalidBudget {
        /// Rejected budget.
        budget: f64,
    },
}

impl PlanRequest {
    /// Construct a request without validating it.
    #[must_use]
    pub fn new(location: impl Into<String>, total_budget: f64, total_days: u32) -> Self {
        Self {
            location: location.into(),
            total_budget,
            total_days,
        }
    }

    /// Check the request before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`PlanRequestError::ZeroDays`] when no days were requested and
    /// [`PlanRequestError::InvalidBudget`] for a negative or non-finite budget.
    pub const fn validate(&self) -> Result<(), PlanRequestError> {
        if self.total_days == 0 {
            return Err(PlanRequestError::ZeroDays);
        }
        if !self.total_budget.is_finite() || self.total_budget < 0.0 {
            return Err(PlanRequestError::InvalidBudget {
                budget: self.total_budget,
            });
        }
        Ok(())
    }

    /// Budget share for each day, or zero for a zero-day request.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "splits the budget evenly")]
    pub fn daily_budget(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        self.total_budget / f64::from(self.total_days)
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Error)]
pub enum PlanError {
    /// Request parameters were invalid, e.g. zero days.
    #[error("invalid plan request: {0}")]
    InvalidRequest(#[from] PlanRequestError),
    /// The planner was configured with an unusable daily hour limit.
    #[error("daily hour limit {limit} must be a positive, finite number")]
    InvalidHoursLimit {
        /// Rejected limit.
        limit: f64,
    },
    /// Reading the attraction catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Turn a destination, budget and trip length into an itinerary.
///
/// Implementations either return a complete [`Itinerary`] or an error; they
/// never return partial results. A location without attractions is not an
/// error and yields one empty day per requested day.
/// Planners must be `Send + Sync` so one instance can serve concurrent
/// requests.
pub trait Planner: Send + Sync {
    /// Plan a trip, producing an itinerary or an error.
    fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError>;
}
