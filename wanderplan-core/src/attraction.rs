//! Catalog attractions and the snapshots taken when one is scheduled.

use thiserror::Error;

/// A point of interest listed in the attraction catalog.
///
/// Attractions are read-only reference data. The planner never mutates them;
/// it copies the fields it needs into a [`SelectedAttraction`] when an
/// attraction is scheduled.
///
/// # Examples
/// ```
/// use wanderplan_core::Attraction;
///
/// # fn main() -> Result<(), wanderplan_core::AttractionError> {
/// let fort = Attraction::new("Jaipur", "Amber Fort", 4.7, 200.0, 3.0)?;
/// assert_eq!(fort.name, "Amber Fort");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attraction {
    /// Location the attraction belongs to, e.g. a city name.
    pub location: String,
    /// Display name. Names identify attractions within one itinerary.
    pub name: String,
    /// Visitor rating; higher is better.
    pub rating: f64,
    /// Entry price in the catalog's currency.
    pub price: f64,
    /// Expected visit duration in hours.
    pub time_hours: f64,
}

/// Errors returned by [`Attraction::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttractionError {
    /// The attraction name was blank.
    #[error("attraction name must not be empty")]
    EmptyName,
    /// The rating was NaN or infinite.
    #[error("rating {rating} is not a finite number")]
    InvalidRating {
        /// Rejected rating.
        rating: f64,
    },
    /// The price was negative, NaN or infinite.
    #[error("price {price} must be a finite, non-negative number")]
    InvalidPrice {
        /// Rejected price.
        price: f64,
    },
    /// The visit time was negative, NaN or infinite.
    #[error("visit time {time_hours} must be a finite, non-negative number of hours")]
    InvalidTime {
        /// Rejected visit duration.
        time_hours: f64,
    },
}

impl Attraction {
    /// Validates and constructs an [`Attraction`].
    pub fn new(
        location: impl Into<String>,
        name: impl Into<String>,
        rating: f64,
        price: f64,
        time_hours: f64,
    ) -> Result<Self, AttractionError> {
        let label: String = name.into();
        if label.trim().is_empty() {
            return Err(AttractionError::EmptyName);
        }
        if !rating.is_finite() {
            return Err(AttractionError::InvalidRating { rating });
        }
        if !price.is_finite() || price < 0.0 {
            return Err(AttractionError::InvalidPrice { price });
        }
        if !time_hours.is_finite() || time_hours < 0.0 {
            return Err(AttractionError::InvalidTime { time_hours });
        }
        Ok(Self {
            location: location.into(),
            name: label,
            rating,
            price,
            time_hours,
        })
    }
}

/// Snapshot of an [`Attraction`] taken when it is scheduled on a day.
///
/// The snapshot holds no reference back to the catalog, so an itinerary stays
/// valid after the catalog it was planned from is dropped or reloaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedAttraction {
    /// Attraction name.
    pub name: String,
    /// Rating at selection time.
    pub rating: f64,
    /// Price at selection time.
    pub price: f64,
    /// Visit duration in hours.
    pub time_hours: f64,
}

impl From<&Attraction> for SelectedAttraction {
    fn from(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name.clone(),
            rating: attraction.rating,
            price: attraction.price,
            time_hours: attraction.time_hours,
        }
    }
}
