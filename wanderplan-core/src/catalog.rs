//! Read access to the attraction catalog.
//!
//! The [`AttractionCatalog`] trait is the planner's only view of reference
//! data. Each call returns an owned copy of the matching rows so concurrent
//! plans never share candidate state.

use thiserror::Error;

use crate::{Attraction, AttractionError};

/// How a requested location is compared against catalog rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LocationMatch {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after trimming surrounding whitespace and lowercasing.
    #[default]
    CaseInsensitive,
}

impl LocationMatch {
    /// Return whether `candidate` names the `requested` location.
    ///
    /// # Examples
    /// ```
    /// use wanderplan_core::LocationMatch;
    ///
    /// assert!(LocationMatch::CaseInsensitive.matches("goa", " Goa "));
    /// assert!(!LocationMatch::Exact.matches("goa", "Goa"));
    /// ```
    #[must_use]
    pub fn matches(self, requested: &str, candidate: &str) -> bool {
        match self {
            Self::Exact => requested == candidate,
            Self::CaseInsensitive => {
                requested.trim().to_lowercase() == candidate.trim().to_lowercase()
            }
        }
    }
}

/// A catalog row that could not be turned into an [`Attraction`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogRowError {
    /// A required field was empty or absent.
    #[error("missing value for `{field}`")]
    MissingField {
        /// Column name.
        field: &'static str,
    },
    /// A numeric field could not be parsed.
    #[error("`{field}` value {value:?} is not a number")]
    InvalidNumber {
        /// Column name.
        field: &'static str,
        /// Raw text found in the row.
        value: String,
    },
    /// A field held bytes that are not valid UTF-8.
    #[error("field {field} is not valid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding {
        /// Zero-based index of the offending field.
        field: usize,
        /// Length of the valid UTF-8 prefix of that field.
        valid_up_to: usize,
    },
    /// The parsed values failed attraction validation.
    #[error(transparent)]
    InvalidAttraction(#[from] AttractionError),
}

/// Errors raised while reading attractions from a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog header lacks a required column.
    #[error("catalog is missing the `{column}` column")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
    },
    /// A data row was malformed and the catalog is configured to fail on it.
    #[error("catalog row at line {line} is malformed: {source}")]
    MalformedRow {
        /// One-based line number of the row in the source.
        line: u64,
        /// Reason the row was rejected.
        #[source]
        source: CatalogRowError,
    },
    /// The backing source could not be read.
    #[error("failed to read attraction catalog from {origin}: {source}")]
    Read {
        /// Human-readable description of the source, usually a path.
        origin: String,
        /// Underlying I/O or decoding failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Read-only access to attractions grouped by location.
///
/// # Examples
/// ```
/// use wanderplan_core::{Attraction, AttractionCatalog, LocationMatch, MemoryCatalog};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = MemoryCatalog::new(vec![
///     Attraction::new("Goa", "Fort Aguada", 4.4, 50.0, 2.0)?,
///     Attraction::new("Pune", "Shaniwar Wada", 4.2, 25.0, 1.5)?,
/// ]);
/// let found = catalog.fetch_attractions("goa", LocationMatch::CaseInsensitive)?;
/// assert_eq!(found.len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait AttractionCatalog {
    /// Return every attraction whose location matches `location`.
    ///
    /// Rows are returned in catalog order. An unknown location yields an
    /// empty vector rather than an error.
    fn fetch_attractions(
        &self,
        location: &str,
        matching: LocationMatch,
    ) -> Result<Vec<Attraction>, CatalogError>;
}

impl<C: AttractionCatalog + ?Sized> AttractionCatalog for &C {
    fn fetch_attractions(
        &self,
        location: &str,
        matching: LocationMatch,
    ) -> Result<Vec<Attraction>, CatalogError> {
        (**self).fetch_attractions(location, matching)
    }
}

/// Catalog held entirely in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryCatalog {
    attractions: Vec<Attraction>,
}

impl MemoryCatalog {
    /// Create a catalog from already validated attractions.
    #[must_use]
    pub const fn new(attractions: Vec<Attraction>) -> Self {
        Self { attractions }
    }

    /// Number of rows across all locations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.attractions.len()
    }

    /// Whether the catalog has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    /// All rows in catalog order.
    #[must_use]
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }
}

impl FromIterator<Attraction> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Attraction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AttractionCatalog for MemoryCatalog {
    fn fetch_attractions(
        &self,
        location: &str,
        matching: LocationMatch,
    ) -> Result<Vec<Attraction>, CatalogError> {
        Ok(self
            .attractions
            .iter()
            .filter(|attraction| matching.matches(location, &attraction.location))
            .cloned()
            .collect())
    }
}
