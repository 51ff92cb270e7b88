use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use wanderplan_core::{
    Attraction, AttractionCatalog, CatalogError, CatalogRowError, LocationMatch, MemoryCatalog,
};
use wanderplan_fs::open_utf8_file;

mod row;

use row::Columns;

/// What to do with a catalog row that cannot be parsed or validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum RowPolicy {
    /// Log a warning and continue with the next row.
    #[default]
    Skip,
    /// Fail the whole load with [`CatalogError::MalformedRow`].
    Strict,
}

/// Options controlling how a catalog is read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogOptions {
    /// Handling of malformed rows.
    pub row_policy: RowPolicy,
}

/// Attraction catalog backed by a comma-separated file.
///
/// The file is read on every [`fetch_attractions`] call, so each plan sees a
/// consistent snapshot of whatever the file holds at that moment. Use
/// [`CsvAttractionCatalog::snapshot`] to read it once and plan many times.
///
/// [`fetch_attractions`]: AttractionCatalog::fetch_attractions
///
/// # Examples
/// ```no_run
/// use wanderplan_core::{AttractionCatalog, LocationMatch};
/// use wanderplan_data::CsvAttractionCatalog;
///
/// # fn main() -> Result<(), wanderplan_core::CatalogError> {
/// let catalog = CsvAttractionCatalog::new("attractions.csv");
/// let jaipur = catalog.fetch_attractions("Jaipur", LocationMatch::CaseInsensitive)?;
/// println!("{} attractions", jaipur.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvAttractionCatalog {
    path: Utf8PathBuf,
    options: CatalogOptions,
}

impl CsvAttractionCatalog {
    /// Catalog reading `path` with default options.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self::with_options(path, CatalogOptions::default())
    }

    /// Catalog reading `path` with explicit options.
    #[must_use]
    pub fn with_options(path: impl Into<Utf8PathBuf>, options: CatalogOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Options applied while reading.
    #[must_use]
    pub const fn options(&self) -> CatalogOptions {
        self.options
    }

    /// Read every valid row of the file, across all locations.
    pub fn read_all(&self) -> Result<Vec<Attraction>, CatalogError> {
        let file = open_utf8_file(&self.path).map_err(|source| CatalogError::Read {
            origin: self.path.to_string(),
            source: Box::new(source),
        })?;
        read_catalog(file, self.path.as_str(), self.options)
    }

    /// Read the file once into an in-memory catalog.
    pub fn snapshot(&self) -> Result<MemoryCatalog, CatalogError> {
        self.read_all().map(MemoryCatalog::new)
    }
}

impl AttractionCatalog for CsvAttractionCatalog {
    fn fetch_attractions(
        &self,
        location: &str,
        matching: LocationMatch,
    ) -> Result<Vec<Attraction>, CatalogError> {
        let mut attractions = self.read_all()?;
        attractions.retain(|attraction| matching.matches(location, &attraction.location));
        Ok(attractions)
    }
}

/// Parse a catalog from any reader.
///
/// The first record must be a header naming the `location`, `attraction`
/// (or `name`), `rating`, `price` and `time` (or `time_hours`) columns in any
/// order; extra columns are ignored. `origin` labels log lines and errors.
///
/// # Examples
/// ```
/// use wanderplan_data::{CatalogOptions, read_catalog};
///
/// let csv = "location,attraction,rating,price,time\nGoa,Fort Aguada,4.3,0,2\n";
/// let rows = read_catalog(csv.as_bytes(), "inline", CatalogOptions::default()).unwrap();
/// assert_eq!(rows[0].name, "Fort Aguada");
/// ```
pub fn read_catalog<R: Read>(
    reader: R,
    origin: &str,
    options: CatalogOptions,
) -> Result<Vec<Attraction>, CatalogError> {
    let read_error = |source: csv::Error| CatalogError::Read {
        origin: origin.to_owned(),
        source: Box::new(source),
    };
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::locate(csv_reader.headers().map_err(read_error)?)?;

    let mut attractions = Vec::new();
    let mut skipped = 0_usize;
    let mut raw = csv::ByteRecord::new();
    while csv_reader.read_byte_record(&mut raw).map_err(read_error)? {
        let line = raw.position().map_or(0, csv::Position::line);
        let parsed = csv::StringRecord::from_byte_record(std::mem::take(&mut raw))
            .map_err(|err| CatalogRowError::InvalidEncoding {
                field: err.utf8_error().field(),
                valid_up_to: err.utf8_error().valid_up_to(),
            })
            .and_then(|record| columns.parse(&record));
        match parsed {
            Ok(attraction) => attractions.push(attraction),
            Err(source) => match options.row_policy {
                RowPolicy::Skip => {
                    warn!("skipping catalog row at line {line} of {origin}: {source}");
                    skipped += 1;
                }
                RowPolicy::Strict => return Err(CatalogError::MalformedRow { line, source }),
            },
        }
    }

    debug!(
        "loaded {} attractions from {origin} ({skipped} rows skipped)",
        attractions.len()
    );
    Ok(attractions)
}
