//! Column lookup and per-row parsing for catalog files.

use csv::StringRecord;
use wanderplan_core::{Attraction, CatalogError, CatalogRowError};

const LOCATION: &[&str] = &["location"];
const NAME: &[&str] = &["attraction", "name"];
const RATING: &[&str] = &["rating"];
const PRICE: &[&str] = &["price"];
const TIME: &[&str] = &["time", "time_hours"];

/// Positions of the required columns within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Columns {
    location: usize,
    name: usize,
    rating: usize,
    price: usize,
    time: usize,
}

impl Columns {
    pub(super) fn locate(headers: &StringRecord) -> Result<Self, CatalogError> {
        Ok(Self {
            location: find(headers, LOCATION)?,
            name: find(headers, NAME)?,
            rating: find(headers, RATING)?,
            price: find(headers, PRICE)?,
            time: find(headers, TIME)?,
        })
    }

    pub(super) fn parse(&self, record: &StringRecord) -> Result<Attraction, CatalogRowError> {
        let location = text(record, self.location, canonical(LOCATION))?;
        let name = text(record, self.name, canonical(NAME))?;
        let rating = number(record, self.rating, canonical(RATING))?;
        let price = number(record, self.price, canonical(PRICE))?;
        let time_hours = number(record, self.time, canonical(TIME))?;
        Ok(Attraction::new(location, name, rating, price, time_hours)?)
    }
}

fn canonical(aliases: &'static [&'static str]) -> &'static str {
    aliases.first().copied().unwrap_or_default()
}

fn find(headers: &StringRecord, aliases: &'static [&'static str]) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|header| {
            aliases
                .iter()
                .any(|alias| header.trim().eq_ignore_ascii_case(alias))
        })
        .ok_or(CatalogError::MissingColumn {
            column: canonical(aliases),
        })
}

fn text<'r>(
    record: &'r StringRecord,
    index: usize,
    field: &'static str,
) -> Result<&'r str, CatalogRowError> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or(CatalogRowError::MissingField { field })
}

fn number(record: &StringRecord, index: usize, field: &'static str) -> Result<f64, CatalogRowError> {
    let raw = text(record, index, field)?;
    raw.parse::<f64>()
        .map_err(|_| CatalogRowError::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
}
