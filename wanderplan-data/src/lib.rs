//! Attraction catalog sources for the Wanderplan engine.
//!
//! Responsibilities:
//! - Read the tabular attraction catalog (`location, attraction, rating,
//!   price, time`) into validated [`Attraction`](wanderplan_core::Attraction)
//!   values.
//! - Decide, per [`RowPolicy`], whether malformed rows are skipped with a
//!   warning or abort the load.
//!
//! Boundaries:
//! - Planning rules live in `wanderplan-planner`; this crate only loads data.
//! - No global mutable state; each read produces an owned snapshot.
#![forbid(unsafe_code)]

mod catalog;

pub use catalog::{CatalogOptions, CsvAttractionCatalog, RowPolicy, read_catalog};
