//! SQLite-backed trip store.
//!
//! Itineraries are persisted as JSON documents next to relational ledger
//! tables so a reader can inspect expenses and tasks with plain SQL.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::{ExpenseEntry, Itinerary, ItineraryId, ItineraryIdError, TaskEntry};

use super::TripStore;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS itineraries (
    id TEXT PRIMARY KEY,
    location TEXT NOT NULL,
    payload TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS expenses (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    trip_id TEXT NOT NULL REFERENCES itineraries(id),
    member TEXT NOT NULL,
    amount REAL NOT NULL,
    recorded_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS tasks (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    trip_id TEXT NOT NULL REFERENCES itineraries(id),
    task TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS expenses_by_trip ON expenses (trip_id, seq);
CREATE INDEX IF NOT EXISTS tasks_by_trip ON tasks (trip_id, seq);
";

/// Errors raised by [`SqliteTripStore`].
#[derive(Debug, Error)]
pub enum SqliteTripStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A ledger write referenced a trip that has not been saved.
    #[error("no itinerary is stored under id {id}")]
    UnknownTrip {
        /// Identifier that was looked up.
        id: ItineraryId,
    },
    /// Encoding an itinerary as JSON failed.
    #[error("failed to encode itinerary {id}: {source}")]
    EncodeItinerary {
        /// Identifier of the itinerary being saved.
        id: ItineraryId,
        /// JSON encoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored itinerary payload was not valid JSON.
    #[error("failed to decode stored itinerary {id}: {source}")]
    DecodeItinerary {
        /// Identifier of the stored row.
        id: String,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored itinerary id could not be parsed.
    #[error(transparent)]
    InvalidId(#[from] ItineraryIdError),
    /// A stored expense timestamp could not be parsed.
    #[error("stored expense timestamp {value:?} is not RFC 3339: {source}")]
    InvalidTimestamp {
        /// Raw column value.
        value: String,
        /// Parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Generic SQLite error when reading or writing rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// [`TripStore`] persisted in a SQLite database.
#[derive(Debug)]
pub struct SqliteTripStore {
    connection: Connection,
}

impl SqliteTripStore {
    /// Open (creating if needed) a store at `path` and ensure its schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SqliteTripStoreError> {
        let location = path.as_ref();
        let connection =
            Connection::open(location).map_err(|source| SqliteTripStoreError::OpenDatabase {
                path: location.to_path_buf(),
                source,
            })?;
        Self::with_connection(connection)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self, SqliteTripStoreError> {
        let connection =
            Connection::open_in_memory().map_err(|source| SqliteTripStoreError::OpenDatabase {
                path: PathBuf::from(":memory:"),
                source,
            })?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, SqliteTripStoreError> {
        connection.execute_batch(SCHEMA)?;
        Ok(Self { connection })
    }

    fn ensure_trip(&self, id: &ItineraryId) -> Result<(), SqliteTripStoreError> {
        let found: Option<i64> = self
            .connection
            .query_row(
                "SELECT 1 FROM itineraries WHERE id = ?1",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        found
            .map(|_| ())
            .ok_or(SqliteTripStoreError::UnknownTrip { id: *id })
    }
}

impl TripStore for SqliteTripStore {
    type Error = SqliteTripStoreError;

    fn save_itinerary(&mut self, itinerary: &Itinerary) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(itinerary).map_err(|source| {
            SqliteTripStoreError::EncodeItinerary {
                id: itinerary.id,
                source,
            }
        })?;
        let id = itinerary.id.to_string();
        let transaction = self.connection.transaction()?;
        transaction.execute("DELETE FROM expenses WHERE trip_id = ?1", [&id])?;
        transaction.execute("DELETE FROM tasks WHERE trip_id = ?1", [&id])?;
        transaction.execute(
            "INSERT OR REPLACE INTO itineraries (id, location, payload) VALUES (?1, ?2, ?3)",
            params![id, itinerary.location, payload],
        )?;
        transaction.commit()?;
        Ok(())
    }

    fn itinerary(&self, id: &ItineraryId) -> Result<Option<Itinerary>, Self::Error> {
        let key = id.to_string();
        let payload: Option<String> = self
            .connection
            .query_row(
                "SELECT payload FROM itineraries WHERE id = ?1",
                [&key],
                |row| row.get(0),
            )
            .optional()?;
        payload
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|source| SqliteTripStoreError::DecodeItinerary { id: key, source })
            })
            .transpose()
    }

    fn itinerary_ids(&self) -> Result<Vec<ItineraryId>, Self::Error> {
        let mut statement = self.connection.prepare("SELECT id FROM itineraries")?;
        let rows = statement.query_map([], |row| row.get::<_, String>(0))?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?.parse::<ItineraryId>()?);
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn add_expense(&mut self, id: &ItineraryId, entry: ExpenseEntry) -> Result<(), Self::Error> {
        self.ensure_trip(id)?;
        self.connection.execute(
            "INSERT INTO expenses (trip_id, member, amount, recorded_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                id.to_string(),
                entry.member,
                entry.amount,
                entry.timestamp.to_rfc3339()
            ],
        )?;
        Ok(())
    }

    fn expenses(&self, id: &ItineraryId) -> Result<Vec<ExpenseEntry>, Self::Error> {
        let mut statement = self.connection.prepare(
            "SELECT member, amount, recorded_at FROM expenses WHERE trip_id = ?1 ORDER BY seq",
        )?;
        let rows = statement.query_map([id.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        let mut entries = Vec::new();
        for row in rows {
            let (member, amount, recorded_at) = row?;
            let timestamp = parse_timestamp(recorded_at)?;
            entries.push(ExpenseEntry {
                member,
                amount,
                timestamp,
            });
        }
        Ok(entries)
    }

    fn add_task(&mut self, id: &ItineraryId, entry: TaskEntry) -> Result<(), Self::Error> {
        self.ensure_trip(id)?;
        self.connection.execute(
            "INSERT INTO tasks (trip_id, task) VALUES (?1, ?2)",
            params![id.to_string(), entry.task],
        )?;
        Ok(())
    }

    fn tasks(&self, id: &ItineraryId) -> Result<Vec<TaskEntry>, Self::Error> {
        let mut statement = self
            .connection
            .prepare("SELECT task FROM tasks WHERE trip_id = ?1 ORDER BY seq")?;
        let rows = statement.query_map([id.to_string()], |row| row.get::<_, String>(0))?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(TaskEntry { task: row? });
        }
        Ok(entries)
    }
}

fn parse_timestamp(value: String) -> Result<DateTime<Utc>, SqliteTripStoreError> {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(timestamp) => Ok(timestamp.with_timezone(&Utc)),
        Err(source) => Err(SqliteTripStoreError::InvalidTimestamp { value, source }),
    }
}
