//! Error types emitted by the Wanderplan CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wanderplan_core::{ItineraryId, LedgerError, PlanError, SqliteTripStoreError};

/// Errors emitted by the Wanderplan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Planning the itinerary failed.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
    /// The directory holding the trip store could not be created.
    #[error("failed to create directory for trip store {path:?}: {source}")]
    CreateStoreDirectory {
        /// Store path whose parent could not be created.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading from or writing to the trip store failed.
    #[error(transparent)]
    Store(#[from] SqliteTripStoreError),
    /// No itinerary is stored under the requested id.
    #[error("no trip with id {id} in the store")]
    UnknownTrip {
        /// Requested id.
        id: ItineraryId,
    },
    /// An expense or task entry was rejected.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// Installing the process logger failed.
    #[error("failed to install logger: {0}")]
    InstallLogger(#[source] log::SetLoggerError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
