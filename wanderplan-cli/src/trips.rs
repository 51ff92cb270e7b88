//! Trip store commands: inspecting saved itineraries and their ledgers.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use log::debug;
use serde::Serialize;
use wanderplan_core::{
    ExpenseEntry, Itinerary, ItineraryId, MemberTotal, SqliteTripStore, TaskEntry, TripStore,
    expense_totals, total_expenses,
};
use wanderplan_fs::ensure_parent_dir;

use crate::plan::require_file;
use crate::{ARG_STORE, CliError, DEFAULT_STORE, ENV_STORE, write_json};

/// Location of the SQLite trip store.
#[derive(Debug, Clone, Args)]
pub(crate) struct StoreArg {
    /// SQLite trip store holding planned trips.
    #[arg(long = ARG_STORE, env = ENV_STORE, default_value = DEFAULT_STORE, value_name = "path")]
    pub(crate) store: Utf8PathBuf,
}

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct ShowArgs {
    /// Trip id printed by `plan`.
    pub(crate) trip: ItineraryId,
    #[command(flatten)]
    pub(crate) store: StoreArg,
}

/// CLI arguments for the `add-expense` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct AddExpenseArgs {
    /// Trip id printed by `plan`.
    pub(crate) trip: ItineraryId,
    /// Group member who paid.
    #[arg(long, value_name = "name")]
    pub(crate) member: String,
    /// Amount paid; negative amounts record refunds.
    #[arg(long, value_name = "amount", allow_negative_numbers = true)]
    pub(crate) amount: f64,
    #[command(flatten)]
    pub(crate) store: StoreArg,
}

/// CLI arguments for the `add-task` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct AddTaskArgs {
    /// Trip id printed by `plan`.
    pub(crate) trip: ItineraryId,
    /// Task description.
    pub(crate) task: String,
    #[command(flatten)]
    pub(crate) store: StoreArg,
}

/// CLI arguments for the `expenses` and `tasks` subcommands.
#[derive(Debug, Clone, Args)]
pub(crate) struct LedgerArgs {
    /// Trip id printed by `plan`.
    pub(crate) trip: ItineraryId,
    #[command(flatten)]
    pub(crate) store: StoreArg,
}

/// Expense ledger of one trip with per-member totals.
#[derive(Debug, Serialize)]
struct ExpenseReport {
    trip: ItineraryId,
    entries: Vec<ExpenseEntry>,
    totals: Vec<MemberTotal>,
    total: f64,
}

/// Open the store at `path`, creating it and its parent directories.
pub(crate) fn open_store(path: &Utf8Path) -> Result<SqliteTripStore, CliError> {
    ensure_parent_dir(path).map_err(|source| CliError::CreateStoreDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SqliteTripStore::open(path.as_std_path())?)
}

fn open_existing_store(path: &Utf8Path) -> Result<SqliteTripStore, CliError> {
    require_file(path, ARG_STORE)?;
    debug!("opening trip store {path}");
    Ok(SqliteTripStore::open(path.as_std_path())?)
}

fn require_trip(store: &SqliteTripStore, id: ItineraryId) -> Result<Itinerary, CliError> {
    store.itinerary(&id)?.ok_or(CliError::UnknownTrip { id })
}

pub(crate) fn show(args: &ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let store = open_existing_store(&args.store.store)?;
    let itinerary = require_trip(&store, args.trip)?;
    write_json(writer, &itinerary)
}

pub(crate) fn add_expense(args: AddExpenseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let mut store = open_existing_store(&args.store.store)?;
    require_trip(&store, args.trip)?;
    let entry = ExpenseEntry::now(args.member, args.amount)?;
    store.add_expense(&args.trip, entry.clone())?;
    write_json(writer, &entry)
}

pub(crate) fn expenses(args: &LedgerArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let store = open_existing_store(&args.store.store)?;
    require_trip(&store, args.trip)?;
    let entries = store.expenses(&args.trip)?;
    let report = ExpenseReport {
        trip: args.trip,
        totals: expense_totals(&entries),
        total: total_expenses(&entries),
        entries,
    };
    write_json(writer, &report)
}

pub(crate) fn add_task(args: AddTaskArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let mut store = open_existing_store(&args.store.store)?;
    require_trip(&store, args.trip)?;
    let entry = TaskEntry::new(args.task)?;
    store.add_task(&args.trip, entry.clone())?;
    write_json(writer, &entry)
}

pub(crate) fn tasks(args: &LedgerArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let store = open_existing_store(&args.store.store)?;
    require_trip(&store, args.trip)?;
    let entries = store.tasks(&args.trip)?;
    write_json(writer, &entries)
}
