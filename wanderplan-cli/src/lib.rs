//! Command-line interface for planning trips with Wanderplan.
//!
//! `plan` turns a CSV attraction catalog into a day-by-day itinerary and can
//! save it to a SQLite trip store; the remaining subcommands read saved trips
//! and keep per-trip expense and task ledgers. Every command prints JSON on
//! stdout; logs go to stderr.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod logging;
mod plan;
mod trips;

pub use error::CliError;

use plan::PlanArgs;
use trips::{AddExpenseArgs, AddTaskArgs, LedgerArgs, ShowArgs};

const ARG_PLAN_CATALOG: &str = "catalog";
const ARG_PLAN_LOCATION: &str = "location";
const ARG_PLAN_BUDGET: &str = "budget";
const ARG_PLAN_DAYS: &str = "days";
const ARG_PLAN_DAILY_HOURS: &str = "daily-hours";
const ENV_PLAN_CATALOG: &str = "WANDERPLAN_CMDS_PLAN_CATALOG";
const ENV_PLAN_LOCATION: &str = "WANDERPLAN_CMDS_PLAN_LOCATION";
const ENV_PLAN_BUDGET: &str = "WANDERPLAN_CMDS_PLAN_BUDGET";
const ENV_PLAN_DAYS: &str = "WANDERPLAN_CMDS_PLAN_DAYS";
const ARG_STORE: &str = "store";
const ENV_STORE: &str = "WANDERPLAN_STORE";
const DEFAULT_STORE: &str = "wanderplan.db";

/// Run the Wanderplan CLI with the current process arguments and environment,
/// writing command output to stdout.
pub fn run() -> Result<(), CliError> {
    let _logger = logging::init()?;
    let mut stdout = std::io::stdout().lock();
    run_with(std::env::args_os(), &mut stdout)
}

/// Run the CLI with explicit arguments (including the binary name) and an
/// explicit output sink.
pub fn run_with<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan_with(args, writer),
        Command::Show(args) => trips::show(&args, writer),
        Command::AddExpense(args) => trips::add_expense(args, writer),
        Command::Expenses(args) => trips::expenses(&args, writer),
        Command::AddTask(args) => trips::add_task(args, writer),
        Command::Tasks(args) => trips::tasks(&args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wanderplan",
    about = "Plan day-by-day trip itineraries and keep per-trip ledgers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan an itinerary from an attraction catalog.
    Plan(PlanArgs),
    /// Print a saved itinerary.
    Show(ShowArgs),
    /// Record an expense against a saved trip.
    AddExpense(AddExpenseArgs),
    /// List a trip's expenses with per-member totals.
    Expenses(LedgerArgs),
    /// Record a task against a saved trip.
    AddTask(AddTaskArgs),
    /// List a trip's tasks.
    Tasks(LedgerArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
