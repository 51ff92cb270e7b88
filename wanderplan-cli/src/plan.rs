//! Plan command implementation for the Wanderplan CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wanderplan_core::{Itinerary, LocationMatch, PlanRequest, Planner, TripStore};
use wanderplan_data::{CatalogOptions, CsvAttractionCatalog, RowPolicy};
use wanderplan_fs::{PathKind, path_kind};
use wanderplan_planner::{
    BudgetPolicy, DEFAULT_DAILY_HOURS_LIMIT, GreedyPlanner, GreedyPlannerConfig, OverflowPolicy,
};

use crate::trips::open_store;
use crate::{
    ARG_PLAN_BUDGET, ARG_PLAN_CATALOG, ARG_PLAN_DAILY_HOURS, ARG_PLAN_DAYS, ARG_PLAN_LOCATION,
    CliError, ENV_PLAN_BUDGET, ENV_PLAN_CATALOG, ENV_PLAN_DAYS, ENV_PLAN_LOCATION, write_json,
};

/// Whether the daily budget share gates selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum BudgetMode {
    /// Report spending against the budget without rejecting attractions.
    Informational,
    /// Skip attractions that would exceed the day's budget share.
    Enforced,
}

impl From<BudgetMode> for BudgetPolicy {
    fn from(mode: BudgetMode) -> Self {
        match mode {
            BudgetMode::Informational => Self::Informational,
            BudgetMode::Enforced => Self::Enforced,
        }
    }
}

/// Handling of attractions that do not fit the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OverflowMode {
    /// Drop them.
    Discard,
    /// Offer them to the next day first.
    Defer,
}

impl From<OverflowMode> for OverflowPolicy {
    fn from(mode: OverflowMode) -> Self {
        match mode {
            OverflowMode::Discard => Self::Discard,
            OverflowMode::Defer => Self::Defer,
        }
    }
}

/// Location comparison used when filtering the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum MatchMode {
    /// Byte-for-byte equality.
    Exact,
    /// Trimmed, case-insensitive equality.
    CaseInsensitive,
}

impl From<MatchMode> for LocationMatch {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Exact => Self::Exact,
            MatchMode::CaseInsensitive => Self::CaseInsensitive,
        }
    }
}

/// Handling of malformed catalog rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum RowMode {
    /// Warn and continue.
    Skip,
    /// Fail on the first malformed row.
    Strict,
}

impl From<RowMode> for RowPolicy {
    fn from(mode: RowMode) -> Self {
        match mode {
            RowMode::Skip => Self::Skip,
            RowMode::Strict => Self::Strict,
        }
    }
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a day-by-day itinerary by handing out the highest rated \
                 attractions of a location while each day stays within its \
                 hour limit. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Plan a trip itinerary"
)]
#[ortho_config(prefix = "WANDERPLAN")]
pub(crate) struct PlanArgs {
    /// Path to the attractions CSV catalog.
    #[arg(long = ARG_PLAN_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// SQLite trip store to save the itinerary into.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) store: Option<Utf8PathBuf>,
    /// Destination to plan for.
    #[arg(long = ARG_PLAN_LOCATION, value_name = "name")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Overall budget for the trip.
    #[arg(long = ARG_PLAN_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Trip length in days.
    #[arg(long = ARG_PLAN_DAYS, value_name = "count")]
    #[serde(default)]
    pub(crate) days: Option<u32>,
    /// Maximum sightseeing hours per day (defaults to 12).
    #[arg(long = ARG_PLAN_DAILY_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) daily_hours: Option<f64>,
    /// Whether the daily budget share gates selection.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) budget_policy: Option<BudgetMode>,
    /// What happens to attractions that do not fit a day.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) overflow_policy: Option<OverflowMode>,
    /// How the location is matched against catalog rows.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) location_match: Option<MatchMode>,
    /// Handling of malformed catalog rows.
    #[arg(long, value_enum)]
    #[serde(default)]
    pub(crate) catalog_rows: Option<RowMode>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) store: Option<Utf8PathBuf>,
    pub(crate) request: PlanRequest,
    pub(crate) planner: GreedyPlannerConfig,
    pub(crate) catalog_options: CatalogOptions,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.catalog, ARG_PLAN_CATALOG)
    }
}

pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match path_kind(path) {
        Ok(PathKind::File) => Ok(()),
        Ok(_) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_CATALOG,
            env: ENV_PLAN_CATALOG,
        })?;
        let location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_LOCATION,
            env: ENV_PLAN_LOCATION,
        })?;
        let budget = args.budget.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_BUDGET,
            env: ENV_PLAN_BUDGET,
        })?;
        let days = args.days.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_DAYS,
            env: ENV_PLAN_DAYS,
        })?;

        let planner = GreedyPlannerConfig {
            daily_hours_limit: args.daily_hours.unwrap_or(DEFAULT_DAILY_HOURS_LIMIT),
            budget_policy: args.budget_policy.map(Into::into).unwrap_or_default(),
            overflow_policy: args.overflow_policy.map(Into::into).unwrap_or_default(),
            location_match: args.location_match.map(Into::into).unwrap_or_default(),
        };
        let catalog_options = CatalogOptions {
            row_policy: args.catalog_rows.map(Into::into).unwrap_or_default(),
        };

        Ok(Self {
            catalog,
            store: args.store,
            request: PlanRequest::new(location, budget, days),
            planner,
            catalog_options,
        })
    }
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let itinerary = execute_plan(&config)?;
    write_json(writer, &itinerary)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Plan with a resolved configuration and persist the result when a store is
/// configured.
pub(crate) fn execute_plan(config: &PlanConfig) -> Result<Itinerary, CliError> {
    let catalog = CsvAttractionCatalog::with_options(config.catalog.clone(), config.catalog_options);
    let planner = GreedyPlanner::with_config(catalog, config.planner);
    let itinerary = planner.plan(&config.request)?;
    if let Some(path) = &config.store {
        let mut store = open_store(path)?;
        store.save_itinerary(&itinerary)?;
        info!("saved trip {} to {path}", itinerary.id);
    }
    Ok(itinerary)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
