//! Greedy itinerary allocation for Wanderplan.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](wanderplan_core::Planner) trait. It ranks the attractions of a
//! location by rating and hands them out day by day, accepting each one only
//! while the day stays inside its hour limit (and, optionally, its budget
//! share).
//!
//! The allocation is a heuristic: it never backtracks and makes no attempt to
//! pack budget and time jointly, so the result is not guaranteed to be the
//! best possible itinerary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod greedy;

pub use config::{BudgetPolicy, DEFAULT_DAILY_HOURS_LIMIT, GreedyPlannerConfig, OverflowPolicy};
pub use greedy::GreedyPlanner;
