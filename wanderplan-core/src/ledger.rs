//! Per-trip expense and task ledgers.
//!
//! Ledgers are independent of the planner: they are keyed by an
//! [`ItineraryId`](crate::ItineraryId) inside a [`TripStore`](crate::TripStore)
//! and only validated here.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned when constructing ledger entries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The member name was blank.
    #[error("expense member must not be empty")]
    EmptyMember,
    /// The amount was NaN or infinite.
    #[error("expense amount {amount} is not a finite number")]
    InvalidAmount {
        /// Rejected amount.
        amount: f64,
    },
    /// The task description was blank.
    #[error("task must not be empty")]
    EmptyTask,
}

/// A single expense recorded against a trip.
///
/// Negative amounts are accepted so refunds can be recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpenseEntry {
    /// Trip member who paid.
    pub member: String,
    /// Amount paid.
    pub amount: f64,
    /// When the expense was recorded.
    pub timestamp: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Validates and constructs an [`ExpenseEntry`].
    pub fn new(
        member: impl Into<String>,
        amount: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, LedgerError> {
        let member_name: String = member.into();
        if member_name.trim().is_empty() {
            return Err(LedgerError::EmptyMember);
        }
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount { amount });
        }
        Ok(Self {
            member: member_name,
            amount,
            timestamp,
        })
    }

    /// Construct an entry stamped with the current time.
    pub fn now(member: impl Into<String>, amount: f64) -> Result<Self, LedgerError> {
        Self::new(member, amount, Utc::now())
    }
}

/// A to-do item attached to a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskEntry {
    /// Task description.
    pub task: String,
}

impl TaskEntry {
    /// Validates and constructs a [`TaskEntry`].
    pub fn new(task: impl Into<String>) -> Result<Self, LedgerError> {
        let description: String = task.into();
        if description.trim().is_empty() {
            return Err(LedgerError::EmptyTask);
        }
        Ok(Self { task: description })
    }
}

/// Amount spent by one member across a ledger.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberTotal {
    /// Member name.
    pub member: String,
    /// Sum of the member's expenses.
    pub total: f64,
}

/// Sum expenses per member, ordered by member name.
///
/// # Examples
/// ```
/// use wanderplan_core::{ExpenseEntry, expense_totals};
///
/// # fn main() -> Result<(), wanderplan_core::LedgerError> {
/// let entries = vec![
///     ExpenseEntry::now("riya", 120.0)?,
///     ExpenseEntry::now("arjun", 40.0)?,
///     ExpenseEntry::now("riya", 30.0)?,
/// ];
/// let totals = expense_totals(&entries);
/// assert_eq!(totals[0].member, "arjun");
/// assert_eq!(totals[1].total, 150.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "accumulates expense amounts")]
pub fn expense_totals(entries: &[ExpenseEntry]) -> Vec<MemberTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.member.as_str()).or_default() += entry.amount;
    }
    totals
        .into_iter()
        .map(|(member, total)| MemberTotal {
            member: member.to_owned(),
            total,
        })
        .collect()
}

/// Sum of every expense in the ledger.
#[must_use]
pub fn total_expenses(entries: &[ExpenseEntry]) -> f64 {
    entries.iter().map(|entry| entry.amount).sum()
}
