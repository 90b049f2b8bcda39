//! Ledger domain errors and warnings
//!
//! Hard errors refuse an operation outright; warnings report a value the
//! engine auto-corrected so the caller can notify the user. Both are plain
//! values, never panics.

use chrono::NaiveDate;
use core_kernel::{Money, MoneyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Negative or malformed monetary input
    #[error("Invalid balance: {0}")]
    InvalidBalance(String),

    /// Non-positive installment count
    #[error("Invalid installment count: {0}")]
    InvalidCount(u32),

    /// Installment sum differs from the entry balance beyond tolerance
    #[error("Installments sum to {actual}, expected {expected}")]
    ImbalancedInstallments { expected: Money, actual: Money },

    /// Down payment larger than the document total
    #[error("Down payment {down_payment} exceeds total value {total}")]
    DownPaymentExceedsTotal { down_payment: Money, total: Money },

    /// Negative paid amount
    #[error("Invalid payment: {0}")]
    InvalidPayment(String),

    /// Installment index outside the sequence
    #[error("Installment {index} out of bounds (sequence has {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Money arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

/// Non-blocking notice produced by the rebalancer
///
/// A warning means the engine auto-corrected a value; the operation itself
/// succeeded and the caller should surface the message to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebalanceWarning {
    /// The edit pushed the last installment below zero; it was clamped.
    AdjustmentExceedsRemaining { index: usize, shortfall: Money },

    /// An edit to the last installment was reverted to the only value that
    /// preserves the total.
    EditRejected { index: usize, required: Money },
}

impl fmt::Display for RebalanceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebalanceWarning::AdjustmentExceedsRemaining { index, shortfall } => write!(
                f,
                "adjustment exceeds remaining balance: installment {} clamped to zero (short by {})",
                index + 1,
                shortfall
            ),
            RebalanceWarning::EditRejected { index, required } => write!(
                f,
                "edit to installment {} rejected: {} is required to preserve the total",
                index + 1,
                required
            ),
        }
    }
}

/// Non-blocking notice produced by entry validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationWarning {
    /// An installment is due before the document's issue date.
    BackDatedDueDate {
        number: u32,
        due_date: NaiveDate,
        issue_date: NaiveDate,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::BackDatedDueDate {
                number,
                due_date,
                issue_date,
            } => write!(
                f,
                "installment {} is due {} before the issue date {}",
                number, due_date, issue_date
            ),
        }
    }
}
