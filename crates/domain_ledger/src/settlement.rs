//! Settlement status classification
//!
//! Status is a pure function of the current facts (expected amount, paid
//! amount, due date, today, canceled flag) and is recomputed whenever a
//! balance changes. There is no stored transition log, so no class of
//! invalid-transition errors exists.

use chrono::NaiveDate;
use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Derived payment state of an installment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementStatus {
    /// No payment yet, due date not reached
    Pending,
    /// Some payment received, less than the expected amount
    PartiallyPaid,
    /// Paid in full (or more)
    Paid,
    /// No payment and past the due date
    Overdue,
    /// Canceled; terminal, no further automatic transition
    Canceled,
}

impl SettlementStatus {
    /// Returns true for states that require no further collection
    pub fn is_settled(&self) -> bool {
        matches!(self, SettlementStatus::Paid | SettlementStatus::Canceled)
    }
}

/// Classifies an installment from its current facts
///
/// Once any money has moved, the state is `PartiallyPaid` regardless of the
/// due date; `Overdue` only applies while nothing has been paid.
pub fn classify(
    expected_amount: Money,
    paid_amount: Money,
    due_date: NaiveDate,
    today: NaiveDate,
    canceled: bool,
) -> Result<SettlementStatus, LedgerError> {
    if paid_amount.is_negative() {
        return Err(LedgerError::InvalidPayment(format!(
            "paid amount may not be negative: {}",
            paid_amount
        )));
    }

    if canceled {
        return Ok(SettlementStatus::Canceled);
    }

    let status = if paid_amount.is_zero() {
        if due_date < today {
            SettlementStatus::Overdue
        } else {
            SettlementStatus::Pending
        }
    } else if paid_amount < expected_amount {
        SettlementStatus::PartiallyPaid
    } else {
        SettlementStatus::Paid
    };

    Ok(status)
}
