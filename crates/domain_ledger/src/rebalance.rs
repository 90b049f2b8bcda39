//! Installment rebalancer
//!
//! Applies a manual edit to one installment and recomputes the sequence so
//! it still sums to the target balance. Edits anywhere except the last slot
//! are absorbed by the last installment, keeping the front of the schedule
//! authoritative; edits to the last slot have no further slot to absorb the
//! difference and are reverted to the only value that preserves the total.

use chrono::NaiveDate;
use core_kernel::Money;
use tracing::warn;

use crate::error::{LedgerError, RebalanceWarning};
use crate::installment::Installment;

/// Sum drift tolerated on a terminal edit, in minor units.
const TOLERANCE: i64 = 1;

/// Applies an amount edit to `installments[index]`, rebalancing the
/// sequence to sum to `target_total`
///
/// Mutates amounts only; settlement statuses are the caller's concern.
/// Returns a warning when a value had to be auto-corrected. Never fails for
/// valid input; a negative amount is rejected before any mutation.
pub fn apply_amount_edit(
    installments: &mut [Installment],
    index: usize,
    new_amount: Money,
    target_total: Money,
) -> Result<Option<RebalanceWarning>, LedgerError> {
    if new_amount.is_negative() {
        return Err(LedgerError::InvalidBalance(format!(
            "installment amount may not be negative: {}",
            new_amount
        )));
    }
    let len = installments.len();
    if index >= len {
        return Err(LedgerError::IndexOutOfBounds { index, len });
    }

    installments[index].expected_amount = new_amount;

    let current_sum: i64 = installments.iter().map(|i| i.expected_amount.minor()).sum();
    let difference = target_total.minor() - current_sum;

    let last = len - 1;
    let warning = if difference == 0 {
        None
    } else if index != last && len > 1 {
        // Absorb the difference in the last installment.
        let adjusted = installments[last].expected_amount.minor() + difference;
        if adjusted < 0 {
            installments[last].expected_amount = Money::zero();
            let shortfall = Money::from_minor(-adjusted);
            warn!(%shortfall, installment = last + 1, "adjustment exceeds remaining balance, clamping to zero");
            Some(RebalanceWarning::AdjustmentExceedsRemaining {
                index: last,
                shortfall,
            })
        } else {
            installments[last].expected_amount = Money::from_minor(adjusted);
            None
        }
    } else if difference.abs() > TOLERANCE {
        // Terminal edit: no further slot can absorb the difference, so the
        // edit is forced back to the value that preserves the invariant.
        let required = Money::from_minor(new_amount.minor() + difference);
        installments[index].expected_amount = required;
        warn!(%required, installment = index + 1, "terminal edit rejected, restoring balancing value");
        Some(RebalanceWarning::EditRejected { index, required })
    } else {
        None
    };

    for installment in installments.iter_mut() {
        if installment.expected_amount.is_negative() {
            installment.expected_amount = Money::zero();
        }
    }

    Ok(warning)
}

/// Applies a due date edit to `installments[index]`
pub fn apply_due_date_edit(
    installments: &mut [Installment],
    index: usize,
    new_date: NaiveDate,
) -> Result<(), LedgerError> {
    let len = installments.len();
    if index >= len {
        return Err(LedgerError::IndexOutOfBounds { index, len });
    }

    installments[index].due_date = new_date;
    Ok(())
}
