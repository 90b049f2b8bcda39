//! Installment rows
//!
//! An installment is one scheduled portion of a ledger entry's balance with
//! its own due date and payment tracking. Number 0 is the down payment row;
//! numbers 1..=N are the regular installments, ordered by number.

use chrono::NaiveDate;
use core_kernel::{InstallmentId, Money};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::settlement::{self, SettlementStatus};

/// Installment number reserved for the down payment row.
pub const DOWN_PAYMENT_NUMBER: u32 = 0;

/// One scheduled portion of a ledger entry's balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// Unique identifier, preserved across positional updates
    pub id: InstallmentId,
    /// 0 for the down payment, 1..=N for regular installments
    pub number: u32,
    /// Due date
    pub due_date: NaiveDate,
    /// Amount expected for this installment
    pub expected_amount: Money,
    /// Amount paid so far
    pub paid_amount: Money,
    /// Date of the most recent payment
    pub paid_date: Option<NaiveDate>,
    /// Canceled flag; a canceled installment stays canceled
    pub canceled: bool,
    /// Derived settlement status
    pub status: SettlementStatus,
}

impl Installment {
    /// Creates a new unpaid installment
    pub fn new(number: u32, due_date: NaiveDate, expected_amount: Money) -> Self {
        Self {
            id: InstallmentId::new_v7(),
            number,
            due_date,
            expected_amount,
            paid_amount: Money::zero(),
            paid_date: None,
            canceled: false,
            status: SettlementStatus::Pending,
        }
    }

    /// Returns true for the down payment row
    pub fn is_down_payment(&self) -> bool {
        self.number == DOWN_PAYMENT_NUMBER
    }

    /// Returns the remaining amount to collect
    pub fn balance(&self) -> Money {
        self.expected_amount.saturating_sub(&self.paid_amount)
    }

    /// Registers a payment against this installment
    ///
    /// Accumulates into `paid_amount`, records the payment date, and
    /// reclassifies the settlement status.
    pub fn register_payment(
        &mut self,
        amount: Money,
        payment_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), LedgerError> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidPayment(format!(
                "payment amount may not be negative: {}",
                amount
            )));
        }

        self.paid_amount = self.paid_amount.checked_add(&amount)?;
        self.paid_date = Some(payment_date);
        self.reclassify(today)
    }

    /// Cancels the installment; terminal
    pub fn cancel(&mut self) {
        self.canceled = true;
        self.status = SettlementStatus::Canceled;
    }

    /// Recomputes the settlement status from current facts
    pub fn reclassify(&mut self, today: NaiveDate) -> Result<(), LedgerError> {
        self.status = settlement::classify(
            self.expected_amount,
            self.paid_amount,
            self.due_date,
            today,
            self.canceled,
        )?;
        Ok(())
    }
}
