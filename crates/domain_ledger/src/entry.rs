//! Ledger entry aggregate
//!
//! One financial document: header values (document value, discount,
//! interest), the computed total, a down payment, and the ordered
//! installment sequence. The aggregate owns its installments exclusively
//! and enforces the total-sum invariant across edits and regeneration.

use chrono::NaiveDate;
use core_kernel::{DocumentId, EntryId, Money, PartyId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LedgerError, RebalanceWarning, ValidationWarning};
use crate::installment::{Installment, DOWN_PAYMENT_NUMBER};
use crate::rebalance;
use crate::schedule::InstallmentFrequency;
use crate::split;

/// Sum drift tolerated by validation, in minor units.
const SUM_TOLERANCE: i64 = 1;

/// A receivable or payable document with its installment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Owning document
    pub document_id: DocumentId,
    /// Counterpart (customer or supplier)
    pub party_id: PartyId,
    /// Document issue date
    pub issue_date: NaiveDate,
    /// Principal document value
    pub document_value: Money,
    /// Discount subtracted from the document value
    pub discount: Money,
    /// Interest added on top
    pub interest: Money,
    /// Computed total: max(0, document_value - discount + interest)
    pub total_value: Money,
    /// Amount paid up front, outside the installment schedule
    pub down_payment: Money,
    /// Interval between consecutive due dates
    pub frequency: InstallmentFrequency,
    /// Down payment row (number 0, when present) followed by regular
    /// installments ordered by number
    pub installments: Vec<Installment>,
    /// Set when the user has edited amounts or dates by hand; suppresses
    /// automatic regeneration until a structural change clears it
    pub manually_edited: bool,
}

impl LedgerEntry {
    /// Creates a new entry with no installments yet
    pub fn new(
        document_id: DocumentId,
        party_id: PartyId,
        issue_date: NaiveDate,
        document_value: Money,
        discount: Money,
        interest: Money,
        down_payment: Money,
    ) -> Result<Self, LedgerError> {
        for (name, amount) in [
            ("document_value", document_value),
            ("discount", discount),
            ("interest", interest),
            ("down_payment", down_payment),
        ] {
            if amount.is_negative() {
                return Err(LedgerError::InvalidBalance(format!(
                    "{} may not be negative: {}",
                    name, amount
                )));
            }
        }

        let total_value = compute_total(document_value, discount, interest);
        if down_payment > total_value {
            return Err(LedgerError::DownPaymentExceedsTotal {
                down_payment,
                total: total_value,
            });
        }

        Ok(Self {
            id: EntryId::new_v7(),
            document_id,
            party_id,
            issue_date,
            document_value,
            discount,
            interest,
            total_value,
            down_payment,
            frequency: InstallmentFrequency::default(),
            installments: Vec::new(),
            manually_edited: false,
        })
    }

    /// Sets the due date frequency used by schedule generation
    pub fn with_frequency(mut self, frequency: InstallmentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// The balance the regular installments must sum to
    pub fn balance(&self) -> Money {
        self.total_value.saturating_sub(&self.down_payment)
    }

    /// Regular installments (excluding the down payment row)
    pub fn regular_installments(&self) -> &[Installment] {
        &self.installments[self.regular_start()..]
    }

    /// Total paid across all rows, down payment included
    pub fn paid_total(&self) -> Money {
        self.installments.iter().map(|i| i.paid_amount).sum()
    }

    /// Remaining amount to collect across all rows
    pub fn outstanding_balance(&self) -> Money {
        self.installments.iter().map(|i| i.balance()).sum()
    }

    /// Generates (or structurally regenerates) the installment sequence
    ///
    /// Splits the balance across `count` rows and assigns due dates from
    /// `first_due_date` onward. When the regular count is unchanged, row
    /// identities and registered payments are preserved positionally so a
    /// persistence collaborator can update rows in place. Clears the
    /// manual-edit flag.
    pub fn generate_installments(
        &mut self,
        count: u32,
        first_due_date: NaiveDate,
    ) -> Result<(), LedgerError> {
        let amounts = split::split(self.balance(), count)?;
        let dates = self.frequency.due_dates(first_due_date, count);

        let old_regular: Vec<Installment> = self.installments.split_off(self.regular_start());
        let preserve = old_regular.len() == count as usize;

        let mut regular = Vec::with_capacity(count as usize);
        for (index, (amount, due_date)) in amounts.into_iter().zip(dates).enumerate() {
            let mut installment = Installment::new(index as u32 + 1, due_date, amount);
            if preserve {
                let old = &old_regular[index];
                installment.id = old.id;
                installment.paid_amount = old.paid_amount;
                installment.paid_date = old.paid_date;
                installment.canceled = old.canceled;
                installment.status = old.status;
            }
            regular.push(installment);
        }

        self.installments.truncate(self.regular_start());
        self.installments.extend(regular);
        self.sync_down_payment_row();
        self.manually_edited = false;
        Ok(())
    }

    /// Updates the document value, recomputing the total and schedule
    pub fn set_document_value(&mut self, value: Money) -> Result<(), LedgerError> {
        self.set_header(value, self.discount, self.interest, self.down_payment)
    }

    /// Updates the discount, recomputing the total and schedule
    pub fn set_discount(&mut self, discount: Money) -> Result<(), LedgerError> {
        self.set_header(self.document_value, discount, self.interest, self.down_payment)
    }

    /// Updates the interest, recomputing the total and schedule
    pub fn set_interest(&mut self, interest: Money) -> Result<(), LedgerError> {
        self.set_header(self.document_value, self.discount, interest, self.down_payment)
    }

    /// Updates the down payment, recomputing the schedule
    pub fn set_down_payment(&mut self, down_payment: Money) -> Result<(), LedgerError> {
        self.set_header(self.document_value, self.discount, self.interest, down_payment)
    }

    fn set_header(
        &mut self,
        document_value: Money,
        discount: Money,
        interest: Money,
        down_payment: Money,
    ) -> Result<(), LedgerError> {
        for (name, amount) in [
            ("document_value", document_value),
            ("discount", discount),
            ("interest", interest),
            ("down_payment", down_payment),
        ] {
            if amount.is_negative() {
                return Err(LedgerError::InvalidBalance(format!(
                    "{} may not be negative: {}",
                    name, amount
                )));
            }
        }

        let total_value = compute_total(document_value, discount, interest);
        if down_payment > total_value {
            return Err(LedgerError::DownPaymentExceedsTotal {
                down_payment,
                total: total_value,
            });
        }

        self.document_value = document_value;
        self.discount = discount;
        self.interest = interest;
        self.down_payment = down_payment;
        self.total_value = total_value;
        self.regenerate()
    }

    /// Re-splits the schedule after a header change
    ///
    /// Preserves row identities, due dates, and registered payments
    /// positionally; only the expected amounts are recomputed. Skipped
    /// entirely while the user's manual edits are in force — validation
    /// then reports any resulting imbalance instead.
    fn regenerate(&mut self) -> Result<(), LedgerError> {
        self.sync_down_payment_row();

        let count = self.regular_installments().len();
        if count == 0 {
            return Ok(());
        }
        if self.manually_edited {
            debug!(entry = %self.id, "manual edits in force, skipping regeneration");
            return Ok(());
        }

        let amounts = split::split(self.balance(), count as u32)?;
        let start = self.regular_start();
        for (installment, amount) in self.installments[start..].iter_mut().zip(amounts) {
            installment.expected_amount = amount;
        }
        Ok(())
    }

    /// Keeps the number-0 row consistent with the down payment header
    fn sync_down_payment_row(&mut self) {
        let has_row = self
            .installments
            .first()
            .is_some_and(|i| i.is_down_payment());

        if self.down_payment.is_positive() {
            if has_row {
                self.installments[0].expected_amount = self.down_payment;
            } else if !self.installments.is_empty() {
                let row = Installment::new(DOWN_PAYMENT_NUMBER, self.issue_date, self.down_payment);
                self.installments.insert(0, row);
            }
        } else if has_row {
            self.installments.remove(0);
        }
    }

    fn regular_start(&self) -> usize {
        usize::from(
            self.installments
                .first()
                .is_some_and(|i| i.is_down_payment()),
        )
    }

    /// Applies a manual amount edit to the regular installment `number`
    ///
    /// The sequence is rebalanced to keep summing to the entry balance;
    /// the returned warning, when present, describes an auto-correction.
    /// Marks the entry as manually edited.
    pub fn edit_installment_amount(
        &mut self,
        number: u32,
        new_amount: Money,
        today: NaiveDate,
    ) -> Result<Option<RebalanceWarning>, LedgerError> {
        let index = self.regular_index(number)?;
        let target = self.balance();
        let start = self.regular_start();
        let warning = rebalance::apply_amount_edit(
            &mut self.installments[start..],
            index,
            new_amount,
            target,
        )?;
        self.manually_edited = true;
        self.refresh_statuses(today)?;
        Ok(warning)
    }

    /// Applies a manual due date edit to the regular installment `number`
    ///
    /// Marks the entry as manually edited.
    pub fn edit_installment_due_date(
        &mut self,
        number: u32,
        new_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), LedgerError> {
        let index = self.regular_index(number)?;
        let start = self.regular_start();
        rebalance::apply_due_date_edit(&mut self.installments[start..], index, new_date)?;
        self.manually_edited = true;
        self.refresh_statuses(today)
    }

    fn regular_index(&self, number: u32) -> Result<usize, LedgerError> {
        let len = self.regular_installments().len();
        match number.checked_sub(1) {
            Some(index) if (index as usize) < len => Ok(index as usize),
            _ => Err(LedgerError::IndexOutOfBounds {
                index: number as usize,
                len,
            }),
        }
    }

    /// Registers a payment against the installment with the given number
    /// (0 addresses the down payment row)
    pub fn register_payment(
        &mut self,
        number: u32,
        amount: Money,
        payment_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), LedgerError> {
        let len = self.installments.len();
        let installment = self
            .installments
            .iter_mut()
            .find(|i| i.number == number)
            .ok_or(LedgerError::IndexOutOfBounds {
                index: number as usize,
                len,
            })?;
        installment.register_payment(amount, payment_date, today)
    }

    /// Cancels the installment with the given number
    pub fn cancel_installment(&mut self, number: u32) -> Result<(), LedgerError> {
        let len = self.installments.len();
        let installment = self
            .installments
            .iter_mut()
            .find(|i| i.number == number)
            .ok_or(LedgerError::IndexOutOfBounds {
                index: number as usize,
                len,
            })?;
        installment.cancel();
        Ok(())
    }

    /// Recomputes every installment's settlement status against `today`
    pub fn refresh_statuses(&mut self, today: NaiveDate) -> Result<(), LedgerError> {
        for installment in &mut self.installments {
            installment.reclassify(today)?;
        }
        Ok(())
    }

    /// Validates the aggregate invariants
    ///
    /// Returns non-blocking warnings on success; the first violated hard
    /// invariant aborts with an error. Pure: validating twice on an
    /// unmodified entry yields identical results.
    pub fn validate(&self) -> Result<Vec<ValidationWarning>, LedgerError> {
        let expected_total = compute_total(self.document_value, self.discount, self.interest);
        if self.total_value != expected_total {
            return Err(LedgerError::InvalidBalance(format!(
                "total value {} does not match computed total {}",
                self.total_value, expected_total
            )));
        }

        let regular = self.regular_installments();
        if !regular.is_empty() {
            let actual: Money = regular.iter().map(|i| i.expected_amount).sum();
            let expected = self.balance();
            if (actual.minor() - expected.minor()).abs() > SUM_TOLERANCE {
                return Err(LedgerError::ImbalancedInstallments { expected, actual });
            }
        }

        if self.down_payment > self.total_value {
            return Err(LedgerError::DownPaymentExceedsTotal {
                down_payment: self.down_payment,
                total: self.total_value,
            });
        }

        let warnings = self
            .installments
            .iter()
            .filter(|i| i.due_date < self.issue_date)
            .map(|i| ValidationWarning::BackDatedDueDate {
                number: i.number,
                due_date: i.due_date,
                issue_date: self.issue_date,
            })
            .collect();

        Ok(warnings)
    }
}

/// Computes the document total: max(0, document_value - discount + interest)
fn compute_total(document_value: Money, discount: Money, interest: Money) -> Money {
    let minor = document_value.minor() - discount.minor() + interest.minor();
    Money::from_minor(minor.max(0))
}
