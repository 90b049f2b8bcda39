//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{DocumentId, Money, PartyId};
use domain_ledger::entry::LedgerEntry;
use domain_ledger::installment::Installment;
use domain_ledger::schedule::InstallmentFrequency;

use crate::fixtures::{DateFixtures, IdFixtures, MoneyFixtures};

/// Builder for constructing test ledger entries
pub struct LedgerEntryBuilder {
    document_id: DocumentId,
    party_id: PartyId,
    issue_date: NaiveDate,
    document_value: Money,
    discount: Money,
    interest: Money,
    down_payment: Money,
    frequency: InstallmentFrequency,
    installment_count: Option<u32>,
    first_due_date: NaiveDate,
}

impl Default for LedgerEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerEntryBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            document_id: IdFixtures::document_id(),
            party_id: IdFixtures::party_id(),
            issue_date: DateFixtures::issue_date(),
            document_value: MoneyFixtures::document_value(),
            discount: Money::zero(),
            interest: Money::zero(),
            down_payment: Money::zero(),
            frequency: InstallmentFrequency::default(),
            installment_count: None,
            first_due_date: DateFixtures::first_due_date(),
        }
    }

    /// Sets the document value
    pub fn with_document_value(mut self, value: Money) -> Self {
        self.document_value = value;
        self
    }

    /// Sets the discount
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the interest
    pub fn with_interest(mut self, interest: Money) -> Self {
        self.interest = interest;
        self
    }

    /// Sets the down payment
    pub fn with_down_payment(mut self, down_payment: Money) -> Self {
        self.down_payment = down_payment;
        self
    }

    /// Sets the issue date
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = date;
        self
    }

    /// Sets the due date frequency
    pub fn with_frequency(mut self, frequency: InstallmentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Generates installments on build
    pub fn with_installments(mut self, count: u32) -> Self {
        self.installment_count = Some(count);
        self
    }

    /// Sets the first due date used when generating installments
    pub fn with_first_due_date(mut self, date: NaiveDate) -> Self {
        self.first_due_date = date;
        self
    }

    /// Builds the ledger entry
    ///
    /// # Panics
    ///
    /// Panics on invalid test data; builders are test-only.
    pub fn build(self) -> LedgerEntry {
        let mut entry = LedgerEntry::new(
            self.document_id,
            self.party_id,
            self.issue_date,
            self.document_value,
            self.discount,
            self.interest,
            self.down_payment,
        )
        .expect("invalid test entry")
        .with_frequency(self.frequency);

        if let Some(count) = self.installment_count {
            entry
                .generate_installments(count, self.first_due_date)
                .expect("invalid test installment count");
        }

        entry
    }
}

/// Builder for constructing standalone test installments
pub struct InstallmentBuilder {
    number: u32,
    due_date: NaiveDate,
    expected_amount: Money,
    paid: Option<(Money, NaiveDate)>,
}

impl Default for InstallmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallmentBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            number: 1,
            due_date: DateFixtures::first_due_date(),
            expected_amount: MoneyFixtures::hundred(),
            paid: None,
        }
    }

    /// Sets the installment number
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    /// Sets the due date
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = date;
        self
    }

    /// Sets the expected amount
    pub fn with_expected_amount(mut self, amount: Money) -> Self {
        self.expected_amount = amount;
        self
    }

    /// Registers a payment on build
    pub fn with_payment(mut self, amount: Money, date: NaiveDate) -> Self {
        self.paid = Some((amount, date));
        self
    }

    /// Builds the installment
    ///
    /// # Panics
    ///
    /// Panics on invalid test data; builders are test-only.
    pub fn build(self) -> Installment {
        let mut installment = Installment::new(self.number, self.due_date, self.expected_amount);
        if let Some((amount, date)) = self.paid {
            installment
                .register_payment(amount, date, date)
                .expect("invalid test payment");
        }
        installment
    }
}
