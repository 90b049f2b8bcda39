//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the ledger
//! engine. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::NaiveDate;
use core_kernel::{DocumentId, EntryId, InstallmentId, Money, PartyId};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A round one-hundred amount (10000 minor units)
    pub fn hundred() -> Money {
        Money::from_minor(10_000)
    }

    /// A typical document value
    pub fn document_value() -> Money {
        Money::from_minor(120_000)
    }

    /// A typical discount
    pub fn discount() -> Money {
        Money::from_minor(10_000)
    }

    /// A typical down payment
    pub fn down_payment() -> Money {
        Money::from_minor(12_000)
    }

    /// A balance that does not divide evenly by three
    pub fn awkward_balance() -> Money {
        Money::from_minor(1_000)
    }

    /// Zero
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard document issue date (Jan 10, 2024)
    pub fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    /// First installment due date (Feb 10, 2024)
    pub fn first_due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }

    /// A "today" between issue and first due date
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    /// A "today" after every generated due date
    pub fn far_future() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    /// A date before the issue date, for back-dating tests
    pub fn before_issue() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    pub fn entry_id() -> EntryId {
        EntryId::new()
    }

    pub fn installment_id() -> InstallmentId {
        InstallmentId::new()
    }

    pub fn document_id() -> DocumentId {
        DocumentId::new()
    }

    pub fn party_id() -> PartyId {
        PartyId::new()
    }
}
