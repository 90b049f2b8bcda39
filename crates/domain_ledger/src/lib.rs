//! Ledger Domain - Installment Engine
//!
//! This crate implements the installment generation, rebalancing, and
//! reconciliation engine behind receivable and payable documents: a
//! document total is split into a down payment plus N installments, user
//! edits are rebalanced so the sequence keeps summing to the total, and
//! payments drive each installment's settlement status through to
//! reconciliation.
//!
//! # Invariants
//!
//! - `total_value = max(0, document_value - discount + interest)`
//! - `down_payment + Σ installment expected amounts == total_value` to
//!   the minor unit, whenever installments exist
//! - installment amounts are never negative; auto-corrections surface as
//!   warnings, not silent state
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::LedgerEntry;
//!
//! let mut entry = LedgerEntry::new(document_id, party_id, issue_date,
//!     document_value, discount, interest, down_payment)?;
//! entry.generate_installments(3, first_due_date)?;
//!
//! // A manual edit is absorbed by the last installment.
//! let warning = entry.edit_installment_amount(1, new_amount, today)?;
//!
//! entry.validate()?;
//! ```

pub mod entry;
pub mod error;
pub mod installment;
pub mod ports;
pub mod rebalance;
pub mod report;
pub mod schedule;
pub mod settlement;
pub mod split;

pub use entry::LedgerEntry;
pub use error::{LedgerError, RebalanceWarning, ValidationWarning};
pub use installment::{Installment, DOWN_PAYMENT_NUMBER};
pub use ports::InstallmentStore;
pub use rebalance::{apply_amount_edit, apply_due_date_edit};
pub use report::{flatten, summarize, InstallmentRow, ReportSummary};
pub use schedule::InstallmentFrequency;
pub use settlement::{classify, SettlementStatus};
pub use split::split;
