//! Reconciliation report
//!
//! Aggregates flattened installment rows into header totals. Entry-level
//! figures (document value, discount) are summed once per distinct entry;
//! row-level figures (paid, balance) once per row. Collapsing that
//! distinction inflates totals by a factor of the installment count, so it
//! is enforced here rather than left to callers.

use std::collections::HashSet;

use core_kernel::{EntryId, Money};
use serde::{Deserialize, Serialize};

use crate::entry::LedgerEntry;

/// One flattened installment row, as a listing query would return it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentRow {
    /// Owning entry
    pub entry_id: EntryId,
    /// Entry-level document value (repeated on every row)
    pub document_value: Money,
    /// Entry-level discount (repeated on every row)
    pub discount: Money,
    /// Row-level expected amount
    pub expected_amount: Money,
    /// Row-level paid amount
    pub paid_amount: Money,
}

impl InstallmentRow {
    /// Remaining amount to collect on this row
    pub fn balance(&self) -> Money {
        self.expected_amount.saturating_sub(&self.paid_amount)
    }
}

/// Header totals over a set of installment rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of document values, one per distinct entry
    pub document_total: Money,
    /// Sum of discounts, one per distinct entry
    pub discount_total: Money,
    /// Sum of paid amounts, one per row
    pub paid_total: Money,
    /// Sum of remaining balances, one per row
    pub balance_total: Money,
}

/// Flattens ledger entries into installment rows
pub fn flatten(entries: &[LedgerEntry]) -> Vec<InstallmentRow> {
    entries
        .iter()
        .flat_map(|entry| {
            entry.installments.iter().map(|installment| InstallmentRow {
                entry_id: entry.id,
                document_value: entry.document_value,
                discount: entry.discount,
                expected_amount: installment.expected_amount,
                paid_amount: installment.paid_amount,
            })
        })
        .collect()
}

/// Sums rows into header totals, deduplicating entry-level figures
///
/// Rows may arrive in any order; the first row seen for an entry
/// contributes its document value and discount, every row contributes its
/// paid amount and balance.
pub fn summarize<'a>(rows: impl IntoIterator<Item = &'a InstallmentRow>) -> ReportSummary {
    let mut seen: HashSet<EntryId> = HashSet::new();
    let mut summary = ReportSummary::default();

    for row in rows {
        if seen.insert(row.entry_id) {
            summary.document_total = summary.document_total + row.document_value;
            summary.discount_total = summary.discount_total + row.discount;
        }
        summary.paid_total = summary.paid_total + row.paid_amount;
        summary.balance_total = summary.balance_total + row.balance();
    }

    summary
}
