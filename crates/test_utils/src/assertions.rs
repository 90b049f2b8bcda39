//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_ledger::entry::LedgerEntry;
use domain_ledger::installment::Installment;

/// Asserts that two Money values are equal within a tolerance in minor units
///
/// # Panics
///
/// Panics if the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance_minor: i64) {
    let diff = (actual.minor() - expected.minor()).abs();
    assert!(
        diff <= tolerance_minor,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance_minor
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that installment amounts sum to a total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_installments_sum_to(installments: &[Installment], total: Money) {
    let sum: Money = installments.iter().map(|i| i.expected_amount).sum();
    assert_eq!(
        sum, total,
        "Installments sum to {} but expected {}",
        sum, total
    );
}

/// Asserts that an entry's regular installments sum to its balance and that
/// validation passes without warnings
///
/// # Panics
///
/// Panics if the entry is imbalanced or validation reports anything
pub fn assert_entry_balanced(entry: &LedgerEntry) {
    assert_installments_sum_to(entry.regular_installments(), entry.balance());
    let warnings = entry
        .validate()
        .unwrap_or_else(|e| panic!("Entry failed validation: {}", e));
    assert!(
        warnings.is_empty(),
        "Entry validated with warnings: {:?}",
        warnings
    );
}

/// Asserts that no installment amount is negative
pub fn assert_no_negative_amounts(installments: &[Installment]) {
    for installment in installments {
        assert!(
            !installment.expected_amount.is_negative(),
            "Installment {} has negative amount {}",
            installment.number,
            installment.expected_amount
        );
    }
}
