//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{EntryId, Money};
use proptest::prelude::*;

/// Strategy for generating valid non-negative amounts in minor units
pub fn balance_minor_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000i64
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating non-negative Money values
pub fn balance_money_strategy() -> impl Strategy<Value = Money> {
    balance_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating valid installment counts
pub fn installment_count_strategy() -> impl Strategy<Value = u32> {
    1u32..100u32
}

/// Strategy for generating due dates within 2024
pub fn due_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..365i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating EntryId values
pub fn entry_id_strategy() -> impl Strategy<Value = EntryId> {
    any::<[u8; 16]>().prop_map(|bytes| EntryId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn balance_strategy_is_non_negative(money in balance_money_strategy()) {
            prop_assert!(!money.is_negative());
        }

        #[test]
        fn count_strategy_is_positive(count in installment_count_strategy()) {
            prop_assert!(count >= 1);
        }

        #[test]
        fn due_dates_fall_in_2024(date in due_date_strategy()) {
            use chrono::Datelike;
            prop_assert_eq!(date.year(), 2024);
        }
    }
}
