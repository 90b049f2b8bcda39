//! Installment splitter
//!
//! Splits a balance into a sequence of installment amounts whose sum equals
//! the balance exactly. Integer division leaves a remainder of at most
//! `count - 1` minor units; those extra units go to the trailing
//! installments, which are the least likely to have been fixed by prior
//! user edits.

use core_kernel::Money;

use crate::error::LedgerError;

/// Splits `balance` into `count` installment amounts
///
/// The first `count - remainder` amounts receive the truncated base value;
/// the last `remainder` receive one extra minor unit, so the sequence always
/// sums to `balance` exactly.
pub fn split(balance: Money, count: u32) -> Result<Vec<Money>, LedgerError> {
    if count == 0 {
        return Err(LedgerError::InvalidCount(count));
    }
    if balance.is_negative() {
        return Err(LedgerError::InvalidBalance(format!(
            "balance may not be negative: {}",
            balance
        )));
    }

    let total = balance.minor();
    let parts = i64::from(count);
    let base = total / parts;
    let remainder = total % parts;
    let plain = (parts - remainder) as usize;

    let amounts = (0..count as usize)
        .map(|i| {
            if i < plain {
                Money::from_minor(base)
            } else {
                Money::from_minor(base + 1)
            }
        })
        .collect();

    Ok(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let amounts = split(Money::from_minor(3000), 3).unwrap();
        assert_eq!(
            amounts,
            vec![
                Money::from_minor(1000),
                Money::from_minor(1000),
                Money::from_minor(1000)
            ]
        );
    }

    #[test]
    fn test_remainder_goes_to_tail() {
        // 10.00 over 3 installments
        let amounts = split(Money::from_minor(1000), 3).unwrap();
        assert_eq!(
            amounts,
            vec![
                Money::from_minor(333),
                Money::from_minor(333),
                Money::from_minor(334)
            ]
        );
    }

    #[test]
    fn test_two_unit_remainder() {
        let amounts = split(Money::from_minor(1001), 3).unwrap();
        assert_eq!(
            amounts,
            vec![
                Money::from_minor(333),
                Money::from_minor(334),
                Money::from_minor(334)
            ]
        );
    }

    #[test]
    fn test_single_installment_takes_all() {
        let amounts = split(Money::from_minor(12345), 1).unwrap();
        assert_eq!(amounts, vec![Money::from_minor(12345)]);
    }

    #[test]
    fn test_more_installments_than_units() {
        let amounts = split(Money::from_minor(2), 3).unwrap();
        assert_eq!(
            amounts,
            vec![Money::zero(), Money::from_minor(1), Money::from_minor(1)]
        );
    }

    #[test]
    fn test_zero_balance() {
        let amounts = split(Money::zero(), 4).unwrap();
        assert!(amounts.iter().all(|a| a.is_zero()));
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(matches!(
            split(Money::from_minor(1000), 0),
            Err(LedgerError::InvalidCount(0))
        ));
    }

    #[test]
    fn test_negative_balance_rejected() {
        assert!(matches!(
            split(Money::from_minor(-1), 2),
            Err(LedgerError::InvalidBalance(_))
        ));
    }
}
