//! Due date schedules
//!
//! Documents carry a first due date and a periodicity; the remaining due
//! dates follow from those. Month-based frequencies keep the day of month,
//! clamping into shorter months (Jan 31 + 1 month = Feb 28/29).

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Interval between consecutive installment due dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallmentFrequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl InstallmentFrequency {
    /// Calculates the next due date from a given date
    pub fn next_due_date(&self, from_date: NaiveDate) -> NaiveDate {
        match self {
            InstallmentFrequency::Weekly => from_date + Duration::days(7),
            InstallmentFrequency::Biweekly => from_date + Duration::days(14),
            InstallmentFrequency::Monthly => add_months(from_date, 1),
            InstallmentFrequency::Quarterly => add_months(from_date, 3),
            InstallmentFrequency::Yearly => add_months(from_date, 12),
        }
    }

    /// Generates `count` due dates starting at `first`
    pub fn due_dates(&self, first: NaiveDate, count: u32) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(count as usize);
        let mut current = first;
        for _ in 0..count {
            dates.push(current);
            current = self.next_due_date(current);
        }
        dates
    }
}

/// Adds calendar months, clamping the day into the target month
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    (28..=date.day())
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, month, date.day().min(28))
                .expect("day <= 28 exists in every month")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_next_due_date() {
        assert_eq!(
            InstallmentFrequency::Monthly.next_due_date(date(2024, 1, 15)),
            date(2024, 2, 15)
        );
    }

    #[test]
    fn test_monthly_clamps_into_shorter_month() {
        assert_eq!(
            InstallmentFrequency::Monthly.next_due_date(date(2024, 1, 31)),
            date(2024, 2, 29)
        );
        assert_eq!(
            InstallmentFrequency::Monthly.next_due_date(date(2023, 1, 31)),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn test_monthly_across_year_boundary() {
        assert_eq!(
            InstallmentFrequency::Monthly.next_due_date(date(2024, 12, 10)),
            date(2025, 1, 10)
        );
    }

    #[test]
    fn test_weekly_and_biweekly() {
        assert_eq!(
            InstallmentFrequency::Weekly.next_due_date(date(2024, 1, 29)),
            date(2024, 2, 5)
        );
        assert_eq!(
            InstallmentFrequency::Biweekly.next_due_date(date(2024, 1, 29)),
            date(2024, 2, 12)
        );
    }

    #[test]
    fn test_quarterly_and_yearly() {
        assert_eq!(
            InstallmentFrequency::Quarterly.next_due_date(date(2024, 11, 30)),
            date(2025, 2, 28)
        );
        assert_eq!(
            InstallmentFrequency::Yearly.next_due_date(date(2024, 2, 29)),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_due_dates_sequence() {
        let dates = InstallmentFrequency::Monthly.due_dates(date(2024, 1, 31), 4);
        assert_eq!(
            dates,
            vec![
                date(2024, 1, 31),
                date(2024, 2, 29),
                date(2024, 3, 29),
                date(2024, 4, 29),
            ]
        );
    }

    #[test]
    fn test_due_dates_empty_for_zero_count() {
        assert!(InstallmentFrequency::Monthly
            .due_dates(date(2024, 1, 1), 0)
            .is_empty());
    }

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(
            InstallmentFrequency::default(),
            InstallmentFrequency::Monthly
        );
    }
}
