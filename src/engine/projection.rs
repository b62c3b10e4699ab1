//! Multi-month cash-flow projection
//!
//! Projects the free balance forward by re-running the balance calculation
//! for each month in the horizon. Every entry independently re-scans the
//! full record collections; at personal data volumes that costs nothing and
//! keeps the projection stateless.

use crate::models::{Debt, Expense, Income, Money, Month};

use super::balance::calculate_balances;

/// One month of the cash-flow forecast
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MonthlyProjection {
    pub month: Month,
    /// Short display label (e.g., "Mar 2025")
    pub label: String,
    pub projected_free_balance: Money,
    pub committed_amount: Money,
    /// True when the projected free balance dips below zero
    pub is_negative: bool,
}

/// Project the free balance for `start_month` and the following
/// `months_ahead` months (so `months_ahead + 1` entries), in chronological
/// order.
///
/// The projection intentionally ignores goal savings and credit-card
/// installments: it is a simplified forward view, and widening it is a
/// product decision, not a bug fix.
pub fn calculate_monthly_projection(
    incomes: &[Income],
    expenses: &[Expense],
    debts: &[Debt],
    start_month: Month,
    months_ahead: u32,
) -> Vec<MonthlyProjection> {
    (0..=months_ahead)
        .map(|offset| {
            let target = start_month.add_months(offset as i32);
            let balance = calculate_balances(
                incomes,
                expenses,
                debts,
                target,
                Money::zero(),
                Money::zero(),
            );
            MonthlyProjection {
                month: target,
                label: target.label(),
                projected_free_balance: balance.free_balance,
                committed_amount: balance.committed_balance,
                is_negative: balance.free_balance.is_negative(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> Month {
        Month::new(y, m).unwrap()
    }

    #[test]
    fn test_entry_count_and_chronology() {
        let projection =
            calculate_monthly_projection(&[], &[], &[], month(2025, 3), 6);

        assert_eq!(projection.len(), 7);
        assert_eq!(projection[0].month, month(2025, 3));
        for window in projection.windows(2) {
            assert_eq!(window[1].month, window[0].month.next());
        }
        // Horizon crosses the year boundary
        assert_eq!(projection[6].month, month(2025, 9));
    }

    #[test]
    fn test_zero_months_ahead_yields_single_entry() {
        let projection =
            calculate_monthly_projection(&[], &[], &[], month(2025, 3), 0);
        assert_eq!(projection.len(), 1);
        assert_eq!(projection[0].month, month(2025, 3));
    }

    #[test]
    fn test_recurring_income_carries_through_horizon() {
        let incomes = vec![Income::recurring(
            "Salary",
            Money::from_units(5000),
            date(2025, 3, 1),
        )];

        let projection =
            calculate_monthly_projection(&incomes, &[], &[], month(2025, 3), 3);

        for entry in &projection {
            assert_eq!(entry.projected_free_balance, Money::from_units(5000));
            assert!(!entry.is_negative);
        }
    }

    #[test]
    fn test_installment_debt_drops_out_of_later_months() {
        let incomes = vec![Income::recurring(
            "Salary",
            Money::from_units(1000),
            date(2025, 1, 1),
        )];
        let debts = vec![Debt::installment(
            "Loan",
            Money::from_units(900),
            Money::from_units(300),
            3,
            date(2025, 1, 1),
        )];

        let projection =
            calculate_monthly_projection(&incomes, &[], &debts, month(2025, 1), 5);

        // Active through the 3-installment window, then released
        assert_eq!(projection[0].committed_amount, Money::from_units(300));
        assert_eq!(projection[1].committed_amount, Money::from_units(300));
        assert_eq!(projection[2].committed_amount, Money::from_units(300));
        assert_eq!(projection[5].committed_amount, Money::zero());
        assert_eq!(
            projection[5].projected_free_balance,
            Money::from_units(1000)
        );
    }

    #[test]
    fn test_deficit_months_flagged() {
        let expenses = vec![Expense::new(
            "Big repair",
            Money::from_units(2000),
            date(2025, 4, 12),
        )];

        let projection =
            calculate_monthly_projection(&[], &expenses, &[], month(2025, 3), 2);

        assert!(!projection[0].is_negative);
        assert!(projection[1].is_negative);
        assert_eq!(
            projection[1].projected_free_balance,
            Money::from_units(-2000)
        );
        assert!(!projection[2].is_negative);
    }

    #[test]
    fn test_labels_match_months() {
        let projection =
            calculate_monthly_projection(&[], &[], &[], month(2024, 12), 1);
        assert_eq!(projection[0].label, "Dec 2024");
        assert_eq!(projection[1].label, "Jan 2025");
    }

    #[test]
    fn test_projection_ignores_goals_and_cards() {
        // The forecast always runs with zero goal savings and zero card
        // installments, so a bare recurring income projects fully free.
        let incomes = vec![Income::recurring(
            "Salary",
            Money::from_units(100),
            date(2025, 1, 1),
        )];
        let projection =
            calculate_monthly_projection(&incomes, &[], &[], month(2025, 1), 0);
        assert_eq!(projection[0].projected_free_balance, Money::from_units(100));
    }
}
