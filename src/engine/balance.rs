//! Monthly balance breakdown
//!
//! Derives the three balance figures for a month from raw ledger records:
//! gross (income minus expense), committed (near-term obligations), and
//! free (what is left after committed and saved money are set aside).

use crate::models::{Debt, Expense, Income, Money, Month};

/// How many months ahead the informational future-installment figure looks
const FUTURE_INSTALLMENT_MONTHS: u32 = 3;

/// Detail figures behind the top-level balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BalanceDetails {
    /// Sum of incomes counted for the month
    pub total_income: Money,
    /// Sum of expenses dated within the month
    pub total_expense: Money,
    /// Sum of installment amounts over debts active in the month
    pub active_debt_total: Money,
    /// Installment obligations falling due in the next three months.
    /// Informational only: never subtracted from the balances.
    pub future_installments: Money,
    /// Portion of the month's expenses tagged as essential/fixed spend
    pub recurring_essential_total: Money,
    /// Reserved placeholder, always zero in the current design
    pub third_party_total: Money,
    /// Money currently held in savings goals
    pub goals_saved: Money,
}

/// The three-tier balance breakdown for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BalanceBreakdown {
    /// Total income minus total expense
    pub gross_balance: Money,
    /// Money already earmarked: active debt installments, card
    /// installments, and the third-party placeholder
    pub committed_balance: Money,
    /// Money held in savings goals, unavailable for free spending
    pub saved_balance: Money,
    /// Gross minus committed minus saved
    pub free_balance: Money,
    pub details: BalanceDetails,
}

/// Compute the balance breakdown for a month
///
/// `goals_saved` and `card_installments_total` are aggregates supplied by
/// the goals and credit-card collaborators (see [`crate::services`]); pass
/// zero when those subsystems are not in play.
///
/// Filtering rules:
/// - A one-off income counts if its date falls within the month; a
///   recurring income counts from its first occurrence month onward.
/// - An expense counts if its date falls within the month. Installment and
///   recurring expenses must already be expanded into per-month records.
/// - A debt created after the month's end is ignored. Installment debts are
///   active while fewer whole 30-day units have elapsed since creation than
///   they have installments; other debts are always active once created.
pub fn calculate_balances(
    incomes: &[Income],
    expenses: &[Expense],
    debts: &[Debt],
    month: Month,
    goals_saved: Money,
    card_installments_total: Money,
) -> BalanceBreakdown {
    let total_income: Money = incomes
        .iter()
        .filter(|i| i.counts_in(month))
        .map(|i| i.amount)
        .sum();

    let month_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .collect();

    let total_expense: Money = month_expenses.iter().map(|e| e.amount).sum();

    let recurring_essential_total: Money = month_expenses
        .iter()
        .filter(|e| e.is_essential())
        .map(|e| e.amount)
        .sum();

    let active_debt_total: Money = debts
        .iter()
        .filter(|d| d.is_active_in(month))
        .map(|d| d.installment_or_zero())
        .sum();

    // Installments due in the next three months. The 0-based offset over
    // that window is checked against the debt's remaining count, so a debt
    // with one installment left contributes only to the first month.
    let mut future_installments = Money::zero();
    for offset in 0..FUTURE_INSTALLMENT_MONTHS {
        for debt in debts.iter().filter(|d| d.is_installment) {
            if offset < debt.remaining_installments() {
                future_installments += debt.installment_or_zero();
            }
        }
    }

    let third_party_total = Money::zero();

    let gross_balance = total_income - total_expense;
    let committed_balance = active_debt_total + third_party_total + card_installments_total;
    let saved_balance = goals_saved;
    let free_balance = gross_balance - committed_balance - saved_balance;

    BalanceBreakdown {
        gross_balance,
        committed_balance,
        saved_balance,
        free_balance,
        details: BalanceDetails {
            total_income,
            total_expense,
            active_debt_total,
            future_installments,
            recurring_essential_total,
            third_party_total,
            goals_saved,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseTag;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> Month {
        Month::new(y, m).unwrap()
    }

    #[test]
    fn test_empty_inputs_yield_zeroed_breakdown() {
        let breakdown = calculate_balances(
            &[],
            &[],
            &[],
            month(2025, 3),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.gross_balance, Money::zero());
        assert_eq!(breakdown.committed_balance, Money::zero());
        assert_eq!(breakdown.saved_balance, Money::zero());
        assert_eq!(breakdown.free_balance, Money::zero());
        assert_eq!(breakdown.details.total_income, Money::zero());
        assert_eq!(breakdown.details.total_expense, Money::zero());
        assert_eq!(breakdown.details.active_debt_total, Money::zero());
        assert_eq!(breakdown.details.future_installments, Money::zero());
        assert_eq!(breakdown.details.recurring_essential_total, Money::zero());
        assert_eq!(breakdown.details.third_party_total, Money::zero());
    }

    #[test]
    fn test_recurring_income_minus_expense_scenario() {
        // Recurring 5000 income from March, 1200 expense in March,
        // 300 saved in goals: gross 3800, committed 0, free 3500.
        let incomes = vec![Income::recurring(
            "Salary",
            Money::from_units(5000),
            date(2025, 3, 1),
        )];
        let expenses = vec![Expense::new(
            "Rent",
            Money::from_units(1200),
            date(2025, 3, 10),
        )];

        let breakdown = calculate_balances(
            &incomes,
            &expenses,
            &[],
            month(2025, 3),
            Money::from_units(300),
            Money::zero(),
        );

        assert_eq!(breakdown.gross_balance, Money::from_units(3800));
        assert_eq!(breakdown.committed_balance, Money::zero());
        assert_eq!(breakdown.saved_balance, Money::from_units(300));
        assert_eq!(breakdown.free_balance, Money::from_units(3500));
    }

    #[test]
    fn test_free_balance_identity_holds() {
        let incomes = vec![
            Income::recurring("Salary", Money::from_units(4000), date(2025, 1, 1)),
            Income::new("Bonus", Money::from_units(750), date(2025, 3, 20)),
        ];
        let expenses = vec![
            Expense::tagged(
                "Rent",
                Money::from_units(1500),
                date(2025, 3, 5),
                ExpenseTag::Essential,
            ),
            Expense::new("Dining", Money::from_cents(2375), date(2025, 3, 18)),
        ];
        let debts = vec![Debt::installment(
            "Car loan",
            Money::from_units(9000),
            Money::from_units(450),
            24,
            date(2024, 6, 1),
        )];

        let breakdown = calculate_balances(
            &incomes,
            &expenses,
            &debts,
            month(2025, 3),
            Money::from_units(200),
            Money::from_cents(12050),
        );

        assert_eq!(
            breakdown.free_balance,
            breakdown.gross_balance - breakdown.committed_balance - breakdown.saved_balance
        );
    }

    #[test]
    fn test_one_off_income_outside_month_not_counted() {
        let incomes = vec![Income::new(
            "Gig",
            Money::from_units(500),
            date(2025, 2, 28),
        )];

        let breakdown = calculate_balances(
            &incomes,
            &[],
            &[],
            month(2025, 3),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.details.total_income, Money::zero());
    }

    #[test]
    fn test_recurring_income_not_counted_before_first_month() {
        let incomes = vec![Income::recurring(
            "Salary",
            Money::from_units(5000),
            date(2025, 3, 1),
        )];

        let breakdown = calculate_balances(
            &incomes,
            &[],
            &[],
            month(2025, 2),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.details.total_income, Money::zero());
    }

    #[test]
    fn test_installment_debt_active_in_second_month() {
        let debts = vec![Debt::installment(
            "Loan",
            Money::from_units(900),
            Money::from_units(300),
            3,
            date(2025, 1, 1),
        )];

        let breakdown = calculate_balances(
            &[],
            &[],
            &debts,
            month(2025, 2),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.details.active_debt_total, Money::from_units(300));
        assert_eq!(breakdown.committed_balance, Money::from_units(300));
    }

    #[test]
    fn test_installment_debt_inactive_after_schedule() {
        let debts = vec![Debt::installment(
            "Loan",
            Money::from_units(900),
            Money::from_units(300),
            3,
            date(2025, 1, 1),
        )];

        let breakdown = calculate_balances(
            &[],
            &[],
            &debts,
            month(2025, 5),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.details.active_debt_total, Money::zero());
    }

    #[test]
    fn test_debt_without_installment_amount_counts_zero() {
        let mut debt = Debt::recurring("Informal loan", Money::from_units(100), date(2025, 1, 1));
        debt.installment_amount = None;

        let breakdown = calculate_balances(
            &[],
            &[],
            &[debt],
            month(2025, 2),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.details.active_debt_total, Money::zero());
    }

    #[test]
    fn test_future_installments_respects_remaining_count() {
        // 5 installments, 3 already paid: 2 remain, so only the first two
        // of the three forecast months are covered.
        let mut debt = Debt::installment(
            "Fridge",
            Money::from_units(1000),
            Money::from_units(200),
            5,
            date(2025, 1, 10),
        );
        debt.current_installment = Some(3);

        let breakdown = calculate_balances(
            &[],
            &[],
            &[debt],
            month(2025, 3),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(
            breakdown.details.future_installments,
            Money::from_units(400)
        );
    }

    #[test]
    fn test_future_installments_are_informational_only() {
        let debt = Debt::installment(
            "Fridge",
            Money::from_units(1000),
            Money::from_units(200),
            5,
            date(2025, 1, 10),
        );

        let breakdown = calculate_balances(
            &[],
            &[],
            &[debt],
            month(2025, 2),
            Money::zero(),
            Money::zero(),
        );

        // Committed carries only the current month's installment; the
        // future figure lives in the details alone.
        assert_eq!(breakdown.committed_balance, Money::from_units(200));
        assert_eq!(
            breakdown.details.future_installments,
            Money::from_units(600)
        );
    }

    #[test]
    fn test_essential_expenses_totaled_separately() {
        let expenses = vec![
            Expense::tagged(
                "Rent",
                Money::from_units(1500),
                date(2025, 3, 1),
                ExpenseTag::Essential,
            ),
            Expense::tagged(
                "Utilities",
                Money::from_units(200),
                date(2025, 3, 7),
                ExpenseTag::Essential,
            ),
            Expense::tagged(
                "Concert",
                Money::from_units(120),
                date(2025, 3, 15),
                ExpenseTag::Discretionary,
            ),
        ];

        let breakdown = calculate_balances(
            &[],
            &expenses,
            &[],
            month(2025, 3),
            Money::zero(),
            Money::zero(),
        );

        assert_eq!(breakdown.details.total_expense, Money::from_units(1820));
        assert_eq!(
            breakdown.details.recurring_essential_total,
            Money::from_units(1700)
        );
    }

    #[test]
    fn test_card_installments_feed_committed_balance() {
        let breakdown = calculate_balances(
            &[],
            &[],
            &[],
            month(2025, 3),
            Money::zero(),
            Money::from_units(250),
        );

        assert_eq!(breakdown.committed_balance, Money::from_units(250));
        assert_eq!(breakdown.free_balance, Money::from_units(-250));
    }

    #[test]
    fn test_idempotence() {
        let incomes = vec![Income::recurring(
            "Salary",
            Money::from_units(5000),
            date(2025, 1, 1),
        )];
        let expenses = vec![Expense::new(
            "Groceries",
            Money::from_units(400),
            date(2025, 3, 2),
        )];
        let debts = vec![Debt::installment(
            "Loan",
            Money::from_units(900),
            Money::from_units(300),
            3,
            date(2025, 1, 1),
        )];

        let first = calculate_balances(
            &incomes,
            &expenses,
            &debts,
            month(2025, 3),
            Money::from_units(100),
            Money::from_units(50),
        );
        let second = calculate_balances(
            &incomes,
            &expenses,
            &debts,
            month(2025, 3),
            Money::from_units(100),
            Money::from_units(50),
        );

        assert_eq!(first, second);
    }
}
