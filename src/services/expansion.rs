//! Expense expansion service
//!
//! The balance engine does no recurrence handling for expenses: installment
//! and recurring expenses must be expanded into one virtual record per
//! applicable month *before* the engine sees them. This module owns that
//! contract. Debts are the opposite case — the engine expands those itself,
//! so they must never be pre-expanded here.
//!
//! Dates are snapped to each target month with the day-of-month clamped to
//! the shorter month's last day (an expense anchored on the 31st lands on
//! Feb 28).

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, ExpenseTag, InstallmentPosition, Money, Month};

/// Expand an installment purchase into per-month virtual expense records
///
/// The total is split into even cent shares with the remainder folded into
/// the first installment, so the virtual amounts sum back to `total_amount`.
/// Each record carries its 1-based position in the schedule.
pub fn expand_installment_expense(
    description: impl Into<String>,
    total_amount: Money,
    installments: u32,
    first_date: NaiveDate,
    tag: Option<ExpenseTag>,
) -> Vec<Expense> {
    let description = description.into();
    let first_month = Month::containing(first_date);
    let anchor_day = first_date.day();

    total_amount
        .split_even(installments)
        .into_iter()
        .enumerate()
        .map(|(i, amount)| {
            let month = first_month.add_months(i as i32);
            let mut expense = Expense::new(
                description.clone(),
                amount,
                month.date_with_day(anchor_day),
            );
            expense.tag = tag;
            expense.installment = Some(InstallmentPosition {
                index: i as u32 + 1,
                total: installments,
            });
            expense
        })
        .collect()
}

/// Expand a recurring expense into one record per month, from its first
/// month through `through` inclusive
///
/// Returns an empty vector when the horizon ends before the first month.
pub fn expand_recurring_expense(
    description: impl Into<String>,
    amount: Money,
    first_date: NaiveDate,
    tag: Option<ExpenseTag>,
    through: Month,
) -> Vec<Expense> {
    let description = description.into();
    let first_month = Month::containing(first_date);
    let anchor_day = first_date.day();

    let mut records = Vec::new();
    let mut month = first_month;
    while month <= through {
        let mut expense = Expense::new(
            description.clone(),
            amount,
            month.date_with_day(anchor_day),
        );
        expense.tag = tag;
        records.push(expense);
        month = month.next();
    }
    records
}
