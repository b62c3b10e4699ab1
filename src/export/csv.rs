//! CSV export functionality
//!
//! Exports ledger records to CSV format for spreadsheet use.

use std::io::Write;

use crate::error::{FincastError, FincastResult};
use crate::services::Ledger;

/// Escape a CSV field: quote it when it contains commas, quotes, or newlines
pub(crate) fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_err(e: std::io::Error) -> FincastError {
    FincastError::Export(e.to_string())
}

/// Export all income records to CSV
pub fn export_incomes_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> FincastResult<()> {
    writeln!(writer, "ID,Description,Amount,Date,Recurring").map_err(write_err)?;

    for income in &ledger.incomes {
        writeln!(
            writer,
            "{},{},{:.2},{},{}",
            income.id,
            escape_csv(&income.description),
            income.amount.cents() as f64 / 100.0,
            income.date,
            income.is_recurring
        )
        .map_err(write_err)?;
    }

    Ok(())
}

/// Export all expense records to CSV
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> FincastResult<()> {
    writeln!(writer, "ID,Description,Amount,Date,Tag,Installment").map_err(write_err)?;

    for expense in &ledger.expenses {
        let tag = match expense.tag {
            Some(t) => format!("{:?}", t),
            None => String::new(),
        };
        let installment = match expense.installment {
            Some(pos) => format!("{}/{}", pos.index, pos.total),
            None => String::new(),
        };

        writeln!(
            writer,
            "{},{},{:.2},{},{},{}",
            expense.id,
            escape_csv(&expense.description),
            expense.amount.cents() as f64 / 100.0,
            expense.date,
            tag,
            installment
        )
        .map_err(write_err)?;
    }

    Ok(())
}

/// Export all debt records to CSV
pub fn export_debts_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> FincastResult<()> {
    writeln!(
        writer,
        "ID,Description,Total,Installment Amount,Created,Is Installment,Total Installments,Current Installment"
    )
    .map_err(write_err)?;

    for debt in &ledger.debts {
        let installment_amount = debt
            .installment_amount
            .map(|a| format!("{:.2}", a.cents() as f64 / 100.0))
            .unwrap_or_default();
        let current = debt
            .current_installment
            .map(|c| c.to_string())
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{:.2},{},{},{},{},{}",
            debt.id,
            escape_csv(&debt.description),
            debt.total_amount.cents() as f64 / 100.0,
            installment_amount,
            debt.created_at,
            debt.is_installment,
            debt.total_installments,
            current
        )
        .map_err(write_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Debt, Expense, ExpenseTag, Income, Money};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_export_incomes() {
        let mut ledger = Ledger::new();
        ledger.incomes.push(Income::recurring(
            "Salary, net",
            Money::from_units(5000),
            date(2025, 3, 1),
        ));

        let mut buf = Vec::new();
        export_incomes_csv(&ledger, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("ID,Description,Amount,Date,Recurring\n"));
        assert!(out.contains("\"Salary, net\",5000.00,2025-03-01,true"));
    }

    #[test]
    fn test_export_expenses_with_tag() {
        let mut ledger = Ledger::new();
        ledger.expenses.push(Expense::tagged(
            "Rent",
            Money::from_units(1500),
            date(2025, 3, 5),
            ExpenseTag::Essential,
        ));

        let mut buf = Vec::new();
        export_expenses_csv(&ledger, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("Rent,1500.00,2025-03-05,Essential,"));
    }

    #[test]
    fn test_export_debts() {
        let mut ledger = Ledger::new();
        ledger.debts.push(Debt::installment(
            "Car loan",
            Money::from_units(900),
            Money::from_units(300),
            3,
            date(2025, 1, 1),
        ));

        let mut buf = Vec::new();
        export_debts_csv(&ledger, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("Car loan,900.00,300.00,2025-01-01,true,3,"));
    }
}
