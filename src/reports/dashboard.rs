//! Monthly dashboard report
//!
//! Presents one month's balance breakdown: the three top-level balances,
//! the resulting free balance, and the detail figures behind them.

use std::io::Write;

use crate::display::{
    double_separator, format_bar, format_money_colored, format_percentage, separator,
};
use crate::engine::BalanceBreakdown;
use crate::error::{FincastError, FincastResult};
use crate::models::{Month, SavingsGoal};
use crate::services::Ledger;

const GOAL_BAR_WIDTH: usize = 10;

/// Dashboard report for a single month
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub month: Month,
    pub breakdown: BalanceBreakdown,
    /// Savings goals feeding the saved balance
    pub goals: Vec<SavingsGoal>,
}

impl DashboardReport {
    /// Generate the dashboard for a month
    pub fn generate(ledger: &Ledger, month: Month) -> Self {
        Self {
            month,
            breakdown: ledger.breakdown_for(month),
            goals: ledger.goals.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let b = &self.breakdown;
        let d = &b.details;
        let money = |m: crate::models::Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Balance Dashboard — {}\n", self.month.label()));
        output.push_str(&double_separator(50));
        output.push('\n');

        output.push_str(&format!(
            "Gross balance:     {:>15}\n",
            money(b.gross_balance)
        ));
        output.push_str(&format!(
            "Committed:         {:>15}\n",
            money(b.committed_balance)
        ));
        output.push_str(&format!(
            "Saved in goals:    {:>15}\n",
            money(b.saved_balance)
        ));
        output.push_str(&separator(35));
        output.push('\n');
        output.push_str(&format!(
            "Free balance:      {:>24}\n",
            format_money_colored(b.free_balance, currency_symbol)
        ));
        output.push('\n');

        output.push_str("Details\n");
        output.push_str(&format!(
            "  Income:              {:>13}\n",
            money(d.total_income)
        ));
        output.push_str(&format!(
            "  Expenses:            {:>13}\n",
            money(d.total_expense)
        ));
        output.push_str(&format!(
            "  Essential spend:     {:>13}\n",
            money(d.recurring_essential_total)
        ));
        output.push_str(&format!(
            "  Active debts:        {:>13}\n",
            money(d.active_debt_total)
        ));
        output.push_str(&format!(
            "  Next 3mo installments:{:>12}\n",
            money(d.future_installments)
        ));

        if !self.goals.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "Goals ({} total saved)\n",
                money(d.goals_saved)
            ));
            for goal in &self.goals {
                let marker = if goal.is_reached() { "  reached" } else { "" };
                output.push_str(&format!(
                    "  {:<18} {:>12} / {:<12} {:>6}  {}{}\n",
                    goal.name,
                    money(goal.current_amount),
                    money(goal.target_amount),
                    format_percentage(goal.progress_percent()),
                    format_bar(goal.progress_percent(), 100.0, GOAL_BAR_WIDTH),
                    marker
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincastResult<()> {
        let b = &self.breakdown;
        let d = &b.details;

        writeln!(writer, "Month,Figure,Amount")
            .map_err(|e| FincastError::Export(e.to_string()))?;

        let cents = |m: crate::models::Money| m.cents() as f64 / 100.0;
        let rows = [
            ("Gross Balance", cents(b.gross_balance)),
            ("Committed Balance", cents(b.committed_balance)),
            ("Saved Balance", cents(b.saved_balance)),
            ("Free Balance", cents(b.free_balance)),
            ("Total Income", cents(d.total_income)),
            ("Total Expense", cents(d.total_expense)),
            ("Active Debt Total", cents(d.active_debt_total)),
            ("Future Installments", cents(d.future_installments)),
            ("Essential Spend", cents(d.recurring_essential_total)),
            ("Third Party", cents(d.third_party_total)),
            ("Goals Saved", cents(d.goals_saved)),
        ];

        for (name, amount) in rows {
            writeln!(writer, "{},{},{:.2}", self.month, name, amount)
                .map_err(|e| FincastError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
