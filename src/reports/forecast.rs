//! Cash-flow forecast report
//!
//! Renders the monthly projection as a table with a small bar chart of the
//! projected free balances, flagging deficit months.

use std::io::Write;

use crate::display::{format_bar, format_money_colored, separator};
use crate::engine::MonthlyProjection;
use crate::error::{FincastError, FincastResult};
use crate::models::Month;
use crate::services::Ledger;

const BAR_WIDTH: usize = 20;

/// Forecast report over a month horizon
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub start_month: Month,
    pub entries: Vec<MonthlyProjection>,
}

impl ForecastReport {
    /// Generate the forecast from a ledger
    pub fn generate(ledger: &Ledger, start_month: Month, months_ahead: u32) -> Self {
        Self {
            start_month,
            entries: ledger.forecast(start_month, months_ahead),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Cash-Flow Forecast from {}\n",
            self.start_month.label()
        ));
        output.push_str(&separator(70));
        output.push('\n');

        output.push_str(&format!(
            "{:<10} {:>14} {:>12}  {}\n",
            "Month", "Free", "Committed", "Trend"
        ));
        output.push_str(&separator(70));
        output.push('\n');

        let max_free = self
            .entries
            .iter()
            .map(|e| e.projected_free_balance.cents())
            .max()
            .unwrap_or(0) as f64;

        for entry in &self.entries {
            let bar = format_bar(
                entry.projected_free_balance.cents() as f64,
                max_free,
                BAR_WIDTH,
            );
            let flag = if entry.is_negative { " (deficit)" } else { "" };

            output.push_str(&format!(
                "{:<10} {:>23} {:>12}  {}{}\n",
                entry.label,
                format_money_colored(entry.projected_free_balance, currency_symbol),
                entry.committed_amount.format_with_symbol(currency_symbol),
                bar,
                flag
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincastResult<()> {
        writeln!(writer, "Month,Label,Projected Free,Committed,Deficit")
            .map_err(|e| FincastError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{}",
                entry.month,
                entry.label,
                entry.projected_free_balance.cents() as f64 / 100.0,
                entry.committed_amount.cents() as f64 / 100.0,
                entry.is_negative
            )
            .map_err(|e| FincastError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
