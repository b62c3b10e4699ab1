//! CLI commands for reports
//!
//! Bridges clap argument parsing to the dashboard and forecast reports.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{FincastPaths, Settings};
use crate::error::{FincastError, FincastResult};
use crate::models::Month;
use crate::reports::{DashboardReport, ForecastReport};
use crate::services::Ledger;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the balance dashboard for a month
    #[command(alias = "dashboard")]
    Summary {
        /// Month to report on (e.g., "2025-03"; defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Ledger snapshot file (defaults to the configured ledger path)
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the multi-month cash-flow forecast
    Forecast {
        /// Starting month (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// How many months ahead to project (defaults to the configured horizon)
        #[arg(short = 'n', long)]
        months: Option<u32>,

        /// Ledger snapshot file (defaults to the configured ledger path)
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        /// Export to CSV file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    paths: &FincastPaths,
    settings: &Settings,
    cmd: ReportCommands,
) -> FincastResult<()> {
    match cmd {
        ReportCommands::Summary {
            month,
            ledger,
            output,
        } => {
            let ledger = load_ledger(paths, ledger)?;
            let month = resolve_month(month)?;
            let report = DashboardReport::generate(&ledger, month);

            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    report.export_csv(&mut writer)?;
                    println!("Dashboard exported to {}", path.display());
                }
                None => print!("{}", report.format_terminal(&settings.currency_symbol)),
            }
            Ok(())
        }
        ReportCommands::Forecast {
            month,
            months,
            ledger,
            output,
        } => {
            let ledger = load_ledger(paths, ledger)?;
            let start = resolve_month(month)?;
            let months_ahead = months.unwrap_or(settings.forecast_months);
            let report = ForecastReport::generate(&ledger, start, months_ahead);

            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    report.export_csv(&mut writer)?;
                    println!("Forecast exported to {}", path.display());
                }
                None => print!("{}", report.format_terminal(&settings.currency_symbol)),
            }
            Ok(())
        }
    }
}

/// Load the ledger from an explicit path or the configured default
pub(crate) fn load_ledger(
    paths: &FincastPaths,
    explicit: Option<PathBuf>,
) -> FincastResult<Ledger> {
    let path = explicit.unwrap_or_else(|| paths.ledger_file());
    Ledger::load(&path)
}

/// Parse a month argument, defaulting to the current calendar month
pub(crate) fn resolve_month(arg: Option<String>) -> FincastResult<Month> {
    match arg {
        Some(s) => Month::parse(&s).map_err(|e| FincastError::Parse(e.to_string())),
        None => Ok(Month::containing(chrono::Local::now().date_naive())),
    }
}
