//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::FincastPaths;
use crate::error::FincastResult;
use crate::export::{export_debts_csv, export_expenses_csv, export_incomes_csv};

use super::report::load_ledger;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export income records to CSV
    Incomes {
        /// Ledger snapshot file (defaults to the configured ledger path)
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export expense records to CSV
    Expenses {
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export debt records to CSV
    Debts {
        #[arg(short, long)]
        ledger: Option<PathBuf>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(paths: &FincastPaths, cmd: ExportCommands) -> FincastResult<()> {
    match cmd {
        ExportCommands::Incomes { ledger, output } => {
            let ledger = load_ledger(paths, ledger)?;
            write_out(output, |mut w| export_incomes_csv(&ledger, &mut w))
        }
        ExportCommands::Expenses { ledger, output } => {
            let ledger = load_ledger(paths, ledger)?;
            write_out(output, |mut w| export_expenses_csv(&ledger, &mut w))
        }
        ExportCommands::Debts { ledger, output } => {
            let ledger = load_ledger(paths, ledger)?;
            write_out(output, |mut w| export_debts_csv(&ledger, &mut w))
        }
    }
}

/// Run an export against a file or stdout
fn write_out<F>(output: Option<PathBuf>, export: F) -> FincastResult<()>
where
    F: FnOnce(&mut dyn Write) -> FincastResult<()>,
{
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            export(&mut writer)?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            export(&mut lock)
        }
    }
}
