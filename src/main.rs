use anyhow::Result;
use clap::{Parser, Subcommand};

use fincast::cli::{
    handle_config_command, handle_export_command, handle_report_command, ConfigCommands,
    ExportCommands, ReportCommands,
};
use fincast::config::{paths::FincastPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "fincast",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance tracker with balance breakdowns and cash-flow forecasts",
    long_about = "Fincast tracks incomes, expenses, debts, savings goals, and \
                  credit-card purchases, and shows how much of a month's money \
                  is gross, committed, saved, and actually free to spend."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance and forecast reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export ledger records to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show or update configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FincastPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Report(cmd) => handle_report_command(&paths, &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&paths, cmd)?,
        Commands::Config(cmd) => handle_config_command(&paths, &settings, cmd)?,
    }

    Ok(())
}
