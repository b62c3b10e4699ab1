//! CLI commands for configuration
//!
//! Shows the resolved paths and current settings, and persists updated
//! settings through the settings load/save boundary.

use clap::Subcommand;

use crate::config::{FincastPaths, Settings};
use crate::error::{FincastError, FincastResult};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Update configuration values and save them to disk
    Set {
        /// Currency symbol used in reports (e.g., "$", "€")
        #[arg(long)]
        currency_symbol: Option<String>,

        /// Default forecast horizon in months
        #[arg(long)]
        forecast_months: Option<u32>,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &FincastPaths,
    settings: &Settings,
    cmd: ConfigCommands,
) -> FincastResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!();
            println!("Currency symbol:  {}", settings.currency_symbol);
            println!("Forecast horizon: {} months", settings.forecast_months);
            Ok(())
        }
        ConfigCommands::Set {
            currency_symbol,
            forecast_months,
        } => {
            let mut updated = settings.clone();
            apply_updates(&mut updated, currency_symbol, forecast_months)?;
            updated.save(paths)?;
            println!("Settings saved to {}", paths.settings_file().display());
            Ok(())
        }
    }
}

/// Apply `config set` arguments to a settings struct
fn apply_updates(
    settings: &mut Settings,
    currency_symbol: Option<String>,
    forecast_months: Option<u32>,
) -> FincastResult<()> {
    if currency_symbol.is_none() && forecast_months.is_none() {
        return Err(FincastError::Config(
            "Nothing to set; pass --currency-symbol or --forecast-months".into(),
        ));
    }

    if let Some(symbol) = currency_symbol {
        if symbol.is_empty() {
            return Err(FincastError::Config(
                "Currency symbol cannot be empty".into(),
            ));
        }
        settings.currency_symbol = symbol;
    }

    if let Some(months) = forecast_months {
        settings.forecast_months = months;
    }

    Ok(())
}
