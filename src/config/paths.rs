//! Path management for Fincast
//!
//! Provides XDG-compliant path resolution for configuration and ledger data.
//!
//! ## Path Resolution Order
//!
//! 1. `FINCAST_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fincast` or `~/.config/fincast`
//! 3. Windows: `%APPDATA%\fincast`

use std::path::PathBuf;

use crate::error::FincastError;

/// Manages all paths used by Fincast
#[derive(Debug, Clone)]
pub struct FincastPaths {
    /// Base directory for all Fincast data
    base_dir: PathBuf,
}

impl FincastPaths {
    /// Create a new FincastPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FincastError> {
        let base_dir = if let Ok(custom) = std::env::var("FINCAST_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FincastPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fincast/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the default ledger snapshot
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FincastError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FincastError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if Fincast has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FincastError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| FincastError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("fincast"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FincastError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FincastError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fincast"))
}
