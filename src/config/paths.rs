//! Path management for the transaction logger
//!
//! Ledgers live as flat files in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `TXLOG_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "TXLOG_DATA_DIR";

/// Suffix appended to the lowercased ledger name to form its file name
pub const LEDGER_FILE_SUFFIX: &str = "_transactions.json";

/// Manages all paths used by the transaction logger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding ledger files and settings
    data_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the data directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                LedgerError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { data_dir })
    }

    /// Create LedgerPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("txlog.json")
    }

    /// Get the storage location of a named ledger
    ///
    /// The name is lowercased, so names differing only in case share a file.
    ///
    /// # Errors
    ///
    /// Returns a validation error for names that are empty or would leave
    /// the data directory.
    pub fn ledger_file(&self, name: &str) -> Result<PathBuf, LedgerError> {
        validate_ledger_name(name)?;
        Ok(self
            .data_dir
            .join(format!("{}{}", name.to_lowercase(), LEDGER_FILE_SUFFIX)))
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

/// A ledger name becomes part of a file name in the data directory
fn validate_ledger_name(name: &str) -> Result<(), LedgerError> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Ledger name cannot be empty".into(),
        ));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(LedgerError::Validation(format!(
            "Invalid ledger name '{}': path separators are not allowed",
            name
        )));
    }
    Ok(())
}
