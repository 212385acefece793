//! `init` and `config` commands

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Write the current settings (defaults on first run) to the settings file
pub fn handle_init_command(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    println!(
        "Initializing transaction logger at: {}",
        paths.data_dir().display()
    );
    settings.save(paths)?;
    println!("Settings written to: {}", paths.settings_file().display());
    Ok(())
}

/// Print resolved paths and settings
pub fn handle_config_command(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    println!("Transaction Logger Configuration");
    println!("================================");
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:       {}", settings.currency_symbol);
    println!("  Default export format: {}", settings.default_export_format);
    Ok(())
}
