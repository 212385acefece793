use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use transaction_logger::cli::{
    handle_config_command, handle_export_command, handle_init_command, handle_ledger_command,
    ExportArgs, LedgerCommands,
};
use transaction_logger::config::{LedgerPaths, Settings};

/// Environment variable holding the log filter
const LOG_ENV: &str = "TXLOG_LOG";

#[derive(Parser)]
#[command(
    name = "txlog",
    version,
    about = "Record income and expense transactions in named ledgers",
    long_about = "txlog keeps named ledgers of income and expense transactions as JSON \
                  files in the data directory ($TXLOG_DATA_DIR, or the current \
                  directory) and reports per-ledger and per-category totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Export a ledger as CSV, JSON or YAML
    Export(ExportArgs),

    /// Write the settings file to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Ledger(cmd) => handle_ledger_command(&paths, &settings, cmd)?,
        Commands::Export(args) => handle_export_command(&paths, &settings, args)?,
        Commands::Init => handle_init_command(&paths, &settings)?,
        Commands::Config => handle_config_command(&paths, &settings)?,
    }

    Ok(())
}
