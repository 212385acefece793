//! CLI command for ledger export
//!
//! Writes one ledger to stdout or to a file in CSV, JSON or YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::{ExportFormat, LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_ledger;
use crate::services::Ledger;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Ledger name
    pub ledger: String,

    /// Export format (csv, json, yaml); defaults to the configured format
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    paths: &LedgerPaths,
    settings: &Settings,
    args: ExportArgs,
) -> LedgerResult<()> {
    let ledger = Ledger::open_in(paths, settings, &args.ledger)?;
    let format = args.format.unwrap_or(settings.default_export_format);

    match args.output {
        Some(output) => {
            let file = File::create(&output).map_err(|e| {
                LedgerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export_ledger(&ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;

            println!(
                "{} transaction(s) exported to: {}",
                ledger.len(),
                output.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            export_ledger(&ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file_uses_configured_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_data_dir(temp_dir.path());
        let settings = Settings {
            default_export_format: ExportFormat::Json,
            ..Settings::default()
        };

        let mut ledger = Ledger::open_in(&paths, &settings, "Personal").unwrap();
        ledger
            .add(Money::from_cents(4000), "food", TransactionType::Expense)
            .unwrap();

        let output = temp_dir.path().join("out.json");
        handle_export_command(
            &paths,
            &settings,
            ExportArgs {
                ledger: "Personal".into(),
                format: None,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["summary"]["transaction_count"], 1);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_data_dir(temp_dir.path());

        let err = handle_export_command(
            &paths,
            &Settings::default(),
            ExportArgs {
                ledger: "Personal".into(),
                format: Some(ExportFormat::Csv),
                output: Some(temp_dir.path().join("missing").join("out.csv")),
            },
        )
        .unwrap_err();

        assert!(matches!(err, LedgerError::Export(_)));
    }
}
