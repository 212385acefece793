//! Export module for the transaction logger
//!
//! A single ledger can be written out in three formats:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: transactions plus totals and export metadata
//! - YAML: the JSON structure in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use crate::config::ExportFormat;
use crate::error::LedgerResult;
use crate::services::Ledger;

pub use self::csv::export_transactions_csv;
pub use json::{export_ledger_json, ExportSummary, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;

/// Write `ledger` to `writer` in the given format
pub fn export_ledger<W: Write>(
    ledger: &Ledger,
    format: ExportFormat,
    writer: &mut W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(ledger, writer),
        ExportFormat::Json => export_ledger_json(ledger, writer),
        ExportFormat::Yaml => export_ledger_yaml(ledger, writer),
    }
}
