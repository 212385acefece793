//! YAML export
//!
//! Same structure as the JSON export, behind a comment header.

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::services::Ledger;
use std::io::Write;

/// Export a ledger to YAML
pub fn export_ledger_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    let header = format!(
        "# Transaction Logger Export\n# Ledger: {}\n# Generated: {}\n# App Version: {}\n\n",
        export.ledger, export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
