//! Output sinks: CSV file or console.
//!
//! CSV mode writes a UTF-8 file with a header row taken from the record's
//! serde renames, in the fixed six-column order. Console mode prints one
//! key/value line per record.

use crate::error::Result;
use crate::record::PaperRecord;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Write records to a CSV file at `path`.
///
/// Short-circuits without creating the file when there are no records.
/// The writer is flushed before returning, so the file handle is released
/// on every exit path.
pub fn write_csv(path: &Path, records: &[PaperRecord]) -> Result<()> {
    if records.is_empty() {
        warn!(path = %path.display(), "No records to write, skipping CSV output");
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    info!(path = %path.display(), count = records.len(), "Saved CSV");
    Ok(())
}

/// Print records to stdout, one key/value line each.
pub fn print_records(records: &[PaperRecord]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
