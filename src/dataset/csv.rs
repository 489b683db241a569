//! CSV rendering for the threat dataset.

use std::fmt::Write;
use std::path::Path;

use super::record::ThreatRecord;
use crate::error::Result;

/// CSV header line naming the two columns.
pub const CSV_HEADER: &str = "ThreatID,ThreatScore";

/// Render records as CSV text.
///
/// Header line, then one `<id>,<score>` line per record in input order,
/// `\n` line endings with a trailing newline after the last row.
pub fn render(records: &[ThreatRecord]) -> String {
    // Longest data line is "10000,0.0\n" at 10 bytes.
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 10);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        // Writing into a String is infallible.
        let _ = writeln!(out, "{},{}", record.id, record.score);
    }

    out
}

/// Render records and write the CSV to a file.
pub fn write_file(path: &Path, records: &[ThreatRecord]) -> Result<()> {
    std::fs::write(path, render(records).as_bytes())?;
    Ok(())
}
