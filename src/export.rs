//! Persistence of measurement records: CSV table and JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::{MeasurementRecord, Metric};

/// CSV header, in column order.
pub fn csv_header() -> String {
    let mut columns = vec!["Algorithm", "Size", "Type"];
    columns.extend(Metric::ALL.iter().map(|m| m.label()));
    columns.join(",")
}

/// Write `records` as CSV to any writer.
///
/// Absent counts are written as empty fields, never as `0`.
pub fn write_csv<W: Write>(mut out: W, records: &[MeasurementRecord]) -> Result<()> {
    writeln!(out, "{}", csv_header())?;

    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            csv_field(&r.algorithm),
            r.size,
            r.distribution,
            r.elapsed_ms,
            r.comparisons.map(|v| v.to_string()).unwrap_or_default(),
            r.swaps.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Export records to a CSV file at `path`.
pub fn export_csv(path: impl AsRef<Path>, records: &[MeasurementRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), records)?;
    info!(path = %path.display(), rows = records.len(), "Raw results saved");
    Ok(())
}

/// Export records to a pretty-printed JSON array at `path`.
pub fn export_json(path: impl AsRef<Path>, records: &[MeasurementRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    info!(path = %path.display(), rows = records.len(), "JSON results saved");
    Ok(())
}

/// Quote a field if it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
