use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use eda_model::{Record, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file with a header row into one `Record` per data row.
///
/// Column names become record keys and the file's row order is preserved.
/// Every cell is kept as a raw string. A missing or unreadable file is a
/// fatal error; short rows are padded with empty strings so every record
/// carries the full column set.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let record: Record = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = row.get(idx).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        records.push(record);
    }
    debug!(
        source_file = %path.display(),
        record_count = records.len(),
        column_count = headers.len(),
        "records loaded"
    );
    Ok(records)
}
