//! Two-column delimited frequency files.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};

use eda_model::{FrequencyEntry, FrequencyTable};

/// Write a frequency table as two-column CSV with the given label header
/// (`"category"` for categorical fields, `"range"` for bucket tables).
pub fn write_frequency_csv(path: &Path, label_header: &str, table: &FrequencyTable) -> Result<()> {
    // The header is written manually because its label column varies by
    // table kind; automatic headers would add a second row of struct field
    // names on the first serialize.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record([label_header, "count"])
        .with_context(|| format!("write header: {}", path.display()))?;
    for entry in &table.entries {
        writer
            .serialize(entry)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

/// Read a frequency file back into (label, count) pairs in file order.
pub fn read_frequency_csv(path: &Path, field: &str) -> Result<FrequencyTable> {
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    // The label header varies by table kind ("category" or "range"); map
    // both columns onto the entry's own field names when deserializing.
    let headers = csv::StringRecord::from(vec!["label", "count"]);
    let mut entries = Vec::new();
    for result in reader.records() {
        let row = result.with_context(|| format!("read row: {}", path.display()))?;
        let entry: FrequencyEntry = row
            .deserialize(Some(&headers))
            .with_context(|| format!("parse row in {}", path.display()))?;
        entries.push(entry);
    }
    Ok(FrequencyTable::new(field, entries))
}
