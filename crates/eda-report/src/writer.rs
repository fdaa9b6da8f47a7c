//! Per-field report writing.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use eda_model::FrequencyTable;

use crate::bar_chart::write_bar_chart;
use crate::freq_csv::write_frequency_csv;
use crate::paths::ReportPaths;

/// Write the frequency file and bar chart for one categorical field.
///
/// Returns the written paths. An empty table produces no files.
pub fn write_categorical_report(paths: &ReportPaths, table: &FrequencyTable) -> Result<Vec<PathBuf>> {
    write_field_report(
        table,
        "category",
        paths.categorical_csv(&table.field),
        paths.categorical_chart(&table.field),
    )
}

/// Write the bucket file and bar chart for one numeric field.
pub fn write_numeric_report(paths: &ReportPaths, table: &FrequencyTable) -> Result<Vec<PathBuf>> {
    write_field_report(
        table,
        "range",
        paths.numeric_csv(&table.field),
        paths.numeric_chart(&table.field),
    )
}

fn write_field_report(
    table: &FrequencyTable,
    label_header: &str,
    csv_path: PathBuf,
    chart_path: PathBuf,
) -> Result<Vec<PathBuf>> {
    if table.entries.is_empty() {
        debug!(field = %table.field, "no data, report skipped");
        return Ok(Vec::new());
    }
    write_frequency_csv(&csv_path, label_header, table)?;
    write_bar_chart(&chart_path, table)?;
    debug!(
        field = %table.field,
        entry_count = table.entries.len(),
        csv = %csv_path.display(),
        chart = %chart_path.display(),
        "report written"
    );
    Ok(vec![csv_path, chart_path])
}
