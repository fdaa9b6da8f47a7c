//! Proportional ASCII bar charts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use eda_model::FrequencyTable;

/// Widest bar, in characters.
const MAX_BAR_WIDTH: f64 = 50.0;

/// Bar length for one count, scaled against the table maximum.
///
/// `round(count / max_count * 50)`, with a floor of one character for any
/// nonzero count so small categories stay visible.
pub fn bar_length(count: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    let scaled = (count as f64 / max_count as f64 * MAX_BAR_WIDTH).round() as usize;
    if count > 0 && scaled == 0 { 1 } else { scaled }
}

/// Render a table as one `label: ### (count)` line per entry.
pub fn render_bar_chart(table: &FrequencyTable) -> String {
    let max_count = table.max_count();
    let mut out = String::new();
    for entry in &table.entries {
        let bar = "#".repeat(bar_length(entry.count, max_count));
        out.push_str(&format!("{}: {} ({})\n", entry.label, bar, entry.count));
    }
    out
}

/// Write the rendered chart to `path`. An empty table writes nothing.
pub fn write_bar_chart(path: &Path, table: &FrequencyTable) -> Result<()> {
    if table.entries.is_empty() {
        return Ok(());
    }
    fs::write(path, render_bar_chart(table))
        .with_context(|| format!("write bar chart: {}", path.display()))
}
