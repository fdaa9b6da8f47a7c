//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the listing CSV into in-memory records
//! 2. **Analyze**: Count categorical frequencies, parse and bin numeric fields
//! 3. **Report**: Write frequency files and bar charts per field
//!
//! All records are loaded before analysis begins, and each field's table is
//! computed independently before any of its output is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use eda_analyze::{categorical_frequencies, parsed_values, sturges_histogram};
use eda_ingest::read_records;
use eda_model::{AnalysisConfig, FrequencyTable, Record};
use eda_report::{ReportPaths, write_categorical_report, write_numeric_report};

/// Result of a full analysis run.
#[derive(Debug)]
pub struct AnalysisResult {
    pub data_file: PathBuf,
    pub output_dir: PathBuf,
    /// Number of records loaded from the data file.
    pub record_count: usize,
    /// Categorical tables, in configured field order.
    pub categorical: Vec<FrequencyTable>,
    /// Numeric bucket tables, in configured field order. Fields with no
    /// parseable values are absent.
    pub numeric: Vec<FrequencyTable>,
    /// Paths of all files written.
    pub written: Vec<PathBuf>,
}

/// Run the full ingest -> analyze -> report pipeline.
pub fn run_analysis(data_file: &Path, output_dir: &Path) -> Result<AnalysisResult> {
    let config = AnalysisConfig::listing_defaults();
    let records = ingest(data_file)?;
    let (categorical, numeric) = analyze(&records, &config);
    let written = report(output_dir, &categorical, &numeric)?;
    Ok(AnalysisResult {
        data_file: data_file.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        record_count: records.len(),
        categorical,
        numeric,
        written,
    })
}

/// Stage 1: load the data file into memory.
fn ingest(data_file: &Path) -> Result<Vec<Record>> {
    let span = info_span!("ingest", data_file = %data_file.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records =
        read_records(data_file).with_context(|| format!("load {}", data_file.display()))?;
    info!(
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

/// Stage 2: compute every field's table. Pure computation, no I/O.
fn analyze(
    records: &[Record],
    config: &AnalysisConfig,
) -> (Vec<FrequencyTable>, Vec<FrequencyTable>) {
    let span = info_span!("analyze");
    let _guard = span.enter();
    let start = Instant::now();

    let categorical: Vec<FrequencyTable> = config
        .categorical
        .iter()
        .map(|field| {
            let table = categorical_frequencies(records, field);
            debug!(field = %field, distinct = table.entries.len(), "field counted");
            table
        })
        .collect();

    let mut numeric = Vec::new();
    for field in &config.numeric {
        let values = parsed_values(records, &field.name, field.parser);
        match sturges_histogram(&field.name, &values) {
            Some(table) => {
                debug!(
                    field = %field.name,
                    parsed_count = values.len(),
                    bucket_count = table.entries.len(),
                    "field binned"
                );
                numeric.push(table);
            }
            None => debug!(field = %field.name, "no parseable values, field skipped"),
        }
    }

    info!(
        categorical_count = categorical.len(),
        numeric_count = numeric.len(),
        duration_ms = start.elapsed().as_millis(),
        "analyze complete"
    );
    (categorical, numeric)
}

/// Stage 3: write frequency files and bar charts.
fn report(
    output_dir: &Path,
    categorical: &[FrequencyTable],
    numeric: &[FrequencyTable],
) -> Result<Vec<PathBuf>> {
    let span = info_span!("report", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let paths = ReportPaths::prepare(output_dir).context("prepare output directories")?;
    let mut written = Vec::new();
    for table in categorical {
        written.extend(
            write_categorical_report(&paths, table)
                .with_context(|| format!("report for {}", table.field))?,
        );
    }
    for table in numeric {
        written.extend(
            write_numeric_report(&paths, table)
                .with_context(|| format!("report for {}", table.field))?,
        );
    }
    info!(
        file_count = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "report complete"
    );
    Ok(written)
}
