//! Integration tests for report output.

use eda_model::{FrequencyEntry, FrequencyTable};
use eda_report::{
    ReportPaths, read_frequency_csv, write_categorical_report, write_numeric_report,
    write_frequency_csv,
};
use tempfile::tempdir;

fn sample_table(field: &str) -> FrequencyTable {
    FrequencyTable::new(
        field,
        vec![
            FrequencyEntry::new("Entire home/apt", 10),
            FrequencyEntry::new("Private room", 5),
            FrequencyEntry::new("NA", 1),
        ],
    )
}

#[test]
fn frequency_csv_round_trips() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("room_type_freq.csv");
    let table = sample_table("room_type");
    write_frequency_csv(&path, "category", &table).expect("write");
    let read_back = read_frequency_csv(&path, "room_type").expect("read");
    assert_eq!(read_back, table);
}

#[test]
fn frequency_csv_has_exactly_one_header_row() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("room_type_freq.csv");
    let table = FrequencyTable::new("room_type", vec![FrequencyEntry::new("Entire home/apt", 10)]);
    write_frequency_csv(&path, "category", &table).expect("write");
    let content = std::fs::read_to_string(&path).expect("read csv");
    assert_eq!(content, "category,count\nEntire home/apt,10\n");
}

#[test]
fn round_trip_preserves_labels_with_commas() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("range.csv");
    let table = FrequencyTable::new(
        "price",
        vec![
            FrequencyEntry::new("[0.00, 50.00)", 3),
            FrequencyEntry::new("[50.00, 100.00)", 2),
        ],
    );
    write_frequency_csv(&path, "range", &table).expect("write");
    let read_back = read_frequency_csv(&path, "price").expect("read");
    assert_eq!(read_back, table);
}

#[test]
fn categorical_report_writes_csv_and_chart() {
    let dir = tempdir().expect("temp dir");
    let paths = ReportPaths::prepare(dir.path()).expect("prepare dirs");
    let written =
        write_categorical_report(&paths, &sample_table("room_type")).expect("write report");
    assert_eq!(written.len(), 2);
    let csv = std::fs::read_to_string(&written[0]).expect("read csv");
    assert!(csv.starts_with("category,count"));
    let chart = std::fs::read_to_string(&written[1]).expect("read chart");
    assert!(chart.contains(&format!("Entire home/apt: {} (10)", "#".repeat(50))));
}

#[test]
fn numeric_report_uses_sturges_naming() {
    let dir = tempdir().expect("temp dir");
    let paths = ReportPaths::prepare(dir.path()).expect("prepare dirs");
    let table = FrequencyTable::new("price", vec![FrequencyEntry::new("[0.00, 10.00)", 4)]);
    let written = write_numeric_report(&paths, &table).expect("write report");
    assert!(written[0].ends_with("numeric/price_sturges_freq.csv"));
    assert!(written[1].ends_with("numeric/price_sturges_freq.txt"));
    let csv = std::fs::read_to_string(&written[0]).expect("read csv");
    assert!(csv.starts_with("range,count"));
}

#[test]
fn empty_table_produces_no_files() {
    let dir = tempdir().expect("temp dir");
    let paths = ReportPaths::prepare(dir.path()).expect("prepare dirs");
    let empty = FrequencyTable::new("beds", Vec::new());
    let written = write_numeric_report(&paths, &empty).expect("write report");
    assert!(written.is_empty());
    assert!(!paths.numeric_csv("beds").exists());
}
