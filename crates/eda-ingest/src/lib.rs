//! CSV ingestion for the listing profiler.

pub mod csv_source;

pub use csv_source::read_records;
