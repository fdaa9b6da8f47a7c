//! Data model for the univariate listing profiler.

pub mod config;
pub mod error;
pub mod record;
pub mod table;

pub use config::{AnalysisConfig, NumericField, NumericParser};
pub use error::{EdaError, Result};
pub use record::Record;
pub use table::{FrequencyEntry, FrequencyTable, MISSING_LABEL};
