//! Report output: frequency CSV files and ASCII bar charts.

pub mod bar_chart;
pub mod freq_csv;
pub mod paths;
pub mod writer;

pub use bar_chart::{bar_length, render_bar_chart, write_bar_chart};
pub use freq_csv::{read_frequency_csv, write_frequency_csv};
pub use paths::ReportPaths;
pub use writer::{write_categorical_report, write_numeric_report};
