//! Pure univariate computations: value parsing, frequency counting, and
//! Sturges-rule binning. No I/O happens in this crate.

pub mod frequency;
pub mod histogram;
pub mod parse;

pub use frequency::categorical_frequencies;
pub use histogram::{sturges_bucket_count, sturges_histogram};
pub use parse::{parse_numeric_run, parse_plain, parse_price, parse_value, parsed_values};
