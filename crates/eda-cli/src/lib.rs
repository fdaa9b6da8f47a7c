//! Library components of the listing profiler CLI.

pub mod logging;
pub mod pipeline;
pub mod summary;
