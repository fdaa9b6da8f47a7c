//! Output directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Output locations for categorical and numeric reports.
///
/// Directory creation is explicit one-time setup performed by the entry
/// point, so the analysis itself stays free of filesystem side effects.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub categorical_dir: PathBuf,
    pub numeric_dir: PathBuf,
}

impl ReportPaths {
    /// Create `<output_dir>/categorical` and `<output_dir>/numeric`.
    pub fn prepare(output_dir: &Path) -> Result<Self> {
        let categorical_dir = output_dir.join("categorical");
        let numeric_dir = output_dir.join("numeric");
        fs::create_dir_all(&categorical_dir)
            .with_context(|| format!("create dir: {}", categorical_dir.display()))?;
        fs::create_dir_all(&numeric_dir)
            .with_context(|| format!("create dir: {}", numeric_dir.display()))?;
        Ok(Self {
            categorical_dir,
            numeric_dir,
        })
    }

    pub fn categorical_csv(&self, field: &str) -> PathBuf {
        self.categorical_dir.join(format!("{field}_freq.csv"))
    }

    pub fn categorical_chart(&self, field: &str) -> PathBuf {
        self.categorical_dir.join(format!("{field}_freq.txt"))
    }

    pub fn numeric_csv(&self, field: &str) -> PathBuf {
        self.numeric_dir.join(format!("{field}_sturges_freq.csv"))
    }

    pub fn numeric_chart(&self, field: &str) -> PathBuf {
        self.numeric_dir.join(format!("{field}_sturges_freq.txt"))
    }
}
