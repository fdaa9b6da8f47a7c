use serde::{Deserialize, Serialize};

/// Label substituted for missing or empty categorical values.
pub const MISSING_LABEL: &str = "NA";

/// One (label, count) pair of a frequency or bucket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
}

impl FrequencyEntry {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// A per-field frequency table.
///
/// Used both for categorical fields (entries ordered by descending count,
/// ties in first-encounter order) and for numeric bucket tables (entries in
/// ascending bucket order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    pub field: String,
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn new(field: impl Into<String>, entries: Vec<FrequencyEntry>) -> Self {
        Self {
            field: field.into(),
            entries,
        }
    }

    /// Sum of all entry counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Largest entry count, or zero for an empty table.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).max().unwrap_or(0)
    }

    /// The first `limit` entries in table order.
    pub fn top(&self, limit: usize) -> &[FrequencyEntry] {
        &self.entries[..self.entries.len().min(limit)]
    }
}
