use std::collections::BTreeMap;

/// One data row: field name mapped to its raw string value.
///
/// Records are built once at load time and never mutated afterwards. Every
/// cell is kept as the raw string from the source file; no type coercion
/// happens here.
#[derive(Debug, Clone, Default)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw value for a field, or `None` when the column is absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Raw value for a field, treating an absent column as an empty string.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
