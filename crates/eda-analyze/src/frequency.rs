//! Categorical frequency counting.

use std::collections::HashMap;

use eda_model::{FrequencyEntry, FrequencyTable, MISSING_LABEL, Record};

/// Count occurrences of each distinct value of one categorical field.
///
/// Empty or missing values are counted under the `"NA"` sentinel, so the
/// table total always equals the record count. Values are compared as exact
/// strings: no trimming, no case normalization. Entries come back ordered by
/// descending count with ties in first-encounter order.
pub fn categorical_frequencies(records: &[Record], field: &str) -> FrequencyTable {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for record in records {
        let raw = record.get_or_empty(field);
        let label = if raw.is_empty() { MISSING_LABEL } else { raw };
        match index.get(label) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                index.insert(label.to_string(), entries.len());
                entries.push(FrequencyEntry::new(label, 1));
            }
        }
    }
    // Stable sort keeps first-encounter order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    FrequencyTable::new(field, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(field: &str, value: &str) -> Record {
        [(field.to_string(), value.to_string())].into_iter().collect()
    }

    #[test]
    fn counts_sum_to_record_count() {
        let records: Vec<Record> = ["a", "b", "a", "", "c", "a"]
            .iter()
            .map(|value| record("room_type", value))
            .collect();
        let table = categorical_frequencies(&records, "room_type");
        assert_eq!(table.total(), records.len());
    }

    #[test]
    fn missing_values_map_to_na() {
        let records = vec![record("room_type", ""), Record::default()];
        let table = categorical_frequencies(&records, "room_type");
        assert_eq!(table.entries.len(), 1);
        assert_eq!(table.entries[0].label, MISSING_LABEL);
        assert_eq!(table.entries[0].count, 2);
    }

    #[test]
    fn orders_by_descending_count_then_first_encounter() {
        let records: Vec<Record> = ["b", "a", "b", "a", "c"]
            .iter()
            .map(|value| record("kind", value))
            .collect();
        let table = categorical_frequencies(&records, "kind");
        let labels: Vec<&str> = table.entries.iter().map(|e| e.label.as_str()).collect();
        // "b" and "a" tie at 2; "b" was seen first.
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn values_are_compared_exactly() {
        let records = vec![record("kind", "Loft"), record("kind", "loft ")];
        let table = categorical_frequencies(&records, "kind");
        assert_eq!(table.entries.len(), 2);
    }
}
