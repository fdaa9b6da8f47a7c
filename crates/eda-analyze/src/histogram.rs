//! Sturges-rule histogram binning.

use eda_model::{FrequencyEntry, FrequencyTable};

/// Sturges' rule: bucket count for a sample of size `n`.
///
/// `k = ceil(log2(n) + 1)`, with a practical floor of one bucket.
pub fn sturges_bucket_count(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let k = ((n as f64).log2() + 1.0).ceil() as usize;
    k.max(1)
}

/// Bucket parsed values into `k` equal-width ranges and count occurrences.
///
/// Returns `None` when `values` is empty: a field with no parseable data is
/// skipped, not an error. Buckets partition `[min, max]` into half-open
/// intervals except the last, which is closed on the right: the index
/// `floor((v - min) / width)` is clamped to `[0, k - 1]` so the maximum
/// lands in the last bucket. When all values are identical the table is a
/// single closed bucket holding every value.
pub fn sturges_histogram(field: &str, values: &[f64]) -> Option<FrequencyTable> {
    if values.is_empty() {
        return None;
    }
    let n = values.len();
    let k = sturges_bucket_count(n);
    let min_v = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_v = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min_v == max_v {
        let entry = FrequencyEntry::new(format!("[{min_v:.2}, {max_v:.2}]"), n);
        return Some(FrequencyTable::new(field, vec![entry]));
    }
    let width = (max_v - min_v) / k as f64;
    let mut counts = vec![0usize; k];
    for &value in values {
        let idx = (((value - min_v) / width) as usize).min(k - 1);
        counts[idx] += 1;
    }
    let entries = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| {
            let lo = min_v + idx as f64 * width;
            let hi = min_v + (idx + 1) as f64 * width;
            FrequencyEntry::new(format!("[{lo:.2}, {hi:.2})"), count)
        })
        .collect();
    Some(FrequencyTable::new(field, entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sturges_rule_for_100_values_is_8() {
        assert_eq!(sturges_bucket_count(100), 8);
    }

    #[test]
    fn sturges_rule_floors_at_one() {
        assert_eq!(sturges_bucket_count(1), 1);
        assert_eq!(sturges_bucket_count(0), 1);
    }

    #[test]
    fn empty_values_produce_no_table() {
        assert_eq!(sturges_histogram("beds", &[]), None);
    }

    #[test]
    fn counts_sum_to_value_count() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let table = sturges_histogram("price", &values).expect("table");
        assert_eq!(table.entries.len(), 8);
        assert_eq!(table.total(), 100);
    }

    #[test]
    fn maximum_value_lands_in_last_bucket() {
        let values = [0.0, 1.0, 2.0, 3.0];
        // n = 4 -> k = 3, width = 1: the maximum clamps into bucket 2
        // alongside 2.0 instead of overflowing past the end.
        let table = sturges_histogram("beds", &values).expect("table");
        assert_eq!(table.entries.len(), 3);
        assert_eq!(table.entries.last().expect("last bucket").count, 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn identical_values_share_a_single_bucket() {
        let values = [3.0; 7];
        let table = sturges_histogram("beds", &values).expect("table");
        assert_eq!(table.entries.len(), 1);
        assert_eq!(table.entries[0].count, 7);
        assert_eq!(table.entries[0].label, "[3.00, 3.00]");
    }

    #[test]
    fn labels_are_ordered_half_open_ranges() {
        let values = [0.0, 5.0, 10.0];
        let table = sturges_histogram("accommodates", &values).expect("table");
        assert_eq!(table.entries[0].label, "[0.00, 3.33)");
        let labels: Vec<&str> = table.entries.iter().map(|e| e.label.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels, deduped);
    }
}
