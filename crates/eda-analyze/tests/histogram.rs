//! Property tests for the Sturges binner invariants.

use eda_analyze::{sturges_bucket_count, sturges_histogram};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bucket_counts_sum_to_sample_size(
        values in prop::collection::vec(-1.0e6..1.0e6f64, 1..500)
    ) {
        let table = sturges_histogram("field", &values).expect("non-empty input");
        prop_assert_eq!(table.total(), values.len());
    }

    #[test]
    fn bucket_count_never_exceeds_sturges_k(
        values in prop::collection::vec(-1.0e6..1.0e6f64, 1..500)
    ) {
        let table = sturges_histogram("field", &values).expect("non-empty input");
        prop_assert!(table.entries.len() <= sturges_bucket_count(values.len()));
    }

    #[test]
    fn labels_are_distinct(
        // Integer-valued samples keep bucket widths wide enough that the
        // two-decimal labels cannot collide.
        values in prop::collection::vec(-1000..1000i32, 2..200)
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let table = sturges_histogram("field", &values).expect("non-empty input");
        let mut labels: Vec<&str> = table.entries.iter().map(|e| e.label.as_str()).collect();
        let before = labels.len();
        labels.sort_unstable();
        labels.dedup();
        prop_assert_eq!(labels.len(), before);
    }
}
