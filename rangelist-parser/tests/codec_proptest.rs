//! Property-based tests for the range codec
//!
//! These tests check the round trips between the three representations (text, intervals
//! and flat integers) and that compression is stable once applied.

use proptest::prelude::*;
use rangelist_parser::range::{
    compress, flatten, parse_to_flat_list, parse_to_intervals, serialize_all, Interval,
};

/// Generate a well-formed interval (start <= end)
fn interval_strategy() -> impl Strategy<Value = Interval> {
    prop_oneof![
        (-1_000i64..1_000).prop_map(Interval::single),
        (-1_000i64..1_000, 0i64..50).prop_map(|(start, len)| Interval::new(start, start + len)),
        // Extremes, to make sure the sign handling survives big literals
        (any::<i64>(), any::<i64>())
            .prop_map(|(a, b)| Interval::new(a.min(b), a.max(b))),
    ]
}

/// Generate ascending, duplicate-free integers
fn ascending_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-500i64..500, 0..60).prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

/// Generate text made of filler with optional short numbers in between
fn noisy_text_strategy() -> impl Strategy<Value = (String, bool)> {
    prop::collection::vec(("[a-z ,;\\-]{1,3}", prop::option::of("[0-9]{1,5}")), 0..10).prop_map(
        |parts| {
            let has_number = parts.iter().any(|(_, digits)| digits.is_some());
            let text: String = parts
                .into_iter()
                .map(|(filler, digits)| format!("{}{}", filler, digits.unwrap_or_default()))
                .collect();
            (text, has_number)
        },
    )
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_text_round_trip(intervals in prop::collection::vec(interval_strategy(), 1..20)) {
            let text = serialize_all(&intervals);
            let parsed = parse_to_intervals(&text).unwrap();

            prop_assert_eq!(&parsed, &intervals);
            prop_assert_eq!(serialize_all(&parsed), text);
        }

        #[test]
        fn test_flat_list_round_trip_on_canonical_text(values in ascending_strategy()) {
            prop_assume!(!values.is_empty());
            let text = serialize_all(&compress(values));
            let intervals = parse_to_intervals(&text).unwrap();

            prop_assert_eq!(compress(flatten(&intervals)), intervals);
        }

        #[test]
        fn test_compression_is_idempotent(values in ascending_strategy()) {
            let once = compress(values);
            let twice = compress(flatten(&once));

            prop_assert_eq!(twice, once);
        }

        #[test]
        fn test_compressed_runs_are_maximal(values in ascending_strategy()) {
            let runs = compress(values.clone());

            prop_assert_eq!(flatten(&runs), values);
            for run in &runs {
                prop_assert!(run.start() <= run.end());
            }
            for pair in runs.windows(2) {
                prop_assert!(pair[0].end() + 1 < pair[1].start());
            }
        }

        #[test]
        fn test_parse_fails_only_without_numbers((text, has_number) in noisy_text_strategy()) {
            prop_assert_eq!(parse_to_intervals(&text).is_ok(), has_number);
            prop_assert_eq!(parse_to_flat_list(&text).is_ok(), has_number);
        }

        #[test]
        fn test_parse_never_panics(text in any::<String>()) {
            let _ = parse_to_intervals(&text);
        }
    }
}
