//! Expanding intervals into the integers they contain
//!
//! Each interval contributes `start, start + 1, ..., end`, in the order the intervals come.
//! Nothing is merged or deduplicated across intervals. An inverted interval contributes
//! nothing at all.

use super::interval::Interval;

/// Lazily enumerates every value of `intervals`
pub fn flatten_iter<'a, I>(intervals: I) -> impl Iterator<Item = i64> + 'a
where
    I: IntoIterator<Item = &'a Interval>,
    I::IntoIter: 'a,
{
    intervals.into_iter().flat_map(|interval| interval.iter())
}

/// Collects every value of `intervals` into a flat list
pub fn flatten(intervals: &[Interval]) -> Vec<i64> {
    flatten_iter(intervals).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_ranges_expand_ascending() {
        let intervals = [Interval::new(1, 4), Interval::single(6), Interval::new(10, 12)];
        assert_eq!(flatten(&intervals), vec![1, 2, 3, 4, 6, 10, 11, 12]);
    }

    #[test]
    fn test_order_and_duplicates_are_preserved() {
        let intervals = [Interval::new(5, 6), Interval::new(1, 2), Interval::single(5)];
        assert_eq!(flatten(&intervals), vec![5, 6, 1, 2, 5]);
    }

    #[test]
    fn test_inverted_interval_contributes_nothing() {
        let intervals = [Interval::single(1), Interval::new(10, 5), Interval::single(2)];
        assert_eq!(flatten(&intervals), vec![1, 2]);
    }

    #[test]
    fn test_iter_is_lazy() {
        let intervals = [Interval::new(0, i64::MAX)];
        let first: Vec<i64> = flatten_iter(&intervals).take(3).collect();
        assert_eq!(first, vec![0, 1, 2]);
    }
}
