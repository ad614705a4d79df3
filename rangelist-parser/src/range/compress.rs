//! Compressing integers into maximal contiguous intervals
//!
//! The input is expected to be ascending and free of duplicates. This is not checked.
//! Input outside that contract still gives a deterministic answer: any value that is not
//! exactly one above the end of the open run starts a new interval. So `[1, 1, 1]`
//! compresses to three `(1, 1)` intervals, and a descending list gives one single-value
//! interval per element.

use super::interval::Interval;
use std::iter::Fuse;

/// Iterator adapter merging consecutive integers into runs
pub struct Compress<I> {
    values: Fuse<I>,
    open: Option<Interval>,
}

impl<I: Iterator<Item = i64>> Compress<I> {
    pub fn new(values: I) -> Self {
        Self {
            values: values.fuse(),
            open: None,
        }
    }
}

impl<I: Iterator<Item = i64>> Iterator for Compress<I> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        for value in self.values.by_ref() {
            match self.open {
                // checked_add: nothing extends a run ending at i64::MAX
                Some(open) if open.end().checked_add(1) == Some(value) => {
                    self.open = Some(Interval::new(open.start(), value));
                }
                Some(open) => {
                    self.open = Some(Interval::single(value));
                    return Some(open);
                }
                None => self.open = Some(Interval::single(value)),
            }
        }
        self.open.take()
    }
}

/// Adds [`compress_runs`](CompressExt::compress_runs) to every iterator of `i64`
pub trait CompressExt: Iterator<Item = i64> + Sized {
    fn compress_runs(self) -> Compress<Self> {
        Compress::new(self)
    }
}

impl<I: Iterator<Item = i64>> CompressExt for I {}

/// Compresses ascending, duplicate-free `values` into the fewest intervals
pub fn compress<I: IntoIterator<Item = i64>>(values: I) -> Vec<Interval> {
    Compress::new(values.into_iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_empty_gives_nothing() {
        assert!(compress(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(compress(vec![1]), vec![iv(1, 1)]);
    }

    #[test]
    fn test_contiguous_values_become_one_interval() {
        assert_eq!(compress(vec![1, 2, 3, 4, 5]), vec![iv(1, 5)]);
    }

    #[test]
    fn test_gaps_split_runs() {
        assert_eq!(
            compress(vec![1, 2, 3, 5, 10, 11, 12]),
            vec![iv(1, 3), iv(5, 5), iv(10, 12)]
        );
        assert_eq!(compress(vec![1, 3, 5]), vec![iv(1, 1), iv(3, 3), iv(5, 5)]);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(compress(vec![-3, -2, -1, 0, 2]), vec![iv(-3, 0), iv(2, 2)]);
    }

    #[test]
    fn test_duplicates_open_new_intervals() {
        assert_eq!(compress(vec![1, 1, 1]), vec![iv(1, 1), iv(1, 1), iv(1, 1)]);
        assert_eq!(compress(vec![1, 2, 2, 3]), vec![iv(1, 2), iv(2, 3)]);
    }

    #[test]
    fn test_descending_values_stay_single() {
        assert_eq!(compress(vec![3, 2, 1]), vec![iv(3, 3), iv(2, 2), iv(1, 1)]);
    }

    #[test]
    fn test_run_ending_at_max_does_not_overflow() {
        assert_eq!(
            compress(vec![i64::MAX - 1, i64::MAX, i64::MIN]),
            vec![iv(i64::MAX - 1, i64::MAX), iv(i64::MIN, i64::MIN)]
        );
    }

    #[test]
    fn test_adapter_is_lazy() {
        let mut runs = (0i64..).step_by(2).compress_runs();
        assert_eq!(runs.next(), Some(iv(0, 0)));
        assert_eq!(runs.next(), Some(iv(2, 2)));
    }

    #[test]
    fn test_adapter_stays_exhausted() {
        let mut runs = vec![1i64, 2].into_iter().compress_runs();
        assert_eq!(runs.next(), Some(iv(1, 2)));
        assert_eq!(runs.next(), None);
        assert_eq!(runs.next(), None);
    }
}
