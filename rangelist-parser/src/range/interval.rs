//! The inclusive integer interval every other module works with

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive range of integers, `start..=end`.
///
/// A single value `n` is the interval `(n, n)`. Intervals built by the compressor always
/// have `start <= end`. The parser keeps whatever bounds were written, so text such as
/// `10-5` gives an inverted interval; see [`Interval::is_inverted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Builds an interval from its bounds as given. Inverted bounds are accepted.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// The interval holding only `value`
    pub fn single(value: i64) -> Self {
        Self::new(value, value)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// `start > end`. Inverted intervals enumerate no values.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// The values of the interval in ascending order
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl IntoIterator for Interval {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<RangeInclusive<i64>> for Interval {
    fn from(range: RangeInclusive<i64>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(interval: Interval) -> Self {
        interval.iter()
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_has_equal_bounds() {
        let interval = Interval::single(5);
        assert_eq!(interval.start(), 5);
        assert_eq!(interval.end(), 5);
        assert!(interval.is_single());
        assert!(!interval.is_inverted());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::single(5).to_string(), "5");
        assert_eq!(Interval::new(1, 100).to_string(), "1-100");
        assert_eq!(Interval::new(-5, -1).to_string(), "-5--1");
        assert_eq!(Interval::new(10, 5).to_string(), "10-5");
    }

    #[test]
    fn test_iteration() {
        assert_eq!(Interval::new(1, 4).into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(Interval::new(-1, 1).iter().collect::<Vec<_>>(), vec![-1, 0, 1]);
        assert_eq!(Interval::new(10, 5).iter().count(), 0);
    }

    #[test]
    fn test_iteration_at_the_top_of_the_range() {
        let values: Vec<_> = Interval::new(i64::MAX - 1, i64::MAX).into_iter().collect();
        assert_eq!(values, vec![i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Interval::from(2..=9), Interval::new(2, 9));
        assert_eq!(Interval::from((2, 9)), Interval::new(2, 9));
        assert_eq!(RangeInclusive::from(Interval::new(2, 9)), 2..=9);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Interval::new(1, 3)).unwrap();
        assert_eq!(json, r#"{"start":1,"end":3}"#);
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Interval::new(1, 3));
    }
}
