//! Parsing range strings into intervals
//!
//!     Every matched segment becomes one interval, in the order the segments appear. Bounds
//!     are kept exactly as written: `10-5` becomes the inverted interval `(10, 5)` and is not
//!     reordered or rejected. The flattener later reads such an interval as empty.
//!
//!     The only failure is an input with no segment at all.

use super::error::FormatError;
use super::flatten::flatten;
use super::interval::Interval;
use super::matching::{segments, Segment};

/// Converts one matched segment into its interval
pub fn parse_segment(segment: Segment) -> Interval {
    match segment {
        Segment::Single(n) => Interval::single(n),
        Segment::Pair(start, end) => Interval::new(start, end),
    }
}

/// Parses `text` into its intervals, e.g. `"1-4,6"` gives `[(1, 4), (6, 6)]`
pub fn parse_to_intervals(text: &str) -> Result<Vec<Interval>, FormatError> {
    let intervals: Vec<Interval> = segments(text).map(parse_segment).collect();
    if intervals.is_empty() {
        log::debug!("no segments in {:?}", text);
        return Err(FormatError::new(text));
    }
    log::trace!("parsed {} intervals from {:?}", intervals.len(), text);
    Ok(intervals)
}

/// Parses `text` into every integer it names, e.g. `"1-3,6"` gives `[1, 2, 3, 6]`
///
/// Every value is held in memory at once, so a wide range such as `0-9223372036854775807`
/// exhausts the allocator. Callers that cannot bound their input should take
/// [`parse_to_intervals`] and walk it with [`flatten_iter`](super::flatten::flatten_iter).
pub fn parse_to_flat_list(text: &str) -> Result<Vec<i64>, FormatError> {
    let intervals = parse_to_intervals(text)?;
    Ok(flatten(&intervals))
}
