//! Range string codec
//!
//! Reading: text → [lexing] → [matching] → [parsing] → intervals, optionally [flatten]ed.
//! Writing: integers → [compress] → [serialize] → text.
//!
//! Everything here is a pure function of its input. There is no shared state between
//! calls.

pub mod compress;
pub mod error;
pub mod flatten;
pub mod interval;
pub mod lexing;
pub mod matching;
pub mod parsing;
pub mod serialize;
pub mod token;

pub use compress::{compress, Compress, CompressExt};
pub use error::{FormatError, SerializeError};
pub use flatten::{flatten, flatten_iter};
pub use interval::Interval;
pub use lexing::{tokenize, tokenize_with_spans};
pub use matching::{segments, segments_with_spans, Segment, SegmentMatcher};
pub use parsing::{parse_segment, parse_to_flat_list, parse_to_intervals};
pub use serialize::{render, serialize_all, serialize_one, Format, RenderOptions};
pub use token::Token;

/// Rewrites `text` into its canonical form: merged runs, in first-seen order.
///
/// `"1,2,3,5-6,7"` becomes `"1-3,5-7"`. Unsorted input is not sorted first, so runs are
/// only merged when they are adjacent in the text.
pub fn normalize(text: &str) -> Result<String, FormatError> {
    let intervals = parse_to_intervals(text)?;
    let merged: Vec<Interval> = flatten_iter(&intervals).compress_runs().collect();
    Ok(serialize_all(&merged))
}
