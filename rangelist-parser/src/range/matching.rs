//! Segment matching
//!
//!     Second stage of reading a range string. The matcher walks the atoms produced by
//!     [lexing](super::lexing) and yields segments: a bare signed integer, or two signed
//!     integers joined by a single dash.
//!
//! Sign or Separator
//!
//!     A dash is both the minus sign and the range separator, so `-5--1` has to be read as
//!     `-5`, separator, `-1`. At every atom the matcher first tries the full range shape
//!     (`-?digits`, `-`, `-?digits`) and only then a bare `-?digits`. If neither fits, the
//!     atom is skipped. Atoms of one segment must touch each other in the source: `1 -2` is
//!     two numbers, not a range.
//!
//!     This gives the same answer as leftmost-first matching of
//!     `(-?\d+)-(-?\d+)|(-?\d+)` over the raw text.
//!
//! Permissiveness
//!
//!     Nothing is ever rejected here. Atoms that cannot start a segment are filtered out,
//!     and so are segments whose literals do not fit in an `i64`. Deciding that an input
//!     with no segments at all is an error is the parser's job.

use super::lexing::tokenize_with_spans;
use super::token::Token;
use std::ops::Range;

/// A matched piece of a range string, before it becomes an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A bare number, e.g. `6` or `-3`
    Single(i64),
    /// Two numbers around the separator, e.g. `10-12` or `-5--1`
    Pair(i64, i64),
}

/// Lazy iterator over the segments of a source string, with their byte spans
pub struct SegmentMatcher<'a> {
    source: &'a str,
    atoms: Vec<(Token, Range<usize>)>,
    index: usize,
}

impl<'a> SegmentMatcher<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            atoms: tokenize_with_spans(source),
            index: 0,
        }
    }

    /// Matches `-?[0-9]+` at atom `i`. Returns the literal's span and the next atom index.
    fn signed_int(&self, i: usize) -> Option<(Range<usize>, usize)> {
        match self.atoms.get(i)? {
            (Token::Digits, span) => Some((span.clone(), i + 1)),
            (Token::Dash, dash) => match self.atoms.get(i + 1)? {
                (Token::Digits, digits) if digits.start == dash.end => {
                    Some((dash.start..digits.end, i + 2))
                }
                _ => None,
            },
            (Token::Other, _) => None,
        }
    }

    /// Matches `-?[0-9]+ - -?[0-9]+` at atom `i`
    fn pair(&self, i: usize) -> Option<(Range<usize>, Range<usize>, usize)> {
        let (start, next) = self.signed_int(i)?;
        let separator = match self.atoms.get(next)? {
            (Token::Dash, span) if span.start == start.end => span.clone(),
            _ => return None,
        };
        let (end, after) = self.signed_int(next + 1)?;
        if end.start != separator.end {
            return None;
        }
        Some((start, end, after))
    }

    fn literal(&self, span: Range<usize>) -> Option<i64> {
        let text = &self.source[span];
        match text.parse::<i64>() {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("skipping literal {:?}: {}", text, err);
                None
            }
        }
    }
}

impl Iterator for SegmentMatcher<'_> {
    type Item = (Segment, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.atoms.len() {
            let at = self.index;

            if let Some((start, end, after)) = self.pair(at) {
                self.index = after;
                let span = start.start..end.end;
                if let (Some(a), Some(b)) = (self.literal(start), self.literal(end)) {
                    return Some((Segment::Pair(a, b), span));
                }
                continue;
            }

            if let Some((span, after)) = self.signed_int(at) {
                self.index = after;
                if let Some(n) = self.literal(span.clone()) {
                    return Some((Segment::Single(n), span));
                }
                continue;
            }

            log::trace!("skipping {:?} at {:?}", self.atoms[at].0, self.atoms[at].1);
            self.index += 1;
        }
        None
    }
}

/// All segments of `source`, in the order they appear
pub fn segments(source: &str) -> impl Iterator<Item = Segment> + '_ {
    SegmentMatcher::new(source).map(|(segment, _)| segment)
}

/// All segments of `source` with the byte span each one was read from
pub fn segments_with_spans(source: &str) -> SegmentMatcher<'_> {
    SegmentMatcher::new(source)
}
