//! # rangelist-parser
//!
//! Reads and writes compact integer range strings such as `1-4,6,9,10-12`.
//!
//! File Layout
//!
//! Reading happens in two stages. A logos lexer splits the text into digits, dashes and
//! everything else; a matcher then decides which dashes are signs and which are range
//! separators. Segments become intervals, and intervals can be flattened into every integer
//! they contain. Writing goes the other way: ascending integers are compressed into maximal
//! runs and serialized back to text.
//!
//! src/range
//!   ├── token, lexing        Atoms and the logos lexer
//!   ├── matching             Segments (single numbers and pairs)
//!   ├── parsing, flatten     Text to intervals, intervals to integers
//!   └── compress, serialize  Integers to intervals, intervals to text
//!
//! The top level re-exports the entry points most callers need.

pub mod range;

pub use range::{
    compress, flatten, normalize, parse_to_flat_list, parse_to_intervals, serialize_all,
    serialize_one, FormatError, Interval,
};
