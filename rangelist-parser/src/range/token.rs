//! Token definitions for range strings
//!
//! The logos lexer only splits the text into unambiguous atoms. It does not decide whether
//! a dash is a sign or a range separator; that is left to the matcher in
//! [matching](super::matching), which looks at how atoms sit next to each other.
use logos::Logos;
use serde::Serialize;

/// All atoms a range string is made of
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Token {
    /// A run of ASCII digits
    #[regex(r"[0-9]+")]
    Digits,

    /// A single dash, either a sign or a range separator
    #[token("-")]
    Dash,

    /// Anything else: commas, whitespace, letters
    #[regex(r"[^0-9\-]+")]
    Other,
}
