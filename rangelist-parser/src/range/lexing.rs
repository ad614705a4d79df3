//! Lexing
//!
//!     First stage of reading a range string. The logos lexer turns the text into a flat
//!     list of atoms (digits, dashes, everything else) together with their byte spans.
//!     Spans are what the matcher uses to tell "1-2" (a range) apart from "1 -2" (two
//!     numbers), so they must be preserved exactly as logos reports them.
//!
//!     Every character of valid UTF-8 falls into one of the three atoms, so lexing never
//!     fails. Should logos ever report an error anyway, the offending slice is dropped, which
//!     keeps the "skip what you don't understand" behavior of the whole parser.

use super::token::Token;
use logos::Logos;
use std::ops::Range;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => log::trace!("dropping unlexable slice {:?}", lexer.slice()),
        }
    }

    tokens
}
