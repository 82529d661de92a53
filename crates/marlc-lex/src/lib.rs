//! marlc-lex - Lexical Analyzer for the Marl Configuration Language
//!
//! This crate turns raw Marl source text into a flat sequence of typed
//! tokens. It is the first phase of the front end; the parser consumes the
//! token sequence and never touches the source text again.
//!
//! # Overview
//!
//! The lexer is a single left-to-right scan with small fixed lookahead. A
//! cursor tracks byte offset and 1-based line/column, a dispatch loop
//! classifies the next character, and per-lexeme-class sub-scanners consume
//! exactly the characters of one token. Scanning is all-or-nothing: the
//! result is either the full token sequence, terminated by an end-of-file
//! token, or the first error, positioned as `name:line:column`.
//!
//! Lexeme text is preserved verbatim. Escape sequences are not decoded,
//! numbers are not converted, and whitespace/comments survive as fodder on
//! the following token, so the token stream carries enough information to
//! reconstruct the source.
//!
//! # Example
//!
//! ```
//! use marlc_lex::{lex, TokenKind};
//!
//! let tokens = lex("example.marl", "local x = 1;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Local);
//! assert_eq!(tokens[1].data, "x");
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
//!
//! let err = lex("example.marl", "\"oops").unwrap_err();
//! assert_eq!(err.to_string(), "example.marl:1:1 Unterminated String");
//! ```
//!
//! # Token categories
//!
//! - Structural single characters: `{ } [ ] ( ) , . ;` and `$`
//! - Operators: maximal runs over `!$~+-*/%&|^=<>:` (with documented
//!   exceptions, see [`lexer`])
//! - Numbers, kept as raw text
//! - Strings: quoted (`"…"`, `'…'`), text blocks (`||| … |||`) and
//!   verbatim (`@"…"`, `@'…'`)
//! - Identifiers and the fixed keyword set
//!
//! # Module structure
//!
//! - [`token`] - Token, kind and fodder definitions
//! - [`lexer`] - Dispatch loop and sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classification and escape rendering

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{
    keyword_from_ident, Fodder, FodderElement, FodderKind, Token, TokenKind, Tokens,
};

use marlc_util::StaticError;

/// Tokenizes one input.
///
/// `source_name` only labels error messages; it is not opened or resolved.
/// On success the returned sequence always ends with exactly one
/// [`TokenKind::EndOfFile`] token. On failure no tokens are returned, only
/// the first error.
pub fn lex(source_name: &str, input: &str) -> Result<Tokens, StaticError> {
    Lexer::new(source_name, input).lex()
}
