//! Character classification and rendering helpers for the lexer.
//!
//! Identifiers and operators are ASCII-only in this language; arbitrary
//! Unicode appears only inside strings and comments, and in error messages,
//! where offending characters are rendered as ASCII-safe escapes.

/// Checks if a character can start an identifier or keyword.
///
/// # Example
///
/// ```
/// use marlc_lex::unicode::is_identifier_first;
///
/// assert!(is_identifier_first('a'));
/// assert!(is_identifier_first('_'));
/// assert!(!is_identifier_first('1'));
/// assert!(!is_identifier_first('α'));
/// ```
pub fn is_identifier_first(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier or keyword.
pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to the operator punctuation set.
///
/// `$` is in the set even though the dispatch loop claims it first as its
/// own token kind, so a `$` inside a longer run still glues to the run.
pub fn is_symbol(c: char) -> bool {
    matches!(
        c,
        '!' | '$'
            | ':'
            | '~'
            | '+'
            | '-'
            | '&'
            | '|'
            | '^'
            | '='
            | '<'
            | '>'
            | '*'
            | '/'
            | '%'
    )
}

/// Renders a character as a single-quoted, ASCII-only escape.
///
/// Printable ASCII is kept verbatim, the usual control characters use their
/// mnemonic escapes, and everything else becomes `\xNN`, `\uNNNN` or
/// `\UNNNNNNNN` depending on the code point's width.
///
/// # Example
///
/// ```
/// use marlc_lex::unicode::quote_rune_to_ascii;
///
/// assert_eq!(quote_rune_to_ascii('+'), "'+'");
/// assert_eq!(quote_rune_to_ascii('\n'), "'\\n'");
/// assert_eq!(quote_rune_to_ascii('\u{1f4a9}'), "'\\U0001f4a9'");
/// ```
pub fn quote_rune_to_ascii(c: char) -> String {
    let mut quoted = String::from("'");
    match c {
        '\'' => quoted.push_str("\\'"),
        '\\' => quoted.push_str("\\\\"),
        '\x07' => quoted.push_str("\\a"),
        '\x08' => quoted.push_str("\\b"),
        '\x0c' => quoted.push_str("\\f"),
        '\n' => quoted.push_str("\\n"),
        '\r' => quoted.push_str("\\r"),
        '\t' => quoted.push_str("\\t"),
        '\x0b' => quoted.push_str("\\v"),
        ' '..='~' => quoted.push(c),
        _ => {
            let cp = c as u32;
            if cp < 0x100 {
                quoted.push_str(&format!("\\x{cp:02x}"));
            } else if cp < 0x10000 {
                quoted.push_str(&format!("\\u{cp:04x}"));
            } else {
                quoted.push_str(&format!("\\U{cp:08x}"));
            }
        }
    }
    quoted.push('\'');
    quoted
}
