//! String literal scanning: quoted strings, text blocks and verbatim
//! strings.
//!
//! No escape sequence is decoded here. Quoted strings keep their
//! backslashes, text blocks only have their common indent stripped, and
//! verbatim strings collapse doubled delimiters.

use marlc_util::StaticError;

use crate::token::TokenKind;
use crate::Lexer;

/// Returns the length of `a`'s leading whitespace run, provided `b` starts
/// with exactly that run byte-for-byte; otherwise 0.
///
/// Tabs and spaces are never normalized against each other. Calling this
/// with `a == b` measures a line's own leading whitespace.
fn whitespace_prefix_len(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && (a[i] == b' ' || a[i] == b'\t') {
        if i >= b.len() || b[i] != a[i] {
            return 0;
        }
        i += 1;
    }
    i
}

impl Lexer<'_> {
    /// Scans a `'...'` or `"..."` literal.
    ///
    /// A backslash escapes the following character (even a newline or the
    /// quote itself) without being interpreted; both characters go into the
    /// token data verbatim. Newlines do not terminate the string.
    pub(crate) fn lex_quoted_string(&mut self, quote: char) -> Result<(), StaticError> {
        let open_loc = self.token_start_loc;
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at(open_loc, "Unterminated String"));
            }
            let c = self.cursor.current_char();
            if c == quote {
                let data = self.cursor.slice_from(content_start).to_string();
                self.cursor.advance(); // closing quote
                let kind = if quote == '"' {
                    TokenKind::StringDouble
                } else {
                    TokenKind::StringSingle
                };
                self.emit_with(kind, data, String::new(), String::new());
                return Ok(());
            }
            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(self.error_at(open_loc, "Unterminated String"));
                }
            }
            self.cursor.advance();
        }
    }

    /// Scans a `|||` text block.
    ///
    /// The dispatch loop guarantees the opener is `|||` directly followed
    /// by a newline. The first non-blank line fixes the block's indent;
    /// every later line must repeat it exactly or be empty, and the first
    /// line that does neither must be the `|||` terminator.
    pub(crate) fn lex_text_block(&mut self) -> Result<(), StaticError> {
        let open_loc = self.token_start_loc;
        self.cursor.advance_n(4); // `|||` and its newline
        let mut data = String::new();

        // Blank lines before the first content line are kept.
        while self.cursor.current_char() == '\n' {
            self.cursor.advance();
            data.push('\n');
        }

        let first_line = self.cursor.remaining();
        let indent = first_line[..whitespace_prefix_len(first_line, first_line)].to_string();
        if indent.is_empty() {
            return Err(self.error_at(
                open_loc,
                "Text block's first line must start with whitespace",
            ));
        }

        loop {
            self.cursor.advance_bytes(indent.len());

            // The rest of the content line, newline included.
            loop {
                if self.cursor.is_at_end() {
                    return Err(self.error_at(open_loc, "Unexpected EOF"));
                }
                let c = self.cursor.current_char();
                self.cursor.advance();
                data.push(c);
                if c == '\n' {
                    break;
                }
            }

            while self.cursor.current_char() == '\n' {
                self.cursor.advance();
                data.push('\n');
            }

            if whitespace_prefix_len(&indent, self.cursor.remaining()) == 0 {
                // The indent no longer matches, so this line has to be the
                // terminator.
                let term_start = self.cursor.position();
                while matches!(self.cursor.current_char(), ' ' | '\t') {
                    self.cursor.advance();
                }
                let term_indent = self.cursor.slice_from(term_start).to_string();
                if !self.cursor.remaining().starts_with("|||") {
                    return Err(self.error_at(open_loc, "Text block not terminated with |||"));
                }
                self.cursor.advance_n(3);
                self.emit_with(TokenKind::StringBlock, data, indent, term_indent);
                return Ok(());
            }
        }
    }

    /// Scans an `@"..."` or `@'...'` verbatim literal.
    ///
    /// Backslashes are ordinary characters. The only escape is a doubled
    /// delimiter, which stands for one literal delimiter character.
    pub(crate) fn lex_verbatim_string(&mut self) -> Result<(), StaticError> {
        let open_loc = self.token_start_loc;
        self.cursor.advance(); // `@`

        let quote = self.cursor.current_char();
        if quote != '"' && quote != '\'' || self.cursor.is_at_end() {
            let code = if self.cursor.is_at_end() {
                -1
            } else {
                quote as i64
            };
            return Err(self.error_at(
                open_loc,
                format!("Couldn't lex verbatim string, junk after '@': {code}"),
            ));
        }
        self.cursor.advance();

        let mut data = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at(open_loc, "Unterminated String"));
            }
            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == quote {
                if self.cursor.current_char() == quote {
                    self.cursor.advance();
                    data.push(c);
                } else {
                    break;
                }
            } else {
                data.push(c);
            }
        }

        let kind = if quote == '"' {
            TokenKind::VerbatimStringDouble
        } else {
            TokenKind::VerbatimStringSingle
        };
        self.emit_with(kind, data, String::new(), String::new());
        Ok(())
    }
}
