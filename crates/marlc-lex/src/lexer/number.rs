//! Number literal scanning.
//!
//! Numbers are validated but not converted: the token keeps the exact
//! matched substring.

use marlc_util::StaticError;

use crate::token::TokenKind;
use crate::unicode::quote_rune_to_ascii;
use crate::Lexer;

impl Lexer<'_> {
    /// Scans a number literal: integer part, optional fraction, optional
    /// exponent.
    ///
    /// A leading `0` is a complete integer part on its own, so `0100` scans
    /// as the two numbers `0` and `100`. The scanner stops at the first
    /// character that cannot extend the literal; a `.`, `e`/`E` or exponent
    /// sign with no following digit is a fatal error at that character.
    pub(crate) fn lex_number(&mut self) -> Result<(), StaticError> {
        if !self.cursor.match_char('0') {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if self.cursor.match_char('.') {
            if !self.cursor.current_char().is_ascii_digit() {
                return Err(self.error_here(format!(
                    "Couldn't lex number, junk after decimal point: {}",
                    quote_rune_to_ascii(self.junk_char())
                )));
            }
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            let has_sign = matches!(self.cursor.current_char(), '+' | '-');
            if has_sign {
                self.cursor.advance();
            }
            if !self.cursor.current_char().is_ascii_digit() {
                let junk = quote_rune_to_ascii(self.junk_char());
                let message = if has_sign {
                    format!("Couldn't lex number, junk after exponent sign: {junk}")
                } else {
                    format!("Couldn't lex number, junk after 'E': {junk}")
                };
                return Err(self.error_here(message));
            }
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        self.emit(TokenKind::Number);
        Ok(())
    }

    /// The character a malformed number broke on, with end of input rendered
    /// as U+FFFD.
    fn junk_char(&self) -> char {
        if self.cursor.is_at_end() {
            char::REPLACEMENT_CHARACTER
        } else {
            self.cursor.current_char()
        }
    }
}
