//! Identifier and keyword scanning.

use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::is_identifier_continue;
use crate::Lexer;

impl Lexer<'_> {
    /// Scans an identifier or keyword.
    ///
    /// The lexeme is the maximal run of letters, digits and underscores
    /// starting at the current position; the keyword table then decides the
    /// token kind. Either way the token data is the lexeme itself.
    pub(crate) fn lex_identifier(&mut self) {
        while is_identifier_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.emit(kind);
    }
}
