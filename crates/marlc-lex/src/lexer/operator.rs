//! Operator run scanning.

use crate::token::TokenKind;
use crate::unicode::is_symbol;
use crate::Lexer;

impl Lexer<'_> {
    /// Scans a maximal run of operator punctuation as one token.
    ///
    /// The run stops before `//` and `/*` (comment openers) and before
    /// `|||` (text block opener). A multi-character run may not end in
    /// `+`, `-`, `~` or `!`; trailing characters from that set are shed,
    /// which is why `<-` scans as `<` then `-` while `->` stays whole.
    pub(crate) fn lex_operator(&mut self) {
        let rest = self.cursor.remaining().as_bytes();

        // The dispatch loop already classified the first character.
        let mut len = 1;
        while len < rest.len() {
            let b = rest[len];
            if !is_symbol(b as char) {
                break;
            }
            if b == b'/' && matches!(rest.get(len + 1), Some(b'/') | Some(b'*')) {
                break;
            }
            if b == b'|' && rest[len..].starts_with(b"|||") {
                break;
            }
            len += 1;
        }

        while len > 1 && matches!(rest[len - 1], b'+' | b'-' | b'~' | b'!') {
            len -= 1;
        }

        // All operator punctuation is ASCII.
        self.cursor.advance_bytes(len);
        self.emit(TokenKind::Operator);
    }
}
