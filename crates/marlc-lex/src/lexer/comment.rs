//! Whitespace and comment collection.
//!
//! Comments never become tokens. Together with whitespace they are gathered
//! into fodder, which the dispatch loop attaches to the next emitted token.

use marlc_util::StaticError;

use crate::token::FodderKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Consumes whitespace and comments until the next lexeme (or end of
    /// input), accumulating them as fodder.
    ///
    /// Fails only on an unterminated `/*` comment.
    pub(crate) fn gather_fodder(&mut self) -> Result<(), StaticError> {
        loop {
            let start = self.cursor.position();
            while matches!(self.cursor.current_char(), ' ' | '\t' | '\r' | '\n')
                && !self.cursor.is_at_end()
            {
                self.cursor.advance();
            }
            self.push_fodder(FodderKind::Whitespace, start);

            match self.cursor.current_char() {
                '#' => self.lex_line_comment(FodderKind::CommentHash),
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.lex_line_comment(FodderKind::CommentCpp)
                }
                '/' if self.cursor.peek_char(1) == '*' => self.lex_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Consumes a `//` or `#` comment up to (not including) the newline.
    fn lex_line_comment(&mut self, kind: FodderKind) {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        self.push_fodder(kind, start);
    }

    /// Consumes a `/* ... */` comment, which may span lines.
    fn lex_block_comment(&mut self) -> Result<(), StaticError> {
        let start = self.cursor.position();
        let open_loc = self.cursor.location();
        self.cursor.advance_n(2); // `/*`

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at(open_loc, "Multi-line comment has no terminating */"));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                self.push_fodder(FodderKind::CommentC, start);
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}
