//! Core lexer implementation: the dispatch loop and token emission.

use marlc_util::{Location, Span, StaticError};

use crate::cursor::Cursor;
use crate::token::{Fodder, FodderElement, FodderKind, Token, TokenKind, Tokens};
use crate::unicode::{is_identifier_first, is_symbol, quote_rune_to_ascii};

/// Lexer for Marl source text.
///
/// A `Lexer` performs exactly one scan: construct it, call [`Lexer::lex`],
/// and it either yields the complete token sequence (terminated by an
/// end-of-file token) or the first fatal error. There is no recovery and no
/// partial output.
pub struct Lexer<'a> {
    /// Name the input is known by; appears in every error message.
    source_name: &'a str,

    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens emitted so far.
    tokens: Tokens,

    /// Whitespace and comments accumulated since the last emitted token.
    fodder: Fodder,

    /// Starting byte offset of the token being scanned.
    pub(crate) token_start: usize,

    /// Location of the token being scanned.
    pub(crate) token_start_loc: Location,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`, reporting errors against `source_name`.
    pub fn new(source_name: &'a str, input: &'a str) -> Self {
        Self {
            source_name,
            cursor: Cursor::new(input),
            tokens: Tokens::new(),
            fodder: Fodder::new(),
            token_start: 0,
            token_start_loc: Location::new(1, 1),
        }
    }

    /// Scans the entire input.
    ///
    /// On success the final token is always [`TokenKind::EndOfFile`],
    /// carrying any trailing fodder. The first sub-scanner failure aborts
    /// the scan and is returned as the sole result.
    pub fn lex(mut self) -> Result<Tokens, StaticError> {
        loop {
            self.gather_fodder()?;
            self.begin_token();

            if self.cursor.is_at_end() {
                self.emit(TokenKind::EndOfFile);
                return Ok(self.tokens);
            }

            match self.cursor.current_char() {
                '{' => self.lex_single(TokenKind::BraceL),
                '}' => self.lex_single(TokenKind::BraceR),
                '[' => self.lex_single(TokenKind::BracketL),
                ']' => self.lex_single(TokenKind::BracketR),
                '(' => self.lex_single(TokenKind::ParenL),
                ')' => self.lex_single(TokenKind::ParenR),
                ',' => self.lex_single(TokenKind::Comma),
                '$' => self.lex_single(TokenKind::Dollar),
                '.' => self.lex_single(TokenKind::Dot),
                ';' => self.lex_single(TokenKind::Semicolon),
                c if c.is_ascii_digit() => self.lex_number()?,
                '"' => self.lex_quoted_string('"')?,
                '\'' => self.lex_quoted_string('\'')?,
                '|' if self.cursor.remaining().starts_with("|||\n") => self.lex_text_block()?,
                '@' => self.lex_verbatim_string()?,
                c if is_identifier_first(c) => self.lex_identifier(),
                c if is_symbol(c) => self.lex_operator(),
                c => {
                    return Err(self.error_at(
                        self.token_start_loc,
                        format!("Could not lex the character {}", quote_rune_to_ascii(c)),
                    ));
                }
            }
        }
    }

    /// Emits a one-character token.
    fn lex_single(&mut self, kind: TokenKind) {
        self.cursor.advance();
        self.emit(kind);
    }

    /// Marks the current position as the start of the next token.
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_loc = self.cursor.location();
    }

    /// Emits a token whose data is the source text scanned since
    /// [`Lexer::begin_token`].
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        let data = self.cursor.slice_from(self.token_start).to_string();
        self.emit_with(kind, data, String::new(), String::new());
    }

    /// Emits a token with explicit data and text-block indent metadata,
    /// taking ownership of the accumulated fodder.
    pub(crate) fn emit_with(
        &mut self,
        kind: TokenKind,
        data: String,
        string_block_indent: String,
        string_block_term_indent: String,
    ) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_loc.line,
            self.token_start_loc.column,
        );
        self.tokens.push(Token {
            kind,
            fodder: std::mem::take(&mut self.fodder),
            data,
            string_block_indent,
            string_block_term_indent,
            span,
        });
    }

    /// Records the source text since `start` as fodder, if non-empty.
    pub(crate) fn push_fodder(&mut self, kind: FodderKind, start: usize) {
        let data = self.cursor.slice_from(start);
        if !data.is_empty() {
            self.fodder.push(FodderElement {
                kind,
                data: data.to_string(),
            });
        }
    }

    /// Builds an error anchored at `location`.
    pub(crate) fn error_at(&self, location: Location, message: impl Into<String>) -> StaticError {
        StaticError::new(self.source_name, location, message)
    }

    /// Builds an error anchored at the cursor's current position.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> StaticError {
        self.error_at(self.cursor.location(), message)
    }
}
