//! Token type definitions.
//!
//! Tokens carry their raw lexeme text: escape sequences are left undecoded
//! and numbers unparsed, so later phases (and pretty-printers) see exactly
//! what was written. Whitespace and comments between tokens survive as
//! [`Fodder`] attached to the following token.

use std::fmt;

use marlc_util::Span;

/// The kind of a token.
///
/// The set is closed and the names are stable; the parser matches on them
/// exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Synthetic token appended after the last lexeme of every input.
    EndOfFile,

    /// `{`
    BraceL,
    /// `}`
    BraceR,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `,`
    Comma,
    /// `$`, the root-object reference. Never an operator.
    Dollar,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    /// A maximal run of operator punctuation, e.g. `+`, `==`, `:::`, `>==|`.
    Operator,
    /// A numeric literal, kept as raw text.
    Number,

    /// `"..."` literal.
    StringDouble,
    /// `'...'` literal.
    StringSingle,
    /// `|||` text block.
    StringBlock,
    /// `@"..."` literal.
    VerbatimStringDouble,
    /// `@'...'` literal.
    VerbatimStringSingle,

    /// A name that is not a keyword.
    Identifier,

    /// `assert`
    Assert,
    /// `else`
    Else,
    /// `error`
    Error,
    /// `false`
    False,
    /// `for`
    For,
    /// `function`
    Function,
    /// `if`
    If,
    /// `import`
    Import,
    /// `importstr`
    ImportStr,
    /// `in`
    In,
    /// `local`
    Local,
    /// `null`
    NullLit,
    /// `self`
    Self_,
    /// `super`
    Super,
    /// `tailstrict`
    TailStrict,
    /// `then`
    Then,
    /// `true`
    True,
}

impl TokenKind {
    /// Human-readable name, used in parser error messages and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "end of file",
            TokenKind::BraceL => "\"{\"",
            TokenKind::BraceR => "\"}\"",
            TokenKind::BracketL => "\"[\"",
            TokenKind::BracketR => "\"]\"",
            TokenKind::ParenL => "\"(\"",
            TokenKind::ParenR => "\")\"",
            TokenKind::Comma => "\",\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::Dot => "\".\"",
            TokenKind::Semicolon => "\";\"",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Number => "NUMBER",
            TokenKind::StringDouble => "STRING_DOUBLE",
            TokenKind::StringSingle => "STRING_SINGLE",
            TokenKind::StringBlock => "STRING_BLOCK",
            TokenKind::VerbatimStringDouble => "VERBATIM_STRING_DOUBLE",
            TokenKind::VerbatimStringSingle => "VERBATIM_STRING_SINGLE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Assert => "assert",
            TokenKind::Else => "else",
            TokenKind::Error => "error",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::ImportStr => "importstr",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::NullLit => "null",
            TokenKind::Self_ => "self",
            TokenKind::Super => "super",
            TokenKind::TailStrict => "tailstrict",
            TokenKind::Then => "then",
            TokenKind::True => "true",
        }
    }

    /// Returns true for the keyword kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Assert
                | TokenKind::Else
                | TokenKind::Error
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::ImportStr
                | TokenKind::In
                | TokenKind::Local
                | TokenKind::NullLit
                | TokenKind::Self_
                | TokenKind::Super
                | TokenKind::TailStrict
                | TokenKind::Then
                | TokenKind::True
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an identifier lexeme to its keyword kind, if it is one.
///
/// # Example
///
/// ```
/// use marlc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("local"), Some(TokenKind::Local));
/// assert_eq!(keyword_from_ident("locals"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "assert" => TokenKind::Assert,
        "else" => TokenKind::Else,
        "error" => TokenKind::Error,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "function" => TokenKind::Function,
        "if" => TokenKind::If,
        "import" => TokenKind::Import,
        "importstr" => TokenKind::ImportStr,
        "in" => TokenKind::In,
        "local" => TokenKind::Local,
        "null" => TokenKind::NullLit,
        "self" => TokenKind::Self_,
        "super" => TokenKind::Super,
        "tailstrict" => TokenKind::TailStrict,
        "then" => TokenKind::Then,
        "true" => TokenKind::True,
        _ => return None,
    };
    Some(kind)
}

/// The style of a piece of fodder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FodderKind {
    /// A run of spaces, tabs, carriage returns and newlines.
    Whitespace,
    /// A `/* ... */` comment.
    CommentC,
    /// A `// ...` comment.
    CommentCpp,
    /// A `# ...` comment.
    CommentHash,
}

/// One piece of whitespace or one comment, with its original text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FodderElement {
    /// What kind of fodder this is.
    pub kind: FodderKind,
    /// The raw text, delimiters included.
    pub data: String,
}

/// Whitespace and comments collected since the previous token.
pub type Fodder = Vec<FodderElement>;

/// A single lexeme with its classification and annotations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token's kind.
    pub kind: TokenKind,

    /// Fodder preceding this token.
    pub fodder: Fodder,

    /// Raw lexeme text. For strings the delimiters are excluded and escapes
    /// are not decoded; for text blocks the block indent is stripped.
    pub data: String,

    /// For [`TokenKind::StringBlock`]: the whitespace prefix shared by all
    /// content lines. Empty for every other kind.
    pub string_block_indent: String,

    /// For [`TokenKind::StringBlock`]: the whitespace preceding the
    /// terminating `|||`. Empty for every other kind.
    pub string_block_term_indent: String,

    /// Where the token appeared.
    pub span: Span,
}

impl Token {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            f.write_str(self.kind.name())
        } else {
            write!(f, "({}, \"{}\")", self.kind, self.data)
        }
    }
}

/// The complete token sequence for one input, ending with
/// [`TokenKind::EndOfFile`].
pub type Tokens = Vec<Token>;
