//! marlc-drv - Driver for the Marl front end.
//!
//! The driver owns everything that touches the outside world: reading
//! source files, running the front-end phases over them, and formatting
//! the results for people. The phases themselves stay pure.

use std::fmt::Write as _;
use std::fs;
use std::io::Read as _;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use marlc_lex::{lex, TokenKind, Tokens};

/// Reads the source to process: the file at `path`, or stdin when `path`
/// is `-`.
///
/// Returns the name the source is known by (used in error messages) along
/// with its contents.
pub fn read_source(path: &Path) -> Result<(String, String)> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read <stdin>")?;
        return Ok(("<stdin>".to_string(), contents));
    }

    let name = path.display().to_string();
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {name}"))?;
    Ok((name, contents))
}

/// Lexes the given source and renders the token stream, one token per line
/// as `line:column token`. With `with_fodder`, preceding whitespace and
/// comments are listed before each token.
///
/// Lexical errors come back verbatim; nothing rewraps their
/// `name:line:column message` text.
pub fn lex_command(path: &Path, with_fodder: bool) -> Result<String> {
    let (name, source) = read_source(path)?;

    let started = Instant::now();
    let tokens = lex(&name, &source)?;
    debug!(
        tokens = tokens.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "lexed {name}"
    );

    Ok(format_tokens(&tokens, with_fodder))
}

/// Renders a token stream as text.
pub fn format_tokens(tokens: &Tokens, with_fodder: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if with_fodder {
            for fodder in &token.fodder {
                let _ = writeln!(out, "  fodder {:?} {:?}", fodder.kind, fodder.data);
            }
        }
        let _ = writeln!(out, "{}:{} {}", token.span.line, token.span.column, token);
        if token.kind == TokenKind::StringBlock && with_fodder {
            let _ = writeln!(out, "  indent {:?}", token.string_block_indent);
        }
    }
    out
}
