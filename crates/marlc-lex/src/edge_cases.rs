//! Edge case and property tests for marlc-lex.

use proptest::prelude::*;

use crate::token::{Token, TokenKind, Tokens};
use crate::lex;

/// Rebuilds source text from a token sequence: fodder, then the lexeme with
/// its delimiters restored.
fn reconstruct(tokens: &Tokens) -> String {
    let mut out = String::new();
    for token in tokens {
        for fodder in &token.fodder {
            out.push_str(&fodder.data);
        }
        match token.kind {
            TokenKind::EndOfFile => {}
            TokenKind::StringDouble => {
                out.push('"');
                out.push_str(&token.data);
                out.push('"');
            }
            TokenKind::StringSingle => {
                out.push('\'');
                out.push_str(&token.data);
                out.push('\'');
            }
            TokenKind::VerbatimStringDouble => {
                out.push_str("@\"");
                out.push_str(&token.data.replace('"', "\"\""));
                out.push('"');
            }
            TokenKind::VerbatimStringSingle => {
                out.push_str("@'");
                out.push_str(&token.data.replace('\'', "''"));
                out.push('\'');
            }
            TokenKind::StringBlock => {
                out.push_str("|||\n");
                for line in token.data.split_inclusive('\n') {
                    if line != "\n" {
                        out.push_str(&token.string_block_indent);
                    }
                    out.push_str(line);
                }
                out.push_str(&token.string_block_term_indent);
                out.push_str("|||");
            }
            _ => out.push_str(&token.data),
        }
    }
    out
}

fn kinds_and_data(source: &str) -> Vec<(TokenKind, String)> {
    lex("test", source)
        .unwrap()
        .iter()
        .map(|t| (t.kind, t.data.clone()))
        .collect()
}

#[test]
fn test_single_character_tokens() {
    use TokenKind::*;
    let cases = [
        ("{", BraceL),
        ("}", BraceR),
        ("[", BracketL),
        ("]", BracketR),
        ("(", ParenL),
        (")", ParenR),
        (",", Comma),
        ("$", Dollar),
        (".", Dot),
        (";", Semicolon),
    ];
    for (source, kind) in cases {
        assert_eq!(
            kinds_and_data(source),
            [(kind, source.to_string()), (EndOfFile, String::new())],
            "{source}"
        );
    }
}

#[test]
fn test_adjacent_structural_tokens() {
    let kinds: Vec<_> = lex("test", "{[(,;.)]}$")
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect();
    use TokenKind::*;
    assert_eq!(
        kinds,
        [
            BraceL, BracketL, ParenL, Comma, Semicolon, Dot, ParenR, BracketR, BraceR, Dollar,
            EndOfFile
        ]
    );
}

#[test]
fn test_invalid_character_is_sole_result() {
    let err = lex("junk", "💩").unwrap_err();
    assert_eq!(
        err.to_string(),
        "junk:1:1 Could not lex the character '\\U0001f4a9'"
    );
}

#[test]
fn test_invalid_character_after_tokens() {
    let err = lex("test", "local £").unwrap_err();
    assert_eq!(err.to_string(), "test:1:7 Could not lex the character '\\xa3'");
}

#[test]
fn test_invalid_character_position_on_later_line() {
    let err = lex("test", "{\n  a: •\n}").unwrap_err();
    assert_eq!(err.to_string(), "test:2:6 Could not lex the character '\\u2022'");
}

#[test]
fn test_error_wins_over_partial_tokens() {
    // Even with valid lexemes before it, the error is the only result.
    assert!(lex("test", "local x = 1; \"oops").is_err());
}

#[test]
fn test_token_spans_point_at_lexemes() {
    let tokens = lex("test", "local x\n  = 1").unwrap();
    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    assert_eq!((tokens[1].span.line, tokens[1].span.column), (1, 7));
    assert_eq!((tokens[2].span.line, tokens[2].span.column), (2, 3));
    assert_eq!((tokens[3].span.line, tokens[3].span.column), (2, 5));
}

#[test]
fn test_roundtrip_plain_source() {
    let source = "local x = 1 + 2;\n// done\n{ a: x, b: [1, 2.5e-1] }\n";
    let tokens = lex("test", source).unwrap();
    assert_eq!(reconstruct(&tokens), source);
}

#[test]
fn test_roundtrip_all_string_forms() {
    let source = "{\n  a: \"d\\\"q\",\n  b: 'sq',\n  c: @\"x\"\"y\",\n  d: |||\n    body\n\n    more\n  |||,\n}";
    let tokens = lex("test", source).unwrap();
    assert_eq!(reconstruct(&tokens), source);
}

#[test]
fn test_roundtrip_comments_and_hash() {
    let source = "# hash\n/* c */ x // tail";
    let tokens = lex("test", source).unwrap();
    assert_eq!(reconstruct(&tokens), source);
}

#[test]
fn test_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = lex("test", &name).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].data, name);
}

#[test]
fn test_deeply_mixed_input() {
    let source = "local f(x) = if x in {a: 1} then error 'no' else x % 2 == 0;";
    let tokens = lex("test", source).unwrap();
    assert_eq!(reconstruct(&tokens), source);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Error));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::In));
    assert!(tokens.iter().filter(|t| t.is_keyword()).count() >= 5);
}

fn token_essence(tokens: &Tokens) -> Vec<(TokenKind, &str, &str, &str)> {
    tokens
        .iter()
        .map(|t: &Token| {
            (
                t.kind,
                t.data.as_str(),
                t.string_block_indent.as_str(),
                t.string_block_term_indent.as_str(),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_whitespace_only_yields_lone_eof(source in "[ \t\r\n]{0,64}") {
        let tokens = lex("test", &source).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn prop_lexing_is_deterministic(source in "\\PC{0,48}") {
        let first = lex("test", &source);
        let second = lex("test", &source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_successful_lex_ends_with_one_eof(source in "[a-z0-9+=<>,;{}\\[\\]() \n\"']{0,32}") {
        if let Ok(tokens) = lex("test", &source) {
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::EndOfFile).count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
        }
    }

    #[test]
    fn prop_separated_lexemes_roundtrip(
        words in prop::collection::vec("[a-z_][a-z0-9_]{0,6}|[0-9]{1,4}|==|&&|\\+|:::", 0..12)
    ) {
        let source = words.join(" ");
        let tokens = lex("test", &source).unwrap();
        prop_assert_eq!(reconstruct(&tokens), source);
    }

    #[test]
    fn prop_relexing_reconstruction_is_stable(source in "[a-z0-9 \n.{}:,\"]{0,40}") {
        // Lexing the reconstruction yields the same essential tokens.
        if let Ok(tokens) = lex("test", &source) {
            let rebuilt = reconstruct(&tokens);
            let again = lex("test", &rebuilt).unwrap();
            prop_assert_eq!(token_essence(&tokens), token_essence(&again));
        }
    }
}
