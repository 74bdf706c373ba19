//! Module for the lexer implementation.

use logos::Logos;

use crate::Span;
use crate::diagnostic::Diagnostic;
use crate::token::Token;
use crate::token::TokenKind;

/// The raw logos token alphabet scanned from policy source text.
///
/// Keywords are given a higher priority than the catch-all
/// [`RawToken::UnknownWord`] rule so that an exact keyword spelling always
/// wins over being reported as an unrecognized word.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// The `;` statement terminator.
    #[token(";")]
    Semicolon,

    /// The `LANG` keyword.
    #[token("LANG", priority = 10)]
    Lang,

    /// The `IMPORTBASE` keyword.
    #[token("IMPORTBASE", priority = 10)]
    ImportBase,

    /// The `IMPORTRULE` keyword.
    #[token("IMPORTRULE", priority = 10)]
    ImportRule,

    /// The `CANNOTIMPORT` keyword.
    #[token("CANNOTIMPORT", priority = 10)]
    CannotImport,

    /// The `ALLOW` keyword.
    #[token("ALLOW", priority = 10)]
    Allow,

    /// A properly closed, double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    String,

    /// A run of uppercase ASCII letters that isn't a recognized keyword.
    #[regex(r"[A-Z]+", priority = 1)]
    UnknownWord,

    /// An opening quote with no matching closing quote.
    #[regex(r#""[^"]*"#, priority = 1)]
    UnterminatedString,
}

/// Scans policy source text into a token stream.
///
/// The lexer is total: it always returns both the tokens it recognized and
/// the errors it encountered, even when errors occur. An empty error list
/// means the stream is lexically valid.
#[derive(Debug, Default)]
pub struct Lexer;

impl Lexer {
    /// Creates a new lexer.
    pub fn new() -> Self {
        Self
    }

    /// Scans the given source text, returning the recognized tokens and any
    /// lex errors encountered.
    pub fn scan(&self, source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        let mut lexer = RawToken::lexer(source);
        while let Some(result) = lexer.next() {
            let span: Span = lexer.span().into();

            match result {
                Ok(RawToken::Semicolon) => {
                    tokens.push(Token::new(TokenKind::Semicolon, "", span));
                }
                Ok(RawToken::Lang) => tokens.push(Token::new(TokenKind::Lang, "", span)),
                Ok(RawToken::ImportBase) => {
                    tokens.push(Token::new(TokenKind::ImportBase, "", span));
                }
                Ok(RawToken::ImportRule) => {
                    tokens.push(Token::new(TokenKind::ImportRule, "", span));
                }
                Ok(RawToken::CannotImport) => {
                    tokens.push(Token::new(TokenKind::CannotImport, "", span));
                }
                Ok(RawToken::Allow) => tokens.push(Token::new(TokenKind::Allow, "", span)),
                Ok(RawToken::String) => {
                    let slice = lexer.slice();
                    let interior = &slice[1..slice.len() - 1];
                    tokens.push(Token::new(TokenKind::String, interior, span));
                }
                Ok(RawToken::UnknownWord) => {
                    errors.push(
                        Diagnostic::error(format!(
                            "unrecognized keyword `{word}`",
                            word = lexer.slice()
                        ))
                        .with_label("keywords must be spelled in uppercase", span),
                    );
                }
                Ok(RawToken::UnterminatedString) => {
                    errors.push(
                        Diagnostic::error("unterminated string literal")
                            .with_label("this quote is not matched", span),
                    );
                }
                Err(()) => {
                    errors.push(
                        Diagnostic::error(format!(
                            "unexpected character `{ch}`",
                            ch = lexer.slice()
                        ))
                        .with_label("not valid in this position", span),
                    );
                }
            }
        }

        (tokens, errors)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect()
    }

    #[test]
    fn single_string() {
        let (tokens, errors) = Lexer::new().scan(r#""test""#);
        assert!(errors.is_empty());
        assert_eq!(kinds(&tokens), vec![(TokenKind::String, "test")]);
    }

    #[test]
    fn adjacent_strings_are_two_tokens() {
        let (tokens, errors) = Lexer::new().scan(r#""test1""test2";"#);
        assert!(errors.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::String, "test1"),
                (TokenKind::String, "test2"),
                (TokenKind::Semicolon, ""),
            ]
        );
    }

    #[test]
    fn keyword_case_sensitivity() {
        let (_, errors) = Lexer::new().scan(r#"importrule "a" CANNOTIMPORT "b";"#);
        assert!(!errors.is_empty());
    }

    #[test]
    fn comma_between_strings_is_an_error() {
        let (_, errors) = Lexer::new().scan(r#""a", "b";"#);
        assert!(!errors.is_empty());
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let (_, errors) = Lexer::new().scan(r#"LANG "Go"#);
        assert!(!errors.is_empty());
    }

    #[test]
    fn full_policy_lexes_cleanly() {
        let source = r#"LANG "Go";
IMPORTBASE "example.com/project";

IMPORTRULE "[IMPORTBASE]/domain"
CANNOTIMPORT
    "[IMPORTBASE]/infrastructure"
    "[IMPORTBASE]/data"
ALLOW
    "[IMPORTBASE]/infrastructure/detail";"#;
        let (tokens, errors) = Lexer::new().scan(source);
        assert!(errors.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Lang, ""),
                (TokenKind::String, "Go"),
                (TokenKind::Semicolon, ""),
                (TokenKind::ImportBase, ""),
                (TokenKind::String, "example.com/project"),
                (TokenKind::Semicolon, ""),
                (TokenKind::ImportRule, ""),
                (TokenKind::String, "[IMPORTBASE]/domain"),
                (TokenKind::CannotImport, ""),
                (TokenKind::String, "[IMPORTBASE]/infrastructure"),
                (TokenKind::String, "[IMPORTBASE]/data"),
                (TokenKind::Allow, ""),
                (TokenKind::String, "[IMPORTBASE]/infrastructure/detail"),
                (TokenKind::Semicolon, ""),
            ]
        );
    }
}
