//! The fixed alphabet of lexical categories produced by the lexer.

use std::fmt;

/// Represents the kind of a token in the import-rules DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A quoted string literal, e.g. `"a/b/c"`.
    String,
    /// The `;` statement terminator.
    Semicolon,
    /// The `LANG` keyword.
    Lang,
    /// The `IMPORTBASE` keyword.
    ImportBase,
    /// The `IMPORTRULE` keyword.
    ImportRule,
    /// The `CANNOTIMPORT` keyword.
    CannotImport,
    /// The `ALLOW` keyword.
    Allow,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "a string",
            Self::Semicolon => "`;`",
            Self::Lang => "`LANG`",
            Self::ImportBase => "`IMPORTBASE`",
            Self::ImportRule => "`IMPORTRULE`",
            Self::CannotImport => "`CANNOTIMPORT`",
            Self::Allow => "`ALLOW`",
        };
        write!(f, "{name}")
    }
}

/// Represents a single token in the import-rules DSL.
///
/// A token is a `(kind, lexeme)` pair. The lexeme is only meaningful for
/// [`TokenKind::String`] tokens, which carry the unquoted string literal; it
/// is empty for every other kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The lexeme: the unquoted interior of a string token, empty otherwise.
    pub lexeme: String,
    /// The span of source text this token was scanned from.
    pub span: crate::Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: crate::Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}
