//! Module for the parser implementation.
//!
//! The parser consumes the token stream produced by
//! [`warden_grammar::Lexer`] and produces a [`Policy`], following a linear
//! recursive-descent state machine: `ExpectLang -> ExpectImportBaseOrRule ->
//! ExpectRuleBody -> ExpectCannotTargets -> ExpectAllowOrSemi ->
//! ExpectAllowTargets -> Done`.

use warden_grammar::Diagnostic;
use warden_grammar::Span;
use warden_grammar::Token;
use warden_grammar::TokenKind;

use crate::ast::Language;
use crate::ast::Policy;
use crate::ast::Rule;

/// A cursor over a token stream, tracking collected parse errors.
struct Cursor<'t> {
    /// The full token stream.
    tokens: &'t [Token],
    /// The index of the next unconsumed token.
    pos: usize,
    /// The collected parse errors.
    errors: Vec<Diagnostic>,
}

impl<'t> Cursor<'t> {
    /// Creates a new cursor over the given tokens.
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Returns `true` if there are no more tokens.
    fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peeks at the current token, if any.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Returns `true` if the current token has the given kind.
    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consumes and returns the current token.
    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// The span to attach to a diagnostic about "what comes next": the
    /// current token's span, or an empty span just past the last token if
    /// input has been exhausted.
    fn here(&self) -> Span {
        match self.peek() {
            Some(token) => token.span,
            None => match self.tokens.last() {
                Some(last) => Span::new(last.span.end(), 0),
                None => Span::new(0, 0),
            },
        }
    }

    /// A human-readable description of the current token, for error messages.
    fn describe_current(&self) -> String {
        match self.peek() {
            Some(token) if token.kind == TokenKind::String => {
                format!("the string {lexeme:?}", lexeme = token.lexeme)
            }
            Some(token) => token.kind.to_string(),
            None => "end of input".to_string(),
        }
    }

    /// Records a parse error at the current position.
    fn error(&mut self, message: impl Into<String>) {
        let span = self.here();
        self.errors.push(Diagnostic::error(message).with_label("here", span));
    }

    /// Consumes the current token if it's a [`TokenKind::String`], returning
    /// its lexeme. Otherwise records an error and consumes nothing.
    fn expect_string(&mut self, context: &str) -> Option<String> {
        if self.at(TokenKind::String) {
            Some(self.bump().expect("checked above").lexeme.clone())
        } else {
            let found = self.describe_current();
            self.error(format!("expected {context}, but found {found}"));
            None
        }
    }

    /// Consumes the current token if it's the given kind. Otherwise records
    /// an error and consumes nothing.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            let found = self.describe_current();
            self.error(format!("expected {kind}, but found {found}"));
            false
        }
    }

    /// Collects every contiguous `STRING` token starting at the current
    /// position.
    fn collect_strings(&mut self) -> Vec<String> {
        let mut strings = Vec::new();
        while self.at(TokenKind::String) {
            strings.push(self.bump().expect("checked above").lexeme.clone());
        }
        strings
    }

    /// Skips tokens until (and including) the next `;`, or until end of
    /// input. Used to resynchronize after a malformed rule.
    fn resync_to_semicolon(&mut self) {
        while !self.eof() && !self.at(TokenKind::Semicolon) {
            self.bump();
        }
        if self.at(TokenKind::Semicolon) {
            self.bump();
        }
    }
}

/// Parses a `LANG "..." ;` declaration.
///
/// Returns `None` if no language could be determined, either because the
/// declaration is malformed or because the named language isn't recognized.
fn parse_lang_decl(cursor: &mut Cursor<'_>) -> Option<Language> {
    if !cursor.at(TokenKind::Lang) {
        cursor.error("expected a `LANG` declaration at the start of the policy");
        return None;
    }
    cursor.bump();

    let name = cursor.expect_string("the declared language")?;
    let language = Language::parse(&name);
    if language.is_none() {
        cursor.error(format!("unrecognized language `{name}`"));
    }

    cursor.expect(TokenKind::Semicolon);
    language
}

/// Parses an optional `IMPORTBASE "..." ;` declaration.
fn parse_import_base(cursor: &mut Cursor<'_>) -> Option<String> {
    if !cursor.at(TokenKind::ImportBase) {
        return None;
    }
    cursor.bump();

    let base = cursor.expect_string("the import base")?;
    cursor.expect(TokenKind::Semicolon);
    Some(base)
}

/// Parses a single `IMPORTRULE ... ;` clause.
///
/// On any structural error the rule is abandoned (not partially committed)
/// and the cursor is resynchronized to the next `;`.
fn parse_rule(cursor: &mut Cursor<'_>) -> Option<Rule> {
    debug_assert!(cursor.at(TokenKind::ImportRule));
    cursor.bump();

    let mut modules = cursor.collect_strings();
    if !cursor.at(TokenKind::CannotImport) {
        let found = cursor.describe_current();
        cursor.error(format!("expected `CANNOTIMPORT`, but found {found}"));
        cursor.resync_to_semicolon();
        return None;
    }
    if modules.len() != 1 {
        cursor.error(format!(
            "a rule's `IMPORTRULE` must name exactly one module, but found {count}",
            count = modules.len()
        ));
        cursor.resync_to_semicolon();
        return None;
    }
    let module = modules.remove(0);

    cursor.bump(); // CANNOTIMPORT
    let cannot_import = cursor.collect_strings();
    if cannot_import.is_empty() {
        cursor.error("`CANNOTIMPORT` requires at least one target");
        cursor.resync_to_semicolon();
        return None;
    }

    let mut allow = Vec::new();
    if cursor.at(TokenKind::Allow) {
        cursor.bump();
        allow = cursor.collect_strings();
        if allow.is_empty() {
            cursor.error("`ALLOW` requires at least one target");
            cursor.resync_to_semicolon();
            return None;
        }
    }

    if !cursor.expect(TokenKind::Semicolon) {
        cursor.resync_to_semicolon();
        return None;
    }

    Some(Rule {
        module,
        cannot_import,
        allow,
    })
}

/// Parses a token stream into a [`Policy`].
///
/// Returns `(Some(policy), [])` on success. On any error, returns
/// `(None, errors)`: a policy with any parser errors is unusable, even if
/// most of it parsed correctly.
pub fn parse(tokens: &[Token]) -> (Option<Policy>, Vec<Diagnostic>) {
    let mut cursor = Cursor::new(tokens);

    let language = parse_lang_decl(&mut cursor);
    let import_base = parse_import_base(&mut cursor).unwrap_or_default();

    let mut rules = Vec::new();
    while !cursor.eof() {
        if cursor.at(TokenKind::ImportRule) {
            if let Some(rule) = parse_rule(&mut cursor) {
                rules.push(rule);
            }
        } else if cursor.at(TokenKind::ImportBase) {
            cursor.error("`IMPORTBASE` may only appear once, immediately after `LANG`");
            cursor.resync_to_semicolon();
        } else {
            let found = cursor.describe_current();
            cursor.error(format!("expected `IMPORTRULE`, but found {found}"));
            cursor.resync_to_semicolon();
        }
    }

    if rules.is_empty() {
        cursor.error("a policy must declare at least one `IMPORTRULE`");
    }

    let Cursor { errors, .. } = cursor;
    if !errors.is_empty() {
        return (None, errors);
    }

    // SAFETY: `errors` is empty, so `language` must have been set and
    // `rules` must be non-empty (both paths that leave them unset or empty
    // push an error above).
    let language = language.expect("language must be set when there are no errors");

    let rules = rules
        .into_iter()
        .map(|rule| Rule {
            module: Policy::expand(&import_base, &rule.module),
            cannot_import: rule
                .cannot_import
                .iter()
                .map(|s| Policy::expand(&import_base, s))
                .collect(),
            allow: rule
                .allow
                .iter()
                .map(|s| Policy::expand(&import_base, s))
                .collect(),
        })
        .collect();

    (
        Some(Policy {
            language,
            import_base,
            rules,
        }),
        Vec::new(),
    )
}
