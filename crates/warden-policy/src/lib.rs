//! Parsing for the Warden import-rules DSL.
//!
//! This crate turns a lexed token stream into a structured [`Policy`],
//! collecting parse errors rather than aborting on the first one, and
//! performing `[IMPORTBASE]` macro expansion once the policy is built.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod ast;
mod parser;

pub use ast::IMPORT_BASE_PLACEHOLDER;
pub use ast::Language;
pub use ast::Policy;
pub use ast::Rule;
pub use parser::parse;

pub use warden_grammar::Diagnostic;
pub use warden_grammar::Lexer;
pub use warden_grammar::Severity;
pub use warden_grammar::Span;

/// Lexes and parses a policy document in one step.
///
/// This is the entry point most callers want: it runs the lexer, then the
/// parser, and merges both stages' diagnostics. Lex errors are reported
/// alongside parse errors rather than suppressing them, except that a lex
/// error on a token prevents that token from ever reaching the parser, which
/// may itself cause cascading parse errors.
pub fn parse_str(source: &str) -> (Option<Policy>, Vec<Diagnostic>) {
    let (tokens, mut errors) = Lexer::new().scan(source);
    let (policy, parse_errors) = parse(&tokens);
    errors.extend(parse_errors);
    if !errors.is_empty() {
        return (None, errors);
    }
    (policy, errors)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_str_reports_lex_errors() {
        let (policy, errors) = parse_str(r#"LANG "Go"#);
        assert!(policy.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn parse_str_end_to_end() {
        let (policy, errors) = parse_str(
            r#"LANG "Go";
IMPORTBASE "example.com/project";
IMPORTRULE "[IMPORTBASE]/domain" CANNOTIMPORT "[IMPORTBASE]/infra";"#,
        );
        assert!(errors.is_empty());
        let policy = policy.unwrap();
        assert_eq!(policy.rules[0].module, "example.com/project/domain");
    }
}
