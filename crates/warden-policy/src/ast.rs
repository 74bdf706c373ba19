//! The structured form of a validated policy.

use std::fmt;

/// The placeholder substituted for [`Policy::import_base`] throughout the
/// policy text.
pub const IMPORT_BASE_PLACEHOLDER: &str = "[IMPORTBASE]";

/// A host language recognized by the `LANG` declaration.
///
/// This is a closed set covering at least `Go` and `TypeScript`. The tag is
/// strictly a selector for which import extractor to run; it carries no
/// other semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// The Go programming language.
    Go,
    /// The TypeScript programming language.
    TypeScript,
}

impl Language {
    /// Parses a language name from a `LANG` string literal.
    ///
    /// Returns `None` if the name isn't a recognized host language.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Go" => Some(Self::Go),
            "TypeScript" => Some(Self::TypeScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Go => "Go",
            Self::TypeScript => "TypeScript",
        };
        write!(f, "{name}")
    }
}

/// A single `IMPORTRULE` clause.
///
/// A rule governs every file whose canonical module path begins with
/// [`module`][Rule::module] (prefix match), and forbids every import that
/// begins with one of [`cannot_import`][Rule::cannot_import]'s entries
/// unless a more specific entry in [`allow`][Rule::allow] overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The module path this rule governs.
    pub module: String,
    /// The module-path prefixes this module may not import.
    ///
    /// Always non-empty for a rule that parsed successfully.
    pub cannot_import: Vec<String>,
    /// The module-path prefixes that override `cannot_import`, when they are
    /// a strictly longer (more specific) prefix match.
    pub allow: Vec<String>,
}

/// A fully parsed and macro-expanded policy.
///
/// Once constructed by [`crate::parse`], a `Policy` is immutable: no string
/// in it contains the literal `[IMPORTBASE]` placeholder anymore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// The declared target language.
    pub language: Language,
    /// The import-base prefix, or the empty string if none was declared.
    pub import_base: String,
    /// The ordered rules of this policy.
    ///
    /// Always non-empty for a policy that parsed successfully.
    pub rules: Vec<Rule>,
}

impl Policy {
    /// Replaces every occurrence of `[IMPORTBASE]` in the given string with
    /// this policy's import base.
    ///
    /// Replacement is global (not anchored) and purely textual: partial
    /// matches like `[IMPORTBASE]-suffix` are expanded too.
    pub(crate) fn expand(import_base: &str, text: &str) -> String {
        text.replace(IMPORT_BASE_PLACEHOLDER, import_base)
    }
}
