//! Definition of diagnostics shared by every stage of the policy engine.

use std::fmt;

/// Represents a span of source text in a policy file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// The start of the span.
    start: usize,
    /// The end of the span.
    end: usize,
}

impl Span {
    /// Creates a new span from the given start and length.
    pub const fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Gets the start of the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Gets the noninclusive end of the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Gets the length of the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Determines if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{start}..{end}", start = self.start, end = self.end)
    }
}

impl From<logos::Span> for Span {
    fn from(value: logos::Span) -> Self {
        Self::new(value.start, value.end - value.start)
    }
}

/// Represents the severity of a diagnostic.
///
/// Every diagnostic produced by the lexer and parser is an error: the DSL has
/// no warning-level findings of its own (those come from the evaluator, which
/// reports [violations][crate::diagnostic::Diagnostic] found in the project
/// rather than defects in the policy text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The diagnostic is a lex or parse error.
    Error,
}

/// A label attached to a diagnostic, pointing at a span with an explanatory
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// The message attached to this label.
    pub message: String,
    /// The span the label points at.
    pub span: Span,
}

/// Represents a lex or parse diagnostic.
///
/// Diagnostics are collected rather than thrown: a single lexer or parser run
/// may produce many of these, and all of them are returned to the caller
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    severity: Severity,
    /// The diagnostic message.
    message: String,
    /// The labels for the diagnostic.
    ///
    /// The first label, if present, is considered the primary label.
    labels: Vec<Label>,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            labels: Vec::new(),
        }
    }

    /// Adds a label to the diagnostic.
    #[must_use]
    pub fn with_label(mut self, message: impl Into<String>, span: Span) -> Self {
        self.labels.push(Label {
            message: message.into(),
            span,
        });
        self
    }

    /// Gets the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Gets the message of the diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the labels of the diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Converts this diagnostic into a `codespan-reporting` diagnostic for a
    /// given file id, for rendering to the terminal.
    pub fn to_codespan<FileId: Copy>(
        &self,
        file: FileId,
    ) -> codespan_reporting::diagnostic::Diagnostic<FileId> {
        use codespan_reporting::diagnostic::Diagnostic as CsDiagnostic;
        use codespan_reporting::diagnostic::Label as CsLabel;

        let mut diagnostic = CsDiagnostic::error().with_message(self.message.clone());

        let labels = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let range = label.span.start()..label.span.end();
                if i == 0 {
                    CsLabel::primary(file, range).with_message(label.message.clone())
                } else {
                    CsLabel::secondary(file, range).with_message(label.message.clone())
                }
            })
            .collect();

        diagnostic.labels = labels;
        diagnostic
    }
}
