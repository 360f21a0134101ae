//! Parse error type.
//!
//! Grammar rules return `Result<T, ParseError>`; the declaration loop turns
//! the first error of a declaration into a [`Diagnostic`] and recovers.

use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{Span, TokenKind, UnitId};

/// A syntax error at a single location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Label text at `span`.
    pub label: String,
    /// Related location, e.g. the `{` of an unclosed body.
    pub related: Option<(Span, String)>,
    pub hint: Option<String>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            label: String::new(),
            related: None,
            hint: None,
        }
    }

    /// "expected X, found Y" at the offending token.
    pub fn expected(code: ErrorCode, expected: &str, found: TokenKind, span: Span) -> Self {
        ParseError::new(
            code,
            format!("expected {expected}, found {}", found.display_name()),
            span,
        )
        .with_label(format!("expected {expected}"))
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Convert to a diagnostic located in `unit`.
    pub fn into_diagnostic(self, unit: UnitId) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message)
            .with_label(unit, self.span, self.label);
        if let Some((span, message)) = self.related {
            diag = diag.with_secondary_label(unit, span, message);
        }
        if let Some(hint) = self.hint {
            diag = diag.with_suggestion(hint);
        }
        diag
    }
}

#[cfg(test)]
mod tests;
