//! The diagnostic value every phase produces.

use crate::ErrorCode;
use prism_ir::{Span, UnitId};
use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a span of one unit.
///
/// Each label names its own unit, so a diagnostic can point into several
/// files: a duplicate class and its first declaration, a cycle spanning
/// units.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub unit: UnitId,
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    pub fn primary(unit: UnitId, span: Span, message: impl Into<String>) -> Self {
        Label {
            unit,
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(unit: UnitId, span: Span, message: impl Into<String>) -> Self {
        Label {
            is_primary: false,
            ..Label::primary(unit, span, message)
        }
    }
}

/// One reported problem.
///
/// The [`ErrorCode`] is the kind; everything else is presentation. Built
/// with the `with_*` methods:
///
/// ```
/// use prism_diagnostic::{Diagnostic, ErrorCode};
/// use prism_ir::{Span, UnitId};
///
/// let diag = Diagnostic::error(ErrorCode::E2002)
///     .with_message("unknown parent class `Shel`")
///     .with_label(UnitId::new(0), Span::new(30, 34), "not found")
///     .with_suggestion("did you mean `Shell`?");
/// assert_eq!(diag.to_string(), "error [E2002]: unknown parent class `Shel`");
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic that is built but not reported is lost"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic::with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Diagnostic::with_severity(code, Severity::Warning)
    }

    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label.
    pub fn with_label(mut self, unit: UnitId, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(unit, span, message));
        self
    }

    pub fn with_secondary_label(
        mut self,
        unit: UnitId,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::secondary(unit, span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.iter().find(|label| label.is_primary)
    }

    /// Where the diagnostic points, for sorting and tests.
    pub fn primary_location(&self) -> Option<(UnitId, Span)> {
        self.primary_label().map(|label| (label.unit, label.span))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests;
