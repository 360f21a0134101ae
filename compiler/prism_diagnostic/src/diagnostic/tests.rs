use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let unit = UnitId::new(3);
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("class `Zoo::Lobster` is declared twice")
        .with_label(unit, Span::new(10, 17), "second declaration")
        .with_secondary_label(UnitId::new(1), Span::new(4, 11), "first declared here")
        .with_note("class names must be unique across all parcels")
        .with_suggestion("rename one of the classes");

    assert_eq!(diag.code, ErrorCode::E2001);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_location(), Some((unit, Span::new(10, 17))));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_label_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E2004)
        .with_secondary_label(UnitId::new(0), Span::new(0, 1), "context")
        .with_label(UnitId::new(2), Span::new(5, 9), "here");

    let primary = diag.primary_label().map(|l| l.message.as_str());
    assert_eq!(primary, Some("here"));
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E3006);
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Warning);
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("unexpected `}`");
    assert_eq!(diag.to_string(), "error [E1001]: unexpected `}`");
}
