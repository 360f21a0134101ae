use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_expected_message() {
    let err = ParseError::expected(
        ErrorCode::E1001,
        "`;`",
        TokenKind::RBrace,
        Span::new(4, 5),
    );
    assert_eq!(err.message, "expected `;`, found `}`");
    assert_eq!(err.label, "expected `;`");
}

#[test]
fn test_into_diagnostic_keeps_related_location() {
    let unit = UnitId::new(3);
    let diag = ParseError::new(ErrorCode::E1002, "unclosed body", Span::new(20, 20))
        .with_label("body never closed")
        .with_related(Span::new(8, 9), "opened here")
        .with_hint("add `}`")
        .into_diagnostic(unit);

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.primary_location(), Some((unit, Span::new(20, 20))));
    assert_eq!(diag.labels.len(), 2);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.labels[1].span, Span::new(8, 9));
    assert_eq!(diag.suggestions, vec!["add `}`".to_owned()]);
}
