use super::*;
use prism_ir::UnitId;

fn tokens(source: &str, interner: &StringInterner) -> TokenList {
    prism_lexer::lex(source, UnitId::new(0), interner).tokens
}

#[test]
fn test_advance_stops_at_eof() {
    let interner = StringInterner::new();
    let list = tokens("class", &interner);
    let mut cursor = Cursor::new(&list, &interner);

    assert!(cursor.check(TokenKind::Class));
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_check_ignores_payload() {
    let interner = StringInterner::new();
    let list = tokens("Lobster", &interner);
    let cursor = Cursor::new(&list, &interner);

    assert!(cursor.check(TokenKind::Ident(interner.intern("Other"))));
    assert!(cursor.check_ident());
}

#[test]
fn test_eat_and_previous_span() {
    let interner = StringInterner::new();
    let list = tokens("{ }", &interner);
    let mut cursor = Cursor::new(&list, &interner);

    assert_eq!(cursor.previous_span(), Span::DUMMY);
    assert!(cursor.eat(TokenKind::RBrace).is_none());
    assert!(cursor.eat(TokenKind::LBrace).is_some());
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
    assert_eq!(cursor.peek_kind_at(0), TokenKind::RBrace);
    assert_eq!(cursor.peek_kind_at(5), TokenKind::Eof);
}
