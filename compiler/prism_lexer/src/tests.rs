use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> (Vec<TokenKind>, Vec<Diagnostic>, StringInterner) {
    let interner = StringInterner::new();
    let output = lex(source, UnitId::new(0), &interner);
    let kinds = output.tokens.iter().map(|t| t.kind).collect();
    (kinds, output.diagnostics, interner)
}

#[test]
fn test_empty_source_is_just_eof() {
    let (tokens, diags, _) = kinds("");
    assert_eq!(tokens, vec![TokenKind::Eof]);
    assert!(diags.is_empty());
}

#[test]
fn test_keywords_and_punctuation() {
    let (tokens, diags, interner) = kinds("public abstract class Zoo::Lobster : Swimmer { }");
    assert!(diags.is_empty());
    assert_eq!(
        tokens,
        vec![
            TokenKind::Public,
            TokenKind::Abstract,
            TokenKind::Class,
            TokenKind::Ident(interner.intern("Zoo")),
            TokenKind::DoubleColon,
            TokenKind::Ident(interner.intern("Lobster")),
            TokenKind::Colon,
            TokenKind::Ident(interner.intern("Swimmer")),
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let (tokens, _, interner) = kinds("classy interfaces");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Ident(interner.intern("classy")),
            TokenKind::Ident(interner.intern("interfaces")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_literals() {
    let (tokens, diags, interner) = kinds(r#"= 42 = -1 = 2.5 = "a \"b\"" ..."#);
    assert!(diags.is_empty());
    assert_eq!(
        tokens,
        vec![
            TokenKind::Eq,
            TokenKind::Int(interner.intern("42")),
            TokenKind::Eq,
            TokenKind::Int(interner.intern("-1")),
            TokenKind::Eq,
            TokenKind::Float(interner.intern("2.5")),
            TokenKind::Eq,
            TokenKind::Str(interner.intern(r#""a \"b\"""#)),
            TokenKind::Ellipsis,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_skipped_but_doc_comments_kept() {
    let source = "// line\n/* block\n * more */ /** Doc. */ class /**/ X";
    let (tokens, diags, interner) = kinds(source);
    assert!(diags.is_empty());
    assert_eq!(
        tokens,
        vec![
            TokenKind::DocComment(interner.intern("/** Doc. */")),
            TokenKind::Class,
            TokenKind::Ident(interner.intern("X")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_comment_reports_once_and_stops() {
    let source = "class A {}\n/* never closed\nclass B {}";
    let (tokens, diags, _) = kinds(source);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0001);
    assert_eq!(diags[0].primary_location(), Some((UnitId::new(0), Span::new(11, 13))));
    assert_eq!(tokens.len(), 5); // class A { } Eof
    assert_eq!(tokens.last(), Some(&TokenKind::Eof));
}

#[test]
fn test_invalid_characters_are_grouped() {
    let (tokens, diags, interner) = kinds("class @@@ X # Y");
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.code == ErrorCode::E0002));
    assert_eq!(diags[0].message, "invalid characters `@@@`");
    assert_eq!(diags[1].message, "invalid character `#`");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Class,
            TokenKind::Ident(interner.intern("X")),
            TokenKind::Ident(interner.intern("Y")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let (_, diags, _) = kinds("int x = \"oops\nclass");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0003);
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let output = lex("  class  Foo", UnitId::new(0), &interner);
    let spans: Vec<_> = output.tokens.iter().map(|t| t.span).collect();
    assert_eq!(spans, vec![Span::new(2, 7), Span::new(9, 12), Span::new(12, 12)]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lexing_never_panics_and_ends_with_eof(source in "\\PC{0,200}") {
            let interner = StringInterner::new();
            let output = lex(&source, UnitId::new(0), &interner);
            prop_assert_eq!(output.tokens.as_slice().last().map(|t| t.kind), Some(TokenKind::Eof));
        }

        #[test]
        fn token_spans_are_ordered(source in "[a-z{};:*/ \n\"@]{0,120}") {
            let interner = StringInterner::new();
            let output = lex(&source, UnitId::new(0), &interner);
            let spans: Vec<_> = output.tokens.iter().map(|t| t.span).collect();
            for pair in spans.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
        }
    }
}
