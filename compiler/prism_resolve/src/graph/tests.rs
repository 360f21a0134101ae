use super::*;
use crate::test_support::Fixture;
use pretty_assertions::assert_eq;

fn entry(fixture: &Fixture, class: &str, method: &str) -> MethodEntry {
    let decl = fixture.table.lookup(fixture.name(class)).unwrap();
    let method = decl.method(fixture.name(method)).unwrap().clone();
    MethodEntry {
        name: method.name,
        origin: decl.name.full,
        is_abstract: method.is_abstract(),
        method,
        overrides: None,
        implements: Vec::new(),
    }
}

#[test]
fn test_method_table_replaces_in_place() {
    let fixture = Fixture::with(
        "class A { void first(); void second(); }\n\
         class B { void first(); }",
    );
    let mut table = MethodTable::default();
    table.insert(entry(&fixture, "A", "first"));
    table.insert(entry(&fixture, "A", "second"));
    table.insert(entry(&fixture, "B", "first"));

    assert_eq!(table.len(), 2);
    assert_eq!(table.slot(fixture.name("first")), Some(0));
    let origins: Vec<_> = table.iter().map(|e| fixture.text(e.origin)).collect();
    assert_eq!(origins, vec!["B", "A"]);
}

#[test]
fn test_field_table_first_wins() {
    let fixture = Fixture::with("class A { int x; } class B { char* x; }");
    let field = |class: &str| {
        let decl = fixture.table.lookup(fixture.name(class)).unwrap();
        FieldEntry {
            name: fixture.name("x"),
            origin: decl.name.full,
            field: decl.fields[0].clone(),
        }
    };

    let mut table = FieldTable::default();
    assert!(table.push(field("A")));
    assert!(!table.push(field("B")));
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.get(fixture.name("x")).map(|e| fixture.text(e.origin)),
        Some("A")
    );
}
