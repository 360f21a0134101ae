use super::*;
use crate::test_support::{codes, Fixture};
use pretty_assertions::assert_eq;

#[test]
fn test_registration_order_is_kept() {
    let fixture = Fixture::with("class Zeta {} class Alpha {} interface Mid {}");
    let names: Vec<_> = fixture
        .table
        .all()
        .map(|d| fixture.text(d.name.full))
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    assert_eq!(fixture.table.len(), 3);
}

#[test]
fn test_all_restarts() {
    let fixture = Fixture::with("class A {} class B {}");
    assert_eq!(fixture.table.all().count(), 2);
    assert_eq!(fixture.table.all().count(), 2);
}

#[test]
fn test_duplicate_keeps_first() {
    let mut fixture = Fixture::new();
    fixture.unit("class Dup { int first; }");
    fixture.unit("class Dup { int second; }");

    assert_eq!(codes(&fixture.diagnostics), vec![ErrorCode::E2001]);
    assert_eq!(fixture.table.len(), 1);

    let kept = fixture.table.lookup(fixture.name("Dup")).unwrap();
    assert_eq!(fixture.text(kept.fields[0].name), "first");

    let diag = &fixture.diagnostics[0];
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.labels[0].unit.index(), 1);
    assert_eq!(diag.labels[1].unit.index(), 0);
}

#[test]
fn test_lookup_by_qualified_name() {
    let fixture = Fixture::with("parcel Crust; class Lobster {}");
    assert!(fixture.table.contains(fixture.name("Crust::Lobster")));
    assert!(!fixture.table.contains(fixture.name("Lobster")));
    assert!(fixture.table.lookup(fixture.name("Crust::Crab")).is_none());
}

#[test]
fn test_empty_table() {
    let table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.all().next(), None);
}
