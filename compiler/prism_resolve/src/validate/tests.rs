use super::*;
use crate::test_support::{codes, Fixture};
use pretty_assertions::assert_eq;

/// Resolve the fixture, insist on a clean resolution, then validate.
fn check(source: &str) -> (Fixture, Vec<Diagnostic>) {
    let fixture = Fixture::with(source);
    let output = fixture.resolve();
    assert_eq!(codes(&output.diagnostics), vec![]);
    let diagnostics = validate(&output.graph, &fixture.interner);
    (fixture, diagnostics)
}

#[test]
fn test_clean_hierarchy() {
    let (_, diagnostics) = check(
        "interface Sized { int size(); }\n\
         abstract class Shape : Sized { abstract void draw(); }\n\
         final class Circle inherits Shape {\n\
             override void draw();\n\
             int size();\n\
             inert Circle* create(double radius);\n\
         }",
    );
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_concrete_class_with_abstract_methods() {
    let (fixture, diagnostics) = check(
        "interface Sized { int size(); }\n\
         abstract class Shape { abstract void draw(); }\n\
         class Square inherits Shape : Sized {}",
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E3001]);

    let diag = &diagnostics[0];
    assert_eq!(diag.message, "class `Square` does not implement `draw`, `size`");
    assert_eq!(diag.labels.len(), 3);
    assert_eq!(
        diag.primary_location().map(|(_, span)| span),
        fixture
            .table
            .lookup(fixture.name("Square"))
            .map(|d| d.name.span)
    );
}

#[test]
fn test_abstract_class_may_leave_methods_abstract() {
    let (_, diagnostics) = check("interface Sized { int size(); } abstract class Box : Sized {}");
    assert_eq!(diagnostics, vec![]);
}

#[test]
fn test_interface_fields() {
    let (_, diagnostics) = check("interface Holder { int a; int b; }");
    assert_eq!(
        codes(&diagnostics),
        vec![ErrorCode::E3002, ErrorCode::E3002]
    );
}

#[test]
fn test_final_class_inherited() {
    let (fixture, diagnostics) = check("final class F {} class G inherits F {}");
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E3003]);

    let g = fixture.table.lookup(fixture.name("G")).unwrap();
    let parent_span = g.parent.as_ref().map(|p| p.span);
    assert_eq!(
        diagnostics[0].primary_location().map(|(_, span)| span),
        parent_span
    );
}

#[test]
fn test_final_class_inherited_by_unresolved_class() {
    let fixture = Fixture::with(
        "final class F { int size(); }\n\
         class G inherits F { Obj* size(); }\n\
         class H inherits F : Missing {}",
    );
    let output = fixture.resolve();
    assert_eq!(
        codes(&output.diagnostics),
        vec![ErrorCode::E2003, ErrorCode::E2009]
    );
    assert!(!output.graph.contains(fixture.name("G")));
    assert!(!output.graph.contains(fixture.name("H")));

    let diagnostics = validate(&output.graph, &fixture.interner);
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E3003, ErrorCode::E3003]);
    assert_eq!(diagnostics[0].message, "`G` inherits from final class `F`");
    assert_eq!(diagnostics[1].message, "`H` inherits from final class `F`");
}

#[test]
fn test_final_method_overridden() {
    let (_, diagnostics) = check(
        "class A { final void run(); void walk(); }\n\
         class B inherits A { void run(); void walk(); }",
    );
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E3004]);
    assert_eq!(diagnostics[0].labels.len(), 2);
}

#[test]
fn test_duplicate_members() {
    let (_, diagnostics) = check("class A { void run(); void run(); int x; int x; int y; }");
    assert_eq!(
        codes(&diagnostics),
        vec![ErrorCode::E3005, ErrorCode::E3005]
    );
    assert!(diagnostics[0].message.starts_with("method `run`"));
    assert!(diagnostics[1].message.starts_with("field `x`"));
}

#[test]
fn test_override_with_nothing_to_override() {
    let (_, diagnostics) = check(
        "class A { override void run(); inert override void make(); }\n\
         interface Walker { void walk(); }\n\
         class B inherits A : Walker { override void run(); override void walk(); }",
    );
    assert_eq!(
        codes(&diagnostics),
        vec![ErrorCode::E3006, ErrorCode::E3006]
    );
    assert!(diagnostics.iter().all(|d| d.message.starts_with("`A::")));
}

#[test]
fn test_inert_class_members() {
    let (_, diagnostics) = check(
        "inert class Util {\n\
             inert int counter;\n\
             inert void reset();\n\
             int stray;\n\
             void wander();\n\
         }",
    );
    assert_eq!(
        codes(&diagnostics),
        vec![ErrorCode::E3007, ErrorCode::E3007]
    );
}

#[test]
fn test_checks_are_independent() {
    let (_, diagnostics) = check(
        "final class F { abstract void run(); }\n\
         class G inherits F {}",
    );
    // F: concrete with abstract method. G: final parent, and inherits it.
    assert_eq!(
        codes(&diagnostics),
        vec![ErrorCode::E3001, ErrorCode::E3001, ErrorCode::E3003]
    );
}
