use super::*;
use pretty_assertions::assert_eq;
use prism_diagnostic::ErrorCode;
use prism_ir::{Declaration, TypeCategory, TypeQualifiers, Visibility};

struct Parsed {
    output: ParseOutput,
    interner: StringInterner,
}

impl Parsed {
    fn decls(&self) -> &[Arc<Declaration>] {
        &self.output.unit.declarations
    }

    fn codes(&self) -> Vec<ErrorCode> {
        self.output.diagnostics.iter().map(|d| d.code).collect()
    }

    fn text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    fn names(&self) -> Vec<&'static str> {
        self.decls().iter().map(|d| self.text(d.name.full)).collect()
    }
}

fn parse(source: &str) -> Parsed {
    let interner = StringInterner::new();
    let output = parse_unit(
        UnitId::new(0),
        FileSpec::new("src", "Test", false),
        source,
        &interner,
    );
    Parsed { output, interner }
}

#[test]
fn test_empty_unit() {
    let parsed = parse("");
    assert!(parsed.output.unit.is_empty());
    assert!(parsed.output.diagnostics.is_empty());
    assert_eq!(parsed.output.unit.parcel, None);
}

#[test]
fn test_comments_only_unit() {
    let parsed = parse("// nothing\n/* here */\n/** dangling */");
    assert!(parsed.output.unit.is_empty());
    assert!(parsed.output.diagnostics.is_empty());
}

#[test]
fn test_full_declaration() {
    let parsed = parse(
        r#"
parcel Crust;

/** A clawed animal. Lives in the sea.
 */
public abstract class Lobster nickname Lob inherits Animal : Swimmer, Zoo::Exhibit {
    /** Claw count. */
    int claws;
    private inert int population;

    public Lobster* init(Lobster *self, const char *name = NULL, int legs = 10);
    abstract incremented String* describe(Lobster *self, ...);
    final override void molt(Lobster *self);
    inert nullable Lobster* make();
    uint8_t[16] hash_bytes(Lobster *self);
};
"#,
    );
    assert!(parsed.output.diagnostics.is_empty(), "{:?}", parsed.output.diagnostics);
    assert_eq!(parsed.output.unit.parcel.map(|p| parsed.text(p)), Some("Crust"));

    let decl = &parsed.decls()[0];
    assert!(decl.is_class());
    assert!(decl.is_abstract());
    assert!(!decl.is_final());
    assert_eq!(parsed.text(decl.name.full), "Crust::Lobster");
    assert_eq!(decl.name.namespace.map(|n| parsed.text(n)), Some("Crust"));
    assert_eq!(parsed.text(decl.name.short), "Lobster");
    assert_eq!(decl.nickname.map(|n| parsed.text(n)), Some("Lob"));
    assert_eq!(decl.parent.map(|p| parsed.text(p.path)), Some("Animal"));
    let interfaces: Vec<_> = decl.interfaces.iter().map(|i| parsed.text(i.path)).collect();
    assert_eq!(interfaces, vec!["Swimmer", "Zoo::Exhibit"]);
    assert_eq!(decl.parcel, parsed.output.unit.parcel);
    assert_eq!(decl.doc.as_ref().unwrap().brief, "A clawed animal.");

    assert_eq!(decl.fields.len(), 2);
    let claws = &decl.fields[0];
    assert_eq!(parsed.text(claws.name), "claws");
    assert_eq!(claws.ty.category, TypeCategory::Integer);
    assert_eq!(claws.visibility, Visibility::Parcel);
    assert_eq!(claws.doc.as_ref().unwrap().brief, "Claw count.");
    let population = &decl.fields[1];
    assert!(population.inert);
    assert_eq!(population.visibility, Visibility::Private);

    assert_eq!(decl.methods.len(), 5);
    let init = &decl.methods[0];
    assert!(init.is_host_visible());
    assert_eq!(init.params.arity(), 3);
    assert_eq!(init.return_type.category, TypeCategory::Object);
    let name_param = &init.params.as_slice()[1];
    assert!(name_param.ty.is_nullable());
    assert!(name_param.ty.qualifiers.contains(TypeQualifiers::CONST));
    assert_eq!(name_param.ty.category, TypeCategory::Pointer);
    assert_eq!(
        init.params.as_slice()[2].default.map(|d| parsed.text(d)),
        Some("10")
    );

    let describe = &decl.methods[1];
    assert!(describe.is_abstract());
    assert!(describe.params.is_variadic());
    assert_eq!(describe.params.arity(), 1);
    assert!(describe
        .return_type
        .qualifiers
        .contains(TypeQualifiers::INCREMENTED));

    let molt = &decl.methods[2];
    assert!(molt.is_final());
    assert!(molt.expects_override());
    assert!(molt.return_type.is_void());

    assert!(decl.methods[3].is_inert());
    assert_eq!(decl.functions().count(), 1);
    assert_eq!(decl.instance_methods().count(), 4);

    let hash = &decl.methods[4];
    assert_eq!(hash.return_type.array, Some(Some(16)));
    assert_eq!(hash.return_type.render(&parsed.interner), "uint8_t[16]");
}

#[test]
fn test_qualified_declaration_name_is_kept() {
    let parsed = parse("parcel Crust; interface Zoo::Swimmer {}");
    let decl = &parsed.decls()[0];
    assert!(decl.is_interface());
    assert_eq!(parsed.text(decl.name.full), "Zoo::Swimmer");
    assert_eq!(decl.name.namespace.map(|n| parsed.text(n)), Some("Zoo"));
}

#[test]
fn test_bare_name_without_parcel() {
    let parsed = parse("class Lobster {}");
    let decl = &parsed.decls()[0];
    assert_eq!(parsed.text(decl.name.full), "Lobster");
    assert_eq!(decl.name.namespace, None);
    assert_eq!(decl.parcel, None);
}

#[test]
fn test_bad_member_drops_only_its_declaration() {
    let parsed = parse(
        "class A { int x; int ; void ok(); }\n\
         class B { int y; }",
    );
    assert_eq!(parsed.codes(), vec![ErrorCode::E1003]);
    assert_eq!(parsed.names(), vec!["B"]);
}

#[test]
fn test_unterminated_body_reports_start() {
    let parsed = parse("class A {\n  int x;\n\nclass B { }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    assert_eq!(
        parsed.output.diagnostics[0].primary_location(),
        Some((UnitId::new(0), Span::new(8, 9)))
    );
    assert_eq!(parsed.names(), vec!["B"]);
}

#[test]
fn test_unterminated_body_keeps_next_modifiers_and_doc() {
    let parsed = parse("class A {\n  int x;\n\n/** Shelled. */\npublic abstract class B { }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    assert_eq!(
        parsed.output.diagnostics[0].primary_location(),
        Some((UnitId::new(0), Span::new(8, 9)))
    );
    assert_eq!(parsed.names(), vec!["B"]);
    let b = &parsed.decls()[0];
    assert!(b.is_abstract());
    assert_eq!(b.visibility, Visibility::Public);
    assert_eq!(b.doc.as_ref().unwrap().brief, "Shelled.");
}

#[test]
fn test_unterminated_body_at_end_of_file() {
    let parsed = parse("class A { int x;");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    assert!(parsed.decls().is_empty());
}

#[test]
fn test_unclosed_parameter_list() {
    let parsed = parse("class A { void f(int a; } class B {}");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1002]);
    assert_eq!(
        parsed.output.diagnostics[0].primary_location(),
        Some((UnitId::new(0), Span::new(16, 17)))
    );
    assert_eq!(parsed.names(), vec!["B"]);
}

#[test]
fn test_missing_comma_between_params() {
    let parsed = parse("class A { void f(int a int b); }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1001]);
}

#[test]
fn test_override_on_declaration_is_rejected() {
    let parsed = parse("override class A { } class B { }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1005]);
    assert_eq!(parsed.names(), vec!["B"]);
}

#[test]
fn test_member_modifier_placement() {
    let parsed = parse(
        "class A { abstract int x; }\n\
         class B { override int y; }\n\
         class C { public public void f(); }\n\
         class D { public private void g(); }\n\
         class E { public inert int z; final void h(); }",
    );
    assert_eq!(
        parsed.codes(),
        vec![
            ErrorCode::E1005,
            ErrorCode::E1005,
            ErrorCode::E1005,
            ErrorCode::E1005
        ]
    );
    assert_eq!(parsed.names(), vec!["E"]);
}

#[test]
fn test_duplicate_modifier_points_at_first() {
    let parsed = parse("final final class A {}");
    let diag = &parsed.output.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E1005);
    assert_eq!(diag.labels[1].span, Span::new(0, 5));
}

#[test]
fn test_parcel_after_declaration() {
    let parsed = parse("class A {} parcel Crust; class B {}");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1006]);
    assert_eq!(parsed.output.unit.parcel, None);
    assert_eq!(parsed.names(), vec!["A", "B"]);
}

#[test]
fn test_repeated_parcel() {
    let parsed = parse("parcel Crust; parcel Other; class A {}");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1006]);
    assert_eq!(parsed.names(), vec!["Crust::A"]);
}

#[test]
fn test_malformed_parcel_declaration() {
    let parsed = parse("parcel ; class A {}");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1006]);
    assert_eq!(parsed.names(), vec!["A"]);
}

#[test]
fn test_expected_type() {
    let parsed = parse("class A { 5 x; }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1004]);
}

#[test]
fn test_expected_declaration_name() {
    let parsed = parse("class { } class B {}");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1003]);
    assert_eq!(parsed.names(), vec!["B"]);
}

#[test]
fn test_pointer_depth_out_of_range() {
    let stars = "*".repeat(256);
    let parsed = parse(&format!("class A {{ int{stars} p; }} class B {{ int** q; }}"));
    assert_eq!(parsed.codes(), vec![ErrorCode::E1007]);
    assert_eq!(parsed.names(), vec!["B"]);
    assert_eq!(parsed.decls()[0].fields[0].ty.indirection, 2);
}

#[test]
fn test_array_size_out_of_range() {
    let parsed = parse("class A { int[-1] a; } class B { int[4294967296] b; } class C { int[] c; }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1007, ErrorCode::E1007]);
    assert_eq!(parsed.names(), vec!["C"]);
    assert_eq!(parsed.decls()[0].fields[0].ty.array, Some(None));
}

#[test]
fn test_stray_top_level_tokens() {
    let parsed = parse("} ; class A {}");
    assert_eq!(parsed.codes(), vec![ErrorCode::E1001, ErrorCode::E1001]);
    assert_eq!(parsed.names(), vec!["A"]);
}

#[test]
fn test_lexer_diagnostics_come_first() {
    let parsed = parse("class A { int x; } @ class B { int ; }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E0002, ErrorCode::E1003]);
    assert_eq!(parsed.names(), vec!["A"]);
    assert!(parsed.output.has_errors());
}

#[test]
fn test_declarations_keep_source_order() {
    let parsed = parse("parcel P; class C {} interface A {} class B {}");
    assert_eq!(parsed.names(), vec!["P::C", "P::A", "P::B"]);
    assert!(parsed.decls().iter().all(|d| d.unit == UnitId::new(0)));
}
