use super::*;
use pretty_assertions::assert_eq;
use prism_ir::{FileSpec, UnitId};
use prism_resolve::{resolve, ParcelRegistry, SymbolTable};
use serde_json::{json, Value};

fn export(source: &str) -> Value {
    let interner = StringInterner::new();
    let parsed = prism_parse::parse_unit(
        UnitId::new(0),
        FileSpec::new("src", "Shapes", false),
        source,
        &interner,
    );
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);

    let mut table = SymbolTable::new();
    for decl in parsed.unit.declarations {
        table.register(decl, &interner).unwrap();
    }
    let output = resolve(&table, &ParcelRegistry::new(), &interner);
    assert!(output.diagnostics.is_empty());

    let text = graph_to_json(&output.graph, &interner).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_classes_in_topological_order() {
    let value = export(
        "class Square inherits Shape {}\n\
         abstract class Shape {}",
    );
    let names: Vec<_> = value["classes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Shape", "Square"]);
    assert_eq!(value["classes"][1]["parent"], json!("Shape"));
    assert_eq!(value["classes"][1]["linearization"], json!(["Shape", "Square"]));
}

#[test]
fn test_method_slot() {
    let value = export(
        "parcel Geo;\n\
         /** A drawable thing. */\n\
         interface Drawable { void draw(int layer, const char* label = NULL); }\n\
         class Sprite nickname Spr : Drawable { public void draw(int layer, const char* label); }",
    );
    let sprite = &value["classes"][1];
    assert_eq!(sprite["name"], json!("Geo::Sprite"));
    assert_eq!(sprite["parcel"], json!("Geo"));
    assert_eq!(sprite["nickname"], json!("Spr"));

    let draw = &sprite["methods"][0];
    assert_eq!(draw["name"], json!("draw"));
    assert_eq!(draw["origin"], json!("Geo::Sprite"));
    assert_eq!(draw["implements"], json!(["Geo::Drawable"]));
    assert_eq!(draw["returns"]["category"], json!("void"));
    assert_eq!(draw["params"][1]["type"]["text"], json!("const char*"));
    assert_eq!(draw["host_visible"], json!(true));
    assert!(draw.get("overrides").is_none());

    let drawable = &value["classes"][0];
    assert_eq!(drawable["doc"], json!("A drawable thing."));
    assert_eq!(
        drawable["methods"][0]["params"][1]["default"],
        json!("NULL")
    );
    assert_eq!(
        drawable["methods"][0]["params"][1]["type"]["nullable"],
        json!(true)
    );
}

#[test]
fn test_fields_and_inert_members() {
    let value = export(
        "class Counter { int count; inert int instances; inert Counter* create(); }\n\
         class Timer inherits Counter { double elapsed; }",
    );
    let timer = &value["classes"][1];
    assert_eq!(
        timer["fields"],
        json!([
            { "name": "count", "origin": "Counter", "type": { "text": "int", "category": "integer", "nullable": false }, "host_visible": false },
            { "name": "elapsed", "origin": "Timer", "type": { "text": "double", "category": "float", "nullable": false }, "host_visible": false }
        ])
    );
    let counter = &value["classes"][0];
    assert_eq!(counter["inert_fields"][0]["name"], json!("instances"));
    assert_eq!(counter["functions"][0]["name"], json!("create"));
    assert_eq!(timer["functions"], json!([]));
}
