//! End-to-end runs of the `prism` commands over temporary trees.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use prismc::commands::{check, explain_error, parse_file, EXIT_FAILURE};
use prismc::{parse_compile_options, EmitKind};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn shapes() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Geo.parcel",
        r#"{ "name": "Geo", "nickname": "G", "version": "v1.2" }"#,
    );
    write(
        dir.path(),
        "Geo/Shape.pdl",
        "parcel Geo;\n\
         /** Anything that can be drawn. */\n\
         abstract class Shape { abstract void draw(); int sides; }",
    );
    write(
        dir.path(),
        "Geo/Square.pdl",
        "parcel Geo;\n\
         final class Square inherits Shape { override void draw(); }",
    );
    dir
}

#[test]
fn test_check_emits_graph() {
    let dir = shapes();
    let out = TempDir::new().unwrap();
    let graph = out.path().join("graph.json");

    let options = parse_compile_options(&args(&[
        dir.path().to_str().unwrap(),
        "--emit=graph",
        "-o",
        graph.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(options.emit, EmitKind::Graph);
    assert_eq!(check(&options), 0);

    let value: Value = serde_json::from_str(&fs::read_to_string(&graph).unwrap()).unwrap();
    let classes = value["classes"].as_array().unwrap();
    let names: Vec<_> = classes.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Geo::Shape", "Geo::Square"]);
    assert_eq!(classes[1]["parent"], "Geo::Shape");
}

#[test]
fn test_check_reports_json_diagnostics() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.pdl", "class A inherits A {}");
    let out = TempDir::new().unwrap();
    let report = out.path().join("diagnostics.json");

    let options = parse_compile_options(&args(&[
        dir.path().to_str().unwrap(),
        "--emit=json",
        &format!("--output={}", report.display()),
    ]))
    .unwrap();
    assert_eq!(check(&options), EXIT_FAILURE);

    let value: Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let codes: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["E2004"]);
}

#[test]
fn test_check_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let options = parse_compile_options(&args(&[missing.to_str().unwrap()])).unwrap();
    assert_eq!(check(&options), EXIT_FAILURE);
}

#[test]
fn test_parse_command() {
    let dir = shapes();
    let square = dir.path().join("Geo/Square.pdl");
    assert_eq!(parse_file(square.to_str().unwrap()), 0);

    write(dir.path(), "Broken.pdl", "class {");
    let broken = dir.path().join("Broken.pdl");
    assert_eq!(parse_file(broken.to_str().unwrap()), EXIT_FAILURE);
    assert_eq!(
        parse_file(dir.path().join("absent.pdl").to_str().unwrap()),
        EXIT_FAILURE
    );
}

#[test]
fn test_explain_command() {
    assert_eq!(explain_error("E2004"), 0);
    assert_eq!(explain_error("E9999"), EXIT_FAILURE);
    assert_eq!(explain_error("cycle"), EXIT_FAILURE);
}
