//! The `parse` command: show what one unit declares.

use super::{report_text, EXIT_FAILURE};
use prism_diagnostic::emitter::ColorMode;
use prism_diagnostic::SourceMap;
use prism_ir::{Declaration, FileSpec, StringInterner};
use std::fmt::Write;
use std::path::Path;

/// Parse a single file and print its declarations.
pub fn parse_file(path: &str) -> i32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: failed to read `{path}`: {err}");
            return EXIT_FAILURE;
        }
    };

    let mut sources = SourceMap::new();
    let unit = sources.add(path, text.as_str());
    let interner = StringInterner::new();
    let stem = Path::new(path)
        .file_stem()
        .map_or_else(|| path.to_owned(), |s| s.to_string_lossy().into_owned());
    let output = prism_parse::parse_unit(unit, FileSpec::new(".", stem, false), &text, &interner);

    println!("Parse result for '{path}':");
    if let Some(parcel) = output.unit.parcel {
        println!("  Parcel: {}", interner.lookup(parcel));
    }
    println!("  Declarations: {}", output.unit.declarations.len());
    println!("  Errors: {}", output.diagnostics.len());

    if !output.unit.declarations.is_empty() {
        println!();
        for decl in &output.unit.declarations {
            println!("{}", describe(decl, &interner));
        }
    }

    let failed = output.has_errors();
    if !output.diagnostics.is_empty() {
        println!();
        report_text(output.diagnostics, &sources, ColorMode::Auto);
    }
    if failed {
        EXIT_FAILURE
    } else {
        0
    }
}

fn describe(decl: &Declaration, interner: &StringInterner) -> String {
    let mut out = format!("  {} {}", decl.kind.as_str(), interner.lookup(decl.name.full));
    if let Some(parent) = &decl.parent {
        let _ = write!(out, " inherits {}", interner.lookup(parent.path));
    }
    if !decl.interfaces.is_empty() {
        let names: Vec<_> = decl.interfaces.iter().map(|i| interner.lookup(i.path)).collect();
        let _ = write!(out, " : {}", names.join(", "));
    }
    for field in &decl.fields {
        let _ = write!(
            out,
            "\n    {} {}",
            field.ty.render(interner),
            interner.lookup(field.name)
        );
    }
    for method in &decl.methods {
        let params: Vec<_> = method
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty.render(interner), interner.lookup(p.name)))
            .collect();
        let _ = write!(
            out,
            "\n    {} {}({})",
            method.return_type.render(interner),
            interner.lookup(method.name),
            params.join(", ")
        );
    }
    out
}
