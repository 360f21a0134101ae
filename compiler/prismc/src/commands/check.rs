//! The `check` command: compile a set of directories and report.

use super::{report_json, report_text, EXIT_FAILURE};
use crate::export::graph_to_json;
use crate::{compile, CompileError, CompileOptions, CompileOutput, EmitKind};
use std::fs;
use std::io::Write;

/// Compile and report according to `options.emit`.
///
/// Returns 0 when the compilation produced no diagnostics.
pub fn check(options: &CompileOptions) -> i32 {
    match run(options) {
        Ok(true) => 0,
        Ok(false) => EXIT_FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_FAILURE
        }
    }
}

fn run(options: &CompileOptions) -> Result<bool, CompileError> {
    let output = compile(options)?;
    let succeeded = output.succeeded();

    match options.emit {
        EmitKind::Text => {
            let CompileOutput {
                diagnostics,
                sources,
                ..
            } = output;
            report_text(diagnostics, &sources, options.color);
        }
        EmitKind::Json => {
            let mut buffer = Vec::new();
            report_json(&mut buffer, &output.diagnostics, &output.sources);
            write_output(options, &buffer)?;
        }
        EmitKind::Graph => {
            let json = graph_to_json(&output.graph, &output.interner)?;
            write_output(options, json.as_bytes())?;
            report_text(output.diagnostics, &output.sources, options.color);
        }
    }
    Ok(succeeded)
}

fn write_output(options: &CompileOptions, bytes: &[u8]) -> Result<(), CompileError> {
    match &options.output {
        Some(path) => fs::write(path, bytes).map_err(|source| CompileError::Write {
            path: path.clone(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|source| CompileError::Write {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}
