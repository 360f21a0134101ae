//! JSON output: an array with one object per diagnostic.
//!
//! Labels always carry the byte span; `file`, `line` and `column` appear
//! when the label's unit is in the source map.

use std::io::Write;

use serde::Serialize;

use crate::{Diagnostic, Label, SourceMap};

use super::DiagnosticEmitter;

#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    code: &'static str,
    kind: &'static str,
    severity: &'static str,
    message: &'a str,
    labels: Vec<LabelRecord<'a>>,
    notes: &'a [String],
    suggestions: &'a [String],
}

#[derive(Serialize)]
struct LabelRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
    start: u32,
    end: u32,
    message: &'a str,
    primary: bool,
}

/// Streams diagnostics as a JSON array: `begin`, any number of `emit`, `end`.
pub struct JsonEmitter<'s, W: Write> {
    writer: W,
    sources: &'s SourceMap,
    emitted: usize,
}

impl<'s, W: Write> JsonEmitter<'s, W> {
    pub fn new(writer: W, sources: &'s SourceMap) -> Self {
        JsonEmitter {
            writer,
            sources,
            emitted: 0,
        }
    }

    pub fn begin(&mut self) {
        let _ = self.writer.write_all(b"[\n");
    }

    pub fn end(&mut self) {
        let _ = self.writer.write_all(b"\n]\n");
    }
}

fn label_record<'a>(sources: &SourceMap, label: &'a Label) -> LabelRecord<'a> {
    let location = sources.location(label.unit, label.span);
    LabelRecord {
        line: location.as_ref().map(|loc| loc.line),
        column: location.as_ref().map(|loc| loc.column),
        file: location.map(|loc| loc.path),
        start: label.span.start,
        end: label.span.end,
        message: &label.message,
        primary: label.is_primary,
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let sources = self.sources;
        let record = DiagnosticRecord {
            code: diagnostic.code.as_str(),
            kind: diagnostic.code.kind_name(),
            severity: diagnostic.severity.as_str(),
            message: &diagnostic.message,
            labels: diagnostic
                .labels
                .iter()
                .map(|label| label_record(sources, label))
                .collect(),
            notes: &diagnostic.notes,
            suggestions: &diagnostic.suggestions,
        };
        if self.emitted > 0 {
            let _ = self.writer.write_all(b",\n");
        }
        self.emitted += 1;
        let _ = serde_json::to_writer_pretty(&mut self.writer, &record);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
