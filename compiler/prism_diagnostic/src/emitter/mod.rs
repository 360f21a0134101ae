//! Rendering diagnostics for people and for tools.
//!
//! [`TerminalEmitter`] prints rustc-style reports with source snippets;
//! [`JsonEmitter`] writes one JSON array for editors and CI. Both look up
//! label positions in a [`SourceMap`](crate::SourceMap).

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// A sink for diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Closing line after all diagnostics. Formats without one ignore it.
    fn emit_summary(&mut self, _errors: usize, _warnings: usize) {}

    fn flush(&mut self);
}
