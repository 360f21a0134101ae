//! Command handlers for the `prism` binary.
//!
//! Each handler returns the process exit code instead of exiting, so the
//! commands can be driven from tests.

mod check;
mod explain;
mod parse;

pub use check::check;
pub use explain::explain_error;
pub use parse::parse_file;

use prism_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use prism_diagnostic::{Diagnostic, DiagnosticBag, SourceMap};
use std::io::IsTerminal;

/// Exit status when compilation produced diagnostics or failed.
pub const EXIT_FAILURE: i32 = 1;

/// Print diagnostics to stderr, sorted by location.
pub(crate) fn report_text(
    diagnostics: Vec<Diagnostic>,
    sources: &SourceMap,
    color: prism_diagnostic::emitter::ColorMode,
) {
    let mut bag = DiagnosticBag::new();
    bag.extend(diagnostics);
    bag.sort_by_location(sources);

    let mut emitter = TerminalEmitter::stderr(sources, color, std::io::stderr().is_terminal());
    emitter.emit_all(bag.as_slice());
    emitter.emit_summary(bag.error_count(), bag.warning_count());
    emitter.flush();
}

/// Write diagnostics as a JSON array.
pub(crate) fn report_json<W: std::io::Write>(
    writer: W,
    diagnostics: &[Diagnostic],
    sources: &SourceMap,
) {
    let mut emitter = JsonEmitter::new(writer, sources);
    emitter.begin();
    emitter.emit_all(diagnostics);
    emitter.end();
    emitter.flush();
}
