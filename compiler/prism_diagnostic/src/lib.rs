//! Diagnostic system for rich error reporting.
//!
//! Every phase reports problems as [`Diagnostic`] values instead of stopping:
//! - Error codes for searchability (`prism explain E2004`)
//! - Clear messages (what went wrong)
//! - Primary label (where it went wrong, as unit + span)
//! - Secondary labels and notes (why it's wrong)
//! - Suggestions (how to fix)
//!
//! Diagnostics are accumulated in a [`DiagnosticBag`] and rendered through a
//! [`emitter::DiagnosticEmitter`] once the pipeline has finished.

mod bag;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod source_map;

pub use bag::DiagnosticBag;
pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use source_map::{LineOffsetTable, Location, SourceMap};
