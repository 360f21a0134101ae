//! Human-readable reports.
//!
//! ```text
//! error[E2004]: inheritance cycle between `Zoo::A` and `Zoo::B`
//!   --> zoo/A.pdl:3:7
//!    |
//!  3 | class A inherits B {}
//!    |       ^ `Zoo::A` is part of the cycle
//!   ::: zoo/B.pdl:1:7 `Zoo::B` is part of the cycle
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label, Severity, SourceMap};

use super::DiagnosticEmitter;

/// ANSI styles.
#[derive(Copy, Clone)]
enum Style {
    Error,
    Warning,
    Secondary,
    Help,
    Bold,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Secondary => "\x1b[1;34m",
            Style::Help => "\x1b[1;32m",
            Style::Bold => "\x1b[1m",
        }
    }
}

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    sources: &'s SourceMap,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn with_color_mode(writer: W, sources: &'s SourceMap, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            sources,
        }
    }

    fn paint(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.code())
        } else {
            write!(self.writer, "{text}")
        };
    }

    fn header(&mut self, diagnostic: &Diagnostic) {
        let style = match diagnostic.severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        };
        self.paint(diagnostic.severity.as_str(), style);
        self.paint(&format!("[{}]", diagnostic.code), Style::Bold);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    /// `-->` line plus the source line with a caret underline.
    fn primary(&mut self, label: &Label) {
        let Some(location) = self.sources.location(label.unit, label.span) else {
            let _ = writeln!(self.writer, "  --> {:?}", label.span);
            if !label.message.is_empty() {
                let _ = write!(self.writer, "      ");
                self.paint(&label.message, Style::Error);
                let _ = writeln!(self.writer);
            }
            return;
        };
        let _ = writeln!(self.writer, "  --> {location}");

        let Some(text) = self.sources.line_text(label.unit, label.span) else {
            return;
        };
        let text = text.to_owned();
        let gutter = " ".repeat(location.line.to_string().len());
        let _ = writeln!(self.writer, " {gutter} |");
        let _ = writeln!(self.writer, " {} | {text}", location.line);

        let column = location.column.saturating_sub(1) as usize;
        let room = text.chars().count().saturating_sub(column).max(1);
        let carets = "^".repeat((label.span.len().max(1) as usize).min(room));
        let underline = format!("{carets} {}", label.message);
        let _ = write!(self.writer, " {gutter} | {}", " ".repeat(column));
        self.paint(underline.trim_end(), Style::Error);
        let _ = writeln!(self.writer);
    }

    /// One `:::` line pointing at related context.
    fn secondary(&mut self, label: &Label) {
        let place = self
            .sources
            .location(label.unit, label.span)
            .map_or_else(|| format!("{:?}", label.span), |loc| loc.to_string());
        let _ = write!(self.writer, "  ::: {place} ");
        self.paint(&label.message, Style::Secondary);
        let _ = writeln!(self.writer);
    }

    fn trailer(&mut self, word: &str, style: Style, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.paint(word, style);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl<'s> TerminalEmitter<'s, io::Stderr> {
    pub fn stderr(sources: &'s SourceMap, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), sources, mode, is_tty)
    }
}

fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.header(diagnostic);
        for label in &diagnostic.labels {
            if label.is_primary {
                self.primary(label);
            } else {
                self.secondary(label);
            }
        }
        for note in &diagnostic.notes {
            self.trailer("note", Style::Bold, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.trailer("help", Style::Help, suggestion);
        }
        let _ = writeln!(self.writer);
    }

    fn emit_summary(&mut self, errors: usize, warnings: usize) {
        let (word, style) = match (errors, warnings) {
            (0, 0) => return,
            (0, _) => ("warning", Style::Warning),
            _ => ("error", Style::Error),
        };
        let mut parts = Vec::new();
        if errors > 0 {
            parts.push(counted(errors, "error"));
        }
        if warnings > 0 {
            parts.push(counted(warnings, "warning"));
        }
        self.paint(word, style);
        let _ = writeln!(self.writer, ": compilation reported {}", parts.join(" and "));
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
