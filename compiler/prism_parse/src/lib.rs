//! Recursive descent parser for Prism declaration units.
//!
//! One call parses one unit into a [`SourceUnit`]. Parsing never aborts:
//! each malformed declaration yields exactly one diagnostic and is dropped,
//! and parsing resumes at the next declaration boundary.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{skip_declaration, TokenSet};

use prism_diagnostic::Diagnostic;
use prism_ir::{FileSpec, Name, SourceUnit, Span, StringInterner, TokenKind, TokenList, UnitId};
use std::sync::Arc;
use tracing::debug;

/// Result of parsing one unit.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub unit: SourceUnit,
    /// Lexer diagnostics followed by syntax diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parser state for a single unit.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    unit: UnitId,
    /// Parcel named by the unit's `parcel` declaration.
    parcel: Option<(Name, Span)>,
    /// Whether a class or interface has been seen (parcel must come first).
    seen_declaration: bool,
    /// Brace depth inside the current declaration, used for recovery.
    depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, unit: UnitId, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            unit,
            parcel: None,
            seen_declaration: false,
            depth: 0,
        }
    }

    /// Parse every top-level item in the token stream.
    pub fn parse(mut self, file: FileSpec) -> (SourceUnit, Vec<Diagnostic>) {
        let mut unit = SourceUnit::new(self.unit, file);
        let mut diagnostics = Vec::new();

        loop {
            let doc = self.take_doc();
            if self.cursor.is_at_end() {
                break;
            }
            let start = self.cursor.position();
            self.depth = 0;

            let result = if self.cursor.check(TokenKind::Parcel) {
                self.parse_parcel_decl()
                    .map(|name| unit.parcel = Some(name))
            } else {
                self.seen_declaration = true;
                self.parse_declaration(doc)
                    .map(|decl| unit.declarations.push(Arc::new(decl)))
            };

            if let Err(err) = result {
                diagnostics.push(err.into_diagnostic(self.unit));
                skip_declaration(&mut self.cursor, self.depth);
                if self.cursor.position() == start {
                    self.cursor.advance();
                }
            }
        }
        unit.parcel_span = self.parcel.map(|(_, span)| span);

        (unit, diagnostics)
    }
}

/// Lex and parse one unit's source text.
pub fn parse_unit(
    unit_id: UnitId,
    file: FileSpec,
    source: &str,
    interner: &StringInterner,
) -> ParseOutput {
    let lexed = prism_lexer::lex(source, unit_id, interner);
    let (unit, syntax) = Parser::new(&lexed.tokens, unit_id, interner).parse(file);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(syntax);

    debug!(
        unit = unit_id.index(),
        path = %unit.file.path_part,
        declarations = unit.declarations.len(),
        errors = diagnostics.len(),
        "parsed unit"
    );
    ParseOutput { unit, diagnostics }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
