//! Unit sources and line/column lookup for rendering diagnostics.
//!
//! ## Performance
//!
//! Each registered unit gets a [`LineOffsetTable`], built once, which turns
//! offset lookups into O(log L) binary searches.

use prism_ir::{Span, UnitId};
use std::fmt;
use std::sync::Arc;

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use prism_diagnostic::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let col = source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        let col = u32::try_from(col).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Get the byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// A resolved, human-facing source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}

struct SourceFile {
    path: String,
    text: Arc<str>,
    lines: LineOffsetTable,
}

/// All unit texts of one compilation, indexed by [`UnitId`].
#[derive(Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit's text and return its id.
    ///
    /// Ids are assigned densely in registration order.
    pub fn add(&mut self, path: impl Into<String>, text: impl Into<Arc<str>>) -> UnitId {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        let id = UnitId::new(u32::try_from(self.files.len()).unwrap_or(u32::MAX));
        self.files.push(SourceFile {
            path: path.into(),
            text,
            lines,
        });
        id
    }

    pub fn path(&self, unit: UnitId) -> Option<&str> {
        self.files.get(unit.index()).map(|f| f.path.as_str())
    }

    pub fn text(&self, unit: UnitId) -> Option<&Arc<str>> {
        self.files.get(unit.index()).map(|f| &f.text)
    }

    /// Path, line and column of a span's start.
    pub fn location(&self, unit: UnitId, span: Span) -> Option<Location> {
        let file = self.files.get(unit.index())?;
        let (line, column) = file.lines.offset_to_line_col(&file.text, span.start);
        Some(Location {
            path: file.path.clone(),
            line,
            column,
        })
    }

    /// Source text of the line containing a span's start.
    pub fn line_text(&self, unit: UnitId, span: Span) -> Option<&str> {
        let file = self.files.get(unit.index())?;
        let line = file.lines.line_from_offset(span.start);
        file.lines.line_text(&file.text, line)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
