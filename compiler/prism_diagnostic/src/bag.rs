//! Accumulating diagnostic collection.

use crate::{Diagnostic, SourceMap};

/// Diagnostics collected across phases, in the order they were reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Stable sort by primary location (unit, then line and column).
    ///
    /// Diagnostics without a location keep their relative order and sort
    /// first, since they describe whole-compilation problems.
    pub fn sort_by_location(&mut self, sources: &SourceMap) {
        self.diagnostics.sort_by_cached_key(|d| {
            d.primary_location().map(|(unit, span)| {
                let pos = sources
                    .location(unit, span)
                    .map_or((0, 0), |loc| (loc.line, loc.column));
                (unit, pos)
            })
        });
    }
}

impl Extend<Diagnostic> for DiagnosticBag {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use prism_ir::{Span, UnitId};

    #[test]
    fn test_counts() {
        let mut bag = DiagnosticBag::new();
        assert!(bag.is_empty());
        bag.push(Diagnostic::error(ErrorCode::E2001));
        bag.push(Diagnostic::warning(ErrorCode::E3006));
        bag.extend([Diagnostic::error(ErrorCode::E2002)]);

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.error_count(), 2);
        assert_eq!(bag.warning_count(), 1);
        assert!(bag.has_errors());
    }

    #[test]
    fn test_sort_by_location_is_stable() {
        let mut sources = SourceMap::new();
        let a = sources.add("a.pdl", "x\ny\nz");
        let b = sources.add("b.pdl", "x");

        let mut bag = DiagnosticBag::new();
        bag.push(
            Diagnostic::error(ErrorCode::E2002)
                .with_message("b")
                .with_label(b, Span::new(0, 1), ""),
        );
        bag.push(
            Diagnostic::error(ErrorCode::E2002)
                .with_message("a-line3")
                .with_label(a, Span::new(4, 5), ""),
        );
        bag.push(
            Diagnostic::error(ErrorCode::E2002)
                .with_message("a-line1")
                .with_label(a, Span::new(0, 1), ""),
        );
        bag.push(Diagnostic::error(ErrorCode::E4002).with_message("global"));

        bag.sort_by_location(&sources);
        let order: Vec<_> = bag.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(order, ["global", "a-line1", "a-line3", "b"]);
        assert_eq!(a, UnitId::new(0));
    }
}
