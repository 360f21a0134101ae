//! Global symbol table of declarations, keyed by fully-qualified name.
//!
//! Built under `&mut` while units are loaded, then shared read-only by the
//! resolver and validator.

use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{Declaration, Name, StringInterner};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Declarations in registration order with a name index.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    decls: Vec<Arc<Declaration>>,
    by_name: FxHashMap<Name, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration under its full name.
    ///
    /// A name that is already taken yields E2001 and the new declaration is
    /// not stored; the first registration wins.
    pub fn register(
        &mut self,
        decl: Arc<Declaration>,
        interner: &StringInterner,
    ) -> Result<(), Diagnostic> {
        let name = decl.name.full;
        if let Some(&index) = self.by_name.get(&name) {
            let first = &self.decls[index];
            return Err(Diagnostic::error(ErrorCode::E2001)
                .with_message(format!(
                    "`{}` is declared more than once",
                    interner.lookup(name)
                ))
                .with_label(decl.unit, decl.name.span, "declared again here")
                .with_secondary_label(first.unit, first.name.span, "first declared here"));
        }
        self.by_name.insert(name, self.decls.len());
        self.decls.push(decl);
        Ok(())
    }

    pub fn lookup(&self, name: Name) -> Option<&Arc<Declaration>> {
        self.by_name.get(&name).map(|&index| &self.decls[index])
    }

    pub fn contains(&self, name: Name) -> bool {
        self.by_name.contains_key(&name)
    }

    /// All declarations in registration order.
    ///
    /// Each call starts a fresh iteration.
    pub fn all(&self) -> impl Iterator<Item = &Arc<Declaration>> + '_ {
        self.decls.iter()
    }

    /// Registration index of a declaration.
    pub(crate) fn index_of(&self, name: Name) -> Option<usize> {
        self.by_name.get(&name).copied()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Arc<Declaration>> {
        self.decls.get(index)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
