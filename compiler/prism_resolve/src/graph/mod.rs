//! Resolved classes and the graph that holds them.
//!
//! Tables are ordered vectors with a hash index: iteration follows slot
//! order, never interner ids.

use prism_ir::{Declaration, Field, MethodDecl, Name};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// One slot in a merged method table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodEntry {
    pub name: Name,
    /// Class or interface that supplied the current signature.
    pub origin: Name,
    pub method: MethodDecl,
    /// Declared abstract, or an interface requirement nobody implemented.
    pub is_abstract: bool,
    /// Ancestor class whose entry this one replaced.
    pub overrides: Option<Name>,
    /// Interfaces whose requirement this entry satisfies.
    pub implements: Vec<Name>,
}

/// Merged methods, ancestors' slots first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MethodTable {
    entries: Vec<MethodEntry>,
    index: FxHashMap<Name, usize>,
}

impl MethodTable {
    pub fn get(&self, name: Name) -> Option<&MethodEntry> {
        self.index.get(&name).map(|&slot| &self.entries[slot])
    }

    pub(crate) fn get_mut(&mut self, name: Name) -> Option<&mut MethodEntry> {
        self.index.get(&name).map(|&slot| &mut self.entries[slot])
    }

    /// Slot number of a method.
    pub fn slot(&self, name: Name) -> Option<usize> {
        self.index.get(&name).copied()
    }

    /// Insert a new slot, or replace an existing one in place.
    pub(crate) fn insert(&mut self, entry: MethodEntry) {
        match self.index.get(&entry.name) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(entry.name, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MethodEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One slot in a merged field table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: Name,
    /// Class that declared the field.
    pub origin: Name,
    pub field: Field,
}

/// Merged instance fields, inherited fields first. The first declaration of a
/// name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTable {
    entries: Vec<FieldEntry>,
    index: FxHashMap<Name, usize>,
}

impl FieldTable {
    pub fn get(&self, name: Name) -> Option<&FieldEntry> {
        self.index.get(&name).map(|&slot| &self.entries[slot])
    }

    /// Append a field unless its name is taken.
    pub(crate) fn push(&mut self, entry: FieldEntry) -> bool {
        if self.index.contains_key(&entry.name) {
            return false;
        }
        self.index.insert(entry.name, self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A declaration with its inheritance fully resolved. Immutable once built.
#[derive(Clone, Debug)]
pub struct ResolvedClass {
    pub decl: Arc<Declaration>,
    /// Parent class; interfaces never have one.
    pub parent: Option<Name>,
    /// Class chain from the root down to the parent.
    pub ancestors: Vec<Name>,
    /// Every implemented interface, super-interfaces first.
    pub interfaces: Vec<Name>,
    /// `ancestors`, then `interfaces`, then the class itself.
    pub linearization: Vec<Name>,
    pub methods: MethodTable,
    pub fields: FieldTable,
    /// Own inert functions.
    pub functions: Vec<MethodDecl>,
    /// Own inert variables.
    pub inert_fields: Vec<Field>,
}

impl ResolvedClass {
    #[inline]
    pub fn name(&self) -> Name {
        self.decl.name.full
    }

    /// Whether `other` is this class or appears among its ancestors or
    /// interfaces.
    pub fn is_a(&self, other: Name) -> bool {
        self.linearization.contains(&other)
    }

    /// Methods this class declares itself.
    pub fn own_methods(&self) -> impl Iterator<Item = &MethodEntry> + '_ {
        let name = self.name();
        self.methods.iter().filter(move |entry| entry.origin == name)
    }
}

/// A registered declaration that resolution left out.
#[derive(Clone, Debug)]
pub struct Unresolved {
    pub decl: Arc<Declaration>,
    /// What its `inherits` clause binds to, when it binds at all.
    pub parent: Option<Name>,
}

/// All successfully resolved classes, in topological order, plus the
/// declarations that were left out.
#[derive(Clone, Debug, Default)]
pub struct ResolvedGraph {
    classes: Vec<ResolvedClass>,
    index: FxHashMap<Name, usize>,
    unresolved: Vec<Unresolved>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class. Its ancestors must already be present.
    pub(crate) fn insert(&mut self, class: ResolvedClass) {
        self.index.insert(class.name(), self.classes.len());
        self.classes.push(class);
    }

    pub(crate) fn leave_out(&mut self, decl: Arc<Declaration>, parent: Option<Name>) {
        self.unresolved.push(Unresolved { decl, parent });
    }

    /// Declarations without a resolved class, in registration order.
    pub fn unresolved(&self) -> &[Unresolved] {
        &self.unresolved
    }

    pub fn get(&self, name: Name) -> Option<&ResolvedClass> {
        self.index.get(&name).map(|&i| &self.classes[i])
    }

    pub fn contains(&self, name: Name) -> bool {
        self.index.contains_key(&name)
    }

    /// Classes with every ancestor before its descendants.
    pub fn ordered(&self) -> std::slice::Iter<'_, ResolvedClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedGraph {
    type Item = &'a ResolvedClass;
    type IntoIter = std::slice::Iter<'a, ResolvedClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
