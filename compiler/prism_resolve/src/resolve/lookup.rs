//! Binding written references to registered declarations.

use crate::{ParcelRegistry, SymbolTable};
use prism_ir::{Declaration, StringInterner, TypeName, NAMESPACE_SEPARATOR};

/// Outcome of looking up one reference. Indices are registration indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Lookup {
    Found(usize),
    Missing,
    /// A bare name found in more than one prerequisite parcel.
    Ambiguous(Vec<usize>),
}

/// Look up `reference` as written inside `from`.
///
/// A reference containing `::` must match exactly. A bare reference is
/// tried in the referring parcel, then in each of its prerequisite parcels,
/// then as written. Lookups never intern new strings.
pub(crate) fn lookup_reference(
    table: &SymbolTable,
    registry: &ParcelRegistry,
    interner: &StringInterner,
    from: &Declaration,
    reference: &TypeName,
) -> Lookup {
    let text = interner.lookup(reference.path);
    let find = |key: &str| interner.get(key).and_then(|name| table.index_of(name));

    if reference.is_qualified(interner) {
        return find(text).map_or(Lookup::Missing, Lookup::Found);
    }

    if let Some(parcel) = from.parcel.map(|p| interner.lookup(p)) {
        if let Some(found) = find(&format!("{parcel}{NAMESPACE_SEPARATOR}{text}")) {
            return Lookup::Found(found);
        }

        if let Some(own) = registry.fetch(parcel) {
            let hits: Vec<usize> = own
                .prereqs()
                .iter()
                .filter_map(|prereq| find(&format!("{}{NAMESPACE_SEPARATOR}{text}", prereq.name)))
                .collect();
            match hits.len() {
                0 => {}
                1 => return Lookup::Found(hits[0]),
                _ => return Lookup::Ambiguous(hits),
            }
        }
    }

    find(text).map_or(Lookup::Missing, Lookup::Found)
}
