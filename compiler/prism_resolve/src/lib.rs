//! Prism resolution: from parsed declarations to a validated class graph.
//!
//! - [`SymbolTable`]: every declaration by fully-qualified name
//! - [`ParcelRegistry`]: loaded parcels and their prerequisites
//! - [`resolve`]: binds references, rejects cycles, merges inherited
//!   methods and fields into a [`ResolvedGraph`]
//! - [`validate`]: semantic checks over the resolved graph
//!
//! Every phase accumulates diagnostics and skips only the declaration at
//! fault.

mod graph;
mod parcels;
mod resolve;
mod symbols;
mod validate;

#[cfg(test)]
mod test_support;

pub use graph::{
    FieldEntry, FieldTable, MethodEntry, MethodTable, ResolvedClass, ResolvedGraph, Unresolved,
};
pub use parcels::ParcelRegistry;
pub use resolve::{resolve, ResolveOutput};
pub use symbols::SymbolTable;
pub use validate::validate;
