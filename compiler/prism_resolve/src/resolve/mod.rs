//! Inheritance resolution.
//!
//! Runs in three phases over the symbol table:
//!
//! 1. **Bind**: every parent and interface reference is looked up. A class
//!    with a bad reference is reported and left out of the graph.
//! 2. **Order**: an iterative Tarjan walk finds a supers-first order and
//!    every strongly connected component that forms a cycle. Each such
//!    component is reported once and all of its members are left out.
//! 3. **Merge**: classes are built in that order, each from its already
//!    resolved supers. A class whose super was left out is left out too.
//!
//! Nothing here recurses on the depth of the hierarchy.

mod cycles;
mod lookup;
mod merge;

use crate::graph::ResolvedGraph;
use crate::{ParcelRegistry, SymbolTable};
use lookup::{lookup_reference, Lookup};
use merge::{merge, Supers};
use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{Declaration, Span, StringInterner, TypeName};
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of resolving a symbol table.
#[derive(Debug, Default)]
pub struct ResolveOutput {
    pub graph: ResolvedGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolveOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Bound supertype edges of one declaration, by registration index.
#[derive(Default)]
struct Edges {
    parent: Option<(usize, Span)>,
    interfaces: Vec<(usize, Span)>,
}

impl Edges {
    fn targets(&self) -> Vec<usize> {
        self.parent
            .iter()
            .chain(self.interfaces.iter())
            .map(|&(index, _)| index)
            .collect()
    }
}

/// Which list a reference was written in.
#[derive(Copy, Clone, PartialEq, Eq)]
enum RefRole {
    Parent,
    Interface,
}

/// Resolve every registered declaration into a [`ResolvedGraph`].
///
/// Declarations that cannot be resolved are reported and omitted; the rest
/// of the graph is still built.
pub fn resolve(
    table: &SymbolTable,
    registry: &ParcelRegistry,
    interner: &StringInterner,
) -> ResolveOutput {
    let mut diagnostics = Vec::new();
    let count = table.len();

    // Phase 1: bind references.
    let mut edges: Vec<Edges> = Vec::with_capacity(count);
    let mut broken = vec![false; count];
    for (index, decl) in table.all().enumerate() {
        match bind(table, registry, interner, decl) {
            Ok(bound) => edges.push(bound),
            Err(mut errors) => {
                broken[index] = true;
                diagnostics.append(&mut errors);
                edges.push(Edges::default());
            }
        }
    }

    // Phase 2: cycles and order.
    let adjacency: Vec<Vec<usize>> = edges.iter().map(Edges::targets).collect();
    let walk = cycles::walk(&adjacency);
    for members in &walk.cycles {
        diagnostics.push(cycle_diagnostic(table, interner, members));
    }

    // Phase 3: merge in supers-first order.
    let mut graph = ResolvedGraph::new();
    for &index in &walk.order {
        if broken[index] || walk.in_cycle[index] {
            continue;
        }
        let Some(decl) = table.get(index) else {
            continue;
        };
        let bound = &edges[index];

        let present = |target: usize| {
            table
                .get(target)
                .is_some_and(|super_decl| graph.contains(super_decl.name.full))
        };
        let missing = bound
            .parent
            .iter()
            .chain(bound.interfaces.iter())
            .find(|&&(target, _)| !present(target));
        if let Some(&(target, span)) = missing {
            diagnostics.push(unresolved_super(table, interner, decl, target, span));
            continue;
        }

        let supers = Supers {
            parent: bound
                .parent
                .and_then(|(target, _)| table.get(target))
                .and_then(|super_decl| graph.get(super_decl.name.full)),
            interfaces: bound
                .interfaces
                .iter()
                .filter_map(|&(target, _)| table.get(target))
                .filter_map(|super_decl| graph.get(super_decl.name.full))
                .collect(),
        };
        let merged = merge(decl, &supers, &graph, interner);
        diagnostics.extend(merged.diagnostics);
        if let Some(class) = merged.class {
            trace!(
                class = interner.lookup(class.name()),
                methods = class.methods.len(),
                fields = class.fields.len(),
                "resolved"
            );
            graph.insert(class);
        }
    }

    for decl in table.all() {
        if graph.contains(decl.name.full) {
            continue;
        }
        let parent = decl.parent.as_ref().and_then(|reference| {
            match lookup_reference(table, registry, interner, decl, reference) {
                Lookup::Found(index) => table.get(index).map(|p| p.name.full),
                Lookup::Missing | Lookup::Ambiguous(_) => None,
            }
        });
        graph.leave_out(Arc::clone(decl), parent);
    }

    debug!(
        declarations = count,
        resolved = graph.len(),
        errors = diagnostics.len(),
        "resolution finished"
    );
    ResolveOutput { graph, diagnostics }
}

fn bind(
    table: &SymbolTable,
    registry: &ParcelRegistry,
    interner: &StringInterner,
    decl: &Declaration,
) -> Result<Edges, Vec<Diagnostic>> {
    let mut edges = Edges::default();
    let mut errors = Vec::new();

    let mut bind_one = |reference: &TypeName, role: RefRole| -> Option<(usize, Span)> {
        let index = match lookup_reference(table, registry, interner, decl, reference) {
            Lookup::Found(index) => index,
            Lookup::Missing => {
                errors.push(unknown_reference(interner, decl, reference, role));
                return None;
            }
            Lookup::Ambiguous(candidates) => {
                errors.push(ambiguous_reference(table, interner, decl, reference, &candidates));
                return None;
            }
        };
        let target = table.get(index)?;
        let kind_error = match role {
            // An interface's parent is its first super-interface.
            RefRole::Parent if decl.is_class() && target.is_interface() => Some(ErrorCode::E2005),
            RefRole::Parent if decl.is_interface() && target.is_class() => Some(ErrorCode::E2005),
            RefRole::Interface if target.is_class() => Some(ErrorCode::E2006),
            _ => None,
        };
        if let Some(code) = kind_error {
            errors.push(kind_mismatch(code, interner, decl, reference, target));
            return None;
        }
        Some((index, reference.span))
    };

    if let Some(parent) = &decl.parent {
        let bound = bind_one(parent, RefRole::Parent);
        if decl.is_interface() {
            edges.interfaces.extend(bound);
        } else {
            edges.parent = bound;
        }
    }
    for reference in &decl.interfaces {
        let bound = bind_one(reference, RefRole::Interface);
        edges.interfaces.extend(bound);
    }

    if errors.is_empty() {
        Ok(edges)
    } else {
        Err(errors)
    }
}

fn unknown_reference(
    interner: &StringInterner,
    decl: &Declaration,
    reference: &TypeName,
    role: RefRole,
) -> Diagnostic {
    let (code, what) = match role {
        RefRole::Parent => (ErrorCode::E2002, "parent"),
        RefRole::Interface => (ErrorCode::E2003, "interface"),
    };
    Diagnostic::error(code)
        .with_message(format!(
            "unknown {what} `{}` of `{}`",
            interner.lookup(reference.path),
            interner.lookup(decl.name.full)
        ))
        .with_label(decl.unit, reference.span, "not declared in any loaded unit")
}

fn ambiguous_reference(
    table: &SymbolTable,
    interner: &StringInterner,
    decl: &Declaration,
    reference: &TypeName,
    candidates: &[usize],
) -> Diagnostic {
    let written = interner.lookup(reference.path);
    let mut diag = Diagnostic::error(ErrorCode::E2008)
        .with_message(format!("`{written}` is ambiguous"))
        .with_label(decl.unit, reference.span, "matches more than one declaration");
    for candidate in candidates.iter().filter_map(|&index| table.get(index)) {
        diag = diag.with_secondary_label(
            candidate.unit,
            candidate.name.span,
            format!("candidate `{}`", interner.lookup(candidate.name.full)),
        );
    }
    diag.with_suggestion(format!("write the qualified name, e.g. `Parcel::{written}`"))
}

fn kind_mismatch(
    code: ErrorCode,
    interner: &StringInterner,
    decl: &Declaration,
    reference: &TypeName,
    target: &Declaration,
) -> Diagnostic {
    let message = match code {
        ErrorCode::E2006 => format!(
            "`{}` is a class and cannot be implemented by `{}`",
            interner.lookup(target.name.full),
            interner.lookup(decl.name.full)
        ),
        _ => format!(
            "{} `{}` cannot inherit from {} `{}`",
            decl.kind.as_str(),
            interner.lookup(decl.name.full),
            target.kind.as_str(),
            interner.lookup(target.name.full)
        ),
    };
    Diagnostic::error(code)
        .with_message(message)
        .with_label(decl.unit, reference.span, format!("this is {} {}", article(target), target.kind.as_str()))
        .with_secondary_label(target.unit, target.name.span, "declared here")
}

fn article(decl: &Declaration) -> &'static str {
    if decl.is_interface() {
        "an"
    } else {
        "a"
    }
}

fn cycle_diagnostic(table: &SymbolTable, interner: &StringInterner, members: &[usize]) -> Diagnostic {
    let decls: Vec<&Declaration> = members
        .iter()
        .filter_map(|&index| table.get(index))
        .map(|decl| &**decl)
        .collect();

    let names: Vec<String> = decls
        .iter()
        .map(|d| format!("`{}`", interner.lookup(d.name.full)))
        .collect();
    let message = match names.split_last() {
        Some((only, [])) => format!("{only} inherits from itself"),
        Some((last, rest)) => format!("inheritance cycle between {} and {last}", rest.join(", ")),
        None => "inheritance cycle".to_owned(),
    };

    let mut diag = Diagnostic::error(ErrorCode::E2004).with_message(message);
    if let Some((first, rest)) = decls.split_first() {
        diag = diag.with_label(first.unit, first.name.span, "part of the cycle");
        for decl in rest {
            diag = diag.with_secondary_label(decl.unit, decl.name.span, "part of the cycle");
        }
    }
    diag.with_note("none of the classes in a cycle can be resolved")
}

fn unresolved_super(
    table: &SymbolTable,
    interner: &StringInterner,
    decl: &Declaration,
    target: usize,
    span: Span,
) -> Diagnostic {
    let super_name = table
        .get(target)
        .map_or("<unknown>", |super_decl| interner.lookup(super_decl.name.full));
    Diagnostic::error(ErrorCode::E2007)
        .with_message(format!(
            "`{}` cannot be resolved because `{super_name}` failed to resolve",
            interner.lookup(decl.name.full)
        ))
        .with_label(decl.unit, span, "unresolved supertype")
}
