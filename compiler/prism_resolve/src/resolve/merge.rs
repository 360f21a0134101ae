//! Building one resolved class from its already-resolved supers.

use crate::graph::{FieldEntry, MethodEntry, ResolvedClass, ResolvedGraph};
use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{Declaration, MethodDecl, Name, StringInterner};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Supers of a declaration, all present in the graph.
pub(crate) struct Supers<'g> {
    pub parent: Option<&'g ResolvedClass>,
    /// Declared interfaces; for an interface this includes its `inherits`.
    pub interfaces: Vec<&'g ResolvedClass>,
}

/// Outcome of merging one class.
pub(crate) struct Merged {
    /// `None` if a signature conflict prevents resolution.
    pub class: Option<ResolvedClass>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A method that disagrees with an ancestor's declaration of the same name.
struct Conflict<'a> {
    method: &'a MethodDecl,
    /// False when the clash is between two inherited signatures.
    own: bool,
    ancestor: &'a Declaration,
    ancestor_method: &'a MethodDecl,
}

pub(crate) fn merge(
    decl: &Arc<Declaration>,
    supers: &Supers<'_>,
    graph: &ResolvedGraph,
    interner: &StringInterner,
) -> Merged {
    let name = decl.name.full;

    let ancestors = match supers.parent {
        Some(parent) => {
            let mut chain = parent.ancestors.clone();
            chain.push(parent.name());
            chain
        }
        None => Vec::new(),
    };

    let interfaces = collect_interfaces(supers);

    let mut linearization = ancestors.clone();
    linearization.extend(interfaces.iter().copied());
    linearization.push(name);

    let mut conflicts: Vec<Conflict<'_>> = Vec::new();
    let mut conflicted: FxHashSet<Name> = FxHashSet::default();

    // Inherited slots first.
    let mut methods = supers
        .parent
        .map(|parent| parent.methods.clone())
        .unwrap_or_default();

    for method in decl.instance_methods() {
        if methods
            .get(method.name)
            .is_some_and(|entry| entry.origin == name)
        {
            // Repeated within one declaration; reported by validation.
            continue;
        }

        let clash = ancestors
            .iter()
            .chain(interfaces.iter())
            .filter_map(|ancestor| graph.get(*ancestor))
            .find_map(|ancestor| {
                ancestor
                    .decl
                    .method(method.name)
                    .filter(|theirs| !method.is_compatible_with(theirs))
                    .map(|theirs| (ancestor, theirs))
            });
        if let Some((ancestor, theirs)) = clash {
            if conflicted.insert(method.name) {
                conflicts.push(Conflict {
                    method,
                    own: true,
                    ancestor: &ancestor.decl,
                    ancestor_method: theirs,
                });
            }
            continue;
        }

        let mut entry = MethodEntry {
            name: method.name,
            origin: name,
            method: method.clone(),
            is_abstract: method.is_abstract() || decl.is_interface(),
            overrides: None,
            implements: Vec::new(),
        };
        if let Some(replaced) = methods.get(method.name) {
            let from_interface = graph
                .get(replaced.origin)
                .is_some_and(|origin| origin.decl.is_interface());
            if from_interface {
                entry.implements.push(replaced.origin);
            } else {
                entry.overrides = Some(replaced.origin);
            }
        }
        methods.insert(entry);
    }

    // Interface requirements after own methods.
    for &interface in &interfaces {
        let Some(resolved) = graph.get(interface) else {
            continue;
        };
        for required in resolved.decl.instance_methods() {
            if conflicted.contains(&required.name) {
                continue;
            }
            match methods.get_mut(required.name) {
                Some(entry) if !entry.method.is_compatible_with(required) => {
                    conflicted.insert(required.name);
                    let own = entry.origin == name;
                    let method = decl.method(required.name).filter(|_| own);
                    conflicts.push(Conflict {
                        method: method.unwrap_or(required),
                        own,
                        ancestor: &resolved.decl,
                        ancestor_method: required,
                    });
                }
                Some(entry) => {
                    if entry.origin != interface && !entry.implements.contains(&interface) {
                        entry.implements.push(interface);
                    }
                }
                None => methods.insert(MethodEntry {
                    name: required.name,
                    origin: interface,
                    method: required.clone(),
                    is_abstract: true,
                    overrides: None,
                    implements: Vec::new(),
                }),
            }
        }
    }

    if !conflicts.is_empty() {
        let diagnostics = conflicts
            .iter()
            .map(|conflict| conflict_diagnostic(decl, conflict, interner))
            .collect();
        return Merged {
            class: None,
            diagnostics,
        };
    }

    let mut diagnostics = Vec::new();
    let mut fields = supers
        .parent
        .map(|parent| parent.fields.clone())
        .unwrap_or_default();
    for field in decl.instance_fields() {
        if let Some(existing) = fields.get(field.name) {
            if existing.origin != name {
                let origin_unit = graph
                    .get(existing.origin)
                    .map_or(decl.unit, |origin| origin.decl.unit);
                diagnostics.push(
                    Diagnostic::error(ErrorCode::E2010)
                        .with_message(format!(
                            "field `{}` of `{}` is already declared by `{}`",
                            interner.lookup(field.name),
                            interner.lookup(name),
                            interner.lookup(existing.origin)
                        ))
                        .with_label(decl.unit, field.span, "redeclared here")
                        .with_secondary_label(origin_unit, existing.field.span, "inherited from here")
                        .with_note("the inherited field is kept"),
                );
            }
            continue;
        }
        fields.push(FieldEntry {
            name: field.name,
            origin: name,
            field: field.clone(),
        });
    }

    let class = ResolvedClass {
        decl: Arc::clone(decl),
        parent: supers.parent.map(ResolvedClass::name),
        ancestors,
        interfaces,
        linearization,
        methods,
        fields,
        functions: decl.functions().cloned().collect(),
        inert_fields: decl.inert_fields().cloned().collect(),
    };
    Merged {
        class: Some(class),
        diagnostics,
    }
}

/// Every interface reachable from the declaration, walked from the most
/// derived: each declared interface preceded by its own super-interfaces,
/// then the parent's interfaces. First occurrence wins.
fn collect_interfaces(supers: &Supers<'_>) -> Vec<Name> {
    let mut seen = FxHashSet::default();
    let mut interfaces = Vec::new();
    let mut add = |name: Name| {
        if seen.insert(name) {
            interfaces.push(name);
        }
    };

    for interface in &supers.interfaces {
        for &inherited in &interface.interfaces {
            add(inherited);
        }
        add(interface.name());
    }
    if let Some(parent) = supers.parent {
        for &inherited in &parent.interfaces {
            add(inherited);
        }
    }
    interfaces
}

fn conflict_diagnostic(
    decl: &Declaration,
    conflict: &Conflict<'_>,
    interner: &StringInterner,
) -> Diagnostic {
    let method = interner.lookup(conflict.method.name);
    let describe = |m: &MethodDecl| {
        format!(
            "{} parameter(s), returns {}",
            m.params.arity(),
            m.return_type.category.as_str()
        )
    };

    let diag = Diagnostic::error(ErrorCode::E2009).with_message(format!(
        "method `{method}` of `{}` conflicts with `{}::{method}`",
        interner.lookup(decl.name.full),
        interner.lookup(conflict.ancestor.name.full),
    ));
    let diag = if conflict.own {
        diag.with_label(
            decl.unit,
            conflict.method.span,
            format!("declared here with {}", describe(conflict.method)),
        )
    } else {
        diag.with_label(
            decl.unit,
            decl.name.span,
            format!("inherits `{method}` with {}", describe(conflict.method)),
        )
    };
    diag.with_secondary_label(
        conflict.ancestor.unit,
        conflict.ancestor_method.span,
        format!("expected {}", describe(conflict.ancestor_method)),
    )
    .with_note("overrides must agree in parameter count and return type")
}
