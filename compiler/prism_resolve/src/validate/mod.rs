//! Semantic checks over a resolved graph.
//!
//! Each check looks at one class at a time and never stops the others; the
//! graph is not modified.

use crate::graph::{ResolvedClass, ResolvedGraph};
use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{Declaration, MethodDecl, Name, Span, StringInterner};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Run every check on every class, in topological order.
pub fn validate(graph: &ResolvedGraph, interner: &StringInterner) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for class in graph {
        let checks = Checks {
            graph,
            interner,
            class,
        };
        checks.unimplemented_abstracts(&mut diagnostics);
        checks.interface_fields(&mut diagnostics);
        checks.final_parent(&mut diagnostics);
        checks.final_overrides(&mut diagnostics);
        checks.duplicate_members(&mut diagnostics);
        checks.pointless_overrides(&mut diagnostics);
        checks.inert_members(&mut diagnostics);
    }
    // A subclass of a final class is still reported when something else
    // kept it out of the graph.
    for left_out in graph.unresolved() {
        if let Some(parent) = left_out.parent {
            diagnostics.extend(final_parent_violation(graph, interner, &left_out.decl, parent));
        }
    }
    debug!(
        classes = graph.len(),
        errors = diagnostics.len(),
        "validation finished"
    );
    diagnostics
}

struct Checks<'a> {
    graph: &'a ResolvedGraph,
    interner: &'a StringInterner,
    class: &'a ResolvedClass,
}

impl Checks<'_> {
    fn name(&self) -> &'static str {
        self.interner.lookup(self.class.name())
    }

    /// E3001
    fn unimplemented_abstracts(&self, out: &mut Vec<Diagnostic>) {
        let decl = &self.class.decl;
        if !decl.is_class() || decl.is_abstract() {
            return;
        }
        let missing: Vec<_> = self.class.methods.iter().filter(|e| e.is_abstract).collect();
        if missing.is_empty() {
            return;
        }

        let listed: Vec<String> = missing
            .iter()
            .map(|entry| format!("`{}`", self.interner.lookup(entry.name)))
            .collect();
        let mut diag = Diagnostic::error(ErrorCode::E3001)
            .with_message(format!(
                "class `{}` does not implement {}",
                self.name(),
                listed.join(", ")
            ))
            .with_label(decl.unit, decl.name.span, "concrete class");
        for entry in missing {
            if let Some(origin) = self.graph.get(entry.origin) {
                diag = diag.with_secondary_label(
                    origin.decl.unit,
                    entry.method.span,
                    format!("required by `{}`", self.interner.lookup(entry.origin)),
                );
            }
        }
        out.push(diag.with_suggestion("implement the methods or declare the class `abstract`"));
    }

    /// E3002
    fn interface_fields(&self, out: &mut Vec<Diagnostic>) {
        let decl = &self.class.decl;
        if !decl.is_interface() {
            return;
        }
        for field in &decl.fields {
            out.push(
                Diagnostic::error(ErrorCode::E3002)
                    .with_message(format!(
                        "interface `{}` declares field `{}`",
                        self.name(),
                        self.interner.lookup(field.name)
                    ))
                    .with_label(decl.unit, field.span, "interfaces cannot have fields"),
            );
        }
    }

    /// E3003
    fn final_parent(&self, out: &mut Vec<Diagnostic>) {
        if let Some(parent) = self.class.parent {
            let decl = &self.class.decl;
            out.extend(final_parent_violation(self.graph, self.interner, decl, parent));
        }
    }

    /// E3004
    fn final_overrides(&self, out: &mut Vec<Diagnostic>) {
        let decl = &self.class.decl;
        for entry in self.class.own_methods() {
            let Some(ancestor) = entry.overrides.and_then(|a| self.graph.get(a)) else {
                continue;
            };
            let Some(sealed) = ancestor.decl.method(entry.name).filter(|m| m.is_final()) else {
                continue;
            };
            out.push(
                Diagnostic::error(ErrorCode::E3004)
                    .with_message(format!(
                        "`{}::{}` overrides a final method",
                        self.name(),
                        self.interner.lookup(entry.name)
                    ))
                    .with_label(decl.unit, entry.method.span, "overrides final method")
                    .with_secondary_label(ancestor.decl.unit, sealed.span, "declared final here"),
            );
        }
    }

    /// E3005
    fn duplicate_members(&self, out: &mut Vec<Diagnostic>) {
        let decl = &self.class.decl;
        let mut methods: FxHashMap<Name, usize> = FxHashMap::default();
        for (i, method) in decl.methods.iter().enumerate() {
            if let Some(&first) = methods.get(&method.name) {
                out.push(self.duplicate("method", method.name, method.span, decl.methods[first].span));
            } else {
                methods.insert(method.name, i);
            }
        }
        let mut fields: FxHashMap<Name, usize> = FxHashMap::default();
        for (i, field) in decl.fields.iter().enumerate() {
            if let Some(&first) = fields.get(&field.name) {
                out.push(self.duplicate("field", field.name, field.span, decl.fields[first].span));
            } else {
                fields.insert(field.name, i);
            }
        }
    }

    fn duplicate(&self, what: &str, name: Name, span: Span, first: Span) -> Diagnostic {
        let unit = self.class.decl.unit;
        Diagnostic::error(ErrorCode::E3005)
            .with_message(format!(
                "{what} `{}` is declared more than once in `{}`",
                self.interner.lookup(name),
                self.name()
            ))
            .with_label(unit, span, "declared again here")
            .with_secondary_label(unit, first, "first declared here")
    }

    /// E3006
    fn pointless_overrides(&self, out: &mut Vec<Diagnostic>) {
        let decl = &self.class.decl;
        let mut report = |method: &MethodDecl, why: &str| {
            out.push(
                Diagnostic::error(ErrorCode::E3006)
                    .with_message(format!(
                        "`{}::{}` is marked `override` but {why}",
                        self.name(),
                        self.interner.lookup(method.name)
                    ))
                    .with_label(decl.unit, method.span, "nothing to override"),
            );
        };

        for function in decl.functions().filter(|m| m.expects_override()) {
            report(function, "inert functions are not inherited");
        }
        for entry in self.class.own_methods() {
            if entry.method.expects_override()
                && entry.overrides.is_none()
                && entry.implements.is_empty()
            {
                report(&entry.method, "no ancestor declares it");
            }
        }
    }

    /// E3007
    fn inert_members(&self, out: &mut Vec<Diagnostic>) {
        let decl = &self.class.decl;
        if !decl.is_inert() {
            return;
        }
        let members = decl
            .instance_fields()
            .map(|f| ("field", f.name, f.span))
            .chain(decl.instance_methods().map(|m| ("method", m.name, m.span)));
        for (what, name, span) in members {
            out.push(
                Diagnostic::error(ErrorCode::E3007)
                    .with_message(format!(
                        "inert class `{}` has instance {what} `{}`",
                        self.name(),
                        self.interner.lookup(name)
                    ))
                    .with_label(decl.unit, span, "not inert")
                    .with_suggestion(format!("mark the {what} `inert`")),
            );
        }
    }
}

/// E3003 for `decl`, whose `inherits` clause binds to `parent`.
fn final_parent_violation(
    graph: &ResolvedGraph,
    interner: &StringInterner,
    decl: &Declaration,
    parent: Name,
) -> Option<Diagnostic> {
    let parent = graph.get(parent)?;
    if !decl.is_class() || !parent.decl.is_class() || !parent.decl.is_final() {
        return None;
    }
    let span = decl.parent.as_ref().map_or(decl.name.span, |p| p.span);
    Some(
        Diagnostic::error(ErrorCode::E3003)
            .with_message(format!(
                "`{}` inherits from final class `{}`",
                interner.lookup(decl.name.full),
                interner.lookup(parent.name())
            ))
            .with_label(decl.unit, span, "final class used as parent")
            .with_secondary_label(parent.decl.unit, parent.decl.name.span, "declared final here"),
    )
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
