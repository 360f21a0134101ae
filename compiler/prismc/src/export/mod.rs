//! JSON export of the resolved class graph.
//!
//! This is the hand-off format for host-language emitters: classes in
//! topological order, each with its linearization and merged tables. Names
//! are written out in full; nothing refers to interner ids.

use prism_ir::{Field, MethodDecl, Name, StringInterner, TypeRef, Visibility};
use prism_resolve::{ResolvedClass, ResolvedGraph};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GraphExport<'a> {
    pub classes: Vec<ClassExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ClassExport<'a> {
    pub name: &'a str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<&'a str>,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_inert: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'a str>,
    pub linearization: Vec<&'a str>,
    pub interfaces: Vec<&'a str>,
    pub methods: Vec<MethodExport<'a>>,
    pub fields: Vec<FieldExport<'a>>,
    pub functions: Vec<SignatureExport<'a>>,
    pub inert_fields: Vec<FieldExport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<&'a str>,
}

/// A merged method table slot.
#[derive(Debug, Serialize)]
pub struct MethodExport<'a> {
    pub origin: &'a str,
    pub is_abstract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<&'a str>,
    #[serde(flatten)]
    pub signature: SignatureExport<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignatureExport<'a> {
    pub name: &'a str,
    pub returns: TypeExport,
    pub params: Vec<ParamExport<'a>>,
    pub variadic: bool,
    pub is_final: bool,
    pub host_visible: bool,
}

#[derive(Debug, Serialize)]
pub struct ParamExport<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub ty: TypeExport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct FieldExport<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<&'a str>,
    #[serde(rename = "type")]
    pub ty: TypeExport,
    pub host_visible: bool,
}

#[derive(Debug, Serialize)]
pub struct TypeExport {
    /// Declaration syntax, e.g. `const char*`.
    pub text: String,
    pub category: &'static str,
    pub nullable: bool,
}

/// Build the export view of a graph.
pub fn export_graph<'a>(graph: &'a ResolvedGraph, interner: &'a StringInterner) -> GraphExport<'a> {
    GraphExport {
        classes: graph.ordered().map(|class| export_class(class, interner)).collect(),
    }
}

/// Serialize a graph as pretty-printed JSON.
pub fn graph_to_json(graph: &ResolvedGraph, interner: &StringInterner) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_graph(graph, interner))
}

fn export_class<'a>(class: &'a ResolvedClass, interner: &'a StringInterner) -> ClassExport<'a> {
    let decl = &class.decl;
    let names = |list: &[Name]| -> Vec<&'static str> {
        list.iter().map(|&n| interner.lookup(n)).collect()
    };

    ClassExport {
        name: interner.lookup(decl.name.full),
        kind: decl.kind.as_str(),
        parcel: decl.parcel.map(|p| interner.lookup(p)),
        nickname: decl.nickname.map(|n| interner.lookup(n)),
        is_abstract: decl.is_abstract(),
        is_final: decl.is_final(),
        is_inert: decl.is_inert(),
        parent: class.parent.map(|p| interner.lookup(p)),
        linearization: names(&class.linearization),
        interfaces: names(&class.interfaces),
        methods: class
            .methods
            .iter()
            .map(|entry| MethodExport {
                origin: interner.lookup(entry.origin),
                is_abstract: entry.is_abstract,
                overrides: entry.overrides.map(|o| interner.lookup(o)),
                implements: names(&entry.implements),
                signature: export_signature(&entry.method, interner),
            })
            .collect(),
        fields: class
            .fields
            .iter()
            .map(|entry| export_field(&entry.field, Some(interner.lookup(entry.origin)), interner))
            .collect(),
        functions: class
            .functions
            .iter()
            .map(|f| export_signature(f, interner))
            .collect(),
        inert_fields: class
            .inert_fields
            .iter()
            .map(|f| export_field(f, None, interner))
            .collect(),
        doc: decl.doc.as_ref().map(|doc| doc.description.as_str()),
    }
}

fn export_signature<'a>(method: &'a MethodDecl, interner: &'a StringInterner) -> SignatureExport<'a> {
    SignatureExport {
        name: interner.lookup(method.name),
        returns: export_type(&method.return_type, interner),
        params: method
            .params
            .iter()
            .map(|param| ParamExport {
                name: interner.lookup(param.name),
                ty: export_type(&param.ty, interner),
                default: param.default.map(|d| interner.lookup(d)),
            })
            .collect(),
        variadic: method.params.is_variadic(),
        is_final: method.is_final(),
        host_visible: method.is_host_visible(),
    }
}

fn export_field<'a>(
    field: &'a Field,
    origin: Option<&'a str>,
    interner: &'a StringInterner,
) -> FieldExport<'a> {
    FieldExport {
        name: interner.lookup(field.name),
        origin,
        ty: export_type(&field.ty, interner),
        host_visible: field.visibility == Visibility::Public,
    }
}

fn export_type(ty: &TypeRef, interner: &StringInterner) -> TypeExport {
    TypeExport {
        text: ty.render(interner),
        category: ty.category.as_str(),
        nullable: ty.is_nullable(),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
