//! Declaration model.
//!
//! A parsed unit is a flat list of [`Declaration`]s. Each declaration owns its
//! fields and methods; references to other declarations (parent, interfaces)
//! are kept as [`TypeName`]s and bound later by the resolver.

mod types;

pub use types::{TypeCategory, TypeQualifiers, TypeRef};

use crate::{DocComment, Name, Span, StringLookup, UnitId};
use bitflags::bitflags;

/// Fully-qualified declaration name (`Crustacean::Lobster`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// The complete name, used as the symbol table key.
    pub full: Name,
    /// Everything before the last `::`, if any.
    pub namespace: Option<Name>,
    /// The final segment.
    pub short: Name,
    /// Span of the name as written.
    pub span: Span,
}

/// A reference to another declaration, exactly as written in the source.
///
/// Bare references are qualified during resolution, not parsing, so the
/// same text can bind differently depending on the referring parcel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub path: Name,
    pub span: Span,
}

impl TypeName {
    /// Whether the reference already contains a namespace separator.
    pub fn is_qualified(&self, interner: &impl StringLookup) -> bool {
        interner.lookup(self.path).contains(crate::NAMESPACE_SEPARATOR)
    }
}

/// Declaration kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
        }
    }
}

bitflags! {
    /// Flags on a class or interface declaration.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DeclFlags: u8 {
        const ABSTRACT = 1 << 0;
        const FINAL    = 1 << 1;
        /// Class holds only inert functions and variables.
        const INERT    = 1 << 2;
    }
}

bitflags! {
    /// Flags on a method declaration.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MethodFlags: u8 {
        const ABSTRACT = 1 << 0;
        const FINAL    = 1 << 1;
        /// Declared with `override`: must redefine an ancestor method.
        const OVERRIDE = 1 << 2;
        /// Class-level function, not part of the method table.
        const INERT    = 1 << 3;
    }
}

/// Member visibility.
///
/// `Public` members are exposed to host-language bindings; `Parcel` is the
/// default and limits access to the declaring parcel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    #[default]
    Parcel,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Parcel => "parcel",
            Visibility::Private => "private",
        }
    }
}

/// A data member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: Name,
    pub ty: TypeRef,
    pub visibility: Visibility,
    /// Class-level variable; not inherited.
    pub inert: bool,
    pub doc: Option<DocComment>,
    pub span: Span,
}

/// A single method parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Name,
    pub ty: TypeRef,
    /// Default value text (`NULL`, `0`, `true`, a string literal...).
    pub default: Option<Name>,
    pub span: Span,
}

/// Ordered parameter list with an optional trailing variadic marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamList {
    params: Vec<Param>,
    variadic: bool,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    ///
    /// A `NULL` default makes the parameter type nullable.
    pub fn push(&mut self, mut param: Param, interner: &impl StringLookup) {
        if param
            .default
            .is_some_and(|value| interner.lookup(value) == "NULL")
        {
            param.ty.qualifiers |= TypeQualifiers::NULLABLE;
        }
        self.params.push(param);
    }

    pub fn set_variadic(&mut self, variadic: bool) {
        self.variadic = variadic;
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Number of declared parameters, excluding the variadic tail.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.params.iter()
    }

    pub fn as_slice(&self) -> &[Param] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A method or inert function declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: Name,
    pub params: ParamList,
    pub return_type: TypeRef,
    pub flags: MethodFlags,
    pub visibility: Visibility,
    pub doc: Option<DocComment>,
    pub span: Span,
}

impl MethodDecl {
    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.flags.contains(MethodFlags::ABSTRACT)
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.flags.contains(MethodFlags::FINAL)
    }

    #[inline]
    pub fn expects_override(&self) -> bool {
        self.flags.contains(MethodFlags::OVERRIDE)
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.flags.contains(MethodFlags::INERT)
    }

    /// Whether host-language bindings expose this method.
    #[inline]
    pub fn is_host_visible(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Two methods are compatible when they agree in parameter arity and
    /// return type category.
    pub fn is_compatible_with(&self, other: &MethodDecl) -> bool {
        self.params.arity() == other.params.arity()
            && self.return_type.category == other.return_type.category
    }
}

/// A class or interface declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: QualifiedName,
    pub nickname: Option<Name>,
    pub parent: Option<TypeName>,
    pub interfaces: Vec<TypeName>,
    pub fields: Vec<Field>,
    pub methods: Vec<MethodDecl>,
    pub flags: DeclFlags,
    /// Unit the declaration was parsed from.
    pub unit: UnitId,
    /// Parcel of the declaring unit, used to qualify bare references.
    pub parcel: Option<Name>,
    pub doc: Option<DocComment>,
    pub span: Span,
}

impl Declaration {
    #[inline]
    pub fn is_class(&self) -> bool {
        self.kind == DeclKind::Class
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.flags.contains(DeclFlags::ABSTRACT)
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.flags.contains(DeclFlags::FINAL)
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        self.flags.contains(DeclFlags::INERT)
    }

    /// Methods taking part in inheritance (everything not `inert`).
    pub fn instance_methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| !m.is_inert())
    }

    /// Inert (class-level) functions.
    pub fn functions(&self) -> impl Iterator<Item = &MethodDecl> {
        self.methods.iter().filter(|m| m.is_inert())
    }

    pub fn instance_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.inert)
    }

    pub fn inert_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.inert)
    }

    /// First instance method with the given name.
    pub fn method(&self, name: Name) -> Option<&MethodDecl> {
        self.instance_methods().find(|m| m.name == name)
    }

    /// First instance field with the given name.
    pub fn field(&self, name: Name) -> Option<&Field> {
        self.instance_fields().find(|f| f.name == name)
    }
}
