//! Type references in member signatures.

use crate::{Name, Span, StringLookup};
use bitflags::bitflags;
use std::fmt::Write;

bitflags! {
    /// Qualifiers written before a type specifier.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeQualifiers: u8 {
        const CONST       = 1 << 0;
        const NULLABLE    = 1 << 1;
        /// Caller receives a new reference.
        const INCREMENTED = 1 << 2;
        /// Callee consumes a reference.
        const DECREMENTED = 1 << 3;
    }
}

/// Coarse classification used for override compatibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Void,
    Integer,
    Float,
    Bool,
    /// Single pointer to an object type (`Foo*`, `Crust::Lobster*`).
    Object,
    /// Any other pointer or array.
    Pointer,
    /// A by-value struct or otherwise unknown specifier.
    Composite,
}

impl TypeCategory {
    const INTEGER_SPECIFIERS: &'static [&'static str] = &[
        "char", "short", "int", "long", "size_t", "int8_t", "int16_t", "int32_t", "int64_t",
        "uint8_t", "uint16_t", "uint32_t", "uint64_t",
    ];

    /// Classify a specifier with the given pointer depth and array suffix.
    pub fn classify(specifier: &str, indirection: u8, is_array: bool) -> Self {
        if is_array || indirection > 1 {
            return TypeCategory::Pointer;
        }
        if indirection == 1 {
            let short = specifier
                .rsplit(crate::NAMESPACE_SEPARATOR)
                .next()
                .unwrap_or(specifier);
            return if short.starts_with(|c: char| c.is_ascii_uppercase()) {
                TypeCategory::Object
            } else {
                TypeCategory::Pointer
            };
        }
        match specifier {
            "void" => TypeCategory::Void,
            "bool" => TypeCategory::Bool,
            "float" | "double" => TypeCategory::Float,
            s if Self::INTEGER_SPECIFIERS.contains(&s) => TypeCategory::Integer,
            _ => TypeCategory::Composite,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeCategory::Void => "void",
            TypeCategory::Integer => "integer",
            TypeCategory::Float => "float",
            TypeCategory::Bool => "bool",
            TypeCategory::Object => "object",
            TypeCategory::Pointer => "pointer",
            TypeCategory::Composite => "composite",
        }
    }
}

/// A type as written in a member signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub specifier: Name,
    pub indirection: u8,
    pub qualifiers: TypeQualifiers,
    /// `Some(None)` for `[]`, `Some(Some(n))` for `[n]`.
    pub array: Option<Option<u32>>,
    pub category: TypeCategory,
    pub span: Span,
}

impl TypeRef {
    /// Build a type reference, deriving its category from the specifier text.
    pub fn new(
        specifier: Name,
        indirection: u8,
        qualifiers: TypeQualifiers,
        array: Option<Option<u32>>,
        span: Span,
        interner: &impl StringLookup,
    ) -> Self {
        let category =
            TypeCategory::classify(interner.lookup(specifier), indirection, array.is_some());
        TypeRef {
            specifier,
            indirection,
            qualifiers,
            array,
            category,
            span,
        }
    }

    pub fn is_void(&self) -> bool {
        self.category == TypeCategory::Void
    }

    pub fn is_nullable(&self) -> bool {
        self.qualifiers.contains(TypeQualifiers::NULLABLE)
    }

    /// Render the type back to declaration syntax (`const char*`).
    pub fn render(&self, interner: &impl StringLookup) -> String {
        let mut out = String::new();
        for (flag, word) in [
            (TypeQualifiers::CONST, "const "),
            (TypeQualifiers::NULLABLE, "nullable "),
            (TypeQualifiers::INCREMENTED, "incremented "),
            (TypeQualifiers::DECREMENTED, "decremented "),
        ] {
            if self.qualifiers.contains(flag) {
                out.push_str(word);
            }
        }
        out.push_str(interner.lookup(self.specifier));
        for _ in 0..self.indirection {
            out.push('*');
        }
        match self.array {
            Some(Some(n)) => {
                let _ = write!(out, "[{n}]");
            }
            Some(None) => out.push_str("[]"),
            None => {}
        }
        out
    }
}
