//! Prism IR - declaration model types
//!
//! This crate contains the core data structures shared by every Prism phase:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The declaration model (`SourceUnit`, `Declaration`, `MethodDecl`, `Field`)
//! - Documentation comments and the parcel/version model
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and qualified names become `Name(u32)`
//! - **Share, don't copy**: declarations are `Arc`-shared between the unit that
//!   parsed them, the symbol table, and the resolved class graph
//! - **Names, not pointers**: cross-declaration references stay as `TypeName`
//!   values until the resolver binds them by name

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod doc;
mod interner;
mod name;
mod parcel;
mod span;
mod token;
mod unit;

pub use ast::{
    DeclFlags, DeclKind, Declaration, Field, MethodDecl, MethodFlags, Param, ParamList,
    QualifiedName, TypeCategory, TypeName, TypeQualifiers, TypeRef, Visibility,
};
pub use doc::{DocComment, ParamDoc};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use parcel::{Parcel, ParcelError, Prereq, Version};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use unit::{FileSpec, SourceUnit, UnitId};

/// Separator between namespace segments of a qualified name.
pub const NAMESPACE_SEPARATOR: &str = "::";
