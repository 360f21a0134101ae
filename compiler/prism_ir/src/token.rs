//! Token types produced by the lexer and consumed by the parser.

use crate::{Name, Span};

/// A token with its source span.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds of the declaration language.
///
/// Identifiers, literals and documentation comments carry their text as an
/// interned `Name`, so tokens stay `Copy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Declaration keywords
    Parcel,
    Class,
    Interface,
    Inherits,
    Nickname,

    // Modifiers
    Public,
    Private,
    Abstract,
    Final,
    Inert,
    Override,

    // Type qualifiers
    Const,
    Nullable,
    Incremented,
    Decremented,

    // Identifiers and literals
    Ident(Name),
    Int(Name),
    Float(Name),
    Str(Name),

    /// `/** ... */` documentation comment; the name holds the full raw text.
    DocComment(Name),

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
    DoubleColon,
    Star,
    Eq,
    Ellipsis,

    /// Unrecognized input; the lexer has already reported it.
    Error,
    Eof,
}

impl TokenKind {
    /// Human-readable description for "expected X, found Y" messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Parcel => "`parcel`",
            TokenKind::Class => "`class`",
            TokenKind::Interface => "`interface`",
            TokenKind::Inherits => "`inherits`",
            TokenKind::Nickname => "`nickname`",
            TokenKind::Public => "`public`",
            TokenKind::Private => "`private`",
            TokenKind::Abstract => "`abstract`",
            TokenKind::Final => "`final`",
            TokenKind::Inert => "`inert`",
            TokenKind::Override => "`override`",
            TokenKind::Const => "`const`",
            TokenKind::Nullable => "`nullable`",
            TokenKind::Incremented => "`incremented`",
            TokenKind::Decremented => "`decremented`",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::DocComment(_) => "documentation comment",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::Star => "`*`",
            TokenKind::Eq => "`=`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }

    /// Whether this token is a declaration or member modifier keyword.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            TokenKind::Public
                | TokenKind::Private
                | TokenKind::Abstract
                | TokenKind::Final
                | TokenKind::Inert
                | TokenKind::Override
        )
    }

    /// Whether this token is a type qualifier keyword.
    pub fn is_type_qualifier(self) -> bool {
        matches!(
            self,
            TokenKind::Const | TokenKind::Nullable | TokenKind::Incremented | TokenKind::Decremented
        )
    }

    /// Largest value returned by [`discriminant_index`](Self::discriminant_index).
    pub const MAX_DISCRIMINANT: u8 = 34;

    /// Discriminant index, ignoring payloads.
    ///
    /// Used by parser token sets, which are bitsets over token kinds.
    pub const fn discriminant_index(self) -> u8 {
        match self {
            TokenKind::Parcel => 0,
            TokenKind::Class => 1,
            TokenKind::Interface => 2,
            TokenKind::Inherits => 3,
            TokenKind::Nickname => 4,
            TokenKind::Public => 5,
            TokenKind::Private => 6,
            TokenKind::Abstract => 7,
            TokenKind::Final => 8,
            TokenKind::Inert => 9,
            TokenKind::Override => 10,
            TokenKind::Const => 11,
            TokenKind::Nullable => 12,
            TokenKind::Incremented => 13,
            TokenKind::Decremented => 14,
            TokenKind::Ident(_) => 15,
            TokenKind::Int(_) => 16,
            TokenKind::Float(_) => 17,
            TokenKind::Str(_) => 18,
            TokenKind::DocComment(_) => 19,
            TokenKind::LBrace => 20,
            TokenKind::RBrace => 21,
            TokenKind::LParen => 22,
            TokenKind::RParen => 23,
            TokenKind::LBracket => 24,
            TokenKind::RBracket => 25,
            TokenKind::Semicolon => 26,
            TokenKind::Comma => 27,
            TokenKind::Colon => 28,
            TokenKind::DoubleColon => 29,
            TokenKind::Star => 30,
            TokenKind::Eq => 31,
            TokenKind::Ellipsis => 32,
            TokenKind::Error => 33,
            TokenKind::Eof => 34,
        }
    }
}

/// Lexer output: a token sequence always terminated by `Eof`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the token at `index`, clamping to the final (`Eof`) token.
    ///
    /// Returns `None` only for an empty list.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index).or_else(|| self.tokens.last())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}
