//! Error recovery for the parser.
//!
//! A malformed declaration is dropped as a whole: after reporting its first
//! error the parser skips to the next declaration boundary. Token sets use a
//! bitset for O(1) membership testing.

use super::cursor::Cursor;
use prism_ir::{Name, TokenKind};

const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT < 128,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds, one bit per `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Tokens that can only begin a top-level item.
pub const DECL_KEYWORDS: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Interface)
    .with(TokenKind::Parcel);

/// Tokens that may begin the next declaration while skipping a broken header.
pub const DECL_START: TokenSet = DECL_KEYWORDS
    .union(MODIFIERS)
    .with(TokenKind::DocComment(Name::EMPTY));

pub const MODIFIERS: TokenSet = TokenSet::new()
    .with(TokenKind::Public)
    .with(TokenKind::Private)
    .with(TokenKind::Abstract)
    .with(TokenKind::Final)
    .with(TokenKind::Inert)
    .with(TokenKind::Override);

/// Tokens that end a parameter list that is missing its `)`.
pub const PARAMS_ABANDONED: TokenSet = DECL_KEYWORDS
    .with(TokenKind::Semicolon)
    .with(TokenKind::LBrace)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Skip the rest of a malformed declaration.
///
/// `depth` is the brace depth where the error was found: `0` inside the
/// header, `1` directly inside the body. Skipping stops after the `}` that
/// closes the body (and an optional `;`), or before a token that starts the
/// next top-level item. A body left open is abandoned at the next
/// `class`/`interface`/`parcel` keyword.
pub fn skip_declaration(cursor: &mut Cursor<'_>, mut depth: u32) {
    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if depth == 0 {
            if DECL_START.contains(kind) {
                return;
            }
            match kind {
                TokenKind::Semicolon | TokenKind::RBrace => {
                    cursor.advance();
                    return;
                }
                TokenKind::LBrace => depth = 1,
                _ => {}
            }
            cursor.advance();
            continue;
        }

        if DECL_KEYWORDS.contains(kind) {
            return;
        }
        match kind {
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => {
                depth -= 1;
                if depth == 0 {
                    cursor.advance();
                    cursor.eat(TokenKind::Semicolon);
                    return;
                }
            }
            _ => {}
        }
        cursor.advance();
    }
}
