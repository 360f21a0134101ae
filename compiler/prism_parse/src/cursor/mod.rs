//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use prism_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor for navigating tokens.
///
/// The lexer always terminates the list with `Eof`, and the cursor never
/// moves past it, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens: tokens.as_slice(),
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position in the token stream.
    ///
    /// Compared before and after recovery to guarantee progress.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    ///
    /// Falls back to a synthetic `Eof` for an empty list.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind().discriminant_index() == kind.discriminant_index()
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// Peek at the token kind at offset `n` from the current position.
    ///
    /// Returns `Eof` past the end of the stream.
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Stays on `Eof` once it is reached.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
