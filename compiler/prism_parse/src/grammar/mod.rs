//! Grammar rules.
//!
//! ```text
//! unit        := parcel_decl? declaration*
//! parcel_decl := 'parcel' qualified ';'
//! declaration := DOC? modifier* ('class' | 'interface') qualified
//!                ('nickname' IDENT)? ('inherits' qualified)?
//!                (':' qualified (',' qualified)*)? '{' member* '}' ';'?
//! member      := DOC? modifier* type IDENT ('(' params ')')? ';'
//! ```

mod decl;
mod member;
mod modifiers;
mod ty;

use crate::{ParseError, Parser};
use prism_diagnostic::ErrorCode;
use prism_ir::{DocComment, Name, Span, Token, TokenKind, NAMESPACE_SEPARATOR};

impl Parser<'_> {
    /// Consume any run of documentation comments, keeping the last one.
    pub(crate) fn take_doc(&mut self) -> Option<DocComment> {
        let mut raw = None;
        while let TokenKind::DocComment(text) = self.cursor.current_kind() {
            raw = Some(text);
            self.cursor.advance();
        }
        raw.map(|text| DocComment::parse(self.cursor.interner().lookup(text)))
    }

    /// Consume a token of the given kind or fail with E1001.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.cursor.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kind.display_name())),
        }
    }

    /// E1001 at the current token.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::expected(
            ErrorCode::E1001,
            expected,
            self.cursor.current_kind(),
            self.cursor.current_span(),
        )
    }

    /// Consume an identifier or fail with E1003.
    pub(crate) fn expect_ident(&mut self, what: &str) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.cursor.current_kind() {
            let span = self.cursor.advance().span;
            Ok((name, span))
        } else {
            Err(ParseError::expected(
                ErrorCode::E1003,
                what,
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ))
        }
    }

    /// Parse `IDENT ('::' IDENT)*` and return the joined text.
    pub(crate) fn parse_qualified(&mut self, what: &str) -> Result<(String, Span), ParseError> {
        let (first, start) = self.expect_ident(what)?;
        let interner = self.cursor.interner();
        let mut text = interner.lookup(first).to_owned();
        let mut end = start;
        while self.cursor.eat(TokenKind::DoubleColon).is_some() {
            let (segment, span) = self.expect_ident("an identifier after `::`")?;
            text.push_str(NAMESPACE_SEPARATOR);
            text.push_str(interner.lookup(segment));
            end = span;
        }
        Ok((text, start.merge(end)))
    }
}
