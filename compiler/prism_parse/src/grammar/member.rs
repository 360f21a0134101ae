//! Members: fields, methods and parameter lists.

use super::modifiers::ModifierTarget;
use crate::recovery::PARAMS_ABANDONED;
use crate::{ParseError, Parser};
use prism_diagnostic::ErrorCode;
use prism_ir::{DocComment, Field, MethodDecl, MethodFlags, Param, ParamList, Span, TokenKind};

impl Parser<'_> {
    /// Parse `modifier* type IDENT ('(' params ')')? ';'`.
    pub(crate) fn parse_member(
        &mut self,
        doc: Option<DocComment>,
        fields: &mut Vec<Field>,
        methods: &mut Vec<MethodDecl>,
    ) -> Result<(), ParseError> {
        let start = self.cursor.current_span();
        let modifiers = self.parse_modifiers();
        let ty = self.parse_type()?;
        let (name, _) = self.expect_ident("a member name")?;

        if let Some(open) = self.cursor.eat(TokenKind::LParen) {
            let params = self.parse_params(open.span)?;
            let checked = modifiers.check(ModifierTarget::Method)?;
            let end = self.expect(TokenKind::Semicolon)?;

            let mut flags = MethodFlags::empty();
            flags.set(MethodFlags::ABSTRACT, checked.has(TokenKind::Abstract));
            flags.set(MethodFlags::FINAL, checked.has(TokenKind::Final));
            flags.set(MethodFlags::OVERRIDE, checked.has(TokenKind::Override));
            flags.set(MethodFlags::INERT, checked.has(TokenKind::Inert));

            methods.push(MethodDecl {
                name,
                params,
                return_type: ty,
                flags,
                visibility: checked.visibility,
                doc,
                span: start.merge(end.span),
            });
        } else {
            let checked = modifiers.check(ModifierTarget::Field)?;
            let end = self.expect(TokenKind::Semicolon)?;
            fields.push(Field {
                name,
                ty,
                visibility: checked.visibility,
                inert: checked.has(TokenKind::Inert),
                doc,
                span: start.merge(end.span),
            });
        }
        Ok(())
    }

    /// Parse a parameter list after its `(`, through the closing `)`.
    fn parse_params(&mut self, open: Span) -> Result<ParamList, ParseError> {
        let mut params = ParamList::new();
        if self.cursor.eat(TokenKind::RParen).is_some() {
            return Ok(params);
        }

        loop {
            if self.cursor.eat(TokenKind::Ellipsis).is_some() {
                params.set_variadic(true);
                if self.cursor.eat(TokenKind::RParen).is_some() {
                    return Ok(params);
                }
                return Err(self.unclosed_params(open, "`)` after `...`"));
            }

            let param = self.parse_param()?;
            params.push(param, self.cursor.interner());

            if self.cursor.eat(TokenKind::Comma).is_some() {
                continue;
            }
            if self.cursor.eat(TokenKind::RParen).is_some() {
                return Ok(params);
            }
            return Err(self.unclosed_params(open, "`,` or `)`"));
        }
    }

    /// E1002 if the list was abandoned, otherwise E1001 at the stray token.
    fn unclosed_params(&self, open: Span, expected: &str) -> ParseError {
        if PARAMS_ABANDONED.contains(self.cursor.current_kind()) {
            ParseError::new(ErrorCode::E1002, "unclosed parameter list", open)
                .with_label("this `(` is never closed")
                .with_related(self.cursor.current_span(), "list ends here")
        } else {
            self.unexpected(expected)
        }
    }

    /// Parse `type IDENT ('=' default)?`.
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let ty = self.parse_type()?;
        let (name, _) = self.expect_ident("a parameter name")?;

        let default = if self.cursor.eat(TokenKind::Eq).is_some() {
            match self.cursor.current_kind() {
                TokenKind::Ident(value)
                | TokenKind::Int(value)
                | TokenKind::Float(value)
                | TokenKind::Str(value) => {
                    self.cursor.advance();
                    Some(value)
                }
                _ => return Err(self.unexpected("a default value")),
            }
        } else {
            None
        };

        Ok(Param {
            name,
            span: ty.span.merge(self.cursor.previous_span()),
            ty,
            default,
        })
    }
}
