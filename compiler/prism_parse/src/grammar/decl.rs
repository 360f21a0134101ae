//! Parcel declarations and class/interface declarations.

use super::modifiers::ModifierTarget;
use crate::recovery::DECL_KEYWORDS;
use crate::{ParseError, Parser};
use prism_diagnostic::ErrorCode;
use prism_ir::{
    DeclFlags, DeclKind, Declaration, DocComment, Name, QualifiedName, TokenKind, TypeName,
    NAMESPACE_SEPARATOR,
};
use tracing::trace;

impl Parser<'_> {
    /// Parse `parcel qualified ;`.
    ///
    /// Every failure here is reported as E1006.
    pub(crate) fn parse_parcel_decl(&mut self) -> Result<Name, ParseError> {
        let keyword = self.expect(TokenKind::Parcel)?;

        if let Some((_, first)) = self.parcel {
            return Err(ParseError::new(
                ErrorCode::E1006,
                "parcel declared more than once in this unit",
                keyword.span,
            )
            .with_label("second parcel declaration")
            .with_related(first, "parcel first declared here"));
        }
        if self.seen_declaration {
            return Err(ParseError::new(
                ErrorCode::E1006,
                "parcel declaration must come before any class or interface",
                keyword.span,
            )
            .with_label("too late"));
        }

        let (text, name_span) = self.parse_qualified("a parcel name").map_err(|err| ParseError {
            code: ErrorCode::E1006,
            ..err
        })?;
        self.expect(TokenKind::Semicolon).map_err(|err| ParseError {
            code: ErrorCode::E1006,
            ..err
        })?;

        let name = self.cursor.interner().intern(&text);
        self.parcel = Some((name, keyword.span.merge(name_span)));
        trace!(parcel = %text, "parcel declaration");
        Ok(name)
    }

    /// Parse one class or interface declaration.
    pub(crate) fn parse_declaration(
        &mut self,
        doc: Option<DocComment>,
    ) -> Result<Declaration, ParseError> {
        let start = self.cursor.current_span();
        let modifiers = self.parse_modifiers();

        let kind = match self.cursor.current_kind() {
            TokenKind::Class => DeclKind::Class,
            TokenKind::Interface => DeclKind::Interface,
            _ => return Err(self.unexpected("`class` or `interface`")),
        };
        self.cursor.advance();

        let checked = modifiers.check(ModifierTarget::Declaration)?;
        let mut flags = DeclFlags::empty();
        flags.set(DeclFlags::ABSTRACT, checked.has(TokenKind::Abstract));
        flags.set(DeclFlags::FINAL, checked.has(TokenKind::Final));
        flags.set(DeclFlags::INERT, checked.has(TokenKind::Inert));

        let name = self.parse_decl_name()?;

        let nickname = if self.cursor.eat(TokenKind::Nickname).is_some() {
            Some(self.expect_ident("a nickname")?.0)
        } else {
            None
        };

        let parent = if self.cursor.eat(TokenKind::Inherits).is_some() {
            Some(self.parse_type_name("a parent name")?)
        } else {
            None
        };

        let mut interfaces = Vec::new();
        if self.cursor.eat(TokenKind::Colon).is_some() {
            loop {
                interfaces.push(self.parse_type_name("an interface name")?);
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        let open = self.expect(TokenKind::LBrace)?;
        self.depth = 1;

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        loop {
            if self.next_declaration_begins() {
                // Leave the modifiers and doc comment for the next declaration.
                self.depth = 0;
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!(
                        "unclosed body of `{}`",
                        self.cursor.interner().lookup(name.full)
                    ),
                    open.span,
                )
                .with_label("this `{` is never closed")
                .with_related(self.cursor.current_span(), "body ends here")
                .with_hint("add `}` after the last member"));
            }
            let member_doc = self.take_doc();
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
            self.parse_member(member_doc, &mut fields, &mut methods)?;
        }

        let close = self.cursor.advance();
        self.depth = 0;
        self.cursor.eat(TokenKind::Semicolon);

        trace!(
            name = self.cursor.interner().lookup(name.full),
            kind = kind.as_str(),
            fields = fields.len(),
            methods = methods.len(),
            "declaration"
        );

        Ok(Declaration {
            kind,
            name,
            nickname,
            parent,
            interfaces,
            fields,
            methods,
            flags,
            unit: self.unit,
            parcel: self.parcel.map(|(parcel, _)| parcel),
            doc,
            span: start.merge(close.span),
        })
    }

    /// True at end of input, or when the tokens ahead are a declaration
    /// keyword behind any doc comments and modifiers.
    fn next_declaration_begins(&self) -> bool {
        let mut n = 0;
        loop {
            match self.cursor.peek_kind_at(n) {
                TokenKind::DocComment(_) => n += 1,
                kind if kind.is_modifier() => n += 1,
                kind => return kind == TokenKind::Eof || DECL_KEYWORDS.contains(kind),
            }
        }
    }

    /// Parse a declaration name, qualifying bare names with the unit's parcel.
    fn parse_decl_name(&mut self) -> Result<QualifiedName, ParseError> {
        let (text, span) = self.parse_qualified("a class or interface name")?;
        let interner = self.cursor.interner();

        if let Some((namespace, short)) = text.rsplit_once(NAMESPACE_SEPARATOR) {
            return Ok(QualifiedName {
                full: interner.intern(&text),
                namespace: Some(interner.intern(namespace)),
                short: interner.intern(short),
                span,
            });
        }

        let short = interner.intern(&text);
        Ok(match self.parcel {
            Some((parcel, _)) => {
                let full = format!("{}{NAMESPACE_SEPARATOR}{text}", interner.lookup(parcel));
                QualifiedName {
                    full: interner.intern(&full),
                    namespace: Some(parcel),
                    short,
                    span,
                }
            }
            None => QualifiedName {
                full: short,
                namespace: None,
                short,
                span,
            },
        })
    }

    /// Parse a reference to another declaration, kept as written.
    fn parse_type_name(&mut self, what: &str) -> Result<TypeName, ParseError> {
        let (text, span) = self.parse_qualified(what)?;
        Ok(TypeName {
            path: self.cursor.interner().intern(&text),
            span,
        })
    }
}
