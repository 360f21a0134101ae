//! Type references: `qualifier* qualified '*'* ('[' INT? ']')?`.

use crate::{ParseError, Parser};
use prism_diagnostic::ErrorCode;
use prism_ir::{TokenKind, TypeQualifiers, TypeRef};

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> Result<TypeRef, ParseError> {
        let start = self.cursor.current_span();

        let mut qualifiers = TypeQualifiers::empty();
        loop {
            let qualifier = match self.cursor.current_kind() {
                TokenKind::Const => TypeQualifiers::CONST,
                TokenKind::Nullable => TypeQualifiers::NULLABLE,
                TokenKind::Incremented => TypeQualifiers::INCREMENTED,
                TokenKind::Decremented => TypeQualifiers::DECREMENTED,
                _ => break,
            };
            qualifiers |= qualifier;
            self.cursor.advance();
        }

        if !self.cursor.check_ident() {
            return Err(ParseError::expected(
                ErrorCode::E1004,
                "a type",
                self.cursor.current_kind(),
                self.cursor.current_span(),
            ));
        }
        let (text, _) = self.parse_qualified("a type")?;
        let interner = self.cursor.interner();
        let specifier = interner.intern(&text);

        let mut depth: u32 = 0;
        while self.cursor.eat(TokenKind::Star).is_some() {
            depth += 1;
        }
        let indirection = u8::try_from(depth).map_err(|_| {
            ParseError::new(
                ErrorCode::E1007,
                format!("pointer depth {depth} is too large"),
                start.merge(self.cursor.previous_span()),
            )
            .with_label(format!("at most {} levels are supported", u8::MAX))
        })?;

        let array = if self.cursor.eat(TokenKind::LBracket).is_some() {
            let size = if let TokenKind::Int(value) = self.cursor.current_kind() {
                let token = self.cursor.advance();
                let text = interner.lookup(value);
                let size = text.parse::<u32>().map_err(|_| {
                    ParseError::new(
                        ErrorCode::E1007,
                        format!("array size `{text}` is out of range"),
                        token.span,
                    )
                    .with_label(format!("must be between 0 and {}", u32::MAX))
                })?;
                Some(size)
            } else {
                None
            };
            self.expect(TokenKind::RBracket)?;
            Some(size)
        } else {
            None
        };

        Ok(TypeRef::new(
            specifier,
            indirection,
            qualifiers,
            array,
            start.merge(self.cursor.previous_span()),
            interner,
        ))
    }
}
