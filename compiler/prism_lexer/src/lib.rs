//! Lexer for the Prism declaration language, built on logos.
//!
//! This lexer:
//! - Interns identifiers, literals and documentation comments
//! - Drops whitespace, `//` line comments and `/* */` block comments
//! - Keeps `/** */` documentation comments as tokens for the parser
//! - Never fails: bad input becomes a diagnostic and lexing continues

use logos::Logos;
use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::{Span, StringInterner, Token, TokenKind, TokenList, UnitId};
use tracing::trace;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    // === Comments ===
    /// Plain and documentation block comments; told apart after matching.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,
    /// Only wins when no closing `*/` follows.
    #[token("/*")]
    UnterminatedComment,

    // === Declaration keywords ===
    #[token("parcel")]
    Parcel,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("inherits")]
    Inherits,
    #[token("nickname")]
    Nickname,

    // === Modifiers ===
    #[token("public")]
    Public,
    #[token("private")]
    Private,
    #[token("abstract")]
    Abstract,
    #[token("final")]
    Final,
    #[token("inert")]
    Inert,
    #[token("override")]
    Override,

    // === Type qualifiers ===
    #[token("const")]
    Const,
    #[token("nullable")]
    Nullable,
    #[token("incremented")]
    Incremented,
    #[token("decremented")]
    Decremented,

    // === Symbols ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("::")]
    DoubleColon,
    #[token(":")]
    Colon,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("...")]
    Ellipsis,

    // === Literals ===
    #[regex(r"-?[0-9]+")]
    Int,
    #[regex(r"-?[0-9]+\.[0-9]+")]
    Float,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedStr,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Result of lexing one unit.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    /// Always terminated by an `Eof` token.
    pub tokens: TokenList,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexer that produces interned tokens.
pub struct Lexer<'src, 'i> {
    source: &'src str,
    unit: UnitId,
    interner: &'i StringInterner,
}

impl<'src, 'i> Lexer<'src, 'i> {
    pub fn new(source: &'src str, unit: UnitId, interner: &'i StringInterner) -> Self {
        Lexer {
            source,
            unit,
            interner,
        }
    }

    /// Lex all tokens from the source.
    pub fn lex_all(&self) -> LexOutput {
        let mut output = LexOutput::default();
        let mut logos = RawToken::lexer(self.source);
        // Adjacent invalid characters are reported once.
        let mut invalid_run: Option<Span> = None;

        while let Some(result) = logos.next() {
            let span = Span::from_range(logos.span());
            let slice = logos.slice();

            let raw = match result {
                Ok(raw) => raw,
                Err(()) => {
                    invalid_run = Some(match invalid_run {
                        Some(run) if run.end == span.start => run.merge(span),
                        Some(run) => {
                            output.diagnostics.push(self.invalid_chars(run));
                            span
                        }
                        None => span,
                    });
                    continue;
                }
            };

            if let Some(run) = invalid_run.take() {
                output.diagnostics.push(self.invalid_chars(run));
            }

            match raw {
                RawToken::BlockComment => {
                    if slice.starts_with("/**") && slice != "/**/" {
                        let text = self.interner.intern(slice);
                        output
                            .tokens
                            .push(Token::new(TokenKind::DocComment(text), span));
                    }
                }
                RawToken::UnterminatedComment => {
                    output.diagnostics.push(
                        Diagnostic::error(ErrorCode::E0001)
                            .with_message("unterminated comment")
                            .with_label(self.unit, span, "comment starts here")
                            .with_suggestion("close the comment with `*/`"),
                    );
                    // The comment swallows the rest of the unit.
                    break;
                }
                RawToken::UnterminatedStr => {
                    output.diagnostics.push(
                        Diagnostic::error(ErrorCode::E0003)
                            .with_message("unterminated string literal")
                            .with_label(self.unit, span, "string starts here"),
                    );
                }
                _ => {
                    let kind = self.convert_token(raw, slice);
                    output.tokens.push(Token::new(kind, span));
                }
            }
        }

        if let Some(run) = invalid_run.take() {
            output.diagnostics.push(self.invalid_chars(run));
        }

        let eof = Span::from_range(self.source.len()..self.source.len());
        output.tokens.push(Token::new(TokenKind::Eof, eof));

        trace!(
            tokens = output.tokens.len(),
            errors = output.diagnostics.len(),
            "lexed unit"
        );
        output
    }

    fn invalid_chars(&self, span: Span) -> Diagnostic {
        let text = self.source.get(span.to_range()).unwrap_or_default();
        let (message, label) = if text.chars().count() == 1 {
            (format!("invalid character `{text}`"), "not valid here")
        } else {
            (format!("invalid characters `{text}`"), "not valid here")
        };
        Diagnostic::error(ErrorCode::E0002)
            .with_message(message)
            .with_label(self.unit, span, label)
    }

    /// Convert a raw token to a `TokenKind`, interning text payloads.
    fn convert_token(&self, raw: RawToken, slice: &str) -> TokenKind {
        match raw {
            RawToken::Parcel => TokenKind::Parcel,
            RawToken::Class => TokenKind::Class,
            RawToken::Interface => TokenKind::Interface,
            RawToken::Inherits => TokenKind::Inherits,
            RawToken::Nickname => TokenKind::Nickname,
            RawToken::Public => TokenKind::Public,
            RawToken::Private => TokenKind::Private,
            RawToken::Abstract => TokenKind::Abstract,
            RawToken::Final => TokenKind::Final,
            RawToken::Inert => TokenKind::Inert,
            RawToken::Override => TokenKind::Override,
            RawToken::Const => TokenKind::Const,
            RawToken::Nullable => TokenKind::Nullable,
            RawToken::Incremented => TokenKind::Incremented,
            RawToken::Decremented => TokenKind::Decremented,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::DoubleColon => TokenKind::DoubleColon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Star => TokenKind::Star,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Ellipsis => TokenKind::Ellipsis,
            RawToken::Int => TokenKind::Int(self.interner.intern(slice)),
            RawToken::Float => TokenKind::Float(self.interner.intern(slice)),
            RawToken::Str => TokenKind::Str(self.interner.intern(slice)),
            RawToken::Ident => TokenKind::Ident(self.interner.intern(slice)),
            // Handled by the caller before conversion.
            RawToken::BlockComment | RawToken::UnterminatedComment | RawToken::UnterminatedStr => {
                TokenKind::Error
            }
        }
    }
}

/// Lex a unit's source text.
pub fn lex(source: &str, unit: UnitId, interner: &StringInterner) -> LexOutput {
    Lexer::new(source, unit, interner).lex_all()
}

#[cfg(test)]
mod tests;
