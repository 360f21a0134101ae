//! Modifier lists and their placement rules.

use crate::recovery::TokenSet;
use crate::{ParseError, Parser};
use prism_diagnostic::ErrorCode;
use prism_ir::{Span, TokenKind, Visibility};

/// What a modifier list is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ModifierTarget {
    Declaration,
    Method,
    Field,
}

impl ModifierTarget {
    fn allowed(self) -> TokenSet {
        let base = TokenSet::new()
            .with(TokenKind::Public)
            .with(TokenKind::Private)
            .with(TokenKind::Inert);
        match self {
            ModifierTarget::Declaration => base.with(TokenKind::Abstract).with(TokenKind::Final),
            ModifierTarget::Method => base
                .with(TokenKind::Abstract)
                .with(TokenKind::Final)
                .with(TokenKind::Override),
            ModifierTarget::Field => base,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ModifierTarget::Declaration => "a class or interface",
            ModifierTarget::Method => "a method",
            ModifierTarget::Field => "a field",
        }
    }
}

/// Modifiers as written, in order.
#[derive(Clone, Debug, Default)]
pub(crate) struct Modifiers {
    written: Vec<(TokenKind, Span)>,
}

/// Modifiers after placement checks.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct CheckedModifiers {
    present: TokenSet,
    pub visibility: Visibility,
}

impl CheckedModifiers {
    pub fn has(&self, kind: TokenKind) -> bool {
        self.present.contains(kind)
    }
}

impl Modifiers {
    /// Check placement, repetition and conflicting visibility.
    pub fn check(&self, target: ModifierTarget) -> Result<CheckedModifiers, ParseError> {
        let allowed = target.allowed();
        let mut checked = CheckedModifiers::default();
        let mut first_visibility: Option<Span> = None;

        for (i, &(kind, span)) in self.written.iter().enumerate() {
            if let Some(&(_, earlier)) = self.written[..i].iter().find(|(k, _)| *k == kind) {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!("duplicate modifier {}", kind.display_name()),
                    span,
                )
                .with_label("repeated here")
                .with_related(earlier, "first written here"));
            }
            if !allowed.contains(kind) {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!(
                        "{} is not allowed on {}",
                        kind.display_name(),
                        target.describe()
                    ),
                    span,
                )
                .with_label("misplaced modifier"));
            }
            let visibility = match kind {
                TokenKind::Public => Some(Visibility::Public),
                TokenKind::Private => Some(Visibility::Private),
                _ => None,
            };
            if let Some(visibility) = visibility {
                if let Some(earlier) = first_visibility {
                    return Err(ParseError::new(
                        ErrorCode::E1005,
                        "conflicting visibility modifiers",
                        span,
                    )
                    .with_label("conflicts with the earlier visibility")
                    .with_related(earlier, "visibility first set here"));
                }
                first_visibility = Some(span);
                checked.visibility = visibility;
            }
            checked.present = checked.present.with(kind);
        }

        Ok(checked)
    }
}

impl Parser<'_> {
    /// Collect `modifier*` without checking placement.
    ///
    /// Checks happen once the construct is known, after its keyword or name
    /// has been consumed, so that recovery drops the whole construct.
    pub(crate) fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::default();
        while self.cursor.current_kind().is_modifier() {
            let token = self.cursor.advance();
            modifiers.written.push((token.kind, token.span));
        }
        modifiers
    }
}
