//! Error codes.
//!
//! The first digit names the phase that reports the code:
//! E0 lexer, E1 syntax, E2 symbols and inheritance resolution, E3
//! validation, E4 parcels. `prism explain <code>` prints the description.

use std::fmt;

/// Declares every code once, with its kind and its explanation, and derives
/// the lookup tables from that list.
macro_rules! error_codes {
    ($($(#[$doc:meta])* $code:ident => $kind:literal, $description:literal;)*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $($(#[$doc])* $code,)*
        }

        impl ErrorCode {
            /// All codes, in numeric order.
            pub const ALL: &[ErrorCode] = &[$(ErrorCode::$code),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => stringify!($code),)*
                }
            }

            /// The diagnostic kind; several codes may share one.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => $kind,)*
                }
            }

            /// Long-form explanation.
            pub fn description(&self) -> &'static str {
                match self {
                    $(ErrorCode::$code => $description,)*
                }
            }
        }
    };
}

error_codes! {
    /// Unterminated block or documentation comment
    E0001 => "LexError",
        "A `/*` or `/**` comment is never closed with `*/`. Everything up to the end of the file is ignored.";
    /// Invalid character
    E0002 => "LexError",
        "The source contains a character that cannot start any token.";
    /// Unterminated string literal
    E0003 => "LexError",
        "A string literal is missing its closing quote.";

    /// Unexpected token
    E1001 => "SyntaxError",
        "The parser found a token that cannot appear at this position. The enclosing declaration is skipped.";
    /// Unclosed body or parameter list
    E1002 => "SyntaxError",
        "A declaration body or parameter list is opened but never closed. The diagnostic points at the opening delimiter.";
    E1003 => "SyntaxError",
        "An identifier was expected, for example a class, member or parameter name.";
    E1004 => "SyntaxError",
        "A type was expected before a member or parameter name.";
    /// Misplaced or repeated modifier
    E1005 => "SyntaxError",
        "A modifier is repeated or not allowed here: `override` applies only to methods, and fields accept only visibility and `inert`.";
    E1006 => "SyntaxError",
        "A unit may contain a single `parcel Name;` declaration, placed before any class.";
    E1007 => "SyntaxError",
        "A type has too many `*` levels or an array size that does not fit in 32 bits.";

    E2001 => "DuplicateSymbol",
        "Two declarations have the same fully-qualified name. The second one is ignored.";
    E2002 => "UnknownParent",
        "The class named after `inherits` is not declared in any compiled or included unit.";
    E2003 => "UnknownInterface",
        "An interface listed after `:` is not declared in any compiled or included unit.";
    E2004 => "CyclicInheritance",
        "The inheritance graph contains a cycle. No class on the cycle can be resolved.";
    /// Parent of the wrong kind
    E2005 => "InvalidSupertype",
        "A class may only inherit from a class, and an interface only from interfaces.";
    /// Class listed where an interface is required
    E2006 => "InvalidSupertype",
        "Only interfaces may be listed after `:`.";
    E2007 => "UnresolvedAncestor",
        "A class cannot be resolved because one of its ancestors failed to resolve.";
    E2008 => "AmbiguousReference",
        "A bare name matches declarations in more than one prerequisite parcel. Qualify it with its parcel.";
    E2009 => "MethodSignatureConflict",
        "A method redefines an inherited method with a different number of parameters or a different kind of return type, or two interfaces disagree on a method.";
    E2010 => "FieldRedeclared",
        "A field has the same name as a field of an ancestor. Fields cannot be shadowed.";

    E3001 => "AbstractMethodNotImplemented",
        "A concrete class inherits an abstract method without implementing it. Implement the method or mark the class `abstract`.";
    E3002 => "InterfaceField",
        "Interfaces describe behaviour only and cannot declare fields.";
    /// Final class inherited
    E3003 => "FinalViolation",
        "A class inherits from a class marked `final`.";
    /// Final method overridden
    E3004 => "FinalViolation",
        "A method redefines an inherited method marked `final`.";
    E3005 => "DuplicateMember",
        "A declaration contains two methods or two fields with the same name.";
    E3006 => "NothingToOverride",
        "A method marked `override` does not redefine any inherited or interface method.";
    E3007 => "InertClassMember",
        "Classes marked `inert` may only contain `inert` functions and variables.";

    E4001 => "DuplicateParcel",
        "Two parcels share a name or a nickname.";
    E4002 => "MissingPrerequisite",
        "A parcel lists a prerequisite that no manifest defines.";
    E4003 => "PrerequisiteVersion",
        "A prerequisite parcel is older than the version the parcel requires.";
    E4004 => "InvalidManifest",
        "A parcel manifest is not valid JSON or lacks required keys.";
    E4005 => "UnknownParcel",
        "A unit declares a parcel that has no manifest.";
}

impl ErrorCode {
    /// The digit after `E`.
    fn phase(self) -> u8 {
        self.as_str().as_bytes()[1] - b'0'
    }

    pub fn is_lexer_error(&self) -> bool {
        self.phase() == 0
    }

    pub fn is_syntax_error(&self) -> bool {
        self.phase() == 1
    }

    pub fn is_resolution_error(&self) -> bool {
        self.phase() == 2
    }

    pub fn is_validation_error(&self) -> bool {
        self.phase() == 3
    }

    pub fn is_parcel_error(&self) -> bool {
        self.phase() == 4
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `e2004` parses.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
