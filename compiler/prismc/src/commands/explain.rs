//! The `explain` command: describe an error code.

use super::EXIT_FAILURE;
use prism_diagnostic::ErrorCode;

/// Print the kind and description of an error code.
pub fn explain_error(code_str: &str) -> i32 {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1002, E2004, E4001");
        return EXIT_FAILURE;
    };

    println!("{code}: {}", code.kind_name());
    println!();
    println!("{}", code.description());
    0
}
