//! Prism Compiler CLI

use prismc::commands::{check, explain_error, parse_file, EXIT_FAILURE};
use prismc::{init_tracing, parse_compile_options};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "check" => match parse_compile_options(&args[2..]) {
            Ok(options) => check(&options),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!();
                print_check_usage();
                EXIT_FAILURE
            }
        },
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: prism parse <file.pdl>");
                std::process::exit(EXIT_FAILURE);
            }
            parse_file(&args[2])
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: prism explain <ERROR_CODE>");
                eprintln!("Example: prism explain E2004");
                std::process::exit(EXIT_FAILURE);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("Prism {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    println!("Prism declaration compiler");
    println!();
    println!("Usage: prism <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <dir>...       Compile declaration units and report diagnostics");
    println!("  parse <file.pdl>     Parse one unit and list its declarations");
    println!("  explain <code>       Explain an error code (e.g., E2004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Set RUST_LOG=prismc=debug for a trace of the pipeline.");
}

fn print_check_usage() {
    eprintln!("Usage: prism check <dir>... [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -I <dir>, --include=<dir>   Make units in <dir> available for lookup");
    eprintln!("  --no-parallel               Parse units on one thread");
    eprintln!("  --emit=<kind>               text (default), json, graph");
    eprintln!("  -o <path>, --output=<path>  Write JSON output to <path>");
    eprintln!("  --color=<mode>              auto (default), always, never");
}
