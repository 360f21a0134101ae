//! Compilation options and their command-line form.

use crate::CompileError;
use prism_diagnostic::emitter::ColorMode;
use std::path::PathBuf;

/// What `prism check` writes besides the exit status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmitKind {
    /// Human-readable diagnostics on stderr.
    #[default]
    Text,
    /// Diagnostics as a JSON array.
    Json,
    /// The resolved class graph as JSON; diagnostics still go to stderr.
    Graph,
}

impl EmitKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(EmitKind::Text),
            "json" => Some(EmitKind::Json),
            "graph" => Some(EmitKind::Graph),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Directories whose units are compiled.
    pub source_dirs: Vec<PathBuf>,
    /// Directories whose units are only available for lookup.
    pub include_dirs: Vec<PathBuf>,
    /// Parse units on the rayon pool.
    pub parallel: bool,
    pub emit: EmitKind,
    /// Destination for JSON output; stdout when absent.
    pub output: Option<PathBuf>,
    pub color: ColorMode,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            source_dirs: Vec::new(),
            include_dirs: Vec::new(),
            parallel: true,
            emit: EmitKind::default(),
            output: None,
            color: ColorMode::default(),
        }
    }
}

impl CompileOptions {
    /// Options compiling a single source directory.
    pub fn for_source(dir: impl Into<PathBuf>) -> Self {
        CompileOptions {
            source_dirs: vec![dir.into()],
            ..CompileOptions::default()
        }
    }
}

/// Parse the arguments following `prism check`.
///
/// Bare arguments are source directories. `-o` and `-I` take the next
/// argument as their value.
pub fn parse_compile_options(args: &[String]) -> Result<CompileOptions, CompileError> {
    let mut options = CompileOptions::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_str();
        if arg == "-o" || arg == "-I" {
            let Some(value) = args.next() else {
                return Err(CompileError::Usage(format!("`{arg}` needs a value")));
            };
            if arg == "-o" {
                options.output = Some(PathBuf::from(value));
            } else {
                options.include_dirs.push(PathBuf::from(value));
            }
        } else if let Some(dir) = arg.strip_prefix("--include=") {
            options.include_dirs.push(PathBuf::from(dir));
        } else if let Some(path) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(path));
        } else if let Some(kind) = arg.strip_prefix("--emit=") {
            options.emit = EmitKind::parse(kind)
                .ok_or_else(|| CompileError::Usage(format!("unknown emit kind `{kind}`")))?;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(mode)
                .ok_or_else(|| CompileError::Usage(format!("unknown color mode `{mode}`")))?;
        } else if arg == "--no-parallel" {
            options.parallel = false;
        } else if arg.starts_with('-') {
            return Err(CompileError::Usage(format!("unknown option `{arg}`")));
        } else {
            options.source_dirs.push(PathBuf::from(arg));
        }
    }

    if options.source_dirs.is_empty() {
        return Err(CompileError::NoSourceDirs);
    }
    Ok(options)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_full_command_line() {
        let options = parse_compile_options(&args(&[
            "core",
            "-I",
            "vendor",
            "--include=shared",
            "--no-parallel",
            "--emit=graph",
            "-o",
            "graph.json",
            "--color=never",
            "extra",
        ]))
        .unwrap();

        assert_eq!(
            options.source_dirs,
            vec![PathBuf::from("core"), PathBuf::from("extra")]
        );
        assert_eq!(
            options.include_dirs,
            vec![PathBuf::from("vendor"), PathBuf::from("shared")]
        );
        assert!(!options.parallel);
        assert_eq!(options.emit, EmitKind::Graph);
        assert_eq!(options.output, Some(PathBuf::from("graph.json")));
        assert_eq!(options.color, ColorMode::Never);
    }

    #[test]
    fn test_defaults() {
        let options = parse_compile_options(&args(&["src"])).unwrap();
        assert!(options.parallel);
        assert_eq!(options.emit, EmitKind::Text);
        assert_eq!(options.color, ColorMode::Auto);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(matches!(
            parse_compile_options(&args(&[])),
            Err(CompileError::NoSourceDirs)
        ));
        assert!(matches!(
            parse_compile_options(&args(&["src", "--emit=yaml"])),
            Err(CompileError::Usage(_))
        ));
        assert!(matches!(
            parse_compile_options(&args(&["src", "-o"])),
            Err(CompileError::Usage(_))
        ));
        assert!(matches!(
            parse_compile_options(&args(&["src", "--frobnicate"])),
            Err(CompileError::Usage(_))
        ));
    }
}
