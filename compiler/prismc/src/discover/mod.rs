//! Finding units and parcel manifests on disk.

use crate::{CompileError, MANIFEST_EXTENSION, UNIT_EXTENSION};
use prism_ir::FileSpec;
use std::fs;
use std::path::{Path, PathBuf};

/// A discovered file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundFile {
    pub path: PathBuf,
    pub spec: FileSpec,
}

/// Everything found under the source and include directories.
///
/// Source directories come first, then include directories; within one
/// directory files are sorted by path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovered {
    pub units: Vec<FoundFile>,
    pub manifests: Vec<FoundFile>,
}

/// Walk every source and include directory.
pub fn discover(source_dirs: &[PathBuf], include_dirs: &[PathBuf]) -> Result<Discovered, CompileError> {
    let mut found = Discovered::default();
    let dirs = source_dirs
        .iter()
        .map(|dir| (dir, false))
        .chain(include_dirs.iter().map(|dir| (dir, true)));

    for (dir, included) in dirs {
        if !dir.is_dir() {
            return Err(CompileError::NotADirectory { path: dir.clone() });
        }
        let mut paths = Vec::new();
        walk(dir, &mut paths)?;
        paths.sort();

        for path in paths {
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            let list = match ext {
                UNIT_EXTENSION => &mut found.units,
                MANIFEST_EXTENSION => &mut found.manifests,
                _ => continue,
            };
            let spec = FileSpec::new(dir.clone(), path_part(dir, &path), included);
            list.push(FoundFile { path, spec });
        }
    }

    tracing::debug!(
        units = found.units.len(),
        manifests = found.manifests.len(),
        "discovered sources"
    );
    Ok(found)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CompileError> {
    let entries = fs::read_dir(dir).map_err(|e| CompileError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| CompileError::io(dir, e))?.path();

        // Skip hidden files and directories
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            walk(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Path of `file` relative to `root`, without extension, `/`-separated.
fn path_part(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
