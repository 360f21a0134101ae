//! Source units: one parsed declaration file each.

use crate::{Declaration, Name, Span};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Index of a unit within one compilation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UnitId(u32);

impl UnitId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        UnitId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a unit lives on disk.
///
/// `path_part` is the path relative to `source_dir` without extension, using
/// `/` separators (`Crustacean/Lobster`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSpec {
    pub source_dir: PathBuf,
    pub path_part: String,
    /// Found in an include directory: resolvable, but not compiled for output.
    pub included: bool,
}

impl FileSpec {
    pub fn new(source_dir: impl Into<PathBuf>, path_part: impl Into<String>, included: bool) -> Self {
        FileSpec {
            source_dir: source_dir.into(),
            path_part: path_part.into(),
            included,
        }
    }

    /// Full path of the unit with the given extension.
    pub fn path(&self, ext: &str) -> PathBuf {
        let mut path = self.source_dir.clone();
        for segment in self.path_part.split('/') {
            path.push(segment);
        }
        path.set_extension(ext);
        path
    }

    /// Include guard name for generated headers: `H_CRUSTACEAN_LOBSTER`.
    pub fn guard_name(&self) -> String {
        let mut guard = String::from("H_");
        for c in self.path_part.chars() {
            if c.is_ascii_alphanumeric() {
                guard.push(c.to_ascii_uppercase());
            } else {
                guard.push('_');
            }
        }
        guard
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

/// One parsed unit. Immutable after parsing.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub id: UnitId,
    pub file: FileSpec,
    /// Parcel named by the unit's `parcel` declaration.
    pub parcel: Option<Name>,
    /// Location of the `parcel` declaration.
    pub parcel_span: Option<Span>,
    pub declarations: Vec<Arc<Declaration>>,
}

impl SourceUnit {
    pub fn new(id: UnitId, file: FileSpec) -> Self {
        SourceUnit {
            id,
            file,
            parcel: None,
            parcel_span: None,
            declarations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_spec_path_and_guard() {
        let spec = FileSpec::new("/src", "Crustacean/Lobster", false);
        assert_eq!(
            spec.path("pdl"),
            PathBuf::from("/src/Crustacean/Lobster.pdl")
        );
        assert_eq!(spec.guard_name(), "H_CRUSTACEAN_LOBSTER");
    }

    #[test]
    fn test_unit_id_index() {
        assert_eq!(UnitId::new(7).index(), 7);
    }
}
