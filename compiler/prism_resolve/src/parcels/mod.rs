//! Registry of known parcels.
//!
//! Parcels are registered from manifests before any unit is resolved. A
//! parcel becomes *required* when a compiled source unit belongs to it; its
//! prerequisites, transitively, are required too.

use prism_diagnostic::{Diagnostic, ErrorCode};
use prism_ir::Parcel;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct ParcelRegistry {
    parcels: Vec<Parcel>,
    by_name: FxHashMap<String, usize>,
    by_nickname: FxHashMap<String, usize>,
    required: FxHashSet<usize>,
}

impl ParcelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parcel. Names and nicknames must both be unique.
    pub fn register(&mut self, parcel: Parcel) -> Result<(), Diagnostic> {
        let clash = self
            .by_name
            .get(parcel.name())
            .or_else(|| self.by_nickname.get(parcel.nickname()))
            .or_else(|| self.by_name.get(parcel.nickname()))
            .or_else(|| self.by_nickname.get(parcel.name()));
        if let Some(&index) = clash {
            let existing = &self.parcels[index];
            return Err(Diagnostic::error(ErrorCode::E4001)
                .with_message(format!(
                    "parcel `{}` (nickname `{}`) conflicts with registered parcel `{}` (nickname `{}`)",
                    parcel.name(),
                    parcel.nickname(),
                    existing.name(),
                    existing.nickname()
                )));
        }

        let index = self.parcels.len();
        self.by_name.insert(parcel.name().to_owned(), index);
        self.by_nickname.insert(parcel.nickname().to_owned(), index);
        debug!(parcel = parcel.name(), version = %parcel.version(), "registered parcel");
        self.parcels.push(parcel);
        Ok(())
    }

    pub fn fetch(&self, name: &str) -> Option<&Parcel> {
        self.by_name.get(name).map(|&index| &self.parcels[index])
    }

    /// Whether `prereq` is `parcel` itself or one of its direct prerequisites.
    pub fn has_prereq(&self, parcel: &str, prereq: &str) -> bool {
        parcel == prereq
            || self
                .fetch(parcel)
                .is_some_and(|p| p.prereqs().iter().any(|r| r.name == prereq))
    }

    /// Mark `name` and all its prerequisites as required.
    ///
    /// Walks prerequisites depth-first. Each missing prerequisite yields
    /// E4002 and each version below the requested minimum yields E4003.
    /// An unknown `name` is not an error here.
    pub fn check_prereqs(&mut self, name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(&root) = self.by_name.get(name) else {
            return diagnostics;
        };

        let mut stack = vec![root];
        let mut visited = FxHashSet::default();
        while let Some(index) = stack.pop() {
            if !visited.insert(index) {
                continue;
            }
            self.required.insert(index);

            let parcel = &self.parcels[index];
            let mut found_prereqs = Vec::new();
            for prereq in parcel.prereqs() {
                let Some(&found) = self.by_name.get(&prereq.name) else {
                    diagnostics.push(
                        Diagnostic::error(ErrorCode::E4002)
                            .with_message(format!(
                                "parcel `{}` required by `{}` was not found",
                                prereq.name,
                                parcel.name()
                            ))
                            .with_suggestion(format!(
                                "add the directory holding `{}.parcel` as an include directory",
                                prereq.name
                            )),
                    );
                    continue;
                };
                let available = self.parcels[found].version();
                if *available < prereq.version {
                    diagnostics.push(
                        Diagnostic::error(ErrorCode::E4003)
                            .with_message(format!(
                                "version {available} of parcel `{}` is lower than version {} required by `{}`",
                                prereq.name,
                                prereq.version,
                                parcel.name()
                            )),
                    );
                }
                found_prereqs.push(found);
            }
            // Reverse so the first prerequisite is visited first.
            stack.extend(found_prereqs.into_iter().rev());
        }
        diagnostics
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|index| self.required.contains(index))
    }

    /// Required parcels in registration order.
    pub fn required(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels
            .iter()
            .enumerate()
            .filter(|(index, _)| self.required.contains(index))
            .map(|(_, parcel)| parcel)
    }

    /// All parcels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter()
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}
