//! The string interner shared by every phase of one compilation.
//!
//! Parser threads intern concurrently. Each shard sits behind its own
//! `RwLock`, so two threads only contend when their strings hash to the same
//! shard. Interned text is leaked and lives for the rest of the process,
//! which lets `lookup` hand out `&'static str`.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Words every unit uses; interning them up front keeps parser threads off
/// the write locks for the common case.
const PREINTERNED: &[&str] = &[
    "parcel", "class", "interface", "inherits", "nickname", "public", "private", "abstract",
    "final", "inert", "override", "const", "nullable", "incremented", "decremented", "void",
    "bool", "char", "int", "float", "double", "size_t", "int8_t", "int16_t", "int32_t", "int64_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t", "NULL",
];

/// A shard ran out of indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternError {
    pub shard: usize,
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "interner shard {} is full ({} strings)",
            self.shard,
            u64::from(Name::MAX_INDEX) + 1
        )
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Shard {
    ids: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl Shard {
    /// Store `text`, returning its index, or `None` once the shard is full.
    fn insert(&mut self, text: &str) -> Option<u32> {
        let index = u32::try_from(self.strings.len())
            .ok()
            .filter(|&i| i <= Name::MAX_INDEX)?;
        let text: &'static str = Box::leak(text.into());
        self.strings.push(text);
        self.ids.insert(text, index);
        Some(index)
    }
}

/// Maps strings to [`Name`]s and back. `Sync`: share it by reference.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::SHARDS],
    count: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(Shard::default())),
            count: AtomicUsize::new(0),
        };
        // Shard 0 index 0 must be the empty string so `Name::EMPTY` holds.
        interner.shards[0].write().insert("");
        interner.count.store(1, Ordering::Relaxed);
        for word in PREINTERNED {
            interner.intern(word);
        }
        interner
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the remainder is below Name::SHARDS"
    )]
    fn shard_of(text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        (hasher.finish() % Name::SHARDS as u64) as u32
    }

    /// Intern `text`, failing only when its shard is full.
    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        let shard = Self::shard_of(text);
        let lock = &self.shards[shard as usize];

        if let Some(&index) = lock.read().ids.get(text) {
            return Ok(Name::from_parts(shard, index));
        }

        let mut guard = lock.write();
        // Someone may have inserted it between the two locks.
        if let Some(&index) = guard.ids.get(text) {
            return Ok(Name::from_parts(shard, index));
        }
        let index = guard.insert(text).ok_or(InternError {
            shard: shard as usize,
        })?;
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(Name::from_parts(shard, index))
    }

    /// Intern `text`.
    ///
    /// # Panics
    /// When a shard overflows, which takes 2^28 distinct strings.
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|err| panic!("{err}"))
    }

    /// The name of `text` if something already interned it.
    ///
    /// Resolution probes candidate names with this: a string nobody
    /// interned cannot name a declaration.
    pub fn get(&self, text: &str) -> Option<Name> {
        let shard = Self::shard_of(text);
        let guard = self.shards[shard as usize].read();
        guard
            .ids
            .get(text)
            .map(|&index| Name::from_parts(shard, index))
    }

    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().strings[name.index()]
    }

    /// Number of distinct strings, the empty string included.
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// True when only the empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can turn a [`Name`] back into text.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}
