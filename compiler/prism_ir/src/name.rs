//! Interned identifiers.

use std::fmt;

const SHARD_BITS: u32 = 4;
const INDEX_BITS: u32 = u32::BITS - SHARD_BITS;

/// An identifier or qualified name held by a [`StringInterner`].
///
/// The top bits pick the interner shard, the rest index into it.
///
/// There is no `Ord`: ids depend on which parser thread reached a string
/// first, so anything sorted by them would change from run to run.
///
/// [`StringInterner`]: crate::StringInterner
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

crate::static_assert_size!(Name, 4);

impl Name {
    /// The empty string, present in every interner.
    pub const EMPTY: Name = Name(0);

    pub const SHARDS: usize = 1 << SHARD_BITS;

    /// Largest index one shard can hand out.
    pub const MAX_INDEX: u32 = (1 << INDEX_BITS) - 1;

    #[inline]
    pub(crate) const fn from_parts(shard: u32, index: u32) -> Self {
        debug_assert!((shard as usize) < Self::SHARDS);
        debug_assert!(index <= Self::MAX_INDEX);
        Name((shard << INDEX_BITS) | index)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> INDEX_BITS) as usize
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0 & Self::MAX_INDEX) as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.index())
    }
}
