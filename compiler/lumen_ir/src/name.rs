//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// Layout: shard (top 4 bits) + index within the shard (low 28 bits).
/// Two `Name`s produced by the same interner are equal iff their strings are.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Largest index a single shard can hand out.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Number of interner shards.
    pub const NUM_SHARDS: usize = 16;

    const SHARD_BITS: u32 = 28;

    #[inline]
    pub(crate) const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < Self::NUM_SHARDS as u32);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << Self::SHARD_BITS) | local)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> Self::SHARD_BITS) as usize
    }

    #[inline]
    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Raw u32 value, stable for the lifetime of the interner.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Rebuild from a raw value. Only meaningful for values produced by `raw`.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Whether this is the pre-interned empty string.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
