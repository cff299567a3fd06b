//! Sharded string interner for identifiers.
//!
//! Every namespace segment, type name and symbol name seen during a session
//! goes through here. Interning is O(1) amortized and safe to call from any
//! number of analysis threads; lookups take a shard read lock only.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::{Name, NamespacePath};

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// A shard ran out of 28-bit local indices.
    ShardOverflow { shard_idx: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx } => write!(
                f,
                "interner shard {shard_idx} exceeded {} strings",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Shard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Identifiers every session touches while building its global environment.
const PRELUDE: &[&str] = &[
    "System",
    "Runtime",
    "CompilerServices",
    "Diagnostics",
    "CodeAnalysis",
    "InteropServices",
    "Collections",
    "Generic",
    "Object",
    "String",
    "Int32",
    "Int64",
    "Boolean",
    "Char",
    "Double",
    "Single",
    "Attribute",
    "Lumen",
    "Core",
    "Operators",
    "LanguagePrimitives",
    "IntrinsicFunctions",
];

/// Sharded string interner for concurrent access.
pub struct StringInterner {
    shards: [RwLock<Shard>; Name::NUM_SHARDS],
    count: AtomicUsize,
}

impl StringInterner {
    /// Create an interner holding the empty string and the session prelude.
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: std::array::from_fn(|_| RwLock::new(Shard::default())),
            count: AtomicUsize::new(0),
        };
        // The empty string must land on `Name::EMPTY`: shard 0, index 0.
        {
            let mut shard = interner.shards[0].write();
            shard.map.insert("", 0);
            shard.strings.push("");
            interner.count.fetch_add(1, Ordering::Relaxed);
        }
        for s in PRELUDE {
            interner.intern(s);
        }
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        if s.is_empty() {
            return 0;
        }
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash = hasher.finish() as usize;
        hash % Name::NUM_SHARDS
    }

    /// Intern a string, or report shard exhaustion.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        if let Some(&local) = shard.read().map.get(s) {
            return Ok(Name::new(shard_u32, local));
        }

        let mut guard = shard.write();
        // Another thread may have won the race for the write lock.
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_u32, local));
        }

        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&l| l <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        self.count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_u32, local))
    }

    /// Intern a string.
    ///
    /// # Panics
    /// Panics if a shard is exhausted (over 268 million strings in one shard).
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Find an already-interned string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_idx = Self::shard_for(s);
        let local = *self.shards[shard_idx].read().map.get(s)?;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_u32 = shard_idx as u32;
        Some(Name::new(shard_u32, local))
    }

    /// Intern a dotted path such as `System.Runtime.CompilerServices`.
    ///
    /// The empty string yields the root (empty) path.
    pub fn intern_path(&self, dotted: &str) -> NamespacePath {
        if dotted.is_empty() {
            return NamespacePath::root();
        }
        dotted.split('.').map(|seg| self.intern(seg)).collect()
    }

    /// Look up the string for a `Name`.
    ///
    /// Interned strings are never freed, so the result is `'static`.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.shards[name.shard()].read().strings[name.local()]
    }

    /// Look up a `Name` that may come from another interner.
    ///
    /// Returns `None` when this interner never handed out the index. A name
    /// from another interner that happens to be in range is not detected.
    pub fn try_lookup(&self, name: Name) -> Option<&'static str> {
        self.shards[name.shard()].read().strings.get(name.local()).copied()
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// True when only the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

/// Read-only view of interned names.
///
/// Lets display code accept any interner handle without naming the concrete type.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}

/// Clonable handle to the session interner.
///
/// The global environment and every consumer thread hold one of these, so
/// names produced anywhere in the session compare equal everywhere.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a fresh session interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedInterner").field(&self.0.len()).finish()
    }
}
