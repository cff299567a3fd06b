//! Lumen IR - identifiers shared by every compiler phase.
//!
//! - Names for interned identifiers (namespace segments, type names,
//!   intrinsic logical and compiled names, attribute names)
//! - A sharded, thread-safe string interner
//! - Namespace paths (`System.Runtime.CompilerServices`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32), compared in O(1)
//! - **Cheap Copies**: `Name` is `Copy`; short paths live inline

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod path;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use path::NamespacePath;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Name;
    static_assert_size!(Name, 4);
}
