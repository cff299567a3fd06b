//! Canonicalization of imported types.
//!
//! Types read from compiled metadata use the host runtime's nominal
//! spellings: `Function`2<a, b>`, `Tuple`3<a, b, c>`, `System.Int32`. The
//! type checker wants the language's own forms. Two maps translate:
//!
//! - *decompile* turns nominal function and tuple constructors into `Fun`
//!   and source tuples,
//! - *improve* turns host-runtime primitives into the language's
//!   abbreviations, keeping the requested nullness.
//!
//! Both maps are built on first use and never change afterwards.

mod decompile;
mod improve;

pub use improve::ImproveStrategy;
pub(crate) use decompile::DecompileMap;
pub(crate) use improve::ImproveMap;
