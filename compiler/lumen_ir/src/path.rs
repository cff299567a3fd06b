//! Namespace paths.

use smallvec::SmallVec;

use crate::{Name, StringLookup};

/// Ordered namespace segments, e.g. `System.Collections.Generic`.
///
/// Most paths have at most four segments and are stored inline.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NamespacePath(SmallVec<[Name; 4]>);

impl NamespacePath {
    /// The root (global) namespace.
    pub fn root() -> Self {
        NamespacePath(SmallVec::new())
    }

    /// Build a path from its segments.
    pub fn new(segments: impl IntoIterator<Item = Name>) -> Self {
        segments.into_iter().collect()
    }

    pub fn segments(&self) -> &[Name] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Innermost segment, or `None` for the root.
    pub fn last(&self) -> Option<Name> {
        self.0.last().copied()
    }

    /// A new path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: Name) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        NamespacePath(segments)
    }

    /// Render as `A.B.C`.
    pub fn dotted(&self, lookup: &impl StringLookup) -> String {
        let mut out = String::new();
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(lookup.lookup(*seg));
        }
        out
    }

    /// Render `A.B.C.name`, or just `name` at the root.
    pub fn qualify(&self, name: Name, lookup: &impl StringLookup) -> String {
        let name = lookup.lookup(name);
        if self.is_root() {
            name.to_owned()
        } else {
            format!("{}.{name}", self.dotted(lookup))
        }
    }
}

impl FromIterator<Name> for NamespacePath {
    fn from_iter<I: IntoIterator<Item = Name>>(iter: I) -> Self {
        NamespacePath(iter.into_iter().collect())
    }
}
