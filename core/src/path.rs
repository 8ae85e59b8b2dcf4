//! Relation-path suffixes.

use core::fmt;

use compact_str::{CompactString, format_compact};

/// Identifies one level of the relation graph below the base row.
///
/// The base point is the empty path; first-level relations are `_0`, `_1`, ...
/// (the relation number is the declaration index on the owning type) and a
/// nested relation appends its own number: `_1_3` is relation 3 of relation 1.
/// Relation columns appear in the select list with the path as a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RelationPath(CompactString);

impl RelationPath {
    /// The base point (empty suffix).
    pub fn base() -> Self {
        Self(CompactString::default())
    }

    /// Parses a suffix such as `_0` or `_1_3`. Returns `None` for anything
    /// else; the empty string is the base point.
    pub fn parse(suffix: &str) -> Option<Self> {
        if suffix.is_empty() {
            return Some(Self::base());
        }
        let rest = suffix.strip_prefix('_')?;
        if rest
            .split('_')
            .all(|no| !no.is_empty() && no.bytes().all(|b| b.is_ascii_digit()))
        {
            Some(Self(CompactString::from(suffix)))
        } else {
            None
        }
    }

    /// Path of relation `relation_no` declared on the type at this path.
    pub fn child(&self, relation_no: usize) -> Self {
        Self(format_compact!("{}_{}", self.0, relation_no))
    }

    pub fn is_base(&self) -> bool {
        self.0.is_empty()
    }

    pub fn suffix(&self) -> &str {
        &self.0
    }

    /// Number of relation levels below the base point.
    pub fn depth(&self) -> usize {
        self.0.matches('_').count()
    }

    /// True when `self` lies strictly below `ancestor`.
    pub fn is_below(&self, ancestor: &RelationPath) -> bool {
        self.0.len() > ancestor.0.len()
            && self.0.starts_with(ancestor.0.as_str())
            && self.0.as_bytes()[ancestor.0.len()] == b'_'
    }
}

impl fmt::Display for RelationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(base)")
        } else {
            f.write_str(&self.0)
        }
    }
}
