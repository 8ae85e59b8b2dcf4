//! Flexible column names.

use core::fmt;

use compact_str::CompactString;

/// A column name normalized for flexible lookup: ASCII case is ignored, so
/// `member_id`, `MEMBER_ID` and `Member_Id` are one key.
///
/// Underscores are kept. They separate relation numbers in select aliases and
/// `CODE_1_3` must not collide with `CODE_13`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlexibleName(CompactString);

impl FlexibleName {
    pub fn new(name: &str) -> Self {
        let mut normalized = CompactString::with_capacity(name.len());
        for c in name.chars() {
            normalized.push(c.to_ascii_uppercase());
        }
        Self(normalized)
    }

    /// Name of a relation column as it appears in the select list:
    /// the column followed by the relation-path suffix (`SERVICE_RANK_CODE_0`).
    pub fn with_suffix(column: &str, suffix: &str) -> Self {
        let mut name = CompactString::with_capacity(column.len() + suffix.len());
        name.push_str(column);
        name.push_str(suffix);
        Self::new(&name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlexibleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlexibleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
