use core::fmt;

use rowgraph_types::Value;
use smallvec::SmallVec;

/// Identity of a related row within one relation level: the values of the
/// relation's "your" key columns, in key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationKey(SmallVec<[Value; 2]>);

impl RelationKey {
    pub fn new<I: IntoIterator<Item = Value>>(values: I) -> Self {
        Self(values.into_iter().collect())
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

/// Outcome of reading a relation key from the current row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKeyLookup {
    /// Every key column has a value.
    Key(RelationKey),
    /// Some key column is NULL or not part of the select: the relation has
    /// no row here.
    Absent,
}
