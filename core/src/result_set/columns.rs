use compact_str::CompactString;
use hashbrown::HashMap;

use super::ResultSet;
use crate::error::Result;
use crate::name::FlexibleName;
use crate::path::RelationPath;

/// One column of the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultColumn {
    /// The label exactly as the driver reported it.
    pub label: CompactString,
    /// 0-based position.
    pub index: usize,
}

/// Flexible column name → actual select alias and position.
///
/// Built once per execution since the column layout is the same for every
/// row of one cursor. When a label repeats (joined tables without aliases),
/// the first occurrence wins, matching JDBC `findColumn`.
#[derive(Debug, Clone, Default)]
pub struct ResultColumnMap {
    columns: HashMap<FlexibleName, ResultColumn>,
    len: usize,
}

impl ResultColumnMap {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = HashMap::new();
        let mut len = 0;
        for (index, label) in labels.into_iter().enumerate() {
            let label = label.as_ref();
            columns
                .entry(FlexibleName::new(label))
                .or_insert_with(|| ResultColumn {
                    label: CompactString::from(label),
                    index,
                });
            len = index + 1;
        }
        Self { columns, len }
    }

    /// Reads the column layout from the result set's metadata.
    pub fn read<R: ResultSet + ?Sized>(rs: &R) -> Result<Self> {
        Ok(Self::from_labels(rs.column_labels()?))
    }

    pub fn get(&self, name: &FlexibleName) -> Option<&ResultColumn> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &FlexibleName) -> bool {
        self.columns.contains_key(name)
    }

    /// Number of result columns (positions), duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Explicit column positions recorded by the SQL builder, per entity locator.
///
/// The locator is the relation path (`""` for the base point, `_0`, `_1_3`),
/// the inner key the plain column name. When an entry exists it takes
/// precedence over name lookup, which is how duplicate column names across
/// joined tables are told apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectIndexMap {
    entries: HashMap<RelationPath, HashMap<FlexibleName, usize>>,
}

impl SelectIndexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the 0-based position of `column` for the entity at `locator`.
    pub fn insert(&mut self, locator: RelationPath, column: &str, index: usize) {
        self.entries
            .entry(locator)
            .or_default()
            .insert(FlexibleName::new(column), index);
    }

    pub fn with(mut self, locator: RelationPath, column: &str, index: usize) -> Self {
        self.insert(locator, column, index);
        self
    }

    pub fn index_of(&self, locator: &RelationPath, column: &str) -> Option<usize> {
        self.entries
            .get(locator)?
            .get(&FlexibleName::new(column))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the position of `column` of the entity at `path`.
///
/// An explicit index wins when one is recorded; otherwise the column is looked
/// up by its select alias (`column` + path suffix). `None` means the column is
/// not part of this select.
pub(crate) fn resolve_column_index(
    select_columns: &ResultColumnMap,
    select_index: Option<&SelectIndexMap>,
    path: &RelationPath,
    column: &str,
) -> Option<usize> {
    if let Some(index) = select_index.and_then(|map| map.index_of(path, column)) {
        return Some(index);
    }
    select_columns
        .get(&FlexibleName::with_suffix(column, path.suffix()))
        .map(|c| c.index)
}
