use std::sync::Arc;

use hashbrown::HashMap;
use smallvec::SmallVec;

use super::relation_key::{RelationKey, RelationKeyLookup};
use crate::entity::Entity;
use crate::error::{Result, RowGraphError};
use crate::meta::RelationPropertyType;
use crate::path::RelationPath;
use crate::result_set::{ResultColumnMap, ResultSet, SelectIndexMap, columns::resolve_column_index};

/// Related rows already built during one execution, per relation level and
/// relation key. A hit hands out the same `Arc`, so base rows that reference
/// the same key share one related instance.
///
/// Lives for one handler execution and is never shared across threads.
#[derive(Debug, Default)]
pub struct RelationRowCache {
    rows: HashMap<RelationPath, HashMap<RelationKey, Arc<Entity>>>,
    size_hint: Option<usize>,
    cacheable: bool,
}

impl RelationRowCache {
    /// A cache pre-sized for `size_hint` relation levels. With `cacheable`
    /// false, lookups always miss and additions are dropped.
    pub fn new(size_hint: usize, cacheable: bool) -> Self {
        Self {
            rows: HashMap::with_capacity(if cacheable { size_hint } else { 0 }),
            size_hint: Some(size_hint),
            cacheable,
        }
    }

    /// Cache for cursor handling: nothing is ever retained.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    pub fn size_hint(&self) -> Option<usize> {
        self.size_hint
    }

    /// Reads the key of `relation` at `path` from the current row.
    ///
    /// Key columns are the relation's "your" columns with the path suffix.
    /// A key column that is NULL or missing from the select means there is
    /// no related row.
    pub fn create_relation_key<R: ResultSet + ?Sized>(
        &self,
        rs: &R,
        relation: &RelationPropertyType,
        select_columns: &ResultColumnMap,
        select_index: Option<&SelectIndexMap>,
        path: &RelationPath,
    ) -> Result<RelationKeyLookup> {
        let your_meta = relation.your_meta();
        let mut values = SmallVec::<[_; 2]>::new();
        for (_, your_column) in relation.key_columns() {
            let Some(index) = resolve_column_index(select_columns, select_index, path, your_column)
            else {
                return Ok(RelationKeyLookup::Absent);
            };
            let property = your_meta.property_by_column(your_column).ok_or_else(|| {
                RowGraphError::Metadata(format!(
                    "relation {} key column {your_column} is not a column of {}",
                    relation.property_name(),
                    your_meta.entity_name()
                ))
            })?;
            let value = property.value_type().convert(rs.value(index)?)?;
            if value.is_null() {
                return Ok(RelationKeyLookup::Absent);
            }
            values.push(value);
        }
        Ok(RelationKeyLookup::Key(RelationKey::new(values)))
    }

    pub fn get_relation_row(&self, path: &RelationPath, key: &RelationKey) -> Option<Arc<Entity>> {
        if !self.cacheable {
            return None;
        }
        self.rows.get(path)?.get(key).cloned()
    }

    pub fn add_relation_row(&mut self, path: RelationPath, key: RelationKey, row: Arc<Entity>) {
        if !self.cacheable {
            return;
        }
        self.rows.entry(path).or_default().insert(key, row);
    }

    /// Number of cached rows across all relation levels.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
