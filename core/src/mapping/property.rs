use std::sync::Arc;

use compact_str::CompactString;
use hashbrown::HashMap;
use rowgraph_types::{Value, ValueType};

use crate::error::{Result, RowGraphError};
use crate::meta::BeanMetaData;
use crate::name::FlexibleName;
use crate::path::RelationPath;
use crate::result_set::{ResultColumnMap, ResultSet, SelectIndexMap, columns::resolve_column_index};

/// Binding of one result column to one property setter and its converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
    pub(crate) property_index: usize,
    pub(crate) property_name: CompactString,
    pub(crate) column_key: FlexibleName,
    pub(crate) column_index: usize,
    pub(crate) value_type: ValueType,
}

impl PropertyMapping {
    /// Index of the property on its entity type.
    pub fn property_index(&self) -> usize {
        self.property_index
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Flexible name of the (unsuffixed) column.
    pub fn column_key(&self) -> &FlexibleName {
        &self.column_key
    }

    /// Resolved 0-based position in the result set.
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Reads and converts this column of the current row.
    pub fn read<R: ResultSet + ?Sized>(&self, rs: &R) -> Result<Value> {
        Ok(self.value_type.convert(rs.value(self.column_index)?)?)
    }
}

/// The property bindings of one entity type for one select, in declaration
/// order. Properties whose column is not part of the select have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCache {
    mappings: Vec<PropertyMapping>,
    by_column: HashMap<FlexibleName, usize>,
}

impl PropertyCache {
    /// Resolves the properties of `meta` against the select, for the entity
    /// at `path` (base point or a relation level).
    pub(crate) fn build(
        meta: &Arc<BeanMetaData>,
        select_columns: &ResultColumnMap,
        select_index: Option<&SelectIndexMap>,
        path: &RelationPath,
    ) -> Result<Self> {
        let mut cache = Self::default();
        for (property_index, property) in meta.properties().iter().enumerate() {
            let Some(column_index) =
                resolve_column_index(select_columns, select_index, path, property.column_name())
            else {
                continue;
            };
            if column_index >= select_columns.len() {
                return Err(RowGraphError::Metadata(format!(
                    "{}.{} is mapped to column index {column_index} at {path} \
                     but the result has {} columns",
                    meta.entity_name(),
                    property.property_name(),
                    select_columns.len()
                )));
            }
            let column_key = FlexibleName::new(property.column_name());
            cache.by_column.insert(column_key.clone(), cache.mappings.len());
            cache.mappings.push(PropertyMapping {
                property_index,
                property_name: property.property_name().into(),
                column_key,
                column_index,
                value_type: property.value_type(),
            });
        }
        Ok(cache)
    }

    pub fn get(&self, column: &str) -> Option<&PropertyMapping> {
        self.by_column
            .get(&FlexibleName::new(column))
            .map(|index| &self.mappings[*index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyMapping> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
