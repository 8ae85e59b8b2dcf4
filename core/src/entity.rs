//! The row object populated by the mapping layer.

use core::fmt;
use std::sync::Arc;

use rowgraph_types::{FromValue, Value};

use crate::error::{Result, RowGraphError};
use crate::meta::BeanMetaData;

/// What a relation property holds once the relation has been mapped.
#[derive(Debug, Clone)]
pub enum RelationSlot {
    /// The related row, shared with every other base row that references the
    /// same relation key (when caching is on).
    Loaded(Arc<Entity>),
    /// Optional-style relation whose row does not exist.
    Empty,
}

impl RelationSlot {
    pub fn row(&self) -> Option<&Arc<Entity>> {
        match self {
            RelationSlot::Loaded(row) => Some(row),
            RelationSlot::Empty => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, RelationSlot::Loaded(_))
    }
}

/// A row of some entity type, described by its [`BeanMetaData`].
///
/// Every setter call records the property as modified. After mapping, the
/// row is adjusted: with the non-specified-column guard on, the modified set
/// becomes the *specified* set and reading any other property fails with
/// [`RowGraphError::NonSpecifiedColumnAccess`]. The guard is prepared by
/// the mapping layer and raised only here, at access time.
#[derive(Clone)]
pub struct Entity {
    meta: Arc<BeanMetaData>,
    values: Vec<Value>,
    modified: Vec<bool>,
    specified: Option<Vec<bool>>,
    relations: Vec<Option<RelationSlot>>,
    column_null_object: bool,
    selected: bool,
}

impl Entity {
    pub fn new(meta: Arc<BeanMetaData>) -> Self {
        let properties = meta.properties().len();
        let relations = meta.relations().len();
        Self {
            meta,
            values: vec![Value::Null; properties],
            modified: vec![false; properties],
            specified: None,
            relations: vec![None; relations],
            column_null_object: false,
            selected: false,
        }
    }

    pub fn meta(&self) -> &Arc<BeanMetaData> {
        &self.meta
    }

    pub fn entity_name(&self) -> &str {
        self.meta.entity_name()
    }

    fn unknown_property(&self, property: &str) -> RowGraphError {
        RowGraphError::UnknownProperty {
            entity: self.meta.entity_name().to_string(),
            property: property.to_string(),
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_value(&mut self, property: &str, value: impl Into<Value>) -> Result<()> {
        let index = self
            .meta
            .property_index(property)
            .ok_or_else(|| self.unknown_property(property))?;
        self.set_value_at(index, value.into());
        Ok(())
    }

    pub(crate) fn set_value_at(&mut self, index: usize, value: Value) {
        self.values[index] = value;
        self.modified[index] = true;
    }

    pub fn set_relation(&mut self, property: &str, slot: RelationSlot) -> Result<()> {
        let index = self
            .meta
            .relation_index(property)
            .ok_or_else(|| self.unknown_property(property))?;
        self.set_relation_at(index, slot);
        Ok(())
    }

    pub(crate) fn set_relation_at(&mut self, index: usize, slot: RelationSlot) {
        self.relations[index] = Some(slot);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Value of a column property.
    pub fn value(&self, property: &str) -> Result<&Value> {
        let index = self
            .meta
            .property_index(property)
            .ok_or_else(|| self.unknown_property(property))?;
        self.value_at(index)
    }

    /// Value of the property mapped to `column`.
    pub fn value_by_column(&self, column: &str) -> Result<&Value> {
        let index = self
            .meta
            .property_index_by_column(column)
            .ok_or_else(|| self.unknown_property(column))?;
        self.value_at(index)
    }

    fn value_at(&self, index: usize) -> Result<&Value> {
        if let Some(specified) = &self.specified {
            if !specified[index] {
                return Err(RowGraphError::NonSpecifiedColumnAccess {
                    entity: self.meta.entity_name().to_string(),
                    property: self.meta.properties()[index].property_name().to_string(),
                });
            }
        }
        Ok(&self.values[index])
    }

    /// Typed value of a column property. Use `Option<T>` for nullable columns.
    pub fn get<T: FromValue>(&self, property: &str) -> Result<T> {
        Ok(T::from_value(self.value(property)?)?)
    }

    /// The mapped slot of a relation property; `None` while unset.
    pub fn relation_slot(&self, property: &str) -> Result<Option<&RelationSlot>> {
        let index = self
            .meta
            .relation_index(property)
            .ok_or_else(|| self.unknown_property(property))?;
        Ok(self.relations[index].as_ref())
    }

    /// The related row, if one was mapped.
    pub fn related(&self, property: &str) -> Result<Option<&Arc<Entity>>> {
        Ok(self.relation_slot(property)?.and_then(RelationSlot::row))
    }

    /// The related row, failing with [`RowGraphError::RelationNotFound`] when
    /// the relation is empty or unset.
    pub fn required_related(&self, property: &str) -> Result<&Arc<Entity>> {
        self.related(property)?
            .ok_or_else(|| RowGraphError::RelationNotFound {
                entity: self.meta.entity_name().to_string(),
                relation: property.to_string(),
            })
    }

    // =========================================================================
    // Mapping state
    // =========================================================================

    pub fn modified_properties(&self) -> impl Iterator<Item = &str> {
        self.meta
            .properties()
            .iter()
            .zip(&self.modified)
            .filter(|(_, modified)| **modified)
            .map(|(p, _)| p.property_name())
    }

    /// Properties readable under the non-specified-column guard, or `None`
    /// when the guard is off.
    pub fn specified_properties(&self) -> Option<Vec<&str>> {
        self.specified.as_ref().map(|specified| {
            self.meta
                .properties()
                .iter()
                .zip(specified)
                .filter(|(_, s)| **s)
                .map(|(p, _)| p.property_name())
                .collect()
        })
    }

    pub fn is_non_specified_column_guarded(&self) -> bool {
        self.specified.is_some()
    }

    pub fn is_column_null_object_enabled(&self) -> bool {
        self.column_null_object
    }

    /// True once the row came out of a select (as opposed to being built by
    /// hand).
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Turns the modified set into the specified set, arming the guard.
    pub fn modified_to_specified(&mut self) {
        self.specified = Some(self.modified.clone());
    }

    /// Replaces NULL values with their column's null object. Substituted
    /// values are not recorded as modified.
    pub fn enable_column_null_object(&mut self) {
        self.column_null_object = true;
        let substitutes: Vec<(usize, Value)> = self
            .meta
            .properties()
            .iter()
            .enumerate()
            .filter(|(index, _)| self.values[*index].is_null())
            .filter_map(|(index, p)| p.null_object().map(|provide| (index, provide(self))))
            .collect();
        for (index, value) in substitutes {
            self.values[index] = value;
        }
    }

    pub fn clear_modified_info(&mut self) {
        self.modified.iter_mut().for_each(|m| *m = false);
    }

    pub fn mark_as_select(&mut self) {
        self.selected = true;
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.meta.entity_name());
        for (property, value) in self.meta.properties().iter().zip(&self.values) {
            s.field(property.property_name(), value);
        }
        for (relation, slot) in self.meta.relations().iter().zip(&self.relations) {
            if let Some(slot) = slot {
                s.field(relation.property_name(), slot);
            }
        }
        s.finish()
    }
}
