//! Relation-row creation.
//!
//! One recursive walk serves every depth: [`RelationRowCreator::setup_relation_rows`]
//! maps the relations of a row at some path, and a related row built on the
//! way maps its own relations through the same function before it is
//! adjusted.

use std::sync::Arc;

use hashbrown::HashMap;

use super::property::PropertyCache;
use super::relation_cache::RelationRowCache;
use super::relation_key::RelationKeyLookup;
use super::row_creator::adjust_created_row;
use super::selector::RelationSelector;
use crate::config::RelationStyle;
use crate::entity::{Entity, RelationSlot};
use crate::error::{Result, RowGraphError};
use crate::meta::{BeanMetaData, RelationPropertyType};
use crate::path::RelationPath;
use crate::result_set::{ResultColumnMap, ResultSet, SelectIndexMap};

/// Property caches of every selected relation level, keyed by relation path.
/// Levels with no selected column have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationPropertyCache {
    caches: HashMap<RelationPath, PropertyCache>,
}

impl RelationPropertyCache {
    pub fn get(&self, path: &RelationPath) -> Option<&PropertyCache> {
        self.caches.get(path)
    }

    pub fn contains(&self, path: &RelationPath) -> bool {
        self.caches.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelationPath> {
        self.caches.keys()
    }

    pub fn len(&self) -> usize {
        self.caches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }
}

/// Builds the property caches of all selected relation levels below the base
/// point, following nested relations only where the selector says a deeper
/// relation is selected.
pub fn create_property_cache(
    select_columns: &ResultColumnMap,
    select_index: Option<&SelectIndexMap>,
    selector: &RelationSelector<'_>,
    meta: &Arc<BeanMetaData>,
) -> Result<RelationPropertyCache> {
    let mut cache = RelationPropertyCache::default();
    setup_next_property_cache(
        &mut cache,
        select_columns,
        select_index,
        selector,
        meta,
        &RelationPath::base(),
    )?;
    Ok(cache)
}

fn setup_next_property_cache(
    cache: &mut RelationPropertyCache,
    select_columns: &ResultColumnMap,
    select_index: Option<&SelectIndexMap>,
    selector: &RelationSelector<'_>,
    meta: &Arc<BeanMetaData>,
    parent: &RelationPath,
) -> Result<()> {
    for relation in meta.relations() {
        let path = parent.child(relation.relation_no());
        if selector.is_non_selected_relation(&path) {
            continue;
        }
        validate_relation_keys(meta, relation)?;
        let your_meta = relation.your_meta();
        let property_cache = PropertyCache::build(your_meta, select_columns, select_index, &path)?;
        if !property_cache.is_empty() {
            cache.caches.insert(path.clone(), property_cache);
        }
        if !selector.is_non_selected_next_connecting_relation(&path) {
            setup_next_property_cache(
                cache,
                select_columns,
                select_index,
                selector,
                your_meta,
                &path,
            )?;
        }
    }
    Ok(())
}

fn validate_relation_keys(meta: &BeanMetaData, relation: &RelationPropertyType) -> Result<()> {
    let your_meta = relation.your_meta();
    if relation.key_size() == 0 {
        return Err(RowGraphError::Metadata(format!(
            "relation {}.{} declares no key columns",
            meta.entity_name(),
            relation.property_name()
        )));
    }
    for (mine, yours) in relation.key_columns() {
        if meta.property_by_column(mine).is_none() {
            return Err(RowGraphError::Metadata(format!(
                "relation {}.{}: key column {mine} is not a column of {}",
                meta.entity_name(),
                relation.property_name(),
                meta.entity_name()
            )));
        }
        if your_meta.property_by_column(yours).is_none() {
            return Err(RowGraphError::Metadata(format!(
                "relation {}.{}: key column {yours} is not a column of {}",
                meta.entity_name(),
                relation.property_name(),
                your_meta.entity_name()
            )));
        }
    }
    Ok(())
}

/// Maps relation rows for one execution. Holds only borrowed, immutable
/// state; the mutable relation-row cache is passed per call.
#[derive(Debug, Clone, Copy)]
pub struct RelationRowCreator<'a> {
    select_columns: &'a ResultColumnMap,
    select_index: Option<&'a SelectIndexMap>,
    selector: RelationSelector<'a>,
    property_cache: &'a RelationPropertyCache,
    default_style: RelationStyle,
}

impl<'a> RelationRowCreator<'a> {
    pub fn new(
        select_columns: &'a ResultColumnMap,
        select_index: Option<&'a SelectIndexMap>,
        selector: RelationSelector<'a>,
        property_cache: &'a RelationPropertyCache,
        default_style: RelationStyle,
    ) -> Self {
        Self {
            select_columns,
            select_index,
            selector,
            property_cache,
            default_style,
        }
    }

    /// Maps every selected relation of `row`, which sits at `parent`.
    pub fn setup_relation_rows<R: ResultSet + ?Sized>(
        &self,
        rs: &R,
        row: &mut Entity,
        parent: &RelationPath,
        cache: &mut RelationRowCache,
    ) -> Result<()> {
        let meta = Arc::clone(row.meta());
        for relation in meta.relations() {
            let path = parent.child(relation.relation_no());
            if self.selector.is_non_selected_relation(&path) {
                continue;
            }
            let lookup = cache.create_relation_key(
                rs,
                relation,
                self.select_columns,
                self.select_index,
                &path,
            )?;
            let relation_row = match lookup {
                RelationKeyLookup::Absent => None,
                RelationKeyLookup::Key(key) => {
                    let cacheable = self.selector.can_use_relation_cache(&path);
                    let cached = if cacheable {
                        cache.get_relation_row(&path, &key)
                    } else {
                        None
                    };
                    crate::rowgraph_trace_cache!(path, cached.is_some());
                    match cached {
                        Some(cached) => Some(cached),
                        None => {
                            let created = self.create_relation_row(rs, relation, &path, cache)?;
                            if let (true, Some(created)) = (cacheable, &created) {
                                cache.add_relation_row(path.clone(), key, Arc::clone(created));
                            }
                            created
                        }
                    }
                }
            };
            if let Some(slot) = self.filter_optional_relation_row(relation, relation_row) {
                row.set_relation_at(relation.relation_no(), slot);
            }
        }
        Ok(())
    }

    /// Builds the related row of `relation` at `path` from the current
    /// result-set row, including its own nested relations.
    ///
    /// Returns `None` when the level has no selected column or when every
    /// selected value is NULL. Columns selected only for null objects do not
    /// count as values here.
    pub fn create_relation_row<R: ResultSet + ?Sized>(
        &self,
        rs: &R,
        relation: &RelationPropertyType,
        path: &RelationPath,
        cache: &mut RelationRowCache,
    ) -> Result<Option<Arc<Entity>>> {
        let Some(property_cache) = self.property_cache.get(path) else {
            return Ok(None);
        };
        let null_object_columns = self.selector.relation_specified_null_object_columns(path);

        let mut row = Entity::new(Arc::clone(relation.your_meta()));
        let mut valid = false;
        for mapping in property_cache.iter() {
            let value = mapping.read(rs)?;
            let null_object_column =
                null_object_columns.is_some_and(|columns| columns.contains(mapping.column_key()));
            if !value.is_null() && !null_object_column {
                valid = true;
            }
            row.set_value_at(mapping.property_index(), value);
        }
        if !valid {
            return Ok(None);
        }

        if !self.selector.is_non_selected_next_connecting_relation(path) {
            self.setup_relation_rows(rs, &mut row, path, cache)?;
        }

        let check_non_specified = self.selector.is_using_specify_column_in_relation(path)
            && !self.selector.is_non_specified_column_access_allowed(path);
        adjust_created_row(
            &mut row,
            check_non_specified,
            self.selector.is_column_null_object_enabled(path),
        );
        Ok(Some(Arc::new(row)))
    }

    /// Decides what the relation property receives. A present row is
    /// always assigned; an absent one leaves the property unset under the
    /// plain style and assigns [`RelationSlot::Empty`] under the optional
    /// style.
    pub fn filter_optional_relation_row(
        &self,
        relation: &RelationPropertyType,
        row: Option<Arc<Entity>>,
    ) -> Option<RelationSlot> {
        match (row, relation.style().unwrap_or(self.default_style)) {
            (Some(row), _) => Some(RelationSlot::Loaded(row)),
            (None, RelationStyle::Optional) => Some(RelationSlot::Empty),
            (None, RelationStyle::Plain) => None,
        }
    }
}
