//! Base-row creation.

use std::sync::Arc;

use super::property::PropertyCache;
use crate::entity::Entity;
use crate::error::Result;
use crate::meta::BeanMetaData;
use crate::path::RelationPath;
use crate::result_set::{ResultColumnMap, ResultSet, SelectIndexMap};

/// Builds the property cache of the base row type. Properties whose column
/// is not selected are left out; an explicit index outside the result fails.
pub fn create_property_cache(
    select_columns: &ResultColumnMap,
    select_index: Option<&SelectIndexMap>,
    meta: &Arc<BeanMetaData>,
) -> Result<PropertyCache> {
    PropertyCache::build(meta, select_columns, select_index, &RelationPath::base())
}

/// Builds one base row from the current result-set row. Every cached
/// property is set, NULL included, so the modified set equals the selected
/// set.
pub fn create_row<R: ResultSet + ?Sized>(
    rs: &R,
    property_cache: &PropertyCache,
    meta: &Arc<BeanMetaData>,
) -> Result<Entity> {
    let mut row = Entity::new(Arc::clone(meta));
    for mapping in property_cache.iter() {
        row.set_value_at(mapping.property_index(), mapping.read(rs)?);
    }
    Ok(row)
}

/// Finishes a mapped row (base or relation).
///
/// In order: arm the non-specified-column guard, substitute column null
/// objects, clear the modified info and mark the row as selected.
pub fn adjust_created_row(row: &mut Entity, check_non_specified: bool, column_null_object: bool) {
    if check_non_specified {
        row.modified_to_specified();
    }
    if column_null_object {
        row.enable_column_null_object();
    }
    row.clear_modified_info();
    row.mark_as_select();
}
