//! Result-set handlers.
//!
//! A handler walks a cursor and turns it into some output. The bean handlers
//! share one engine: on the first row a [`MappingContext`] is opened (column
//! map, property caches, relation selector), then every row goes through
//! [`MappingContext::process_row`]. Nothing is prepared for an empty result.

mod bean_cursor;
mod bean_list;
mod bean_one;
mod map_list;
mod scalar_list;

pub use bean_cursor::BeanCursorResultSetHandler;
pub use bean_list::BeanListResultSetHandler;
pub use bean_one::BeanOneResultSetHandler;
pub use map_list::{MapListResultSetHandler, RowMap};
pub use scalar_list::ScalarListResultSetHandler;

use std::ops::ControlFlow;
use std::sync::Arc;

use crate::config::{MappingOptions, RelationStyle};
use crate::context::SelectContext;
use crate::entity::Entity;
use crate::error::Result;
use crate::mapping::{
    PropertyCache, RelationPropertyCache, RelationRowCache, RelationRowCreator, RelationSelector,
    relation_creator, row_creator,
};
use crate::meta::BeanMetaData;
use crate::path::RelationPath;
use crate::result_set::{ResultColumnMap, ResultSet, SelectIndexMap};

/// Turns a result-set cursor into an output value.
///
/// The caller owns statement and connection lifecycle; the handler only
/// advances the cursor and reads the current row.
pub trait ResultSetHandler {
    type Output;

    fn handle<R: ResultSet + ?Sized>(&mut self, rs: &mut R) -> Result<Self::Output>;
}

/// Whether related rows may be retained across rows of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationCacheMode {
    Sized,
    Disabled,
}

/// Everything resolved on the first row of a bean execution. Immutable for
/// the rest of the cursor.
#[derive(Debug)]
pub(crate) struct MappingContext<'a> {
    meta: &'a Arc<BeanMetaData>,
    select_columns: ResultColumnMap,
    select_index: Option<&'a SelectIndexMap>,
    property_cache: PropertyCache,
    relations: Option<(RelationSelector<'a>, RelationPropertyCache)>,
    check_non_specified: bool,
    column_null_object: bool,
    default_style: RelationStyle,
}

impl<'a> MappingContext<'a> {
    /// Opens the context on the current (first) row and creates the relation
    /// row cache for this execution.
    pub(crate) fn open<R: ResultSet + ?Sized>(
        rs: &R,
        meta: &'a Arc<BeanMetaData>,
        select: &'a SelectContext,
        options: &MappingOptions,
        cache_mode: RelationCacheMode,
    ) -> Result<(Self, RelationRowCache)> {
        crate::rowgraph_profile_scope!("rowgraph.handler", "open");
        let select_columns = ResultColumnMap::read(rs)?;
        let select_index = select.select_index.as_ref();
        let property_cache =
            row_creator::create_property_cache(&select_columns, select_index, meta)?;

        let (relations, cache) = if select.is_skip_relation_loop() {
            (None, RelationRowCache::disabled())
        } else {
            let selector = RelationSelector::new(select.condition_bean_context());
            let relation_property_cache = relation_creator::create_property_cache(
                &select_columns,
                select_index,
                &selector,
                meta,
            )?;
            let cache = match (cache_mode, select.condition_bean_context()) {
                (RelationCacheMode::Disabled, _) => RelationRowCache::disabled(),
                (RelationCacheMode::Sized, Some(cb)) => RelationRowCache::new(
                    cb.selected_relation_count(),
                    options.relation_cache && cb.can_relation_mapping_cache(),
                ),
                (RelationCacheMode::Sized, None) => {
                    RelationRowCache::new(options.relation_cache_size_hint, false)
                }
            };
            (Some((selector, relation_property_cache)), cache)
        };

        crate::rowgraph_trace_open!(
            meta.entity_name(),
            select_columns.len(),
            relations.as_ref().map_or(0, |(_, cache)| cache.len())
        );

        Ok((
            Self {
                meta,
                select_columns,
                select_index,
                property_cache,
                relations,
                check_non_specified: select.is_check_non_specified_column(),
                column_null_object: select.is_column_null_object_enabled(),
                default_style: options.relation_style,
            },
            cache,
        ))
    }

    /// Maps the current row: base row, relations (unless skipped), then the
    /// base-row adjustment.
    pub(crate) fn process_row<R: ResultSet + ?Sized>(
        &self,
        rs: &R,
        cache: &mut RelationRowCache,
    ) -> Result<Entity> {
        let mut row = row_creator::create_row(rs, &self.property_cache, self.meta)?;
        if let Some((selector, relation_property_cache)) = &self.relations {
            RelationRowCreator::new(
                &self.select_columns,
                self.select_index,
                *selector,
                relation_property_cache,
                self.default_style,
            )
            .setup_relation_rows(rs, &mut row, &RelationPath::base(), cache)?;
        }
        row_creator::adjust_created_row(
            &mut row,
            self.check_non_specified,
            self.column_null_object,
        );
        Ok(row)
    }
}

/// Walks the cursor and hands each mapped base row to `consumer` until the
/// cursor is exhausted or the consumer breaks. Returns the number of rows
/// mapped.
pub(crate) fn mapping_bean_rows<R, F>(
    rs: &mut R,
    meta: &Arc<BeanMetaData>,
    select: &SelectContext,
    options: &MappingOptions,
    cache_mode: RelationCacheMode,
    mut consumer: F,
) -> Result<usize>
where
    R: ResultSet + ?Sized,
    F: FnMut(Entity) -> Result<ControlFlow<()>>,
{
    if !rs.next()? {
        return Ok(0);
    }
    let (context, mut cache) = MappingContext::open(&*rs, meta, select, options, cache_mode)?;
    let mut count = 0;
    loop {
        let row = context.process_row(&*rs, &mut cache)?;
        count += 1;
        if consumer(row)?.is_break() || !rs.next()? {
            break;
        }
    }
    Ok(count)
}
