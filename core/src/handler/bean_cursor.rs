use core::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use super::{RelationCacheMode, ResultSetHandler, mapping_bean_rows};
use crate::config::MappingOptions;
use crate::context::SelectContext;
use crate::entity::Entity;
use crate::error::Result;
use crate::meta::BeanMetaData;
use crate::result_set::ResultSet;

/// Streams mapped rows into a callback without collecting them.
///
/// The relation-row cache is disabled, so memory stays flat no matter how
/// long the cursor is and no related instance is shared between rows. When
/// the callback returns [`ControlFlow::Break`] the cursor is not advanced any
/// further.
///
/// ```
/// # use std::ops::ControlFlow;
/// # use rowgraph_core::context::SelectContext;
/// # use rowgraph_core::handler::{BeanCursorResultSetHandler, ResultSetHandler};
/// # use rowgraph_core::meta::BeanMetaData;
/// # use rowgraph_core::result_set::MemoryResultSet;
/// # use rowgraph_types::ValueType;
/// let meta = BeanMetaData::builder("Member", "MEMBER")
///     .primary_key("memberId", "MEMBER_ID", ValueType::Integer)
///     .build()?;
/// let mut rs = MemoryResultSet::new(["MEMBER_ID"]);
/// for id in 1..=10 {
///     rs.push_row([id]);
/// }
///
/// let mut ids = Vec::new();
/// let mut handler = BeanCursorResultSetHandler::new(meta, SelectContext::plain(), |member| {
///     ids.push(member.get::<i64>("memberId")?);
///     Ok(if ids.len() == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) })
/// });
/// handler.handle(&mut rs)?;
/// drop(handler);
///
/// assert_eq!(ids, [1, 2, 3]);
/// assert_eq!(rs.fetched(), 3);
/// # Ok::<(), rowgraph_core::error::RowGraphError>(())
/// ```
pub struct BeanCursorResultSetHandler<F> {
    meta: Arc<BeanMetaData>,
    select: SelectContext,
    options: MappingOptions,
    callback: F,
}

impl<F> BeanCursorResultSetHandler<F>
where
    F: FnMut(Entity) -> Result<ControlFlow<()>>,
{
    pub fn new(meta: Arc<BeanMetaData>, select: SelectContext, callback: F) -> Self {
        Self {
            meta,
            select,
            options: MappingOptions::default(),
            callback,
        }
    }

    pub fn with_options(mut self, options: MappingOptions) -> Self {
        self.options = options;
        self
    }
}

impl<F> ResultSetHandler for BeanCursorResultSetHandler<F>
where
    F: FnMut(Entity) -> Result<ControlFlow<()>>,
{
    type Output = ();

    fn handle<R: ResultSet + ?Sized>(&mut self, rs: &mut R) -> Result<()> {
        crate::rowgraph_profile_scope!("rowgraph.handler", "bean_cursor");
        let rows = mapping_bean_rows(
            rs,
            &self.meta,
            &self.select,
            &self.options,
            RelationCacheMode::Disabled,
            &mut self.callback,
        )?;
        crate::rowgraph_trace_rows!("bean_cursor", rows);
        Ok(())
    }
}

impl<F> fmt::Debug for BeanCursorResultSetHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanCursorResultSetHandler")
            .field("entity", &self.meta.entity_name())
            .field("select", &self.select)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
