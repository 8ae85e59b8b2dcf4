use std::ops::ControlFlow;
use std::sync::Arc;

use super::{RelationCacheMode, ResultSetHandler, mapping_bean_rows};
use crate::config::MappingOptions;
use crate::context::SelectContext;
use crate::entity::Entity;
use crate::error::Result;
use crate::meta::BeanMetaData;
use crate::result_set::ResultSet;

/// Maps every row of the cursor into an entity list, in cursor order.
#[derive(Debug, Clone)]
pub struct BeanListResultSetHandler {
    meta: Arc<BeanMetaData>,
    select: SelectContext,
    options: MappingOptions,
}

impl BeanListResultSetHandler {
    pub fn new(meta: Arc<BeanMetaData>, select: SelectContext) -> Self {
        Self {
            meta,
            select,
            options: MappingOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MappingOptions) -> Self {
        self.options = options;
        self
    }

    pub fn meta(&self) -> &Arc<BeanMetaData> {
        &self.meta
    }

    pub fn select(&self) -> &SelectContext {
        &self.select
    }

    pub fn options(&self) -> &MappingOptions {
        &self.options
    }

    /// Maps rows one by one into `consumer`, stopping when it breaks. The
    /// relation-row cache lives for this call, so rows handed out share
    /// related instances. Returns the number of rows mapped.
    pub fn mapping_bean_rows<R, F>(&self, rs: &mut R, consumer: F) -> Result<usize>
    where
        R: ResultSet + ?Sized,
        F: FnMut(Entity) -> Result<ControlFlow<()>>,
    {
        crate::rowgraph_profile_scope!("rowgraph.handler", "bean_list");
        mapping_bean_rows(
            rs,
            &self.meta,
            &self.select,
            &self.options,
            RelationCacheMode::Sized,
            consumer,
        )
    }
}

impl ResultSetHandler for BeanListResultSetHandler {
    type Output = Vec<Entity>;

    fn handle<R: ResultSet + ?Sized>(&mut self, rs: &mut R) -> Result<Vec<Entity>> {
        let mut rows = Vec::new();
        self.mapping_bean_rows(rs, |row| {
            rows.push(row);
            Ok(ControlFlow::Continue(()))
        })?;
        crate::rowgraph_trace_rows!("bean_list", rows.len());
        Ok(rows)
    }
}
