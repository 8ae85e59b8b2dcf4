use std::sync::Arc;

use super::{BeanListResultSetHandler, ResultSetHandler};
use crate::config::MappingOptions;
use crate::context::SelectContext;
use crate::entity::Entity;
use crate::error::{Result, RowGraphError};
use crate::meta::BeanMetaData;
use crate::result_set::ResultSet;

/// Maps a result expected to hold at most one row.
///
/// The whole cursor is mapped; more than one row fails with
/// [`RowGraphError::EntityDuplicated`] carrying the search key.
#[derive(Debug, Clone)]
pub struct BeanOneResultSetHandler {
    list: BeanListResultSetHandler,
    search_key: String,
}

impl BeanOneResultSetHandler {
    pub fn new(
        meta: Arc<BeanMetaData>,
        select: SelectContext,
        search_key: impl Into<String>,
    ) -> Self {
        Self {
            list: BeanListResultSetHandler::new(meta, select),
            search_key: search_key.into(),
        }
    }

    pub fn with_options(mut self, options: MappingOptions) -> Self {
        self.list = self.list.with_options(options);
        self
    }

    pub fn search_key(&self) -> &str {
        &self.search_key
    }
}

impl ResultSetHandler for BeanOneResultSetHandler {
    type Output = Option<Entity>;

    fn handle<R: ResultSet + ?Sized>(&mut self, rs: &mut R) -> Result<Option<Entity>> {
        let mut rows = self.list.handle(rs)?;
        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            count => Err(RowGraphError::EntityDuplicated {
                search_key: self.search_key.clone(),
                count,
            }),
        }
    }
}
