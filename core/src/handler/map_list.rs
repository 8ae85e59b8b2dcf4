use std::sync::Arc;

use compact_str::CompactString;
use rowgraph_types::Value;

use super::ResultSetHandler;
use crate::error::Result;
use crate::name::FlexibleName;
use crate::result_set::{ResultColumnMap, ResultSet};

/// One row as ordered label/value pairs with flexible (case-insensitive)
/// lookup. When a label repeats, lookup returns the first occurrence.
#[derive(Debug, Clone)]
pub struct RowMap {
    labels: Arc<[CompactString]>,
    lookup: Arc<ResultColumnMap>,
    values: Vec<Value>,
}

impl RowMap {
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.lookup
            .get(&FlexibleName::new(label))
            .and_then(|column| self.values.get(column.index))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.lookup.contains(&FlexibleName::new(label))
    }

    /// Entries in column order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.labels.iter().map(CompactString::as_str).zip(&self.values)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Maps every row into a [`RowMap`] keyed by column label.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapListResultSetHandler;

impl MapListResultSetHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSetHandler for MapListResultSetHandler {
    type Output = Vec<RowMap>;

    fn handle<R: ResultSet + ?Sized>(&mut self, rs: &mut R) -> Result<Vec<RowMap>> {
        crate::rowgraph_profile_scope!("rowgraph.handler", "map_list");
        let mut rows = Vec::new();
        if !rs.next()? {
            return Ok(rows);
        }
        let labels: Arc<[CompactString]> = rs
            .column_labels()?
            .iter()
            .map(|label| CompactString::from(label.as_str()))
            .collect();
        let lookup = Arc::new(ResultColumnMap::from_labels(labels.iter()));
        loop {
            let values = (0..labels.len())
                .map(|index| rs.value(index))
                .collect::<Result<Vec<_>>>()?;
            rows.push(RowMap {
                labels: Arc::clone(&labels),
                lookup: Arc::clone(&lookup),
                values,
            });
            if !rs.next()? {
                break;
            }
        }
        crate::rowgraph_trace_rows!("map_list", rows.len());
        Ok(rows)
    }
}
