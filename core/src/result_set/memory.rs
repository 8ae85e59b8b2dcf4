use core::cell::Cell;

use rowgraph_types::Value;

use super::ResultSet;
use crate::error::{Result, RowGraphError};

/// An in-memory result set.
///
/// Useful for tests and for re-mapping rows that were already fetched. Tracks
/// how many rows were advanced onto and how many values were read, so callers
/// can observe when a handler stopped early.
#[derive(Debug, Clone, Default)]
pub struct MemoryResultSet {
    labels: Vec<String>,
    rows: Vec<Vec<Value>>,
    position: usize,
    reads: Cell<usize>,
}

impl MemoryResultSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Appends a row.
    pub fn push_row<I, V>(&mut self, row: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn with_row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_row(row);
        self
    }

    /// Number of rows the cursor has advanced onto.
    pub fn fetched(&self) -> usize {
        self.position
    }

    /// Number of `value` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ResultSet for MemoryResultSet {
    fn column_labels(&self) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }

    fn next(&mut self) -> Result<bool> {
        if self.position < self.rows.len() {
            self.position += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn value(&self, index: usize) -> Result<Value> {
        let row = self
            .position
            .checked_sub(1)
            .and_then(|current| self.rows.get(current))
            .ok_or_else(|| RowGraphError::ResultSet("cursor is not on a row".into()))?;
        self.reads.set(self.reads.get() + 1);
        row.get(index).cloned().ok_or_else(|| {
            RowGraphError::UnknownColumn(format!("index {index} of {} columns", row.len()))
        })
    }
}
