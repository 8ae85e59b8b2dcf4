//! [`ResultSet`] over [`rusqlite::Rows`].

use rowgraph_types::Value;

use super::ResultSet;
use crate::error::{Result, RowGraphError};

/// Adapts a rusqlite cursor.
///
/// `rusqlite::Rows` hands out rows that borrow the cursor, so the current
/// row's values are copied into an owned buffer on each `next`.
pub struct SqliteResultSet<'stmt> {
    rows: rusqlite::Rows<'stmt>,
    labels: Vec<String>,
    current: Vec<Value>,
    on_row: bool,
}

impl<'stmt> SqliteResultSet<'stmt> {
    pub fn new(rows: rusqlite::Rows<'stmt>) -> Self {
        let labels = rows
            .as_ref()
            .map(|stmt| stmt.column_names().into_iter().map(String::from).collect())
            .unwrap_or_default();
        Self {
            rows,
            labels,
            current: Vec::new(),
            on_row: false,
        }
    }
}

fn value_from_ref(value: rusqlite::types::ValueRef<'_>) -> Result<Value> {
    use rusqlite::types::ValueRef;

    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(text) => Value::Text(
            core::str::from_utf8(text)
                .map_err(|e| RowGraphError::ResultSet(format!("invalid UTF-8: {e}")))?
                .to_string(),
        ),
        ValueRef::Blob(blob) => Value::Bytes(blob.to_vec()),
    })
}

impl ResultSet for SqliteResultSet<'_> {
    fn column_labels(&self) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }

    fn next(&mut self) -> Result<bool> {
        self.current.clear();
        match self.rows.next()? {
            Some(row) => {
                for index in 0..self.labels.len() {
                    self.current.push(value_from_ref(row.get_ref(index)?)?);
                }
                self.on_row = true;
                Ok(true)
            }
            None => {
                self.on_row = false;
                Ok(false)
            }
        }
    }

    fn value(&self, index: usize) -> Result<Value> {
        if !self.on_row {
            return Err(RowGraphError::ResultSet("cursor is not on a row".into()));
        }
        self.current.get(index).cloned().ok_or_else(|| {
            RowGraphError::UnknownColumn(format!(
                "index {index} of {} columns",
                self.current.len()
            ))
        })
    }
}
