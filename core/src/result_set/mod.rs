//! Result-set cursor abstraction and per-execution column lookups.
//!
//! The engine only ever calls [`ResultSet::column_labels`] once (on the first
//! row), [`ResultSet::next`] in its own loop, and [`ResultSet::value`] for the
//! current row. Statement and connection lifecycle stay with the caller.

pub(crate) mod columns;
mod memory;
#[cfg(feature = "rusqlite")]
mod rusqlite;

pub use columns::{ResultColumn, ResultColumnMap, SelectIndexMap};
pub use memory::MemoryResultSet;
#[cfg(feature = "rusqlite")]
pub use rusqlite::SqliteResultSet;

use rowgraph_types::Value;

use crate::error::Result;

/// A forward-only cursor over the rows of an executed query.
pub trait ResultSet {
    /// Column labels (select aliases) in position order.
    fn column_labels(&self) -> Result<Vec<String>>;

    /// Advances to the next row. Returns `false` once the cursor is exhausted.
    fn next(&mut self) -> Result<bool>;

    /// Value at 0-based `index` of the current row.
    fn value(&self, index: usize) -> Result<Value>;
}

impl<R: ResultSet + ?Sized> ResultSet for &mut R {
    fn column_labels(&self) -> Result<Vec<String>> {
        (**self).column_labels()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }

    fn value(&self, index: usize) -> Result<Value> {
        (**self).value(index)
    }
}
