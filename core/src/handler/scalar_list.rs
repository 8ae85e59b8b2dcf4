use rowgraph_types::{Value, ValueType};

use super::ResultSetHandler;
use crate::error::Result;
use crate::result_set::ResultSet;

/// Reads the first column of every row through one converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarListResultSetHandler {
    value_type: ValueType,
}

impl ScalarListResultSetHandler {
    pub fn new(value_type: ValueType) -> Self {
        Self { value_type }
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

impl ResultSetHandler for ScalarListResultSetHandler {
    type Output = Vec<Value>;

    fn handle<R: ResultSet + ?Sized>(&mut self, rs: &mut R) -> Result<Vec<Value>> {
        crate::rowgraph_profile_scope!("rowgraph.handler", "scalar_list");
        let mut values = Vec::new();
        while rs.next()? {
            values.push(self.value_type.convert(rs.value(0)?)?);
        }
        crate::rowgraph_trace_rows!("scalar_list", values.len());
        Ok(values)
    }
}
