//! Per-property value converters.

use crate::{ConversionError, Value};

/// Converts a raw column value into the value stored on an entity property.
///
/// Drivers hand back whatever storage class the database used (SQLite keeps
/// booleans as INTEGER, dates as TEXT, ...). The property's `ValueType`
/// normalizes that into one representation. NULL always converts to NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    /// 64-bit integer
    Integer,
    /// 64-bit float
    Real,
    /// UTF-8 text
    Text,
    /// Binary data
    Bytes,
    /// Boolean (accepts INTEGER 0/1 and TEXT "true"/"false")
    Boolean,
    /// No conversion, the driver's value is kept as is
    #[default]
    Any,
}

impl ValueType {
    /// Name of the target type, used in conversion errors.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::Integer => "INTEGER",
            ValueType::Real => "REAL",
            ValueType::Text => "TEXT",
            ValueType::Bytes => "BYTES",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Any => "ANY",
        }
    }

    /// Convert a raw column value to this type.
    pub fn convert(&self, raw: Value) -> Result<Value, ConversionError> {
        if raw.is_null() {
            return Ok(Value::Null);
        }
        match self {
            ValueType::Any => Ok(raw),
            ValueType::Integer => to_integer(raw).map(Value::Integer),
            ValueType::Real => to_real(raw).map(Value::Real),
            ValueType::Text => to_text(raw).map(Value::Text),
            ValueType::Bytes => to_bytes(raw).map(Value::Bytes),
            ValueType::Boolean => to_boolean(raw).map(Value::Boolean),
        }
    }
}

fn incompatible(raw: &Value, to: &'static str) -> ConversionError {
    ConversionError::Incompatible {
        from: raw.kind(),
        to,
    }
}

fn to_integer(raw: Value) -> Result<i64, ConversionError> {
    match raw {
        Value::Integer(i) => Ok(i),
        Value::Boolean(b) => Ok(i64::from(b)),
        Value::Real(r) => {
            if r.is_finite() && r % 1.0 == 0.0 && r >= i64::MIN as f64 && r < i64::MAX as f64 {
                Ok(r as i64)
            } else {
                Err(ConversionError::OutOfRange {
                    value: r.to_string(),
                    to: "INTEGER",
                })
            }
        }
        Value::Text(s) => s.trim().parse().map_err(|_| ConversionError::Parse {
            value: s,
            to: "INTEGER",
        }),
        other => Err(incompatible(&other, "INTEGER")),
    }
}

fn to_real(raw: Value) -> Result<f64, ConversionError> {
    match raw {
        Value::Real(r) => Ok(r),
        Value::Integer(i) => Ok(i as f64),
        Value::Text(s) => s.trim().parse().map_err(|_| ConversionError::Parse {
            value: s,
            to: "REAL",
        }),
        other => Err(incompatible(&other, "REAL")),
    }
}

fn to_text(raw: Value) -> Result<String, ConversionError> {
    match raw {
        Value::Text(s) => Ok(s),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Real(r) => Ok(r.to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Bytes(b) => String::from_utf8(b).map_err(|_| ConversionError::Incompatible {
            from: "BYTES",
            to: "TEXT",
        }),
        Value::Null => Err(ConversionError::UnexpectedNull { to: "TEXT" }),
    }
}

fn to_bytes(raw: Value) -> Result<Vec<u8>, ConversionError> {
    match raw {
        Value::Bytes(b) => Ok(b),
        Value::Text(s) => Ok(s.into_bytes()),
        other => Err(incompatible(&other, "BYTES")),
    }
}

fn to_boolean(raw: Value) -> Result<bool, ConversionError> {
    match raw {
        Value::Boolean(b) => Ok(b),
        Value::Integer(0) => Ok(false),
        Value::Integer(1) => Ok(true),
        Value::Integer(i) => Err(ConversionError::OutOfRange {
            value: i.to_string(),
            to: "BOOLEAN",
        }),
        Value::Text(s) => {
            if s.eq_ignore_ascii_case("true") || s == "1" {
                Ok(true)
            } else if s.eq_ignore_ascii_case("false") || s == "0" {
                Ok(false)
            } else {
                Err(ConversionError::Parse {
                    value: s,
                    to: "BOOLEAN",
                })
            }
        }
        other => Err(incompatible(&other, "BOOLEAN")),
    }
}
