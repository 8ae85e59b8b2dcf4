//! Value types shared by the rowgraph crates.
//!
//! - [`Value`] - a single column value as read from a result set
//! - [`ValueType`] - per-property converter from a raw column value to the
//!   value stored on an entity
//! - [`FromValue`] - typed extraction of Rust values from a [`Value`]

mod error;
mod from_value;
mod value;
mod value_type;

pub use error::ConversionError;
pub use from_value::FromValue;
pub use value::Value;
pub use value_type::ValueType;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{ConversionError, FromValue, Value, ValueType};
}
