//! Result-set to entity-graph mapping.
//!
//! A [`handler::ResultSetHandler`] walks a forward-only
//! [`result_set::ResultSet`] and builds [`entity::Entity`] rows described by
//! [`meta::BeanMetaData`], attaching related rows selected by a
//! [`context::SelectContext`]. Related rows seen more than once in one
//! execution are shared.

pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod handler;
pub mod mapping;
pub mod meta;
pub mod name;
pub mod path;
pub mod profiling;
pub mod result_set;
pub mod tracing;

pub use config::{MappingOptions, RelationStyle};
pub use context::{ConditionBeanContext, OutsideSqlContext, SelectContext, SelectSource};
pub use entity::{Entity, RelationSlot};
pub use error::{Result, RowGraphError};
pub use handler::{
    BeanCursorResultSetHandler, BeanListResultSetHandler, BeanOneResultSetHandler,
    MapListResultSetHandler, ResultSetHandler, RowMap, ScalarListResultSetHandler,
};
pub use meta::{BeanMetaData, PropertyType, RelationPropertyType};
pub use name::FlexibleName;
pub use path::RelationPath;
pub use result_set::{MemoryResultSet, ResultColumnMap, ResultSet, SelectIndexMap};
#[cfg(feature = "rusqlite")]
pub use result_set::SqliteResultSet;
