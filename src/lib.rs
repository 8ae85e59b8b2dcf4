//! # rowgraph
//!
//! Maps forward-only SQL result sets into entity graphs: base rows with their
//! selected related rows attached, one shared instance per relation key.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rowgraph::prelude::*;
//!
//! # fn main() -> rowgraph::Result<()> {
//! let rank = BeanMetaData::builder("ServiceRank", "SERVICE_RANK")
//!     .primary_key("serviceRankId", "SERVICE_RANK_ID", ValueType::Integer)
//!     .column("serviceRankName", "SERVICE_RANK_NAME", ValueType::Text)
//!     .build()?;
//! let member = BeanMetaData::builder("Member", "MEMBER")
//!     .primary_key("memberId", "MEMBER_ID", ValueType::Integer)
//!     .column("serviceRankId", "SERVICE_RANK_ID", ValueType::Integer)
//!     .relation("serviceRank", &rank, [("SERVICE_RANK_ID", "SERVICE_RANK_ID")])
//!     .build()?;
//!
//! // MEMBER joined to SERVICE_RANK, relation columns suffixed with `_0`
//! let mut rs = MemoryResultSet::new([
//!     "MEMBER_ID",
//!     "SERVICE_RANK_ID",
//!     "SERVICE_RANK_ID_0",
//!     "SERVICE_RANK_NAME_0",
//! ])
//! .with_row([Value::from(1), Value::from(10), Value::from(10), Value::from("GOLD")])
//! .with_row([Value::from(2), Value::from(10), Value::from(10), Value::from("GOLD")]);
//!
//! let cb = ConditionBeanContext::new().select_relation(RelationPath::base().child(0));
//! let members = BeanListResultSetHandler::new(member, SelectContext::condition_bean(cb))
//!     .handle(&mut rs)?;
//!
//! let first = members[0].required_related("serviceRank")?;
//! let second = members[1].required_related("serviceRank")?;
//! assert!(Arc::ptr_eq(first, second));
//! assert_eq!(first.get::<String>("serviceRankName")?, "GOLD");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! | Feature     | Enables                                         |
//! |-------------|-------------------------------------------------|
//! | `serde`     | `MappingOptions` loading from TOML              |
//! | `rusqlite`  | `SqliteResultSet` over `rusqlite::Rows`         |
//! | `tracing`   | debug/trace events from the handlers            |
//! | `profiling` | puffin scopes around handler work               |

pub use rowgraph_core::{
    config, context, entity, error, handler, mapping, meta, name, path, result_set,
};
pub use rowgraph_core::{
    BeanCursorResultSetHandler, BeanListResultSetHandler, BeanMetaData, BeanOneResultSetHandler,
    ConditionBeanContext, Entity, FlexibleName, MapListResultSetHandler, MappingOptions,
    MemoryResultSet, OutsideSqlContext, RelationPath, RelationSlot, RelationStyle, Result,
    ResultColumnMap, ResultSet, ResultSetHandler, RowGraphError, RowMap,
    ScalarListResultSetHandler, SelectContext, SelectIndexMap, SelectSource,
};
#[cfg(feature = "rusqlite")]
pub use rowgraph_core::SqliteResultSet;
pub use rowgraph_types as types;
pub use rowgraph_types::{ConversionError, FromValue, Value, ValueType};

pub mod prelude {
    pub use rowgraph_core::{
        BeanCursorResultSetHandler, BeanListResultSetHandler, BeanMetaData,
        BeanOneResultSetHandler, ConditionBeanContext, Entity, MapListResultSetHandler,
        MappingOptions, MemoryResultSet, OutsideSqlContext, RelationPath, RelationSlot,
        RelationStyle, ResultSet, ResultSetHandler, RowGraphError, ScalarListResultSetHandler,
        SelectContext, SelectIndexMap,
    };
    #[cfg(feature = "rusqlite")]
    pub use rowgraph_core::SqliteResultSet;
    pub use rowgraph_types::{FromValue, Value, ValueType};
}
