use rowgraph_types::ConversionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowGraphError {
    /// Bean metadata is structurally inconsistent
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// A column position or label the result set does not have
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A property name the entity type does not declare
    #[error("Unknown property '{property}' on {entity}")]
    UnknownProperty { entity: String, property: String },

    /// More than one row where at most one was expected
    #[error("Entity duplicated: {count} rows found for search key {search_key}")]
    EntityDuplicated { search_key: String, count: usize },

    /// Read of a property the select did not specify
    #[error(
        "Non-specified column access: {entity}.{property} \
         was not included in the select's specified columns"
    )]
    NonSpecifiedColumnAccess { entity: String, property: String },

    /// Read of an optional relation that has no row
    #[error("Relation entity not found: {entity}.{relation} has no related row")]
    RelationNotFound { entity: String, relation: String },

    /// Error converting a column value
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error reported by a result set implementation
    #[error("Result set error: {0}")]
    ResultSet(String),

    /// Error loading mapping options
    #[error("Config error: {0}")]
    Config(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, RowGraphError>;
