//! Tracing utilities for result-set mapping observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event when a mapping context is opened on the first row.
///
/// ```ignore
/// rowgraph_trace_open!(meta.entity_name(), columns.len(), relation_paths);
/// ```
#[macro_export]
macro_rules! rowgraph_trace_open {
    ($entity:expr, $columns:expr, $relations:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            entity = %$entity,
            columns = $columns,
            relations = $relations,
            "rowgraph.open"
        );
    };
}

/// Emit a debug-level event when a handler finishes walking its cursor.
///
/// ```ignore
/// rowgraph_trace_rows!("bean_list", rows.len());
/// ```
#[macro_export]
macro_rules! rowgraph_trace_rows {
    ($handler:literal, $rows:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(handler = $handler, rows = $rows, "rowgraph.handled");
        #[cfg(not(feature = "tracing"))]
        let _ = $rows;
    };
}

/// Emit a trace-level event for a relation-row cache lookup.
#[macro_export]
macro_rules! rowgraph_trace_cache {
    ($path:expr, $hit:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(path = %$path, hit = $hit, "rowgraph.relation_cache");
    };
}
