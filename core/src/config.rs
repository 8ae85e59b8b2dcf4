//! Mapping options.
//!
//! Options are plain values with defaults; with the `serde` feature they can be
//! loaded from TOML:
//!
//! ```toml
//! relation_cache_size_hint = 8
//! relation_style = "optional"
//! relation_cache = true
//! ```

#[cfg(feature = "serde")]
use crate::error::{Result, RowGraphError};

/// How an absent related row is represented on its base row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RelationStyle {
    /// Absent relation leaves the property unset.
    #[default]
    Plain,
    /// Absent relation is assigned an explicit empty slot, present relation
    /// is wrapped; reading an empty slot fails with `RelationNotFound`.
    Optional,
}

/// Per-execution mapping options shared by the bean handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MappingOptions {
    /// Relation-row cache sizing hint used when the select has no
    /// condition-bean to count selected relations from.
    pub relation_cache_size_hint: usize,
    /// Style applied to relation properties that don't declare their own.
    pub relation_style: RelationStyle,
    /// Global switch for relation-row caching. ANDed with the select
    /// context's own permission.
    pub relation_cache: bool,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            relation_cache_size_hint: 4,
            relation_style: RelationStyle::Plain,
            relation_cache: true,
        }
    }
}

impl MappingOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relation_cache_size_hint(mut self, hint: usize) -> Self {
        self.relation_cache_size_hint = hint;
        self
    }

    pub fn with_relation_style(mut self, style: RelationStyle) -> Self {
        self.relation_style = style;
        self
    }

    pub fn with_relation_cache(mut self, enabled: bool) -> Self {
        self.relation_cache = enabled;
        self
    }

    /// Parses options from a TOML document. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| RowGraphError::Config(e.to_string()))
    }

    /// Reads and parses a TOML options file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| RowGraphError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }
}
