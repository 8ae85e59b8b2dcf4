//! Row and relation-row creation.
//!
//! The pipeline for one result-set row: [`row_creator`] builds the base row
//! from its [`PropertyCache`]; [`RelationRowCreator`] walks the declared
//! relations depth-first, looks each related row up in the
//! [`RelationRowCache`] by its [`RelationKey`], builds it on a miss and
//! attaches it. Both row kinds are finished by
//! [`row_creator::adjust_created_row`].

mod property;
mod relation_cache;
pub mod relation_creator;
mod relation_key;
pub mod row_creator;
mod selector;

pub use property::{PropertyCache, PropertyMapping};
pub use relation_cache::RelationRowCache;
pub use relation_creator::{RelationPropertyCache, RelationRowCreator};
pub use relation_key::{RelationKey, RelationKeyLookup};
pub use selector::RelationSelector;
