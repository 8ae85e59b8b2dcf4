use hashbrown::HashSet;

use crate::context::ConditionBeanContext;
use crate::name::FlexibleName;
use crate::path::RelationPath;

/// Per-path answers the relation mapping needs from the select context.
///
/// Without a condition-bean every relation is non-selected and every
/// capability is off.
#[derive(Debug, Clone, Copy)]
pub enum RelationSelector<'a> {
    ConditionBean(&'a ConditionBeanContext),
    Plain,
}

impl<'a> RelationSelector<'a> {
    pub fn new(cb: Option<&'a ConditionBeanContext>) -> Self {
        cb.map_or(Self::Plain, Self::ConditionBean)
    }

    pub fn is_non_selected_relation(&self, path: &RelationPath) -> bool {
        match self {
            Self::ConditionBean(cb) => !cb.has_selected_relation(path),
            Self::Plain => true,
        }
    }

    pub fn is_non_selected_next_connecting_relation(&self, path: &RelationPath) -> bool {
        match self {
            Self::ConditionBean(cb) => !cb.is_selected_next_connecting_relation(path),
            Self::Plain => true,
        }
    }

    pub fn can_use_relation_cache(&self, path: &RelationPath) -> bool {
        match self {
            Self::ConditionBean(cb) => cb.can_use_relation_cache(path),
            Self::Plain => false,
        }
    }

    pub fn is_non_specified_column_access_allowed(&self, _path: &RelationPath) -> bool {
        match self {
            Self::ConditionBean(cb) => cb.is_non_specified_column_access_allowed(),
            Self::Plain => false,
        }
    }

    pub fn is_using_specify_column_in_relation(&self, path: &RelationPath) -> bool {
        match self {
            Self::ConditionBean(cb) => cb.has_specified_columns(path),
            Self::Plain => false,
        }
    }

    /// Columns selected at `path` only to feed null-object providers.
    pub fn relation_specified_null_object_columns(
        &self,
        path: &RelationPath,
    ) -> Option<&'a HashSet<FlexibleName>> {
        match *self {
            Self::ConditionBean(cb) => cb.relation_null_object_columns(path),
            Self::Plain => None,
        }
    }

    pub fn is_column_null_object_enabled(&self, _path: &RelationPath) -> bool {
        match self {
            Self::ConditionBean(cb) => cb.is_column_null_object_enabled(),
            Self::Plain => false,
        }
    }
}
