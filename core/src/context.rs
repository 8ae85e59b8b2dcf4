//! The select context a handler maps under.
//!
//! The context is passed to the handler explicitly. It carries what the
//! condition-bean (or outside-SQL) layer decided for this select: which
//! relations were set up, which columns were specified, whether relation rows
//! may be cached and whether column null objects are on.

use hashbrown::{HashMap, HashSet};

use crate::name::FlexibleName;
use crate::path::RelationPath;
use crate::result_set::SelectIndexMap;

/// Relation and column selection recorded by a condition-bean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionBeanContext {
    pub(crate) selected_relations: HashSet<RelationPath>,
    pub(crate) specified_columns: HashMap<RelationPath, HashSet<FlexibleName>>,
    pub(crate) relation_mapping_cache: bool,
    pub(crate) cache_excluded_relations: HashSet<RelationPath>,
    pub(crate) non_specified_column_access_allowed: bool,
    pub(crate) column_null_object: bool,
    pub(crate) null_object_columns: HashMap<RelationPath, HashSet<FlexibleName>>,
}

impl ConditionBeanContext {
    /// A context with no relations selected and relation caching allowed.
    pub fn new() -> Self {
        Self {
            relation_mapping_cache: true,
            ..Self::default()
        }
    }

    /// Sets up a relation for loading (`setupSelect`).
    pub fn select_relation(mut self, path: RelationPath) -> Self {
        self.selected_relations.insert(path);
        self
    }

    /// Records the columns specified for the entity at `path` (base point is
    /// the empty path).
    pub fn specify_columns<I, S>(mut self, path: RelationPath, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.specified_columns
            .entry(path)
            .or_default()
            .extend(columns.into_iter().map(|c| FlexibleName::new(c.as_ref())));
        self
    }

    pub fn relation_mapping_cache(mut self, enabled: bool) -> Self {
        self.relation_mapping_cache = enabled;
        self
    }

    /// Disables relation-row caching for one relation level.
    pub fn exclude_relation_cache(mut self, path: RelationPath) -> Self {
        self.cache_excluded_relations.insert(path);
        self
    }

    pub fn allow_non_specified_column_access(mut self, allowed: bool) -> Self {
        self.non_specified_column_access_allowed = allowed;
        self
    }

    pub fn enable_column_null_object(mut self, enabled: bool) -> Self {
        self.column_null_object = enabled;
        self
    }

    /// Records columns selected for the entity at `path` only so that its
    /// null-object providers can work. They do not count as evidence that the
    /// related row exists.
    pub fn null_object_columns<I, S>(mut self, path: RelationPath, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.null_object_columns
            .entry(path)
            .or_default()
            .extend(columns.into_iter().map(|c| FlexibleName::new(c.as_ref())));
        self
    }

    pub fn has_selected_relation(&self, path: &RelationPath) -> bool {
        self.selected_relations.contains(path)
    }

    pub fn is_selected_relation_empty(&self) -> bool {
        self.selected_relations.is_empty()
    }

    pub fn selected_relation_count(&self) -> usize {
        self.selected_relations.len()
    }

    /// True when some selected relation lies below `path`.
    pub fn is_selected_next_connecting_relation(&self, path: &RelationPath) -> bool {
        self.selected_relations.iter().any(|s| s.is_below(path))
    }

    pub fn can_relation_mapping_cache(&self) -> bool {
        self.relation_mapping_cache
    }

    pub fn can_use_relation_cache(&self, path: &RelationPath) -> bool {
        self.relation_mapping_cache && !self.cache_excluded_relations.contains(path)
    }

    pub fn has_specified_columns(&self, path: &RelationPath) -> bool {
        self.specified_columns
            .get(path)
            .is_some_and(|columns| !columns.is_empty())
    }

    pub fn specified_columns(&self, path: &RelationPath) -> Option<&HashSet<FlexibleName>> {
        self.specified_columns.get(path)
    }

    pub fn is_non_specified_column_access_allowed(&self) -> bool {
        self.non_specified_column_access_allowed
    }

    pub fn is_column_null_object_enabled(&self) -> bool {
        self.column_null_object
    }

    pub fn relation_null_object_columns(
        &self,
        path: &RelationPath,
    ) -> Option<&HashSet<FlexibleName>> {
        self.null_object_columns.get(path)
    }
}

/// Context of a plain (outside) SQL select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutsideSqlContext {
    /// The result type is a table entity, so the result is flat and only the
    /// columns actually selected count as specified.
    pub specified_outside_sql: bool,
    pub non_specified_column_access_allowed: bool,
}

/// Where the rows of this select come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectSource {
    ConditionBean(ConditionBeanContext),
    OutsideSql(OutsideSqlContext),
    /// No select context at all.
    #[default]
    Plain,
}

/// Everything a handler needs to know about the select besides the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectContext {
    pub source: SelectSource,
    pub select_index: Option<SelectIndexMap>,
}

impl SelectContext {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn condition_bean(cb: ConditionBeanContext) -> Self {
        Self {
            source: SelectSource::ConditionBean(cb),
            select_index: None,
        }
    }

    pub fn outside_sql(ctx: OutsideSqlContext) -> Self {
        Self {
            source: SelectSource::OutsideSql(ctx),
            select_index: None,
        }
    }

    pub fn with_select_index(mut self, select_index: SelectIndexMap) -> Self {
        self.select_index = Some(select_index);
        self
    }

    pub fn condition_bean_context(&self) -> Option<&ConditionBeanContext> {
        match &self.source {
            SelectSource::ConditionBean(cb) => Some(cb),
            _ => None,
        }
    }

    pub fn outside_sql_context(&self) -> Option<&OutsideSqlContext> {
        match &self.source {
            SelectSource::OutsideSql(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Relation mapping is skipped entirely without a condition-bean, when
    /// the condition-bean selected nothing, or for a flat outside-SQL result.
    pub fn is_skip_relation_loop(&self) -> bool {
        match &self.source {
            SelectSource::ConditionBean(cb) => cb.is_selected_relation_empty(),
            SelectSource::OutsideSql(_) | SelectSource::Plain => true,
        }
    }

    /// Whether base rows get the non-specified-column guard.
    pub fn is_check_non_specified_column(&self) -> bool {
        match &self.source {
            SelectSource::ConditionBean(cb) => {
                !cb.is_non_specified_column_access_allowed()
                    && cb.has_specified_columns(&RelationPath::base())
            }
            SelectSource::OutsideSql(ctx) => {
                !ctx.non_specified_column_access_allowed && ctx.specified_outside_sql
            }
            SelectSource::Plain => false,
        }
    }

    /// Whether base rows get column null objects.
    pub fn is_column_null_object_enabled(&self) -> bool {
        self.condition_bean_context()
            .is_some_and(ConditionBeanContext::is_column_null_object_enabled)
    }
}
