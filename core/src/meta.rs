//! Bean metadata: the shape of a row type.
//!
//! A [`BeanMetaData`] describes one entity type: its column properties (with
//! their value converters) and its relation properties, in declaration order.
//! Relation numbers are the declaration index and make up the relation-path
//! suffixes (`_0`, `_1_3`) used throughout the mapping layer.

use core::fmt;
use std::sync::Arc;

use compact_str::CompactString;
use hashbrown::HashMap;
use rowgraph_types::{Value, ValueType};

use crate::config::RelationStyle;
use crate::entity::Entity;
use crate::error::{Result, RowGraphError};
use crate::name::FlexibleName;

/// Supplies the sentinel value used in place of SQL NULL for a column when
/// column null objects are enabled. Receives the row being adjusted.
pub type NullObjectProvider = Arc<dyn Fn(&Entity) -> Value + Send + Sync>;

/// A column property of an entity type.
#[derive(Clone)]
pub struct PropertyType {
    pub(crate) property_name: CompactString,
    pub(crate) column_name: CompactString,
    pub(crate) value_type: ValueType,
    pub(crate) primary_key: bool,
    pub(crate) null_object: Option<NullObjectProvider>,
}

impl PropertyType {
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn null_object(&self) -> Option<&NullObjectProvider> {
        self.null_object.as_ref()
    }
}

impl fmt::Debug for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyType")
            .field("property_name", &self.property_name)
            .field("column_name", &self.column_name)
            .field("value_type", &self.value_type)
            .field("primary_key", &self.primary_key)
            .field("null_object", &self.null_object.is_some())
            .finish()
    }
}

/// A relation property: a reference from this type to a row of another type.
#[derive(Debug, Clone)]
pub struct RelationPropertyType {
    pub(crate) property_name: CompactString,
    pub(crate) relation_no: usize,
    pub(crate) your_meta: Arc<BeanMetaData>,
    pub(crate) key_columns: Vec<(CompactString, CompactString)>,
    pub(crate) style: Option<RelationStyle>,
}

impl RelationPropertyType {
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Declaration index on the owning type.
    pub fn relation_no(&self) -> usize {
        self.relation_no
    }

    /// Metadata of the related type.
    pub fn your_meta(&self) -> &Arc<BeanMetaData> {
        &self.your_meta
    }

    /// Join key pairs as `(my_column, your_column)`.
    pub fn key_columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.key_columns
            .iter()
            .map(|(mine, yours)| (mine.as_str(), yours.as_str()))
    }

    pub fn key_size(&self) -> usize {
        self.key_columns.len()
    }

    /// Style declared on this property, if any.
    pub fn style(&self) -> Option<RelationStyle> {
        self.style
    }
}

/// Metadata of one entity type.
#[derive(Debug)]
pub struct BeanMetaData {
    entity_name: CompactString,
    table_name: CompactString,
    properties: Vec<PropertyType>,
    relations: Vec<RelationPropertyType>,
    by_property: HashMap<CompactString, usize>,
    by_column: HashMap<FlexibleName, usize>,
    by_relation: HashMap<CompactString, usize>,
}

impl BeanMetaData {
    pub fn builder(entity_name: &str, table_name: &str) -> BeanMetaDataBuilder {
        BeanMetaDataBuilder {
            entity_name: entity_name.into(),
            table_name: table_name.into(),
            properties: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn properties(&self) -> &[PropertyType] {
        &self.properties
    }

    pub fn relations(&self) -> &[RelationPropertyType] {
        &self.relations
    }

    pub fn property_index(&self, property_name: &str) -> Option<usize> {
        self.by_property.get(property_name).copied()
    }

    pub fn property_index_by_column(&self, column_name: &str) -> Option<usize> {
        self.by_column.get(&FlexibleName::new(column_name)).copied()
    }

    pub fn property_by_column(&self, column_name: &str) -> Option<&PropertyType> {
        self.property_index_by_column(column_name)
            .map(|index| &self.properties[index])
    }

    pub fn relation_index(&self, property_name: &str) -> Option<usize> {
        self.by_relation.get(property_name).copied()
    }

    pub fn relation(&self, property_name: &str) -> Option<&RelationPropertyType> {
        self.relation_index(property_name)
            .map(|index| &self.relations[index])
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &PropertyType> {
        self.properties.iter().filter(|p| p.primary_key)
    }
}

/// Builder for [`BeanMetaData`].
///
/// ```
/// use rowgraph_core::meta::BeanMetaData;
/// use rowgraph_types::ValueType;
///
/// let rank = BeanMetaData::builder("ServiceRank", "SERVICE_RANK")
///     .primary_key("serviceRankId", "SERVICE_RANK_ID", ValueType::Integer)
///     .column("serviceRankName", "SERVICE_RANK_NAME", ValueType::Text)
///     .build()
///     .unwrap();
///
/// let member = BeanMetaData::builder("Member", "MEMBER")
///     .primary_key("memberId", "MEMBER_ID", ValueType::Integer)
///     .column("serviceRankId", "SERVICE_RANK_ID", ValueType::Integer)
///     .relation("serviceRank", &rank, [("SERVICE_RANK_ID", "SERVICE_RANK_ID")])
///     .build()
///     .unwrap();
///
/// assert_eq!(member.relations()[0].relation_no(), 0);
/// ```
pub struct BeanMetaDataBuilder {
    entity_name: CompactString,
    table_name: CompactString,
    properties: Vec<PropertyType>,
    relations: Vec<RelationPropertyType>,
}

impl BeanMetaDataBuilder {
    pub fn column(mut self, property_name: &str, column_name: &str, value_type: ValueType) -> Self {
        self.properties.push(PropertyType {
            property_name: property_name.into(),
            column_name: column_name.into(),
            value_type,
            primary_key: false,
            null_object: None,
        });
        self
    }

    pub fn primary_key(
        mut self,
        property_name: &str,
        column_name: &str,
        value_type: ValueType,
    ) -> Self {
        self = self.column(property_name, column_name, value_type);
        if let Some(last) = self.properties.last_mut() {
            last.primary_key = true;
        }
        self
    }

    /// Attaches a column null-object provider to the most recently added column.
    pub fn null_object<F>(mut self, provider: F) -> Self
    where
        F: Fn(&Entity) -> Value + Send + Sync + 'static,
    {
        if let Some(last) = self.properties.last_mut() {
            last.null_object = Some(Arc::new(provider));
        }
        self
    }

    /// Declares a relation property. Its relation number is its declaration index.
    pub fn relation<I, M, Y>(
        mut self,
        property_name: &str,
        your_meta: &Arc<BeanMetaData>,
        keys: I,
    ) -> Self
    where
        I: IntoIterator<Item = (M, Y)>,
        M: AsRef<str>,
        Y: AsRef<str>,
    {
        let relation_no = self.relations.len();
        self.relations.push(RelationPropertyType {
            property_name: property_name.into(),
            relation_no,
            your_meta: Arc::clone(your_meta),
            key_columns: keys
                .into_iter()
                .map(|(mine, yours)| (mine.as_ref().into(), yours.as_ref().into()))
                .collect(),
            style: None,
        });
        self
    }

    /// Overrides the relation style of the most recently added relation.
    pub fn relation_style(mut self, style: RelationStyle) -> Self {
        if let Some(last) = self.relations.last_mut() {
            last.style = Some(style);
        }
        self
    }

    /// Validates names and builds the metadata.
    ///
    /// Property names must be unique across columns and relations, column
    /// names unique (flexibly) across columns.
    pub fn build(self) -> Result<Arc<BeanMetaData>> {
        let mut by_property = HashMap::with_capacity(self.properties.len());
        let mut by_column = HashMap::with_capacity(self.properties.len());
        for (index, property) in self.properties.iter().enumerate() {
            if by_property.insert(property.property_name.clone(), index).is_some() {
                return Err(RowGraphError::Metadata(format!(
                    "duplicate property '{}' on {}",
                    property.property_name, self.entity_name
                )));
            }
            if by_column
                .insert(FlexibleName::new(&property.column_name), index)
                .is_some()
            {
                return Err(RowGraphError::Metadata(format!(
                    "duplicate column '{}' on {}",
                    property.column_name, self.entity_name
                )));
            }
        }

        let mut by_relation = HashMap::with_capacity(self.relations.len());
        for (index, relation) in self.relations.iter().enumerate() {
            if by_property.contains_key(&relation.property_name)
                || by_relation
                    .insert(relation.property_name.clone(), index)
                    .is_some()
            {
                return Err(RowGraphError::Metadata(format!(
                    "duplicate property '{}' on {}",
                    relation.property_name, self.entity_name
                )));
            }
        }

        Ok(Arc::new(BeanMetaData {
            entity_name: self.entity_name,
            table_name: self.table_name,
            properties: self.properties,
            relations: self.relations,
            by_property,
            by_column,
            by_relation,
        }))
    }
}
