use std::sync::Arc;

use rowgraph::prelude::*;

use crate::common::{
    member_with_status, rel, schema, schema_with_status_style, select_status, status_of,
};

fn two_formal_members() -> MemoryResultSet {
    member_with_status(&[
        (1, Some("FML"), Some("Formal")),
        (2, Some("FML"), Some("Formal")),
        (3, None, None),
    ])
}

#[test]
fn optional_style_assigns_empty_slots() {
    let schema = schema();
    let mut rs = two_formal_members();
    let members = BeanListResultSetHandler::new(schema.member, select_status())
        .with_options(MappingOptions::new().with_relation_style(RelationStyle::Optional))
        .handle(&mut rs)
        .unwrap();

    assert!(matches!(
        members[0].relation_slot("memberStatus").unwrap(),
        Some(RelationSlot::Loaded(_))
    ));
    assert!(matches!(
        members[2].relation_slot("memberStatus").unwrap(),
        Some(RelationSlot::Empty)
    ));
    assert!(matches!(
        members[2].required_related("memberStatus"),
        Err(RowGraphError::RelationNotFound { .. })
    ));
}

#[test]
fn relation_style_overrides_the_default() {
    let schema = schema_with_status_style(Some(RelationStyle::Optional));
    let mut rs = two_formal_members();
    let members = BeanListResultSetHandler::new(schema.member, select_status())
        .handle(&mut rs)
        .unwrap();
    assert!(matches!(
        members[2].relation_slot("memberStatus").unwrap(),
        Some(RelationSlot::Empty)
    ));

    let schema = schema_with_status_style(Some(RelationStyle::Plain));
    let mut rs = two_formal_members();
    let members = BeanListResultSetHandler::new(schema.member, select_status())
        .with_options(MappingOptions::new().with_relation_style(RelationStyle::Optional))
        .handle(&mut rs)
        .unwrap();
    assert!(members[2].relation_slot("memberStatus").unwrap().is_none());
}

fn assert_not_shared(select: SelectContext, options: MappingOptions) {
    let schema = schema();
    let mut rs = two_formal_members();
    let members = BeanListResultSetHandler::new(schema.member, select)
        .with_options(options)
        .handle(&mut rs)
        .unwrap();
    let first = status_of(&members[0]).unwrap();
    let second = status_of(&members[1]).unwrap();
    assert!(!Arc::ptr_eq(first, second));
    assert_eq!(first.get::<String>("memberStatusCode").unwrap(), "FML");
    assert_eq!(second.get::<String>("memberStatusCode").unwrap(), "FML");
}

#[test]
fn relation_cache_can_be_switched_off_globally() {
    assert_not_shared(select_status(), MappingOptions::new().with_relation_cache(false));
}

#[test]
fn relation_cache_can_be_switched_off_by_the_select() {
    let cb = ConditionBeanContext::new()
        .select_relation(rel(&[0]))
        .relation_mapping_cache(false);
    assert_not_shared(SelectContext::condition_bean(cb), MappingOptions::new());
}

#[test]
fn relation_cache_can_be_switched_off_per_relation() {
    let cb = ConditionBeanContext::new()
        .select_relation(rel(&[0]))
        .exclude_relation_cache(rel(&[0]));
    assert_not_shared(SelectContext::condition_bean(cb), MappingOptions::new());
}

#[cfg(feature = "serde")]
#[test]
fn options_load_from_toml() {
    let options = MappingOptions::from_toml_str(
        r#"
        relation_style = "optional"
        relation_cache_size_hint = 16
        "#,
    )
    .unwrap();
    assert_eq!(options.relation_style, RelationStyle::Optional);
    assert_eq!(options.relation_cache_size_hint, 16);
    assert!(options.relation_cache);

    assert!(matches!(
        MappingOptions::from_toml_str("relation_cache = 1"),
        Err(RowGraphError::Config(_))
    ));
}
