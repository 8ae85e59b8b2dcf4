use rowgraph::prelude::*;

use crate::common::{member_with_status, rel, schema, status_of};

#[test]
fn base_guard_blocks_non_specified_columns() {
    let schema = schema();
    let mut rs = member_with_status(&[(1, Some("FML"), Some("Formal"))]);
    let cb = ConditionBeanContext::new()
        .select_relation(rel(&[0]))
        .specify_columns(RelationPath::base(), ["MEMBER_NAME"]);
    let members = BeanListResultSetHandler::new(schema.member, SelectContext::condition_bean(cb))
        .handle(&mut rs)
        .unwrap();

    let member = &members[0];
    assert!(member.is_non_specified_column_guarded());
    assert_eq!(member.get::<String>("memberName").unwrap(), "member 1");
    let err = member.value("birthdate").unwrap_err();
    assert!(matches!(
        err,
        RowGraphError::NonSpecifiedColumnAccess { ref entity, ref property }
            if entity == "Member" && property == "birthdate"
    ));
    // the relation level has no specification of its own
    let status = status_of(member).unwrap();
    assert!(!status.is_non_specified_column_guarded());
    assert_eq!(status.value("displayOrder").unwrap(), &Value::Null);
}

#[test]
fn relation_guard_follows_its_path() {
    let schema = schema();
    let mut rs = member_with_status(&[(1, Some("FML"), Some("Formal"))]);
    let cb = ConditionBeanContext::new()
        .select_relation(rel(&[0]))
        .specify_columns(rel(&[0]), ["MEMBER_STATUS_NAME"]);
    let members = BeanListResultSetHandler::new(
        schema.member,
        SelectContext::condition_bean(cb.clone()),
    )
    .handle(&mut rs)
    .unwrap();

    assert!(!members[0].is_non_specified_column_guarded());
    let status = status_of(&members[0]).unwrap();
    assert_eq!(status.get::<String>("memberStatusName").unwrap(), "Formal");
    assert!(matches!(
        status.value("displayOrder"),
        Err(RowGraphError::NonSpecifiedColumnAccess { .. })
    ));

    let schema = crate::common::schema();
    let mut rs = member_with_status(&[(1, Some("FML"), Some("Formal"))]);
    let cb = cb.allow_non_specified_column_access(true);
    let members = BeanListResultSetHandler::new(schema.member, SelectContext::condition_bean(cb))
        .handle(&mut rs)
        .unwrap();
    let status = status_of(&members[0]).unwrap();
    assert_eq!(status.value("displayOrder").unwrap(), &Value::Null);
}

#[test]
fn specified_outside_sql_guards_base_rows() {
    let schema = schema();
    let mut rs = member_with_status(&[(1, Some("FML"), Some("Formal"))]);
    let select = SelectContext::outside_sql(OutsideSqlContext {
        specified_outside_sql: true,
        non_specified_column_access_allowed: false,
    });
    let members = BeanListResultSetHandler::new(schema.member, select)
        .handle(&mut rs)
        .unwrap();
    assert!(members[0].value("memberId").is_ok());
    assert!(members[0].value("serviceRankCode").is_err());
}

#[test]
fn column_null_objects_fill_nulls_at_every_level() {
    let schema = schema();
    let mut rs = MemoryResultSet::new([
        "MEMBER_ID",
        "BIRTHDATE",
        "MEMBER_STATUS_CODE_0",
        "DISPLAY_ORDER_0",
    ])
    .with_row([Value::Integer(1), Value::Null, Value::from("PRV"), Value::Null])
    .with_row([
        Value::Integer(2),
        Value::from("1999-12-31"),
        Value::from("FML"),
        Value::Integer(3),
    ]);
    let cb = ConditionBeanContext::new()
        .select_relation(rel(&[0]))
        .enable_column_null_object(true);
    let members = BeanListResultSetHandler::new(schema.member, SelectContext::condition_bean(cb))
        .handle(&mut rs)
        .unwrap();

    assert!(members[0].is_column_null_object_enabled());
    assert_eq!(members[0].get::<String>("birthdate").unwrap(), "1970-01-01");
    assert_eq!(members[1].get::<String>("birthdate").unwrap(), "1999-12-31");
    let prv = status_of(&members[0]).unwrap();
    assert_eq!(prv.get::<i64>("displayOrder").unwrap(), 0);
    assert_eq!(status_of(&members[1]).unwrap().get::<i64>("displayOrder").unwrap(), 3);
}

#[test]
fn null_object_column_values_survive_on_present_rows() {
    let schema = schema();
    let mut rs = MemoryResultSet::new([
        "MEMBER_ID",
        "MEMBER_STATUS_CODE_0",
        "MEMBER_STATUS_NAME_0",
        "DISPLAY_ORDER_0",
    ])
    .with_row([Value::Integer(1), Value::Null, Value::Null, Value::Integer(5)])
    .with_row([
        Value::Integer(2),
        Value::from("FML"),
        Value::from("Formal"),
        Value::Integer(5),
    ]);
    let cb = ConditionBeanContext::new()
        .select_relation(rel(&[0]))
        .null_object_columns(rel(&[0]), ["DISPLAY_ORDER"]);
    let members = BeanListResultSetHandler::new(schema.member, SelectContext::condition_bean(cb))
        .handle(&mut rs)
        .unwrap();
    assert!(status_of(&members[0]).is_none());
    let status = status_of(&members[1]).unwrap();
    assert_eq!(status.get::<i64>("displayOrder").unwrap(), 5);
}
