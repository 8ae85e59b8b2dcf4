//! Shared fixtures: a small member schema and result-set builders.
//!
//! Relation numbers on `Member`: `_0` memberStatus, `_1` serviceRank,
//! `_2` memberAddress (whose `_2_0` is region).

#[cfg(feature = "rusqlite")]
pub mod rusqlite;

use std::sync::Arc;

use rowgraph::prelude::*;

pub struct Schema {
    pub member: Arc<BeanMetaData>,
    pub member_status: Arc<BeanMetaData>,
    pub service_rank: Arc<BeanMetaData>,
    pub member_address: Arc<BeanMetaData>,
    pub region: Arc<BeanMetaData>,
}

pub fn schema() -> Schema {
    schema_with_status_style(None)
}

/// Same schema with an explicit style on `Member.memberStatus`.
pub fn schema_with_status_style(style: Option<RelationStyle>) -> Schema {
    let member_status = BeanMetaData::builder("MemberStatus", "MEMBER_STATUS")
        .primary_key("memberStatusCode", "MEMBER_STATUS_CODE", ValueType::Text)
        .column("memberStatusName", "MEMBER_STATUS_NAME", ValueType::Text)
        .column("displayOrder", "DISPLAY_ORDER", ValueType::Integer)
        .null_object(|_| Value::Integer(0))
        .build()
        .unwrap();
    let service_rank = BeanMetaData::builder("ServiceRank", "SERVICE_RANK")
        .primary_key("serviceRankCode", "SERVICE_RANK_CODE", ValueType::Text)
        .column("serviceRankName", "SERVICE_RANK_NAME", ValueType::Text)
        .build()
        .unwrap();
    let region = BeanMetaData::builder("Region", "REGION")
        .primary_key("regionId", "REGION_ID", ValueType::Integer)
        .column("regionName", "REGION_NAME", ValueType::Text)
        .build()
        .unwrap();
    let member_address = BeanMetaData::builder("MemberAddress", "MEMBER_ADDRESS")
        .primary_key("memberAddressId", "MEMBER_ADDRESS_ID", ValueType::Integer)
        .column("memberId", "MEMBER_ID", ValueType::Integer)
        .column("address", "ADDRESS", ValueType::Text)
        .column("regionId", "REGION_ID", ValueType::Integer)
        .relation("region", &region, [("REGION_ID", "REGION_ID")])
        .build()
        .unwrap();

    let mut member = BeanMetaData::builder("Member", "MEMBER")
        .primary_key("memberId", "MEMBER_ID", ValueType::Integer)
        .column("memberName", "MEMBER_NAME", ValueType::Text)
        .column("memberStatusCode", "MEMBER_STATUS_CODE", ValueType::Text)
        .column("serviceRankCode", "SERVICE_RANK_CODE", ValueType::Text)
        .column("birthdate", "BIRTHDATE", ValueType::Text)
        .null_object(|_| Value::from("1970-01-01"))
        .relation(
            "memberStatus",
            &member_status,
            [("MEMBER_STATUS_CODE", "MEMBER_STATUS_CODE")],
        );
    if let Some(style) = style {
        member = member.relation_style(style);
    }
    let member = member
        .relation(
            "serviceRank",
            &service_rank,
            [("SERVICE_RANK_CODE", "SERVICE_RANK_CODE")],
        )
        .relation("memberAddress", &member_address, [("MEMBER_ID", "MEMBER_ID")])
        .build()
        .unwrap();

    Schema {
        member,
        member_status,
        service_rank,
        member_address,
        region,
    }
}

/// Relation path from relation numbers: `rel(&[2, 0])` is `_2_0`.
pub fn rel(nos: &[usize]) -> RelationPath {
    nos.iter()
        .fold(RelationPath::base(), |path, no| path.child(*no))
}

/// `MEMBER` left-joined to `MEMBER_STATUS` as relation `_0`.
///
/// Rows are `(member_id, member_status_code, status_name)`. The joined
/// status code is the member's code when a name is given, NULL otherwise
/// (the join found nothing).
pub fn member_with_status(rows: &[(i64, Option<&str>, Option<&str>)]) -> MemoryResultSet {
    let mut rs = MemoryResultSet::new([
        "MEMBER_ID",
        "MEMBER_NAME",
        "MEMBER_STATUS_CODE",
        "MEMBER_STATUS_CODE_0",
        "MEMBER_STATUS_NAME_0",
    ]);
    for (id, code, name) in rows {
        let joined_code = name.and(*code);
        rs.push_row([
            Value::Integer(*id),
            Value::from(format!("member {id}")),
            Value::from(*code),
            Value::from(joined_code),
            Value::from(*name),
        ]);
    }
    rs
}

pub fn select_status() -> SelectContext {
    SelectContext::condition_bean(ConditionBeanContext::new().select_relation(rel(&[0])))
}

pub fn status_of(member: &Entity) -> Option<&Arc<Entity>> {
    member.related("memberStatus").unwrap()
}

pub fn ids(rows: &[Entity]) -> Vec<i64> {
    rows.iter()
        .map(|row| row.get::<i64>("memberId").unwrap())
        .collect()
}
