use std::ops::ControlFlow;
use std::sync::Arc;

use rowgraph::prelude::*;

use crate::common::rusqlite::setup_db;
use crate::common::{ids, rel, schema, select_status, status_of};

const MEMBER_WITH_STATUS: &str = "
    SELECT dfloc.MEMBER_ID, dfloc.MEMBER_NAME, dfloc.MEMBER_STATUS_CODE, dfloc.BIRTHDATE,
           dfrel_0.MEMBER_STATUS_CODE AS MEMBER_STATUS_CODE_0,
           dfrel_0.MEMBER_STATUS_NAME AS MEMBER_STATUS_NAME_0,
           dfrel_0.DISPLAY_ORDER AS DISPLAY_ORDER_0
      FROM MEMBER dfloc
      LEFT OUTER JOIN MEMBER_STATUS dfrel_0
        ON dfloc.MEMBER_STATUS_CODE = dfrel_0.MEMBER_STATUS_CODE
     ORDER BY dfloc.MEMBER_ID";

#[test]
fn left_join_maps_shared_relations() {
    let conn = setup_db();
    let mut stmt = conn.prepare(MEMBER_WITH_STATUS).unwrap();
    let mut rs = SqliteResultSet::new(stmt.query([]).unwrap());

    let members = BeanListResultSetHandler::new(schema().member, select_status())
        .handle(&mut rs)
        .unwrap();

    assert_eq!(ids(&members), [1, 2, 3, 4]);
    let formal = status_of(&members[0]).unwrap();
    assert!(Arc::ptr_eq(formal, status_of(&members[1]).unwrap()));
    assert_eq!(formal.get::<i64>("displayOrder").unwrap(), 1);

    let provisional = status_of(&members[2]).unwrap();
    assert_eq!(provisional.get::<String>("memberStatusName").unwrap(), "Provisional");
    assert_eq!(provisional.get::<Option<i64>>("displayOrder").unwrap(), None);

    assert!(status_of(&members[3]).is_none());
    assert_eq!(members[1].get::<Option<String>>("birthdate").unwrap(), None);
}

#[test]
fn unaliased_duplicates_resolve_through_select_index() {
    let conn = setup_db();
    let mut stmt = conn
        .prepare(
            "SELECT m.MEMBER_ID, m.MEMBER_STATUS_CODE, s.MEMBER_STATUS_CODE, s.MEMBER_STATUS_NAME
               FROM MEMBER m
               JOIN MEMBER_STATUS s ON s.MEMBER_STATUS_CODE = 'PRV'
              WHERE m.MEMBER_ID = 1",
        )
        .unwrap();
    let mut rs = SqliteResultSet::new(stmt.query([]).unwrap());
    let select = select_status().with_select_index(
        SelectIndexMap::new()
            .with(rel(&[0]), "MEMBER_STATUS_CODE", 2)
            .with(rel(&[0]), "MEMBER_STATUS_NAME", 3),
    );

    let member = BeanOneResultSetHandler::new(schema().member, select, "memberId=1")
        .handle(&mut rs)
        .unwrap()
        .unwrap();
    assert_eq!(member.get::<String>("memberStatusCode").unwrap(), "FML");
    let status = status_of(&member).unwrap();
    assert_eq!(status.get::<String>("memberStatusCode").unwrap(), "PRV");
}

#[test]
fn cursor_over_statement_stops_early() {
    let conn = setup_db();
    let mut stmt = conn.prepare(MEMBER_WITH_STATUS).unwrap();
    let mut rs = SqliteResultSet::new(stmt.query([]).unwrap());

    let mut names = Vec::new();
    BeanCursorResultSetHandler::new(schema().member, select_status(), |member| {
        names.push(member.get::<String>("memberName")?);
        Ok(if names.len() == 2 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        })
    })
    .handle(&mut rs)
    .unwrap();
    assert_eq!(names, ["Stojkovic", "Savicevic"]);
}

#[test]
fn scalar_and_map_results() {
    let conn = setup_db();
    let mut stmt = conn
        .prepare("SELECT COUNT(*) AS MEMBER_COUNT FROM MEMBER")
        .unwrap();
    let mut rs = SqliteResultSet::new(stmt.query([]).unwrap());
    let counts = ScalarListResultSetHandler::new(ValueType::Integer)
        .handle(&mut rs)
        .unwrap();
    assert_eq!(counts, [Value::Integer(4)]);

    let mut stmt = conn
        .prepare("SELECT MEMBER_STATUS_CODE, DISPLAY_ORDER FROM MEMBER_STATUS ORDER BY 1")
        .unwrap();
    let mut rs = SqliteResultSet::new(stmt.query([]).unwrap());
    let rows = MapListResultSetHandler::new().handle(&mut rs).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("member_status_code"), Some(&Value::from("FML")));
    assert_eq!(rows[1].get("DISPLAY_ORDER"), Some(&Value::Null));
}
