use rowgraph::prelude::*;

use crate::common::{member_with_status, schema, select_status, status_of};

fn handler() -> BeanOneResultSetHandler {
    BeanOneResultSetHandler::new(schema().member, select_status(), "memberId=1")
}

#[test]
fn no_row_is_none() {
    let mut rs = member_with_status(&[]);
    assert!(handler().handle(&mut rs).unwrap().is_none());
}

#[test]
fn single_row_is_mapped_with_relations() {
    let mut rs = member_with_status(&[(1, Some("FML"), Some("Formal"))]);
    let member = handler().handle(&mut rs).unwrap().unwrap();
    assert_eq!(member.get::<i64>("memberId").unwrap(), 1);
    assert_eq!(
        status_of(&member)
            .unwrap()
            .get::<String>("memberStatusName")
            .unwrap(),
        "Formal"
    );
}

#[test]
fn duplicate_rows_fail_with_search_key() {
    let mut rs = member_with_status(&[
        (1, Some("FML"), Some("Formal")),
        (1, Some("PRV"), Some("Provisional")),
    ]);
    let err = handler().handle(&mut rs).unwrap_err();
    match err {
        RowGraphError::EntityDuplicated { search_key, count } => {
            assert_eq!(search_key, "memberId=1");
            assert_eq!(count, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}
