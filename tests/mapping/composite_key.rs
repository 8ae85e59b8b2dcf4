use std::sync::Arc;

use rowgraph::prelude::*;

use crate::common::rel;

fn purchase_meta() -> Arc<BeanMetaData> {
    let product = BeanMetaData::builder("Product", "PRODUCT")
        .primary_key("shopId", "SHOP_ID", ValueType::Integer)
        .primary_key("productCode", "PRODUCT_CODE", ValueType::Text)
        .column("productName", "PRODUCT_NAME", ValueType::Text)
        .build()
        .unwrap();
    BeanMetaData::builder("Purchase", "PURCHASE")
        .primary_key("purchaseId", "PURCHASE_ID", ValueType::Integer)
        .column("shopId", "SHOP_ID", ValueType::Integer)
        .column("productCode", "PRODUCT_CODE", ValueType::Text)
        .relation(
            "product",
            &product,
            [("SHOP_ID", "SHOP_ID"), ("PRODUCT_CODE", "PRODUCT_CODE")],
        )
        .build()
        .unwrap()
}

fn select_product() -> SelectContext {
    SelectContext::condition_bean(ConditionBeanContext::new().select_relation(rel(&[0])))
}

fn purchase_ids(rows: &[Entity]) -> Vec<i64> {
    rows.iter()
        .map(|row| row.get::<i64>("purchaseId").unwrap())
        .collect()
}

#[test]
fn partially_selected_key_leaves_relation_absent() {
    let mut rs = MemoryResultSet::new(["PURCHASE_ID", "SHOP_ID_0", "PRODUCT_NAME_0"])
        .with_row([Value::Integer(1), Value::Integer(7), Value::from("Apple")])
        .with_row([Value::Integer(2), Value::Integer(7), Value::from("Banana")]);
    let purchases = BeanListResultSetHandler::new(purchase_meta(), select_product())
        .handle(&mut rs)
        .unwrap();

    assert_eq!(purchase_ids(&purchases), [1, 2]);
    for purchase in &purchases {
        assert!(purchase.relation_slot("product").unwrap().is_none());
    }
}

#[test]
fn full_composite_key_shares_only_equal_keys() {
    let mut rs = MemoryResultSet::new([
        "PURCHASE_ID",
        "SHOP_ID_0",
        "PRODUCT_CODE_0",
        "PRODUCT_NAME_0",
    ])
    .with_row([
        Value::Integer(1),
        Value::Integer(7),
        Value::from("A"),
        Value::from("Apple"),
    ])
    .with_row([
        Value::Integer(2),
        Value::Integer(7),
        Value::from("B"),
        Value::from("Banana"),
    ])
    .with_row([
        Value::Integer(3),
        Value::Integer(7),
        Value::from("A"),
        Value::from("Apple"),
    ]);
    let purchases = BeanListResultSetHandler::new(purchase_meta(), select_product())
        .handle(&mut rs)
        .unwrap();

    let apple = purchases[0].required_related("product").unwrap();
    let banana = purchases[1].required_related("product").unwrap();
    assert!(Arc::ptr_eq(apple, purchases[2].required_related("product").unwrap()));
    assert!(!Arc::ptr_eq(apple, banana));
    assert_eq!(banana.get::<String>("productName").unwrap(), "Banana");
}
