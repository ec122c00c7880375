mod common;

use crate::common::*;
use clob_core::prelude::*;

#[test]
fn rejects_zero_price_limit_order() {
    let mut engine = new_engine();
    fund_numeraire(&mut engine, 1, 100);
    let err = engine
        .place_limit(Side::Bid, u(0), u(100), 1)
        .unwrap_err();
    assert_eq!(err, PlaceError::InvalidPrice);
}

#[test]
fn rejects_zero_quantity_order() {
    let mut engine = new_engine();
    let err = engine
        .place_limit(Side::Bid, u(100), u(0), 1)
        .unwrap_err();
    assert_eq!(err, PlaceError::InvalidQuantity);
}

#[test]
fn terminal_orders_remain_queryable() {
    let mut engine = new_engine();
    fund_index(&mut engine, 1, 10);
    let sell = engine.place_limit(Side::Ask, u(100), u(10), 1).unwrap();

    fund_numeraire(&mut engine, 2, 1_000);
    engine.place_limit(Side::Bid, u(100), u(1_000), 2).unwrap();

    let order = engine.get_order(sell).expect("filled orders stay in the registry");
    assert_eq!(order.status, Status::Filled);
}

#[test]
fn order_ids_are_never_reused() {
    let mut engine = new_engine();
    fund_index(&mut engine, 1, 10);
    let first = engine.place_limit(Side::Ask, u(100), u(5), 1).unwrap();
    let second = engine.place_limit(Side::Ask, u(100), u(5), 1).unwrap();
    assert_ne!(first, second);
}
