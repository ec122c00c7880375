//! Six literal end-to-end scenarios with exact input numbers, checking
//! precise expected outputs rather than just general properties.

mod common;

use crate::common::*;
use clob_core::prelude::*;

const A: TraderId = 1;
const B: TraderId = 2;
const C: TraderId = 3;

/// 1. Simple cross: ask p=100 q=5 against bid p=100 q=500 fully matches
/// both; A receives 5 index, B receives 500 numeraire; both ladders end
/// empty.
#[test]
fn literal_1_simple_cross() {
    let mut engine = new_engine();
    fund_index(&mut engine, B, 5);
    let ask = engine.place_limit(Side::Ask, u(100), u(5), B).unwrap();

    fund_numeraire(&mut engine, A, 500);
    let bid = engine.place_limit(Side::Bid, u(100), u(500), A).unwrap();

    assert_eq!(engine.get_order(ask).unwrap().status, Status::Filled);
    assert_eq!(engine.get_order(bid).unwrap().status, Status::Filled);
    assert_eq!(engine.ledger().balance_of(A, engine.config().index), u(5));
    assert_eq!(engine.ledger().balance_of(B, engine.config().numeraire), u(500));
    assert!(engine.best_bid().is_none());
    assert!(engine.best_ask().is_none());
}

/// 2. Partial fill of the bid: ask p=10 q=3 against bid p=10 q=100. 3
/// index at 10 spends 30 numeraire; residual 70 rests (floor(70/10)=7>0
/// so PARTIAL, not dust).
#[test]
fn literal_2_partial_fill_of_bid_rests() {
    let mut engine = new_engine();
    fund_index(&mut engine, B, 3);
    engine.place_limit(Side::Ask, u(10), u(3), B).unwrap();

    fund_numeraire(&mut engine, A, 100);
    let bid = engine.place_limit(Side::Bid, u(10), u(100), A).unwrap();

    let order = engine.get_order(bid).unwrap();
    assert_eq!(order.status, Status::Partial);
    assert_eq!(order.residual_quantity, u(70));
    assert_eq!(engine.depth(Side::Bid, u(10)), u(70));
    assert_eq!(engine.depth(Side::Ask, u(10)), u(0));
}

/// 3. Dust residual: ask p=10 q=9 against bid p=10 q=95. 9 index at 10
/// spends 90 numeraire; residual 5, floor(5/10)=0, so FILLED with the
/// dust retained (not refunded), and both ladders end empty.
#[test]
fn literal_3_dust_residual_marks_filled() {
    let mut engine = new_engine();
    fund_index(&mut engine, B, 9);
    engine.place_limit(Side::Ask, u(10), u(9), B).unwrap();

    fund_numeraire(&mut engine, A, 95);
    let bid = engine.place_limit(Side::Bid, u(10), u(95), A).unwrap();

    let order = engine.get_order(bid).unwrap();
    assert_eq!(order.status, Status::Filled);
    assert_eq!(order.residual_quantity, u(5));
    assert!(engine.best_bid().is_none());
    assert!(engine.best_ask().is_none());
}

/// 4. Cross multiple levels: asks (p=10,q=2) from B and (p=12,q=3) from
/// C, incoming bid p=15 q=100 from A. The bid consumes p=10 fully (20
/// numeraire, 2 index), then p=12 fully (36 numeraire, 3 index), leaving
/// 44 residual resting at p=15 as PARTIAL; A ends with 5 index credited
/// and 56 numeraire spent.
#[test]
fn literal_4_cross_multiple_levels_best_first() {
    let mut engine = new_engine();
    fund_index(&mut engine, B, 2);
    let cheap = engine.place_limit(Side::Ask, u(10), u(2), B).unwrap();
    fund_index(&mut engine, C, 3);
    let pricey = engine.place_limit(Side::Ask, u(12), u(3), C).unwrap();

    fund_numeraire(&mut engine, A, 100);
    let bid = engine.place_limit(Side::Bid, u(15), u(100), A).unwrap();

    assert_eq!(engine.get_order(cheap).unwrap().status, Status::Filled);
    assert_eq!(engine.get_order(pricey).unwrap().status, Status::Filled);

    let order = engine.get_order(bid).unwrap();
    assert_eq!(order.status, Status::Partial);
    assert_eq!(order.residual_quantity, u(44));
    assert_eq!(engine.depth(Side::Bid, u(15)), u(44));

    assert_eq!(engine.ledger().balance_of(A, engine.config().index), u(5));
    assert_eq!(engine.ledger().balance_of(A, engine.config().numeraire), u(0));
    assert_eq!(engine.ledger().balance_of(B, engine.config().numeraire), u(20));
    assert_eq!(engine.ledger().balance_of(C, engine.config().numeraire), u(36));
}

/// 5. Market BID exhausts liquidity: a single resting ask (p=7,q=3)
/// against a market bid q=100. 21 numeraire spent, 3 index credited to
/// A; the remaining 79 numeraire is refunded and the market order is
/// PARTIAL (never the dust-FILLED rule limit orders use).
#[test]
fn literal_5_market_bid_exhausts_liquidity_refunds_dust() {
    let mut engine = new_engine();
    fund_index(&mut engine, B, 3);
    engine.place_limit(Side::Ask, u(7), u(3), B).unwrap();

    fund_numeraire(&mut engine, A, 100);
    let market = engine.place_market(Side::Bid, u(100), A).unwrap();

    let order = engine.get_order(market).unwrap();
    assert_eq!(order.status, Status::Partial);
    assert_eq!(order.residual_quantity, u(79));
    assert_eq!(engine.ledger().balance_of(A, engine.config().index), u(3));
    assert_eq!(engine.ledger().balance_of(A, engine.config().numeraire), u(79));
    assert_eq!(engine.ledger().balance_of(B, engine.config().numeraire), u(21));
}

/// 6. Cancellation then matching skips the tombstone: B rests a bid
/// p=5 q=50 then cancels it (refunded, depth back to zero); C then
/// rests a bid p=5 q=20; A's incoming ask p=5 q=4 must match only C's
/// live order, never B's cancelled one. C fills 4 (residual 0, dust
/// rule 0/5=0 so FILLED); A's ask is FILLED.
#[test]
fn literal_6_cancellation_tombstone_is_skipped_by_later_match() {
    let mut engine = new_engine();
    fund_numeraire(&mut engine, B, 50);
    let k = engine.place_limit(Side::Bid, u(5), u(50), B).unwrap();
    engine.cancel(k, B).unwrap();
    assert_eq!(engine.depth(Side::Bid, u(5)), u(0));

    fund_numeraire(&mut engine, C, 20);
    let c_bid = engine.place_limit(Side::Bid, u(5), u(20), C).unwrap();

    fund_index(&mut engine, A, 4);
    let ask = engine.place_limit(Side::Ask, u(5), u(4), A).unwrap();

    assert_eq!(engine.get_order(c_bid).unwrap().status, Status::Filled);
    assert_eq!(engine.get_order(c_bid).unwrap().residual_quantity, u(0));
    assert_eq!(engine.get_order(ask).unwrap().status, Status::Filled);
    assert_eq!(engine.get_order(k).unwrap().status, Status::Cancelled);
}
