use super::types::Price;
use crossbeam_skiplist::SkipSet;
use std::ops::Bound;

/// An ordered set of live prices for one side of the book.
///
/// Backed by `crossbeam_skiplist::SkipSet`, narrowed to hold only price
/// keys — the per-price aggregate state lives in the level map next to
/// it. Every accessor returns an owned `Price` rather than a cursor or
/// reference into the skiplist: a traversal pointer into a price ladder
/// can be invalidated by a concurrent removal, so returning keys instead
/// of cursors means no caller of `PriceLadder` can hold a reference that
/// removal could dangle.
#[derive(Debug, Default)]
pub struct PriceLadder {
    prices: SkipSet<Price>,
}

impl PriceLadder {
    pub fn new() -> Self {
        Self {
            prices: SkipSet::new(),
        }
    }

    pub fn insert(&self, price: Price) {
        self.prices.insert(price);
    }

    pub fn remove(&self, price: Price) {
        self.prices.remove(&price);
    }

    pub fn contains(&self, price: Price) -> bool {
        self.prices.contains(&price)
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// The lowest live price.
    pub fn min(&self) -> Option<Price> {
        self.prices.front().map(|entry| *entry.value())
    }

    /// The highest live price.
    pub fn max(&self) -> Option<Price> {
        self.prices.back().map(|entry| *entry.value())
    }

    /// The lowest live price strictly greater than `price`.
    pub fn next_higher(&self, price: Price) -> Option<Price> {
        self.prices
            .range((Bound::Excluded(price), Bound::Unbounded))
            .next()
            .map(|entry| *entry.value())
    }

    /// The highest live price strictly less than `price`.
    pub fn next_lower(&self, price: Price) -> Option<Price> {
        self.prices
            .range((Bound::Unbounded, Bound::Excluded(price)))
            .next_back()
            .map(|entry| *entry.value())
    }

    /// Snapshot of all live prices, ascending.
    pub fn to_vec(&self) -> Vec<Price> {
        self.prices.iter().map(|entry| *entry.value()).collect()
    }
}
