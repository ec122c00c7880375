use super::types::{Order, OrderId, Status, TraderId};
use std::collections::HashMap;

/// id -> Order map plus monotonic id allocation.
///
/// Orders are never removed from the registry once inserted: a filled or
/// cancelled order remains queryable through `get` for the lifetime of
/// the engine, even after it leaves the book.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    next_id: OrderId,
    next_epoch: u64,
    orders: HashMap<OrderId, Order>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            next_epoch: 1,
            orders: HashMap::new(),
        }
    }

    /// Allocate the next order id. Ids are never reused.
    pub fn next_id(&mut self) -> OrderId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Allocate the next placement epoch.
    pub fn next_epoch(&mut self) -> u64 {
        let epoch = self.next_epoch;
        self.next_epoch += 1;
        epoch
    }

    pub fn insert(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    pub fn trader_of(&self, id: OrderId) -> Option<TraderId> {
        self.orders.get(&id).map(|o| o.trader)
    }

    pub fn status(&self, id: OrderId) -> Option<Status> {
        self.orders.get(&id).map(|o| o.status)
    }

    /// Mark an order cancelled and zero its residual. The caller is
    /// responsible for capturing the residual beforehand for refund and
    /// for unwinding the order's level/ladder presence.
    pub fn cancel(&mut self, id: OrderId) {
        if let Some(order) = self.orders.get_mut(&id) {
            order.status = Status::Cancelled;
            order.residual_quantity = crypto_bigint::U256::ZERO;
        }
    }
}
