use super::queue::FifoQueue;
use super::types::Quantity;
use crypto_bigint::U256;

/// Aggregated per-price state. A `Level` has no behavior beyond being a
/// container: `bid_depth`/`ask_depth` track the live resting quantity on
/// each side at this price, and the matching engine is the only code that
/// ever mutates them.
///
/// Both a bid queue and an ask queue are carried on every `Level` rather
/// than splitting levels by side, since the no-crossed-book invariant
/// means a price is only ever live on one side's ladder at a time in
/// practice, but keeping both queues on one struct avoids a second map
/// lookup keyed by side.
#[derive(Debug)]
pub struct Level {
    pub bid_depth: Quantity,
    pub ask_depth: Quantity,
    pub bid_queue: FifoQueue,
    pub ask_queue: FifoQueue,
}

impl Level {
    pub fn new() -> Self {
        Self {
            bid_depth: U256::ZERO,
            ask_depth: U256::ZERO,
            bid_queue: FifoQueue::new(),
            ask_queue: FifoQueue::new(),
        }
    }

    /// A level with nothing resting on either side is eligible for removal
    /// from the level map and its price from the ladder.
    pub fn is_empty(&self) -> bool {
        self.bid_queue.is_empty() && self.ask_queue.is_empty()
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}
