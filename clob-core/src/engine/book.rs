use super::config::EngineConfig;
use super::ladder::PriceLadder;
use super::ledger::TokenLedger;
use super::level::Level;
use super::registry::OrderRegistry;
use super::types::{Order, OrderId, Price, Quantity, Side};
use crypto_bigint::U256;
use std::collections::HashMap;

/// The matching engine for one numeraire/index trading pair.
///
/// `Engine` owns the entire book: the order registry, a `Level` per live
/// price, the bid and ask price ladders, and the settlement collaborator
/// it pulls/pushes custody through. Every public method takes `&mut
/// self` and runs to completion as a single atomic step; per the
/// concurrency model this crate targets, serializing concurrent access
/// (a `Mutex` around the engine, say) is the embedder's responsibility,
/// not something this type does for itself.
pub struct Engine<L: TokenLedger> {
    pub(crate) config: EngineConfig,
    pub(crate) registry: OrderRegistry,
    pub(crate) levels: HashMap<Price, Level>,
    pub(crate) bid_ladder: PriceLadder,
    pub(crate) ask_ladder: PriceLadder,
    pub(crate) ledger: L,
}

impl<L: TokenLedger> Engine<L> {
    pub fn new(config: EngineConfig, ledger: L) -> Self {
        Self {
            config,
            registry: OrderRegistry::new(),
            levels: HashMap::new(),
            bid_ladder: PriceLadder::new(),
            ask_ladder: PriceLadder::new(),
            ledger,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// The best (highest) live bid price.
    pub fn best_bid(&self) -> Option<Price> {
        self.bid_ladder.max()
    }

    /// The best (lowest) live ask price.
    pub fn best_ask(&self) -> Option<Price> {
        self.ask_ladder.min()
    }

    /// All live bid prices, descending (best bid first).
    pub fn all_bid_prices(&self) -> Vec<Price> {
        let mut prices = self.bid_ladder.to_vec();
        prices.reverse();
        prices
    }

    /// All live ask prices, ascending.
    pub fn all_ask_prices(&self) -> Vec<Price> {
        self.ask_ladder.to_vec()
    }

    /// Live resting depth at `price` on `side`, zero if the price is not
    /// on that side's ladder at all.
    pub fn depth(&self, side: Side, price: Price) -> Quantity {
        match self.levels.get(&price) {
            Some(level) => match side {
                Side::Bid => level.bid_depth,
                Side::Ask => level.ask_depth,
            },
            None => U256::ZERO,
        }
    }

    /// The ids resting at `price` on the bid side, front to back.
    pub fn bids_at(&self, price: Price) -> Vec<OrderId> {
        self.levels
            .get(&price)
            .map(|level| level.bid_queue.to_list())
            .unwrap_or_default()
    }

    /// The ids resting at `price` on the ask side, front to back.
    pub fn asks_at(&self, price: Price) -> Vec<OrderId> {
        self.levels
            .get(&price)
            .map(|level| level.ask_queue.to_list())
            .unwrap_or_default()
    }

    /// The full record for `id`, live or terminal.
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.registry.get(id)
    }
}
