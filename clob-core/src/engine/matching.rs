use super::book::Engine;
use super::error::{CancelError, PlaceError};
use super::ledger::TokenLedger;
use super::level::Level;
use super::num::{div_floor, is_zero, mul};
use super::types::{Kind, Order, OrderId, OrderPlacedEvent, Price, Quantity, Side, Status, TraderId};
use crypto_bigint::U256;

impl<L: TokenLedger> Engine<L> {
    /// Place a resting limit order. Pulls custody up front, crosses
    /// immediately against any marketable resting liquidity, and rests
    /// whatever residual remains unless that residual is dust (see
    /// `bid_post_status`).
    pub fn place_limit(
        &mut self,
        side: Side,
        price: Price,
        quantity: Quantity,
        trader: TraderId,
    ) -> Result<OrderId, PlaceError> {
        if is_zero(price) {
            return Err(PlaceError::InvalidPrice);
        }
        if is_zero(quantity) {
            return Err(PlaceError::InvalidQuantity);
        }

        let pull_asset = match side {
            Side::Bid => self.config.numeraire,
            Side::Ask => self.config.index,
        };
        self.ledger.pull(trader, pull_asset, quantity);

        let mut residual = quantity;
        match side {
            Side::Bid => self.cross_bid(Some(price), &mut residual, trader),
            Side::Ask => self.cross_ask(Some(price), &mut residual, trader),
        }

        let status = match side {
            Side::Bid => bid_post_status(residual, quantity, price),
            Side::Ask => ask_post_status(residual, quantity),
        };

        let id = self.registry.next_id();
        let epoch = self.registry.next_epoch();
        let order = Order {
            id,
            epoch,
            trader,
            side,
            kind: Kind::Limit,
            price: Some(price),
            original_quantity: quantity,
            residual_quantity: residual,
            status,
        };

        if status != Status::Filled {
            self.enqueue_resting(&order);
        }

        tracing::info!(
            order_id = id,
            ?side,
            ?status,
            "order placed"
        );
        let event = OrderPlacedEvent::from(&order);
        tracing::debug!(?event, "order placed event");
        self.registry.insert(order);

        Ok(id)
    }

    /// Place a market order: sweeps the opposite ladder without a limit
    /// price and never rests. Any residual that cannot be matched is
    /// refunded to the trader, and the order is marked `Partial` rather
    /// than the dust-retirement rule limit orders use, since a market
    /// order's unfilled remainder is always returned, never forfeited.
    pub fn place_market(
        &mut self,
        side: Side,
        quantity: Quantity,
        trader: TraderId,
    ) -> Result<OrderId, PlaceError> {
        if is_zero(quantity) {
            return Err(PlaceError::InvalidQuantity);
        }

        let opposite_empty = match side {
            Side::Bid => self.ask_ladder.is_empty(),
            Side::Ask => self.bid_ladder.is_empty(),
        };
        if opposite_empty {
            return Err(PlaceError::InsufficientLiquidity);
        }

        let pull_asset = match side {
            Side::Bid => self.config.numeraire,
            Side::Ask => self.config.index,
        };
        self.ledger.pull(trader, pull_asset, quantity);

        let mut residual = quantity;
        match side {
            Side::Bid => self.cross_bid(None, &mut residual, trader),
            Side::Ask => self.cross_ask(None, &mut residual, trader),
        }

        if !is_zero(residual) {
            self.ledger.push(trader, pull_asset, residual);
        }

        let status = if is_zero(residual) {
            Status::Filled
        } else {
            Status::Partial
        };

        let id = self.registry.next_id();
        let epoch = self.registry.next_epoch();
        let order = Order {
            id,
            epoch,
            trader,
            side,
            kind: Kind::Market,
            price: None,
            original_quantity: quantity,
            residual_quantity: residual,
            status,
        };

        tracing::info!(
            order_id = id,
            ?side,
            ?status,
            "market order placed"
        );
        self.registry.insert(order);

        Ok(id)
    }

    /// Cancel a resting limit order, refunding its residual. Market
    /// orders never rest and cannot be cancelled. An order id unknown to
    /// the registry is reported as `Unauthorized`, the same as a known
    /// order owned by someone other than `caller` — the registry does
    /// not distinguish "never existed" from "not yours" to the caller.
    pub fn cancel(&mut self, id: OrderId, caller: TraderId) -> Result<(), CancelError> {
        let order = self
            .registry
            .get(id)
            .ok_or(CancelError::Unauthorized(id))?;

        if order.trader != caller {
            return Err(CancelError::Unauthorized(id));
        }
        if order.kind == Kind::Market {
            return Err(CancelError::MarketOrderUnsupported(id));
        }
        match order.status {
            Status::Filled => return Err(CancelError::OrderFilled(id)),
            Status::Cancelled => return Err(CancelError::OrderCancelled(id)),
            Status::Open | Status::Partial => {}
        }

        let side = order.side;
        let price = order.price.expect("resting limit order must carry a price");
        let residual = order.residual_quantity;
        let trader = order.trader;

        self.registry.cancel(id);

        if let Some(level) = self.levels.get_mut(&price) {
            match side {
                Side::Bid => {
                    level.bid_depth = level.bid_depth.wrapping_sub(&residual);
                    level.bid_queue.remove(id);
                }
                Side::Ask => {
                    level.ask_depth = level.ask_depth.wrapping_sub(&residual);
                    level.ask_queue.remove(id);
                }
            }
            if level.is_empty() {
                self.levels.remove(&price);
                match side {
                    Side::Bid => self.bid_ladder.remove(price),
                    Side::Ask => self.ask_ladder.remove(price),
                }
            }
        }

        let refund_asset = match side {
            Side::Bid => self.config.numeraire,
            Side::Ask => self.config.index,
        };
        self.ledger.push(trader, refund_asset, residual);

        tracing::info!(order_id = id, ?side, "order cancelled");

        Ok(())
    }

    /// Insert a newly placed, not-fully-filled limit order into its
    /// level and ladder.
    fn enqueue_resting(&mut self, order: &Order) {
        let price = order.price.expect("resting limit order must carry a price");
        let level = self.levels.entry(price).or_insert_with(Level::new);
        match order.side {
            Side::Bid => {
                level.bid_depth = level.bid_depth.wrapping_add(&order.residual_quantity);
                level.bid_queue.enqueue(order.id);
                self.bid_ladder.insert(price);
            }
            Side::Ask => {
                level.ask_depth = level.ask_depth.wrapping_add(&order.residual_quantity);
                level.ask_queue.enqueue(order.id);
                self.ask_ladder.insert(price);
            }
        }
    }

    /// Walk the ask ladder ascending, matching a bid-side taker
    /// (incoming buy) against resting asks. `residual` is numeraire;
    /// `limit` bounds how high a price the taker will cross, `None`
    /// for a market order.
    fn cross_bid(&mut self, limit: Option<Price>, residual: &mut Quantity, taker: TraderId) {
        loop {
            if is_zero(*residual) {
                break;
            }
            let Some(p_ask) = self.ask_ladder.min() else {
                break;
            };
            if let Some(lim) = limit {
                if p_ask > lim {
                    break;
                }
            }
            if is_zero(div_floor(*residual, p_ask)) {
                break;
            }

            let mut index_accrued = U256::ZERO;
            let mut partial_break = false;

            loop {
                if is_zero(*residual) {
                    break;
                }
                let level = self
                    .levels
                    .get_mut(&p_ask)
                    .expect("ask price on ladder must have a level");
                let Some(ask_id) = level.ask_queue.peek() else {
                    break;
                };
                let (ask_trader, a_rem) = {
                    let ask_order = self
                        .registry
                        .get(ask_id)
                        .expect("queued id must exist in registry");
                    (ask_order.trader, ask_order.residual_quantity)
                };

                let max_index_buyable = div_floor(*residual, p_ask);
                if is_zero(max_index_buyable) {
                    break;
                }

                if max_index_buyable >= a_rem {
                    let n_spent = mul(a_rem, p_ask);
                    *residual = residual.wrapping_sub(&n_spent);
                    index_accrued = index_accrued.wrapping_add(&a_rem);
                    level.ask_depth = level.ask_depth.wrapping_sub(&a_rem);
                    level.ask_queue.dequeue();

                    let ask_order_mut = self.registry.get_mut(ask_id).unwrap();
                    ask_order_mut.residual_quantity = U256::ZERO;
                    ask_order_mut.status = Status::Filled;

                    self.ledger.push(ask_trader, self.config.numeraire, n_spent);
                } else {
                    let fill_qty = max_index_buyable;
                    let n_spent = mul(fill_qty, p_ask);
                    *residual = residual.wrapping_sub(&n_spent);
                    index_accrued = index_accrued.wrapping_add(&fill_qty);
                    level.ask_depth = level.ask_depth.wrapping_sub(&fill_qty);
                    let new_resid = a_rem.wrapping_sub(&fill_qty);

                    let ask_order_mut = self.registry.get_mut(ask_id).unwrap();
                    ask_order_mut.residual_quantity = new_resid;
                    ask_order_mut.status = Status::Partial;

                    self.ledger.push(ask_trader, self.config.numeraire, n_spent);
                    partial_break = true;
                }

                if partial_break {
                    break;
                }
            }

            if !is_zero(index_accrued) {
                self.ledger.push(taker, self.config.index, index_accrued);
            }

            let level_now_empty = self
                .levels
                .get(&p_ask)
                .map(Level::is_empty)
                .unwrap_or(true);
            if level_now_empty {
                self.levels.remove(&p_ask);
                self.ask_ladder.remove(p_ask);
            }

            if partial_break {
                break;
            }
        }
    }

    /// Walk the bid ladder descending, matching an ask-side taker
    /// (incoming sell) against resting bids. `residual` is index
    /// units; `limit` bounds how low a price the taker will cross,
    /// `None` for a market order. A resting bid whose remaining
    /// numeraire cannot buy even one index unit at its own price is
    /// evicted as dust rather than matched, independent of the
    /// taker's own residual.
    fn cross_ask(&mut self, limit: Option<Price>, residual: &mut Quantity, taker: TraderId) {
        loop {
            if is_zero(*residual) {
                break;
            }
            let Some(p_bid) = self.bid_ladder.max() else {
                break;
            };
            if let Some(lim) = limit {
                if p_bid < lim {
                    break;
                }
            }

            loop {
                if is_zero(*residual) {
                    break;
                }
                let level = self
                    .levels
                    .get_mut(&p_bid)
                    .expect("bid price on ladder must have a level");
                let Some(bid_id) = level.bid_queue.peek() else {
                    break;
                };
                let (bid_trader, bid_rem) = {
                    let bid_order = self
                        .registry
                        .get(bid_id)
                        .expect("queued id must exist in registry");
                    (bid_order.trader, bid_order.residual_quantity)
                };

                let max_sellable = div_floor(bid_rem, p_bid);
                if is_zero(max_sellable) {
                    level.bid_depth = level.bid_depth.wrapping_sub(&bid_rem);
                    level.bid_queue.dequeue();
                    let bid_order_mut = self.registry.get_mut(bid_id).unwrap();
                    bid_order_mut.status = Status::Filled;
                    continue;
                }

                let index_to_fill = max_sellable.min(*residual);
                let n_received = mul(index_to_fill, p_bid);
                *residual = residual.wrapping_sub(&index_to_fill);
                let new_bid_resid = bid_rem.wrapping_sub(&n_received);
                let now_dust = is_zero(div_floor(new_bid_resid, p_bid));
                // A bid retired as dust leaves depth entirely, not just the
                // amount just traded: the dust it keeps is never matchable
                // again, so it cannot still count toward live depth.
                let depth_decrement = if now_dust { bid_rem } else { n_received };
                level.bid_depth = level.bid_depth.wrapping_sub(&depth_decrement);

                let bid_order_mut = self.registry.get_mut(bid_id).unwrap();
                bid_order_mut.residual_quantity = new_bid_resid;
                bid_order_mut.status = if now_dust {
                    Status::Filled
                } else {
                    Status::Partial
                };
                if now_dust {
                    level.bid_queue.dequeue();
                }

                self.ledger.push(taker, self.config.numeraire, n_received);
                self.ledger.push(bid_trader, self.config.index, index_to_fill);
            }

            let level_now_empty = self
                .levels
                .get(&p_bid)
                .map(Level::is_empty)
                .unwrap_or(true);
            if level_now_empty {
                self.levels.remove(&p_bid);
                self.bid_ladder.remove(p_bid);
            }
        }
    }
}

/// Post-crossing status for a BID limit order: dust (remaining
/// numeraire cannot buy one index unit at the order's own limit price)
/// retires the order as `Filled` rather than leaving it resting or
/// refunding it.
fn bid_post_status(residual: Quantity, original: Quantity, limit: Price) -> Status {
    if is_zero(div_floor(residual, limit)) {
        Status::Filled
    } else if residual < original {
        Status::Partial
    } else {
        Status::Open
    }
}

/// Post-crossing status for an ASK limit order: index units have no
/// dust concept, a zero residual is simply fully filled.
fn ask_post_status(residual: Quantity, original: Quantity) -> Status {
    if is_zero(residual) {
        Status::Filled
    } else if residual < original {
        Status::Partial
    } else {
        Status::Open
    }
}
