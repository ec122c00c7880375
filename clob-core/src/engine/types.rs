use crypto_bigint::U256;
use mimalloc::MiMalloc;
use serde::{Deserialize, Serialize};

/// Global allocator.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// OrderId is the type used for order identifiers.
/// Ids are assigned by the `OrderRegistry` and are never reused.
pub type OrderId = u64;

/// TraderId is an opaque account identifier. The engine does not interpret
/// it beyond equality comparison for cancellation authorization.
pub type TraderId = u64;

/// AssetId identifies one of the two assets of the trading pair (the
/// numeraire or the index) at engine construction time. Interpretation of
/// the id (token address, symbol, ledger key, ...) is the embedder's
/// concern.
pub type AssetId = u64;

/// Price is a 256-bit unsigned integer, quoted as units of numeraire per
/// one unit of index. Zero is reserved as "no price" and is rejected by
/// any operation that takes an explicit limit price.
pub type Price = U256;

/// Quantity is a 256-bit unsigned integer. Its unit depends on the side of
/// the order carrying it: numeraire for a BID, index for an ASK (see
/// `Order` docs).
pub type Quantity = U256;

/// A monotonic placement stamp, assigned by the engine at `place` time.
/// Used only for observability/tie-break debugging; FIFO order is
/// enforced by queue insertion order, never by comparing epochs.
pub type Epoch = u64;

/// Side indicates which side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// A BID posts numeraire and seeks index.
    Bid,
    /// An ASK posts index and seeks numeraire.
    Ask,
}

impl Side {
    /// The side an incoming order of this side matches against.
    pub fn opposite(self) -> Side {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

/// Kind distinguishes a resting limit order from a sweep-only market order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// A limit order rests on the book if it is not fully filled on entry.
    Limit,
    /// A market order never rests; any unfilled residual is refunded.
    Market,
}

/// Status represents the current lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Resting, untouched by any match.
    Open,
    /// Resting, partially matched.
    Partial,
    /// Fully matched (or dust-retired, see `Order` docs on bid dust).
    Filled,
    /// Cancelled by its trader; residual was refunded.
    Cancelled,
}

impl Status {
    /// FILLED and CANCELLED are terminal: no further match or cancel may
    /// act on an order in either state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Filled | Status::Cancelled)
    }
}

/// A single order record, retained in the registry for the lifetime of the
/// engine even after it is no longer live on the book.
///
/// `original_quantity` and `residual_quantity` are numeraire units for a
/// BID and index units for an ASK, so that a buyer places an order in
/// terms of "how much am I willing to spend" rather than a pre-converted
/// index amount; see `DESIGN.md` for the rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub epoch: Epoch,
    pub trader: TraderId,
    pub side: Side,
    pub kind: Kind,
    /// `None` only for market orders, which are never placed at a price.
    pub price: Option<Price>,
    pub original_quantity: Quantity,
    pub residual_quantity: Quantity,
    pub status: Status,
}

impl Order {
    pub fn is_resting_eligible(&self) -> bool {
        self.kind == Kind::Limit && self.status != Status::Filled
    }
}

/// Emitted by `Engine::place` on every successful placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedEvent {
    pub id: OrderId,
    pub trader: TraderId,
    pub side: Side,
    pub price: Option<Price>,
    pub original_quantity: Quantity,
    pub residual_quantity: Quantity,
    pub status: Status,
    pub epoch: Epoch,
}

impl From<&Order> for OrderPlacedEvent {
    fn from(order: &Order) -> Self {
        OrderPlacedEvent {
            id: order.id,
            trader: order.trader,
            side: order.side,
            price: order.price,
            original_quantity: order.original_quantity,
            residual_quantity: order.residual_quantity,
            status: order.status,
            epoch: order.epoch,
        }
    }
}
