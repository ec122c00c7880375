use super::types::OrderId;
use thiserror::Error;

/// Rejections raised by `Engine::place` before any custody is pulled or
/// any match attempted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// A limit order was submitted with a zero price. Zero is reserved
    /// as the "no price" sentinel and can never be a live limit price.
    #[error("limit price must be non-zero")]
    InvalidPrice,
    /// An order was submitted with a zero quantity.
    #[error("order quantity must be non-zero")]
    InvalidQuantity,
    /// A market order was submitted against an empty opposite ladder.
    /// No custody is pulled for a rejected market order.
    #[error("no resting liquidity to match against")]
    InsufficientLiquidity,
}

/// Rejections raised by `Engine::cancel`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CancelError {
    /// The caller is not the order's trader, or the order id does not
    /// exist in the registry at all.
    #[error("order {0} is not owned by the caller")]
    Unauthorized(OrderId),
    /// The order has already matched in full.
    #[error("order {0} is already filled")]
    OrderFilled(OrderId),
    /// The order was already cancelled.
    #[error("order {0} is already cancelled")]
    OrderCancelled(OrderId),
    /// Market orders never rest, so there is nothing to cancel.
    #[error("order {0} is a market order and cannot be cancelled")]
    MarketOrderUnsupported(OrderId),
}
