use super::types::{AssetId, Quantity, TraderId};

/// The custody contract the matching engine settles against.
///
/// `pull` debits `quantity` of `asset` from `trader`'s external balance
/// into the engine's escrow at order placement time; `push` credits it
/// back out, either to the counterparty on a fill or to the original
/// trader on cancellation or market-order refund. Both are infallible
/// from the engine's point of view: a collaborator that cannot honor a
/// pull (insufficient external balance) is expected to have already
/// rejected the placement before the engine ever calls it, since the
/// engine has no mechanism to unwind a partially applied match once
/// crossing has begun. Implementing that balance check, along with
/// authentication, wire transport, and persistence, is the embedder's
/// concern; this crate only defines the shape of the call.
pub trait TokenLedger {
    fn pull(&mut self, trader: TraderId, asset: AssetId, quantity: Quantity);
    fn push(&mut self, trader: TraderId, asset: AssetId, quantity: Quantity);
}

/// An in-memory `TokenLedger` for tests and documentation examples. Not a
/// production ledger: balances live only in a `HashMap` for the lifetime
/// of the process, with no persistence, authentication, or concurrency
/// control of its own.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: std::collections::HashMap<(TraderId, AssetId), Quantity>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            balances: std::collections::HashMap::new(),
        }
    }

    pub fn balance_of(&self, trader: TraderId, asset: AssetId) -> Quantity {
        self.balances
            .get(&(trader, asset))
            .copied()
            .unwrap_or(crypto_bigint::U256::ZERO)
    }

    /// Test/bootstrap helper: credit a trader without going through
    /// `push`, for seeding balances before an engine scenario runs.
    pub fn fund(&mut self, trader: TraderId, asset: AssetId, quantity: Quantity) {
        let entry = self
            .balances
            .entry((trader, asset))
            .or_insert(crypto_bigint::U256::ZERO);
        *entry = entry.wrapping_add(&quantity);
    }
}

impl TokenLedger for InMemoryLedger {
    fn pull(&mut self, trader: TraderId, asset: AssetId, quantity: Quantity) {
        let entry = self
            .balances
            .entry((trader, asset))
            .or_insert(crypto_bigint::U256::ZERO);
        *entry = entry.wrapping_sub(&quantity);
    }

    fn push(&mut self, trader: TraderId, asset: AssetId, quantity: Quantity) {
        let entry = self
            .balances
            .entry((trader, asset))
            .or_insert(crypto_bigint::U256::ZERO);
        *entry = entry.wrapping_add(&quantity);
    }
}
