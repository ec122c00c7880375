use clob_core::prelude::*;
use crypto_bigint::U256;

/// Build a fresh engine over asset ids 1 (numeraire) and 2 (index), backed
/// by an in-memory ledger with nothing funded yet.
pub fn new_engine() -> Engine<InMemoryLedger> {
    Engine::new(EngineConfig::new(1, 2), InMemoryLedger::new())
}

/// Shorthand for building a `Price`/`Quantity` from a small integer.
pub fn u(n: u64) -> U256 {
    U256::from(n)
}

/// Fund `trader` with `amount` of the engine's numeraire asset.
pub fn fund_numeraire(engine: &mut Engine<InMemoryLedger>, trader: TraderId, amount: u64) {
    engine.ledger_mut().fund(trader, engine.config().numeraire, u(amount));
}

/// Fund `trader` with `amount` of the engine's index asset.
pub fn fund_index(engine: &mut Engine<InMemoryLedger>, trader: TraderId, amount: u64) {
    engine.ledger_mut().fund(trader, engine.config().index, u(amount));
}
