use clob_core::prelude::*;
use crypto_bigint::U256;

pub fn new_engine() -> Engine<InMemoryLedger> {
    Engine::new(EngineConfig::new(1, 2), InMemoryLedger::new())
}

pub fn u(n: u64) -> U256 {
    U256::from(n)
}

pub fn fund_numeraire(engine: &mut Engine<InMemoryLedger>, trader: TraderId, amount: u64) {
    engine.ledger_mut().fund(trader, engine.config().numeraire, u(amount));
}

pub fn fund_index(engine: &mut Engine<InMemoryLedger>, trader: TraderId, amount: u64) {
    engine.ledger_mut().fund(trader, engine.config().index, u(amount));
}
