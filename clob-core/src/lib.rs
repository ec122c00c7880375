//! Price-time priority limit order book matching engine for a single
//! numeraire/index trading pair.
//!
//! See [`engine::prelude`] for the types most embedders need.

pub mod engine;

pub use engine::prelude::*;
