//! Consensus module - Block and transaction structure, compact difficulty

mod block;
mod difficulty;
mod script;
mod transaction;

pub use block::*;
pub use difficulty::*;
pub use script::*;
pub use transaction::*;
