//! P2P bootstrap module - Seed tables and seed address materialization

mod seeds;

pub use seeds::*;
