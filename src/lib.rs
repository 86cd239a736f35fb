//! Altbet (ABET) Network Parameters Library
//!
//! Selects and exposes the compiled-in constants for one of the main, test,
//! regtest and unittest networks: genesis block, consensus thresholds,
//! address prefixes, governance keys, checkpoints and bootstrap seeds.
//!
//! Every profile rebuilds its genesis block and checks it against the
//! declared hash before it can be used.

pub mod chainparams;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod p2p;

pub use chainparams::{
    modifiable_params, params, select_params, select_params_from, NetworkId, NetworkProfile,
    ParamsError,
};

/// Protocol constants
pub mod constants {
    /// Base units per coin
    pub const COIN: i64 = 100_000_000;

    /// Seconds per day
    pub const ONE_DAY: i64 = 24 * 60 * 60;

    /// Seconds per week
    pub const ONE_WEEK: i64 = 7 * ONE_DAY;
}
