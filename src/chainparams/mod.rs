//! Chain parameters module - Network profiles, checkpoints, and selection
//!
//! Exactly one network is active per process. Profiles are verified when
//! first built; selection only swaps which verified profile is active.

mod address;
mod checkpoints;
mod error;
mod genesis;
mod network;
mod profile;
mod registry;
mod spork;
mod zerocoin;

pub mod mainnet;
pub mod regtest;
pub mod testnet;
pub mod unittest;

pub use address::*;
pub use checkpoints::*;
pub use error::ParamsError;
pub use genesis::*;
pub use network::*;
pub use profile::*;
pub use registry::*;
pub use spork::*;
pub use zerocoin::*;
