//! Cryptography module - SHA-256d, Quark header hashing, Merkle trees

mod hash;
mod merkle;
pub mod quark;

pub use hash::*;
pub use merkle::*;
pub use quark::hash_quark;
