//! 256-bit hash values and SHA-256d
//!
//! Hashes are stored in internal (little-endian) byte order and displayed
//! reversed, the way block and transaction ids are written everywhere else
//! in the network.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 32-byte hash / 256-bit unsigned value
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Zero hash (genesis previous-block hash)
    pub const fn zero() -> Self {
        Hash256([0u8; 32])
    }

    /// Create hash from internal-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    /// Parse a display-order hex literal.
    ///
    /// Accepts an optional `0x` prefix and fewer than 64 digits, so `"0x1"`
    /// parses to the value one.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        if digits.len() > 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)?;
        bytes.reverse();
        Ok(Hash256(bytes))
    }

    /// Display-order hex string (64 digits, no prefix)
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Get as internal-order bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The value `~0 >> shift`, as used for proof-of-work limits
    pub fn max_shr(shift: u32) -> Self {
        let mut bytes = [0xffu8; 32];
        let shift = shift.min(256) as usize;
        let whole = shift / 8;
        let rest = shift % 8;

        // most significant bytes live at the end
        for byte in bytes.iter_mut().rev().take(whole) {
            *byte = 0;
        }
        if whole < 32 && rest > 0 {
            bytes[31 - whole] = 0xff >> rest;
        }
        Hash256(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

/// Numeric ordering (most significant byte is the last one)
impl Ord for Hash256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for Hash256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Hash256 {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash256::from_hex(s)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// SHA-256 applied twice
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    Hash256(out)
}

/// SHA-256d of two hashes concatenated (merkle tree node)
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(&left.0);
    data[32..].copy_from_slice(&right.0);
    sha256d(&data)
}
