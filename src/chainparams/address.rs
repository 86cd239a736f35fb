//! Base58Check address prefixes
//!
//! Address format: Base58(version byte + 20-byte hash + checksum[0:4]), where
//! the checksum is the start of SHA-256d over the version and hash.

use super::ParamsError;
use crate::crypto::sha256d;
use serde::Serialize;

/// Address and key encoding prefixes for one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: u8,
    pub script_address: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    /// BIP44 coin type (hardened)
    pub ext_coin_type: [u8; 4],
}

/// What a decoded address pays to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubKeyHash([u8; 20]),
    ScriptHash([u8; 20]),
}

impl Base58Prefixes {
    /// Encode a public key hash
    pub fn encode_pubkey_address(&self, hash: &[u8; 20]) -> String {
        encode_check(self.pubkey_address, hash)
    }

    /// Encode a script hash
    pub fn encode_script_address(&self, hash: &[u8; 20]) -> String {
        encode_check(self.script_address, hash)
    }

    /// Decode an address and classify it by version byte
    pub fn decode_address(&self, address: &str) -> Result<AddressKind, ParamsError> {
        let (version, hash) = decode_check(address)?;
        match version {
            v if v == self.pubkey_address => Ok(AddressKind::PubKeyHash(hash)),
            v if v == self.script_address => Ok(AddressKind::ScriptHash(hash)),
            _ => Err(ParamsError::InvalidAddress {
                address: address.to_string(),
                reason: "unknown version byte",
            }),
        }
    }
}

/// Decode a Base58Check address of any version into its version byte and hash
pub fn decode_check(address: &str) -> Result<(u8, [u8; 20]), ParamsError> {
    let invalid = |reason| ParamsError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|_| invalid("invalid base58 encoding"))?;
    if decoded.len() != 25 {
        return Err(invalid("invalid length"));
    }

    let (payload, checksum) = decoded.split_at(21);
    if checksum != &sha256d(payload).0[..4] {
        return Err(invalid("invalid checksum"));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok((payload[0], hash))
}

fn encode_check(version: u8, hash: &[u8; 20]) -> String {
    let mut data = Vec::with_capacity(25);
    data.push(version);
    data.extend_from_slice(hash);
    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum.0[..4]);
    bs58::encode(data).into_string()
}
