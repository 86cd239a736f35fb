//! Governance keys
//!
//! Spork messages toggle network features and must be signed by the current
//! spork key. During the key rotation window the previous key is still
//! honoured.

use super::ParamsError;
use k256::ecdsa::VerifyingKey;
use serde::Serialize;

/// Compiled-in spork key literals and rotation times
#[derive(Debug, Clone, Copy)]
pub struct SporkTemplate {
    /// Current key (SEC1 hex)
    pub key: &'static str,
    /// Previous key (SEC1 hex)
    pub old_key: &'static str,
    /// From this time only the current key signs
    pub enforce_new_key_time: i64,
    /// From this time the previous key is never accepted
    pub reject_old_key_time: i64,
}

/// Parsed spork keys and rotation policy
#[derive(Debug, Clone, Serialize)]
pub struct SporkParams {
    key_hex: &'static str,
    old_key_hex: &'static str,
    #[serde(skip)]
    key: VerifyingKey,
    #[serde(skip)]
    old_key: VerifyingKey,
    enforce_new_key_time: i64,
    reject_old_key_time: i64,
}

impl SporkParams {
    pub fn new(template: &SporkTemplate) -> Result<Self, ParamsError> {
        Ok(Self {
            key_hex: template.key,
            old_key_hex: template.old_key,
            key: parse_public_key("spork", template.key)?,
            old_key: parse_public_key("old spork", template.old_key)?,
            enforce_new_key_time: template.enforce_new_key_time,
            reject_old_key_time: template.reject_old_key_time,
        })
    }

    /// Key expected to sign spork messages at `now`
    pub fn signing_key(&self, now: i64) -> &VerifyingKey {
        if now >= self.enforce_new_key_time {
            &self.key
        } else {
            &self.old_key
        }
    }

    /// Whether a spork signed with `key` is honoured at `now`.
    ///
    /// The previous key lapses at whichever of the enforce and reject times
    /// comes first, so a template with a reject time before enforcement
    /// still cuts the old key off early.
    pub fn accepts(&self, key: &VerifyingKey, now: i64) -> bool {
        if *key == self.key {
            return true;
        }
        *key == self.old_key && now < self.enforce_new_key_time && now < self.reject_old_key_time
    }

    pub fn key(&self) -> &VerifyingKey {
        &self.key
    }

    pub fn old_key(&self) -> &VerifyingKey {
        &self.old_key
    }

    pub fn key_hex(&self) -> &'static str {
        self.key_hex
    }

    pub fn old_key_hex(&self) -> &'static str {
        self.old_key_hex
    }

    pub fn enforce_new_key_time(&self) -> i64 {
        self.enforce_new_key_time
    }

    pub fn reject_old_key_time(&self) -> i64 {
        self.reject_old_key_time
    }
}

/// Parse a SEC1-encoded secp256k1 public key from hex
pub fn parse_public_key(role: &'static str, key_hex: &str) -> Result<VerifyingKey, ParamsError> {
    let bytes = hex::decode(key_hex).map_err(|e| ParamsError::InvalidGovernanceKey {
        role,
        reason: e.to_string(),
    })?;
    VerifyingKey::from_sec1_bytes(&bytes).map_err(|e| ParamsError::InvalidGovernanceKey {
        role,
        reason: e.to_string(),
    })
}
