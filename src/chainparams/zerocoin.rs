//! Zerocoin trusted modulus
//!
//! The modulus literal is read twice: as decimal for the current parameter
//! set and as hexadecimal for the legacy one.

use super::ParamsError;
use num_bigint::BigUint;
use serde::Serialize;

/// Compiled-in zerocoin literals
#[derive(Debug, Clone, Copy)]
pub struct ZerocoinTemplate {
    /// Modulus digits
    pub modulus: &'static str,
    pub start_height: u32,
    /// Last height that still uses the legacy parameters
    pub last_old_params: u32,
}

/// Parsed zerocoin parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZerocoinParams {
    #[serde(skip)]
    modulus: BigUint,
    #[serde(skip)]
    legacy_modulus: BigUint,
    modulus_bits: u64,
    start_height: u32,
    last_old_params: u32,
}

impl ZerocoinParams {
    pub fn new(template: &ZerocoinTemplate) -> Result<Self, ParamsError> {
        let digits = template.modulus.as_bytes();
        let modulus =
            BigUint::parse_bytes(digits, 10).ok_or(ParamsError::InvalidZerocoinModulus)?;
        let legacy_modulus =
            BigUint::parse_bytes(digits, 16).ok_or(ParamsError::InvalidZerocoinModulus)?;

        Ok(Self {
            modulus_bits: modulus.bits(),
            modulus,
            legacy_modulus,
            start_height: template.start_height,
            last_old_params: template.last_old_params,
        })
    }

    /// Current modulus (decimal reading)
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Legacy modulus (hexadecimal reading)
    pub fn legacy_modulus(&self) -> &BigUint {
        &self.legacy_modulus
    }

    /// Modulus in force at `height`
    pub fn modulus_for_height(&self, height: u32) -> &BigUint {
        if height > self.last_old_params {
            &self.modulus
        } else {
            &self.legacy_modulus
        }
    }

    pub fn start_height(&self) -> u32 {
        self.start_height
    }

    pub fn last_old_params(&self) -> u32 {
        self.last_old_params
    }

    pub fn is_active(&self, height: u32) -> bool {
        height >= self.start_height
    }
}
