//! Compact difficulty encoding
//!
//! A compact target is a base-256 floating point number: the top byte is the
//! length of the value in bytes, the lower 23 bits the mantissa and bit 23 the
//! sign.

use crate::crypto::Hash256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Convert compact difficulty to a 256-bit target.
///
/// Returns `None` for negative or overflowing encodings.
pub fn compact_to_target(compact: u32) -> Option<Hash256> {
    let size = (compact >> 24) as usize;
    let mut word = compact & MANTISSA_MASK;

    if word != 0 && compact & SIGN_BIT != 0 {
        return None;
    }
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if overflow {
        return None;
    }

    let mut target = [0u8; 32];
    if size <= 3 {
        word >>= 8 * (3 - size);
        target[..4].copy_from_slice(&word.to_le_bytes());
    } else {
        for (i, byte) in word.to_le_bytes()[..3].iter().enumerate() {
            let index = size - 3 + i;
            if index < 32 {
                target[index] = *byte;
            }
        }
    }
    Some(Hash256(target))
}

/// Convert a 256-bit target to compact difficulty
pub fn target_to_compact(target: &Hash256) -> u32 {
    let bytes = target.as_bytes();
    let mut size = bytes
        .iter()
        .rposition(|b| *b != 0)
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut compact: u32 = if size <= 3 {
        let mut low = [0u8; 4];
        low[..3].copy_from_slice(&bytes[..3]);
        u32::from_le_bytes(low) << (8 * (3 - size))
    } else {
        u32::from_le_bytes([bytes[size - 3], bytes[size - 2], bytes[size - 1], 0])
    };

    // keep the sign bit clear
    if compact & SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_bits() {
        let target = compact_to_target(0x1e0ffff0).unwrap();
        assert_eq!(
            target.to_hex(),
            "00000ffff0000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(target_to_compact(&target), 0x1e0ffff0);
    }

    #[test]
    fn test_pow_limits_to_compact() {
        assert_eq!(target_to_compact(&Hash256::max_shr(20)), 0x1e0fffff);
        assert_eq!(target_to_compact(&Hash256::max_shr(1)), 0x207fffff);
    }

    #[test]
    fn test_small_sizes() {
        assert_eq!(compact_to_target(0x01120000).unwrap(), Hash256::from_hex("12").unwrap());
        assert_eq!(compact_to_target(0x02123400).unwrap(), Hash256::from_hex("1234").unwrap());
        assert_eq!(target_to_compact(&Hash256::from_hex("12").unwrap()), 0x01120000);
        assert_eq!(target_to_compact(&Hash256::zero()), 0);
    }

    #[test]
    fn test_sign_bit_moves_to_next_byte() {
        let target = Hash256::from_hex("80").unwrap();
        assert_eq!(target_to_compact(&target), 0x02008000);
        assert_eq!(compact_to_target(0x02008000).unwrap(), target);
    }

    #[test]
    fn test_invalid_encodings() {
        assert!(compact_to_target(0x04923456).is_none());
        assert!(compact_to_target(0xff123456).is_none());
        // zero mantissa is never negative or overflowing
        assert_eq!(compact_to_target(0xff000000).unwrap(), Hash256::zero());
    }
}
