//! Quark header hash
//!
//! Nine chained 512-bit hashes, three of which branch on bit 3 of the
//! previous digest's first byte. Block headers with version below 4 are
//! identified by the first 256 bits of the final digest.

mod bmw;

pub use bmw::bmw512;

use super::Hash256;
use groestl::Groestl512;
use jh::Jh512;
use sha3::{Digest, Keccak512};
use skein::{consts::U64, Skein512};

fn digest512<D: Digest>(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

/// BLAKE-512 (final round, 16 rounds)
pub fn blake512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&<blake_hash::Blake512 as blake_hash::Digest>::digest(data));
    out
}

pub fn groestl512(data: &[u8]) -> [u8; 64] {
    digest512::<Groestl512>(data)
}

pub fn jh512(data: &[u8]) -> [u8; 64] {
    digest512::<Jh512>(data)
}

/// Skein-512 with 512-bit output
pub fn skein512(data: &[u8]) -> [u8; 64] {
    digest512::<Skein512<U64>>(data)
}

/// Keccak-512 (pre-standard padding)
pub fn keccak512(data: &[u8]) -> [u8; 64] {
    digest512::<Keccak512>(data)
}

fn branch(digest: &[u8; 64]) -> bool {
    digest[0] & 8 != 0
}

/// Quark hash of `data`
pub fn hash_quark(data: &[u8]) -> Hash256 {
    let h0 = blake512(data);
    let h1 = bmw512(&h0);
    let h2 = if branch(&h1) { groestl512(&h1) } else { skein512(&h1) };
    let h3 = groestl512(&h2);
    let h4 = jh512(&h3);
    let h5 = if branch(&h4) { blake512(&h4) } else { bmw512(&h4) };
    let h6 = keccak512(&h5);
    let h7 = skein512(&h6);
    let h8 = if branch(&h7) { keccak512(&h7) } else { jh512(&h7) };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h8[..32]);
    Hash256(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialized main-network genesis header
    const GENESIS_HEADER: &str = "01000000\
        0000000000000000000000000000000000000000000000000000000000000000\
        afd029702fb0eab744f9a6a6d390d2c1b636a74a2009fea6d0b4b797277db173\
        6c281a5d\
        f0ff0f1e\
        a8681300";

    fn header() -> Vec<u8> {
        hex::decode(GENESIS_HEADER).unwrap()
    }

    #[test]
    fn test_empty_input_vectors() {
        let vectors: [(fn(&[u8]) -> [u8; 64], &str); 5] = [
            (
                blake512,
                "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
                 628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8",
            ),
            (
                groestl512,
                "6d3ad29d279110eef3adbd66de2a0345a77baede1557f5d099fce0c03d6dc2ba\
                 8e6d4a6633dfbd66053c20faa87d1a11f39a7fbe4a6c2f009801370308fc4ad8",
            ),
            (
                jh512,
                "90ecf2f76f9d2c8017d979ad5ab96b87d58fc8fc4b83060f3f900774faa2c8fa\
                 be69c5f4ff1ec2b61d6b316941cedee117fb04b1f4c5bc1b919ae841c50eec4f",
            ),
            (
                skein512,
                "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af4\
                 1fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a",
            ),
            (
                keccak512,
                "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
                 c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e",
            ),
        ];
        for (hash, expected) in vectors {
            assert_eq!(hex::encode(hash(b"")), expected);
        }
    }

    #[test]
    fn test_genesis_chain_steps() {
        let h0 = blake512(&header());
        assert_eq!(
            hex::encode(h0),
            "e7b52d14a0722a287feb9864d054e2e45c96b0dddaeb8dc994f90363023c73f9\
             cd615c2e4f3d952d0e4c8809afe19a54e15ae2519e580f06378d6109e7c0f8b0"
        );

        let h1 = bmw512(&h0);
        assert_eq!(
            hex::encode(h1),
            "4b9bc3ff93c64d424ef23afac8f686af34f174db4c59ccc036d1db7df946bfc4\
             c727488dc0d61be93d65cb76467dfd3101614e82f179a39c46d7fb4d94e1676a"
        );
        assert!(branch(&h1));

        let h2 = groestl512(&h1);
        let h3 = groestl512(&h2);
        assert_eq!(
            hex::encode(h3),
            "9bfa0f614ac023cb2cdb9af9a95b652d8e870a6640c744228c5d40dc54224cdf\
             fa38dd7450550a3ef97d014fc077215e542fcfa54106764a9a7671b8351e4d1a"
        );

        let h4 = jh512(&h3);
        assert_eq!(
            hex::encode(h4),
            "29b21bdc1f338b71b9c55633442999f256e00fedd8805bd7914c6de94403870a\
             5a6e82f5659e0d7033846ba00fa8e2a6dde97ae11106fc99f35389cbf3d530b0"
        );

        let h6 = keccak512(&blake512(&h4));
        let h7 = skein512(&h6);
        assert_eq!(
            hex::encode(h7),
            "dd22c144381b5f0ac95411974a0263980f2d49330850e3482f1a55a0a1bce53f\
             110b50c2cf2dc8785834fcf5e77f6d303fba78fb93e7a7216f9bc0ac9eb87148"
        );
    }

    #[test]
    fn test_genesis_header_hash() {
        assert_eq!(
            hash_quark(&header()).to_hex(),
            "852bf462534c29c0039513f244dd9b80a581f7cddf81214fe4236b3866c4d41d"
        );
    }
}
