//! Genesis block construction
//!
//! Rebuilds a network's first block from its declared inputs so the hash can
//! be checked against the compiled-in expectation.

use crate::consensus::{Block, BlockHeader, Script, Transaction, OP_CHECKSIG};
use crate::crypto::Hash256;
use serde::Serialize;

/// Compact bits pushed as the first coinbase script element
const COINBASE_BITS_PUSH: i64 = 486_604_799;

/// Declared genesis inputs and expected results
#[derive(Debug, Clone, Copy)]
pub struct GenesisSpec {
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub reward: i64,
    /// Headline embedded in the coinbase script
    pub timestamp: &'static str,
    /// Uncompressed public key paid by the coinbase output (hex)
    pub output_pubkey: &'static str,
    pub expected_hash: &'static str,
    pub expected_merkle_root: &'static str,
}

impl GenesisSpec {
    /// Build the genesis block these inputs describe
    pub fn build_block(&self, output_pubkey: &[u8]) -> Block {
        let script_sig = Script::new()
            .push_int(COINBASE_BITS_PUSH)
            .push_num(4)
            .push_slice(self.timestamp.as_bytes());
        let script_pubkey = Script::new()
            .push_slice(output_pubkey)
            .push_opcode(OP_CHECKSIG);

        let coinbase = Transaction::coinbase(script_sig, self.reward, script_pubkey);
        let mut block = Block::new(
            BlockHeader {
                version: self.version,
                prev_block: Hash256::zero(),
                merkle_root: Hash256::zero(),
                time: self.time,
                bits: self.bits,
                nonce: self.nonce,
            },
            vec![coinbase],
        );
        block.header.merkle_root = block.compute_merkle_root();
        block
    }
}

/// Verified genesis summary carried by a built profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenesisInfo {
    pub hash: Hash256,
    pub merkle_root: Hash256,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub reward: i64,
}

impl GenesisInfo {
    pub fn from_block(block: &Block, reward: i64) -> Self {
        Self {
            hash: block.hash(),
            merkle_root: block.header.merkle_root,
            version: block.header.version,
            time: block.header.time,
            bits: block.header.bits,
            nonce: block.header.nonce,
            reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::mainnet;

    fn main_block() -> Block {
        let spec = mainnet::TEMPLATE.genesis;
        let pubkey = hex::decode(spec.output_pubkey).unwrap();
        spec.build_block(&pubkey)
    }

    #[test]
    fn test_coinbase_script_sig() {
        let block = main_block();
        let script = block.transactions[0].inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..8], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 30]);
        assert_eq!(&script[8..], b"Winner, winner chicken dinner.");
    }

    #[test]
    fn test_coinbase_txid_is_merkle_root() {
        let block = main_block();
        assert!(block.transactions[0].is_coinbase());
        assert_eq!(
            block.transactions[0].txid().to_hex(),
            "73b17d2797b7b4d0a6fe09204aa736b6c1d290d3a6a6f944b7eab02f7029d0af"
        );
        assert_eq!(block.header.merkle_root, block.transactions[0].txid());
    }

    #[test]
    fn test_genesis_hash() {
        let block = main_block();
        assert!(block.is_genesis());
        assert_eq!(
            block.hash().to_hex(),
            "852bf462534c29c0039513f244dd9b80a581f7cddf81214fe4236b3866c4d41d"
        );
    }

    #[test]
    fn test_changed_nonce_changes_hash() {
        let mut spec = mainnet::TEMPLATE.genesis;
        spec.nonce += 1;
        let pubkey = hex::decode(spec.output_pubkey).unwrap();
        let block = spec.build_block(&pubkey);
        assert_ne!(
            block.hash().to_hex(),
            "852bf462534c29c0039513f244dd9b80a581f7cddf81214fe4236b3866c4d41d"
        );
        assert_eq!(
            block.header.merkle_root.to_hex(),
            "73b17d2797b7b4d0a6fe09204aa736b6c1d290d3a6a6f944b7eab02f7029d0af"
        );
    }
}
