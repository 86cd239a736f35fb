//! Checkpoint anchors
//!
//! Trusted (height, hash) pairs that pin the chain history, plus the
//! transaction statistics used to estimate verification progress past the
//! last anchor.

use super::error::parse_hash;
use super::ParamsError;
use crate::constants::ONE_DAY;
use crate::crypto::Hash256;
use serde::Serialize;

/// Compiled-in checkpoint literals for one network
#[derive(Debug, Clone, Copy)]
pub struct CheckpointData {
    /// (height, display-order hash) pairs in ascending height order
    pub checkpoints: &'static [(u32, &'static str)],
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint
    pub transactions_at_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

/// A single trusted anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
}

/// Height-ordered anchor table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTable {
    entries: Vec<Checkpoint>,
    last_checkpoint_time: i64,
    transactions_at_last_checkpoint: u64,
    transactions_per_day: f64,
}

impl CheckpointTable {
    /// Build a table, rejecting duplicate or descending heights
    pub fn new(
        entries: Vec<Checkpoint>,
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, ParamsError> {
        for pair in entries.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ParamsError::CheckpointOrder {
                    previous: pair[0].height,
                    height: pair[1].height,
                });
            }
        }

        Ok(Self {
            entries,
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            transactions_per_day,
        })
    }

    /// Parse compiled-in literals
    pub fn from_data(data: &CheckpointData) -> Result<Self, ParamsError> {
        let entries = data
            .checkpoints
            .iter()
            .map(|(height, literal)| {
                Ok(Checkpoint {
                    height: *height,
                    hash: parse_hash(literal)?,
                })
            })
            .collect::<Result<Vec<_>, ParamsError>>()?;

        Self::new(
            entries,
            data.last_checkpoint_time,
            data.transactions_at_last_checkpoint,
            data.transactions_per_day,
        )
    }

    /// Trusted hash at `height`, if that height is anchored
    pub fn lookup(&self, height: u32) -> Option<Hash256> {
        self.entries
            .binary_search_by_key(&height, |c| c.height)
            .ok()
            .map(|index| self.entries[index].hash)
    }

    /// Height of the last anchor (0 for an empty table)
    ///
    /// No reorganization may remove a block at or below this height.
    pub fn highest_height(&self) -> u32 {
        self.entries.last().map(|c| c.height).unwrap_or(0)
    }

    /// True unless `height` is anchored to a different hash
    pub fn check_block(&self, height: u32, hash: &Hash256) -> bool {
        self.lookup(height).map_or(true, |anchor| anchor == *hash)
    }

    /// Highest anchor whose block the caller already knows
    pub fn last_known_checkpoint<F>(&self, is_known: F) -> Option<&Checkpoint>
    where
        F: Fn(&Hash256) -> bool,
    {
        self.entries.iter().rev().find(|c| is_known(&c.hash))
    }

    /// Estimated fraction of all transactions verified once the block at
    /// (`height`, `timestamp`) is connected, given the current time `now`.
    ///
    /// Advisory only. The result lies in [0, 1].
    pub fn estimate_progress(&self, height: u32, timestamp: i64, now: i64) -> f64 {
        let done = self.estimated_transactions(height, timestamp);
        let total = self.estimated_transactions(height, now.max(timestamp));
        if total <= 0.0 {
            return 1.0;
        }
        (done / total).clamp(0.0, 1.0)
    }

    fn estimated_transactions(&self, height: u32, timestamp: i64) -> f64 {
        let at_last = self.transactions_at_last_checkpoint as f64;
        if timestamp <= self.last_checkpoint_time {
            let top = self.highest_height();
            if top == 0 {
                return at_last;
            }
            at_last * f64::from(height.min(top)) / f64::from(top)
        } else {
            let elapsed = (timestamp - self.last_checkpoint_time) as f64;
            at_last + elapsed * self.transactions_per_day / ONE_DAY as f64
        }
    }

    pub fn entries(&self) -> &[Checkpoint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.last_checkpoint_time
    }

    pub fn transactions_at_last_checkpoint(&self) -> u64 {
        self.transactions_at_last_checkpoint
    }

    pub fn transactions_per_day(&self) -> f64 {
        self.transactions_per_day
    }
}
