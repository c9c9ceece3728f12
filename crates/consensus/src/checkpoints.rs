//! Hard-coded checkpoints and the sync-progress estimate built on them.

use std::collections::BTreeMap;

use crate::params::{hash256_from_hex, Hash256, HexError};

/// Weight of a transaction verified after the last checkpoint relative to one
/// verified below it (signatures are skipped under a checkpoint).
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Literal checkpoint data as shipped with a network profile.
#[derive(Clone, Copy, Debug)]
pub struct CheckpointData {
    pub entries: &'static [(i32, &'static str)],
    /// Unix timestamp of the last checkpoint block.
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint.
    pub tx_count_at_last: i64,
    /// Estimated transactions per day after the last checkpoint.
    pub est_tx_per_day: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckpointSummary {
    pub last_checkpoint_time: i64,
    pub tx_count_at_last: i64,
    pub est_tx_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    Empty,
    NonIncreasingHeight { previous: i32, height: i32 },
    InvalidHash { height: i32, error: HexError },
}

impl std::fmt::Display for CheckpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckpointError::Empty => write!(f, "checkpoint table is empty"),
            CheckpointError::NonIncreasingHeight { previous, height } => write!(
                f,
                "checkpoint height {height} does not follow {previous}"
            ),
            CheckpointError::InvalidHash { height, error } => {
                write!(f, "checkpoint {height} has invalid hash: {error}")
            }
        }
    }
}

impl std::error::Error for CheckpointError {}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<i32, Hash256>,
    summary: CheckpointSummary,
}

impl CheckpointTable {
    pub fn from_data(data: &CheckpointData) -> Result<Self, CheckpointError> {
        let mut checkpoints = BTreeMap::new();
        let mut previous: Option<i32> = None;
        for (height, hex) in data.entries {
            if let Some(previous) = previous {
                if *height <= previous {
                    return Err(CheckpointError::NonIncreasingHeight {
                        previous,
                        height: *height,
                    });
                }
            }
            let hash = hash256_from_hex(hex).map_err(|error| CheckpointError::InvalidHash {
                height: *height,
                error,
            })?;
            checkpoints.insert(*height, hash);
            previous = Some(*height);
        }
        if checkpoints.is_empty() {
            return Err(CheckpointError::Empty);
        }

        Ok(Self {
            checkpoints,
            summary: CheckpointSummary {
                last_checkpoint_time: data.last_checkpoint_time,
                tx_count_at_last: data.tx_count_at_last,
                est_tx_per_day: data.est_tx_per_day,
            },
        })
    }

    pub fn hash_at(&self, height: i32) -> Option<Hash256> {
        self.checkpoints.get(&height).copied()
    }

    pub fn summary(&self) -> CheckpointSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &Hash256)> + '_ {
        self.checkpoints.iter().map(|(height, hash)| (*height, hash))
    }

    /// Height of the highest checkpoint, i.e. the minimum block count a fully
    /// synced node is known to have.
    pub fn last_height(&self) -> i32 {
        self.checkpoints
            .keys()
            .next_back()
            .copied()
            .unwrap_or_default()
    }

    pub fn last_checkpoint_at_or_below(&self, height: i32) -> Option<(i32, Hash256)> {
        self.checkpoints
            .range(..=height)
            .next_back()
            .map(|(height, hash)| (*height, *hash))
    }

    /// Accepts `hash` at `height` unless a checkpoint pins a different block there.
    pub fn check(&self, height: i32, hash: &Hash256) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Fraction of total verification work done once the chain reaches a tip with
    /// `chain_tx` cumulative transactions and block time `tip_time`.
    pub fn guess_verification_progress(
        &self,
        chain_tx: i64,
        tip_time: i64,
        now: i64,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks {
            SIGCHECK_VERIFICATION_FACTOR
        } else {
            1.0
        };
        let summary = &self.summary;

        let (work_before, work_after) = if chain_tx <= summary.tx_count_at_last {
            let cheap_before = chain_tx as f64;
            let cheap_after = (summary.tx_count_at_last - chain_tx) as f64;
            let expensive_after = (now - summary.last_checkpoint_time) as f64 / SECONDS_PER_DAY
                * summary.est_tx_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = summary.tx_count_at_last as f64;
            let expensive_before = (chain_tx - summary.tx_count_at_last) as f64;
            let expensive_after =
                (now - tip_time) as f64 / SECONDS_PER_DAY * summary.est_tx_per_day;
            (
                cheap_before + expensive_before * factor,
                expensive_after * factor,
            )
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 1.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: CheckpointData = CheckpointData {
        entries: &[(0, "0x01"), (10, "0x0a"), (20, "0x14")],
        last_checkpoint_time: 1_000_000,
        tx_count_at_last: 1_000,
        est_tx_per_day: 100.0,
    };

    #[test]
    fn lookup_and_check() {
        let table = CheckpointTable::from_data(&SAMPLE).expect("table");
        assert_eq!(table.len(), 3);
        assert_eq!(table.last_height(), 20);

        let mut ten = [0u8; 32];
        ten[0] = 0x0a;
        assert_eq!(table.hash_at(10), Some(ten));
        assert_eq!(table.hash_at(11), None);

        assert!(table.check(10, &ten));
        assert!(!table.check(20, &ten));
        assert!(table.check(15, &[0xffu8; 32]));

        assert_eq!(table.last_checkpoint_at_or_below(19).map(|(h, _)| h), Some(10));
        assert_eq!(table.last_checkpoint_at_or_below(20).map(|(h, _)| h), Some(20));
        assert_eq!(table.last_checkpoint_at_or_below(-1), None);
    }

    #[test]
    fn rejects_unordered_heights() {
        let data = CheckpointData {
            entries: &[(0, "0x01"), (10, "0x02"), (10, "0x03")],
            ..SAMPLE
        };
        assert_eq!(
            CheckpointTable::from_data(&data),
            Err(CheckpointError::NonIncreasingHeight {
                previous: 10,
                height: 10
            })
        );

        let data = CheckpointData {
            entries: &[],
            ..SAMPLE
        };
        assert_eq!(CheckpointTable::from_data(&data), Err(CheckpointError::Empty));
    }

    #[test]
    fn rejects_bad_hash() {
        let data = CheckpointData {
            entries: &[(0, "zz")],
            ..SAMPLE
        };
        assert!(matches!(
            CheckpointTable::from_data(&data),
            Err(CheckpointError::InvalidHash { height: 0, .. })
        ));
    }

    #[test]
    fn progress_estimate() {
        let table = CheckpointTable::from_data(&SAMPLE).expect("table");
        let now = SAMPLE.last_checkpoint_time;

        // Exactly at the last checkpoint with nothing produced since.
        let at_last = table.guess_verification_progress(1_000, now, now, true);
        assert!((at_last - 1.0).abs() < 1e-9);

        // Halfway through the cheap section, one day of expected traffic ahead.
        let half = table.guess_verification_progress(500, 0, now + 86_400, false);
        assert!((half - 500.0 / 1_100.0).abs() < 1e-9);

        let early = table.guess_verification_progress(0, 0, now, true);
        assert_eq!(early, 0.0);
    }
}
