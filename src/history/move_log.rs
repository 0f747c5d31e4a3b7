//! Move log: every attempted move, newest last

use crate::history::bounded::{BoundedLog, RetentionPolicy};
use crate::history::metrics::combined_variance;
use crate::types::MoveRecord;

/// Bounded history of move records, accepted and rejected
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    records: BoundedLog<MoveRecord>,
}

impl MoveLog {
    /// Log with the default 50 -> 30 retention
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RetentionPolicy) -> Self {
        Self {
            records: BoundedLog::with_policy(policy),
        }
    }

    /// Append a record, trimming old ones per the retention policy
    pub fn record(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Last `n` records, oldest first
    pub fn recent_moves(&self, n: usize) -> Vec<&MoveRecord> {
        self.records.last_n(n)
    }

    /// Last `n` accepted moves, oldest first
    pub fn recent_successful(&self, n: usize) -> Vec<&MoveRecord> {
        let mut recent: Vec<&MoveRecord> = self
            .records
            .iter()
            .rev()
            .filter(|r| r.succeeded)
            .take(n)
            .collect();
        recent.reverse();
        recent
    }

    /// Combined from/to variance over the last `window` accepted moves.
    /// `None` until `window` accepted moves exist.
    pub fn move_variance(&self, window: usize) -> Option<f64> {
        let recent = self.recent_successful(window);
        if recent.len() < window {
            return None;
        }
        Some(combined_variance(recent))
    }

    /// Rejected moves still in the log
    pub fn failed_count(&self) -> usize {
        self.records.iter().filter(|r| !r.succeeded).count()
    }

    /// Share of retained records that were accepted; 1.0 for an empty log
    pub fn success_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 1.0;
        }
        let ok = self.records.iter().filter(|r| r.succeeded).count();
        ok as f64 / self.records.len() as f64
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + ExactSizeIterator {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.records.policy()
    }
}
