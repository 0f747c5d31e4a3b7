//! Append-only log with hysteresis trimming
//!
//! When the length exceeds `high_water`, the oldest entries are dropped
//! until `low_water` remain. Length never exceeds `high_water` after an
//! append, and the kept entries are always the most recent, in order.

use crate::errors::{Result, TutorError};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Trim trigger
pub const DEFAULT_HIGH_WATER: usize = 50;

/// Length after a trim
pub const DEFAULT_LOW_WATER: usize = 30;

/// When and how far to trim; only built through validated constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    high_water: usize,
    low_water: usize,
}

impl RetentionPolicy {
    /// Validated policy; `low_water == high_water` behaves like a ring buffer
    pub fn new(high_water: usize, low_water: usize) -> Result<Self> {
        if high_water == 0 {
            return Err(TutorError::ConfigError(
                "history high_water must be at least 1".to_string(),
            ));
        }
        if low_water > high_water {
            return Err(TutorError::ConfigError(format!(
                "history low_water ({}) exceeds high_water ({})",
                low_water, high_water
            )));
        }
        Ok(Self {
            high_water,
            low_water,
        })
    }

    /// Fixed-size FIFO: evict exactly one entry per overflow
    pub fn ring(capacity: usize) -> Result<Self> {
        Self::new(capacity, capacity)
    }

    /// Ring with a capacity that cannot be zero
    pub const fn fixed_ring(capacity: NonZeroUsize) -> Self {
        Self {
            high_water: capacity.get(),
            low_water: capacity.get(),
        }
    }

    pub fn high_water(&self) -> usize {
        self.high_water
    }

    pub fn low_water(&self) -> usize {
        self.low_water
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            high_water: DEFAULT_HIGH_WATER,
            low_water: DEFAULT_LOW_WATER,
        }
    }
}

/// Bounded, ordered log
#[derive(Debug, Clone)]
pub struct BoundedLog<T> {
    entries: VecDeque<T>,
    policy: RetentionPolicy,
}

impl<T> BoundedLog<T> {
    /// Log with the default 50 -> 30 policy
    pub fn new() -> Self {
        Self::with_policy(RetentionPolicy::default())
    }

    pub fn with_policy(policy: RetentionPolicy) -> Self {
        Self {
            entries: VecDeque::with_capacity(policy.high_water + 1),
            policy,
        }
    }

    /// Append, trimming to `low_water` once `high_water` is exceeded
    ///
    /// # Complexity
    /// O(1) amortized; a trim drains `high_water - low_water + 1` entries
    pub fn push(&mut self, entry: T) {
        self.entries.push_back(entry);

        if self.entries.len() > self.policy.high_water {
            // always keep the entry just pushed
            let keep = self.policy.low_water.max(1);
            let excess = self.entries.len() - keep;
            self.entries.drain(..excess);
        }
    }

    /// Last `n` entries, oldest first
    pub fn last_n(&self, n: usize) -> Vec<&T> {
        let start = self.entries.len().saturating_sub(n);
        self.entries.range(start..).collect()
    }

    pub fn last(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }
}

impl<T: Clone> BoundedLog<T> {
    /// Snapshot of all entries (for serialization)
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

impl<T> Default for BoundedLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
