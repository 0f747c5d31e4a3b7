//! Bounded game history
//!
//! Move records and game actions are kept in memory only, trimmed with a
//! high/low water mark so an overflow does not evict on every append.

pub mod bounded;
pub mod metrics;
pub mod move_log;

// Re-export commonly used types
pub use bounded::{BoundedLog, RetentionPolicy, DEFAULT_HIGH_WATER, DEFAULT_LOW_WATER};
pub use metrics::{combined_variance, variance, RANDOM_MOVEMENT_THRESHOLD};
pub use move_log::MoveLog;

use crate::types::GameAction;

/// Full action history (resets, moves, failed moves, completions)
pub type ActionLog = BoundedLog<GameAction>;
