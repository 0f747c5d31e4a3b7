//! Move records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MoveError;
use crate::puzzle::PegId;

/// One attempted move, accepted or rejected. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: PegId,
    pub to: PegId,
    /// Disk that moved (or would have). `None` when the source was empty.
    pub disk_size: Option<u32>,
    /// Move counter after an accepted move, or at the time of a rejected one
    pub move_number: u32,
    pub timestamp: DateTime<Utc>,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<MoveError>,
}

impl MoveRecord {
    /// Record an accepted move
    pub fn succeeded(from: PegId, to: PegId, disk_size: u32, move_number: u32) -> Self {
        Self {
            from,
            to,
            disk_size: Some(disk_size),
            move_number,
            timestamp: Utc::now(),
            succeeded: true,
            failure_reason: None,
        }
    }

    /// Record a rejected move
    pub fn failed(
        from: PegId,
        to: PegId,
        disk_size: Option<u32>,
        move_number: u32,
        reason: MoveError,
    ) -> Self {
        Self {
            from,
            to,
            disk_size,
            move_number,
            timestamp: Utc::now(),
            succeeded: false,
            failure_reason: Some(reason),
        }
    }

    /// Same record with a pinned timestamp
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
