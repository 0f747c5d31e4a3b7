//! Game action log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::moves::MoveRecord;

/// Summary handed to the completion hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub moves: u32,
    pub time_secs: u64,
    pub optimal_moves: u64,
    pub disk_count: u32,
}

impl CompletionSummary {
    /// optimal / moves as a rounded percentage
    pub fn efficiency_percent(&self) -> u32 {
        if self.moves == 0 {
            return 0;
        }
        ((self.optimal_moves as f64 / self.moves as f64) * 100.0).round() as u32
    }

    pub fn is_optimal(&self) -> bool {
        u64::from(self.moves) == self.optimal_moves
    }
}

/// Everything that happened in a game, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GameAction {
    Reset {
        disk_count: u32,
        timestamp: DateTime<Utc>,
    },
    Move(MoveRecord),
    FailedMove(MoveRecord),
    GameComplete {
        summary: CompletionSummary,
        timestamp: DateTime<Utc>,
    },
}

impl GameAction {
    /// Wrap a move record as a move or failed move
    pub fn from_record(record: MoveRecord) -> Self {
        if record.succeeded {
            GameAction::Move(record)
        } else {
            GameAction::FailedMove(record)
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            GameAction::Reset { timestamp, .. } | GameAction::GameComplete { timestamp, .. } => {
                *timestamp
            }
            GameAction::Move(record) | GameAction::FailedMove(record) => record.timestamp,
        }
    }

    /// Name used in logs and the history view
    pub fn kind(&self) -> &'static str {
        match self {
            GameAction::Reset { .. } => "reset",
            GameAction::Move(_) => "move",
            GameAction::FailedMove(_) => "failed_move",
            GameAction::GameComplete { .. } => "game_complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MoveError;
    use crate::puzzle::PegId;

    #[test]
    fn test_efficiency_percent() {
        let summary = CompletionSummary {
            moves: 10,
            time_secs: 42,
            optimal_moves: 7,
            disk_count: 3,
        };
        assert_eq!(summary.efficiency_percent(), 70);
        assert!(!summary.is_optimal());
    }

    #[test]
    fn test_from_record_splits_on_outcome() {
        let ok = MoveRecord::succeeded(PegId::Source, PegId::Auxiliary, 1, 1);
        assert_eq!(GameAction::from_record(ok).kind(), "move");

        let failed = MoveRecord::failed(
            PegId::Auxiliary,
            PegId::Source,
            None,
            1,
            MoveError::EmptySource { peg: 1 },
        );
        assert_eq!(GameAction::from_record(failed).kind(), "failed_move");
    }
}
