//! Error types for HanoiBuddy
//!
//! Every failure in the game core or tutor pipeline has a defined,
//! non-crashing fallback; these types carry the reason to the layer
//! that applies it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons the move validator rejects a move
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MoveError {
    /// Source peg has no disk to move
    #[error("No disk to move from peg {peg}")]
    EmptySource { peg: usize },

    /// Disk would land on a smaller one
    #[error("Cannot place disk {disk} on smaller disk {target}")]
    SizeViolation { disk: u32, target: u32 },

    /// Source and destination are the same peg
    #[error("Source and destination are both peg {peg}")]
    SamePeg { peg: usize },

    /// Peg index outside 0..=2
    #[error("Peg index {index} out of range (expected 0..=2)")]
    InvalidPeg { index: usize },
}

impl MoveError {
    /// Short machine-readable reason stored on failed move records
    pub fn reason_code(&self) -> &'static str {
        match self {
            MoveError::EmptySource { .. } => "empty_source",
            MoveError::SizeViolation { .. } => "larger_on_smaller",
            MoveError::SamePeg { .. } => "same_peg",
            MoveError::InvalidPeg { .. } => "invalid_peg",
        }
    }
}

/// Main error type for the tutor system
#[derive(Error, Debug)]
pub enum TutorError {
    /// Rejected move
    #[error("Illegal move: {0}")]
    Move(#[from] MoveError),

    /// Puzzle configured with no disks or more than the state supports
    #[error("Disk count must be between 1 and 64, got {0}")]
    InvalidDiskCount(u32),

    /// Unexpected fault inside retrieve -> analyze -> respond
    #[error("Tutor pipeline failed: {0}")]
    RetrievalOrResponseFailure(String),

    /// Rephrasing service unreachable, failed or returned garbage
    #[error("Rephrasing service unavailable: {0}")]
    RephraseUnavailable(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Timeout errors
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic errors with context
    #[error("Tutor error: {0}")]
    Generic(String),
}

/// Result type alias for tutor operations
pub type Result<T> = std::result::Result<T, TutorError>;

/// Convert anyhow errors to TutorError
impl From<anyhow::Error> for TutorError {
    fn from(err: anyhow::Error) -> Self {
        TutorError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoveError::SizeViolation { disk: 3, target: 1 };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_move_error_wraps_into_tutor_error() {
        let err: TutorError = MoveError::EmptySource { peg: 1 }.into();
        assert!(matches!(err, TutorError::Move(MoveError::EmptySource { peg: 1 })));
        assert!(err.to_string().contains("peg 1"));
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(MoveError::EmptySource { peg: 0 }.reason_code(), "empty_source");
        assert_eq!(
            MoveError::SizeViolation { disk: 2, target: 1 }.reason_code(),
            "larger_on_smaller"
        );
        assert_eq!(MoveError::InvalidPeg { index: 7 }.reason_code(), "invalid_peg");
    }

    #[test]
    fn test_anyhow_becomes_generic() {
        let err: TutorError = anyhow::anyhow!("disk file unreadable").into();
        assert!(matches!(err, TutorError::Generic(ref msg) if msg == "disk file unreadable"));
    }

    #[test]
    fn test_timeout_error() {
        let err = TutorError::Timeout { duration_ms: 8000 };
        assert!(err.to_string().contains("8000"));
    }
}
