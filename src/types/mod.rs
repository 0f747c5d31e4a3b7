//! Type definitions module
//!
//! Records and replies exchanged between the game core, the tutor and
//! whatever presentation layer sits on top.

pub mod actions;
pub mod moves;
pub mod reply;

// Re-export commonly used types
pub use actions::{CompletionSummary, GameAction};
pub use moves::MoveRecord;
pub use reply::{ReplyKind, TutorReply};
