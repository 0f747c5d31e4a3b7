//! Game sessions
//!
//! A `GameSession` owns everything one player's game needs: the puzzle,
//! the move and action logs, the tutor and its conversation history.
//! Presentation layers drive it through `apply_move`/`reset`/`ask`, or
//! through the `on_*` hooks when they keep their own board. Accepted moves
//! reported through `on_move_applied` are replayed on the session's board.

pub mod game;
pub mod hints;

pub use game::{
    congratulation, GameSession, MoveOutcome, SessionStatus, IDLE_MESSAGE, RESET_MESSAGE, START_MESSAGE,
};
pub use hints::{contextual_hints, quick_hint};

use std::time::Duration;

use crate::history::RetentionPolicy;
use crate::tutor::DEFAULT_CONVERSATION_LIMIT;

/// Default idle period before the nudge
pub const DEFAULT_IDLE_AFTER: Duration = Duration::from_secs(30);

/// Per-session knobs, usually built from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub retention: RetentionPolicy,
    pub conversation_limit: usize,
    pub idle_after: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            retention: RetentionPolicy::default(),
            conversation_limit: DEFAULT_CONVERSATION_LIMIT,
            idle_after: DEFAULT_IDLE_AFTER,
        }
    }
}
