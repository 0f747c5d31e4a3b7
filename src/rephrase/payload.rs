//! Wire format of the rephrasing service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::puzzle::PuzzleState;
use crate::tutor::ConversationEntry;
use crate::types::TutorReply;

/// Conversation entries sent with each request
pub const HISTORY_SENT: usize = 3;

/// One peg as the service sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerPayload {
    /// Disk sizes, bottom first
    pub disks: Vec<u32>,
}

/// Game state snapshot sent to the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatePayload {
    pub towers: Vec<TowerPayload>,
    pub move_count: u32,
    pub total_disks: u32,
    pub timestamp: DateTime<Utc>,
}

impl GameStatePayload {
    pub fn from_state(state: &PuzzleState) -> Self {
        Self {
            towers: state
                .pegs()
                .iter()
                .map(|peg| TowerPayload {
                    disks: peg.disks().to_vec(),
                })
                .collect(),
            move_count: state.moves_made(),
            total_disks: state.disk_count(),
            timestamp: Utc::now(),
        }
    }
}

/// POST body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RephraseRequest {
    pub user_message: String,
    pub agent_response: TutorReply,
    pub game_state: GameStatePayload,
    pub conversation_history: Vec<ConversationEntry>,
}

impl RephraseRequest {
    /// Build a request; only the last `HISTORY_SENT` exchanges are kept
    pub fn new(
        user_message: &str,
        agent_response: TutorReply,
        state: &PuzzleState,
        mut conversation_history: Vec<ConversationEntry>,
    ) -> Self {
        let excess = conversation_history.len().saturating_sub(HISTORY_SENT);
        conversation_history.drain(..excess);

        Self {
            user_message: user_message.to_string(),
            agent_response,
            game_state: GameStatePayload::from_state(state),
            conversation_history,
        }
    }
}

/// Success body; only `message` is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseResponse {
    pub message: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}
