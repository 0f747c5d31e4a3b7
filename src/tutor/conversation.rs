//! Conversation history (most recent exchanges only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::errors::Result;
use crate::history::{BoundedLog, RetentionPolicy};
use crate::types::TutorReply;

/// Exchanges kept per session
pub const DEFAULT_CONVERSATION_LIMIT: usize = 10;

const DEFAULT_RING: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CONVERSATION_LIMIT) {
    Some(limit) => limit,
    None => panic!("conversation limit must be non-zero"),
};

/// One question and the tutor's reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub timestamp: DateTime<Utc>,
    pub user_query: String,
    pub agent_response: TutorReply,
    /// Puzzle progress when the question was asked
    pub progress: f64,
}

/// Fixed-size history of exchanges, oldest evicted first
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: BoundedLog<ConversationEntry>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self {
            entries: BoundedLog::with_policy(RetentionPolicy::fixed_ring(DEFAULT_RING)),
        }
    }

    pub fn with_limit(limit: usize) -> Result<Self> {
        Ok(Self {
            entries: BoundedLog::with_policy(RetentionPolicy::ring(limit)?),
        })
    }

    pub fn push(&mut self, user_query: &str, reply: &TutorReply, progress: f64) {
        self.entries.push(ConversationEntry {
            timestamp: Utc::now(),
            user_query: user_query.to_string(),
            agent_response: reply.clone(),
            progress,
        });
    }

    /// Last `n` exchanges, oldest first
    pub fn recent(&self, n: usize) -> Vec<ConversationEntry> {
        self.entries.last_n(n).into_iter().cloned().collect()
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
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_ten() {
        let mut history = ConversationHistory::new();
        for i in 0..12 {
            history.push(&format!("q{}", i), &TutorReply::fallback(), 0.0);
        }

        assert_eq!(history.len(), 10);
        let recent = history.recent(3);
        let queries: Vec<&str> = recent.iter().map(|e| e.user_query.as_str()).collect();
        assert_eq!(queries, vec!["q9", "q10", "q11"]);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let mut history = ConversationHistory::with_limit(2).unwrap();
        history.push("help", &TutorReply::fallback(), 0.5);
        let json = serde_json::to_value(&history.recent(1)[0]).unwrap();
        assert_eq!(json["userQuery"], "help");
        assert_eq!(json["agentResponse"]["type"], "fallback");
    }

    #[test]
    fn test_default_matches_configured_ring() {
        let default = ConversationHistory::new();
        let configured = ConversationHistory::with_limit(DEFAULT_CONVERSATION_LIMIT).unwrap();
        assert_eq!(default.entries.policy(), configured.entries.policy());
        assert_eq!(default.entries.policy().low_water(), DEFAULT_CONVERSATION_LIMIT);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(ConversationHistory::with_limit(0).is_err());
    }
}
