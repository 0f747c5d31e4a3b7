//! Retrieved context bundle, built per query and discarded after use
use serde::{Deserialize, Serialize};

use crate::knowledge::{MistakePattern, Strategy};
use crate::puzzle::state::optimal_moves_for;
use crate::types::MoveRecord;

/// Priority tag. Never varied; kept because the rephrasing payload has
/// always carried it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    High,
}

/// Game state as seen by the tutor at query time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHistorySnapshot {
    /// Most recent accepted moves, oldest first
    pub recent_moves: Vec<MoveRecord>,
    /// Disks on each peg
    pub peg_counts: [usize; 3],
    pub move_count: u32,
    pub total_disks: u32,
    /// Disks on the destination peg / total disks
    pub progress: f64,
}

impl GameHistorySnapshot {
    pub fn optimal_moves(&self) -> u64 {
        optimal_moves_for(self.total_disks)
    }

    /// optimal / max(moves, 1), clamped to [0, 1]
    pub fn efficiency(&self) -> f64 {
        let made = self.move_count.max(1) as f64;
        (self.optimal_moves() as f64 / made).clamp(0.0, 1.0)
    }
}

/// Teaching focus derived from the wording of the query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedagogicalFocus {
    pub learning_objectives: Vec<String>,
    pub suggested_exercises: Vec<String>,
    pub concepts_to_reinforce: Vec<String>,
}

impl PedagogicalFocus {
    pub fn is_empty(&self) -> bool {
        self.learning_objectives.is_empty()
            && self.suggested_exercises.is_empty()
            && self.concepts_to_reinforce.is_empty()
    }
}

/// Ranked bundle handed to the responder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedContext {
    pub priority: Priority,
    pub game_history: GameHistorySnapshot,
    /// At most two, in rule order
    pub top_strategies: Vec<Strategy>,
    /// At most two, in detection order
    pub key_mistakes: Vec<MistakePattern>,
    pub pedagogical_focus: PedagogicalFocus,
}

impl RetrievedContext {
    pub fn has_strategy(&self, name: &str) -> bool {
        self.top_strategies.iter().any(|s| s.name == name)
    }

    pub fn has_mistake(&self, pattern: &str) -> bool {
        self.key_mistakes.iter().any(|m| m.pattern == pattern)
    }

    /// Compact one-line description for logs
    pub fn summary(&self) -> String {
        let strategies: Vec<&str> = self.top_strategies.iter().map(|s| s.name.as_str()).collect();
        let mistakes: Vec<&str> = self.key_mistakes.iter().map(|m| m.pattern.as_str()).collect();
        format!(
            "strategies=[{}] mistakes=[{}] objectives={} progress={:.2}",
            strategies.join(","),
            mistakes.join(","),
            self.pedagogical_focus.learning_objectives.len(),
            self.game_history.progress
        )
    }
}
