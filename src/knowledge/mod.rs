//! Static Tower of Hanoi knowledge
//!
//! Rules, strategies, mistake patterns and teaching tips. Built once on
//! first use and shared read-only for the life of the process.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Strategy names
pub const ALTERNATING_MOVES: &str = "alternating_moves";
pub const SMALLEST_DISK_CYCLE: &str = "smallest_disk_cycle";
pub const RECURSIVE_PATTERN: &str = "recursive_pattern";

/// Mistake pattern names
pub const BURIED_DISK: &str = "trying_to_move_buried_disk";
pub const LARGE_ON_SMALL: &str = "placing_large_on_small";
pub const RANDOM_MOVES: &str = "random_moves";
pub const INEFFICIENT_SOLVING: &str = "inefficient_solving";

/// Strategy difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A named solving strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub description: String,
    pub difficulty: StrategyLevel,
}

/// A known mistake and the hint that addresses it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MistakePattern {
    pub pattern: String,
    pub hint: String,
}

impl MistakePattern {
    pub fn new(pattern: &str, hint: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            hint: hint.to_string(),
        }
    }
}

/// Read-only tables consulted by the retriever
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub rules: Vec<String>,
    pub strategies: Vec<Strategy>,
    pub mistakes: Vec<MistakePattern>,
    pub pedagogical_tips: Vec<String>,
}

static KNOWLEDGE_BASE: Lazy<Arc<KnowledgeBase>> =
    Lazy::new(|| Arc::new(KnowledgeBase::tower_of_hanoi()));

impl KnowledgeBase {
    /// Process-wide instance
    pub fn global() -> &'static KnowledgeBase {
        &KNOWLEDGE_BASE
    }

    /// Shared handle to the process-wide instance
    pub fn shared() -> Arc<KnowledgeBase> {
        Arc::clone(&KNOWLEDGE_BASE)
    }

    /// The Tower of Hanoi tables
    pub fn tower_of_hanoi() -> Self {
        let strategy = |name: &str, description: &str, difficulty| Strategy {
            name: name.to_string(),
            description: description.to_string(),
            difficulty,
        };

        Self {
            rules: vec![
                "Only move one disk at a time".to_string(),
                "Only move the top disk from any tower".to_string(),
                "Cannot place a larger disk on a smaller disk".to_string(),
            ],
            strategies: vec![
                strategy(
                    RECURSIVE_PATTERN,
                    "To move n disks: move n-1 to auxiliary, move largest to destination, move n-1 from auxiliary to destination",
                    StrategyLevel::Advanced,
                ),
                strategy(
                    SMALLEST_DISK_CYCLE,
                    "Move smallest disk in consistent cycle: A→B→C→A for odd number of disks",
                    StrategyLevel::Intermediate,
                ),
                strategy(
                    ALTERNATING_MOVES,
                    "Alternate between moving smallest disk and making the only other legal move",
                    StrategyLevel::Beginner,
                ),
            ],
            mistakes: vec![
                MistakePattern::new(BURIED_DISK, "You can only move the top disk from each tower"),
                MistakePattern::new(
                    LARGE_ON_SMALL,
                    "Remember: larger disks cannot go on top of smaller ones",
                ),
                MistakePattern::new(
                    RANDOM_MOVES,
                    "Try to develop a systematic approach rather than moving randomly",
                ),
            ],
            pedagogical_tips: vec![
                "Start with understanding the base case (moving 1 disk)".to_string(),
                "Practice with 3 disks before attempting more".to_string(),
                "Visualize the recursive structure".to_string(),
                "Focus on pattern recognition rather than memorization".to_string(),
            ],
        }
    }

    pub fn strategy(&self, name: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.name == name)
    }

    pub fn mistake(&self, pattern: &str) -> Option<&MistakePattern> {
        self.mistakes.iter().find(|m| m.pattern == pattern)
    }
}
