//! Rule table: predicate -> contribution
//!
//! Rules fire in table order; every rule that matches contributes. The
//! retriever caps the result, so table order is the ranking.

use crate::knowledge::{ALTERNATING_MOVES, RECURSIVE_PATTERN, SMALLEST_DISK_CYCLE};
use crate::puzzle::PuzzleState;

/// What the predicates look at
#[derive(Debug, Clone, Copy)]
pub struct RetrievalInput<'a> {
    /// Query, lowercased
    pub query: &'a str,
    pub state: &'a PuzzleState,
}

impl<'a> RetrievalInput<'a> {
    /// True when the query contains any of the keywords
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.query.contains(k))
    }
}

/// Include `strategy` when `applies` holds
#[derive(Clone, Copy)]
pub struct StrategyRule {
    pub strategy: &'static str,
    pub applies: fn(&RetrievalInput<'_>) -> bool,
}

fn asks_for_help(input: &RetrievalInput<'_>) -> bool {
    input.mentions(&["stuck", "help"])
}

fn fresh_puzzle(input: &RetrievalInput<'_>) -> bool {
    input.state.moves_made() == 0
}

fn many_disks(input: &RetrievalInput<'_>) -> bool {
    input.state.disk_count() >= 4
}

pub const STRATEGY_RULES: &[StrategyRule] = &[
    StrategyRule {
        strategy: ALTERNATING_MOVES,
        applies: asks_for_help,
    },
    StrategyRule {
        strategy: SMALLEST_DISK_CYCLE,
        applies: fresh_puzzle,
    },
    StrategyRule {
        strategy: RECURSIVE_PATTERN,
        applies: many_disks,
    },
];

/// Keyword-triggered teaching focus
#[derive(Debug, Clone, Copy)]
pub struct PedagogyRule {
    pub keywords: &'static [&'static str],
    pub objective: &'static str,
    pub exercise: Option<&'static str>,
    pub concept: Option<&'static str>,
}

pub const PEDAGOGY_RULES: &[PedagogyRule] = &[
    PedagogyRule {
        keywords: &["why", "understand"],
        objective: "Understanding the recursive nature of the problem",
        exercise: None,
        concept: Some("Pattern recognition in recursive algorithms"),
    },
    PedagogyRule {
        keywords: &["faster", "efficient"],
        objective: "Learning optimal solution strategies",
        exercise: Some("Practice with systematic move patterns"),
        concept: None,
    },
];
