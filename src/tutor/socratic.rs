//! Socratic question selection
//!
//! Two cases are fixed; otherwise one of four generic questions is chosen
//! through an injectable selector so tests can pin the choice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rag::RetrievedContext;
use crate::tutor::analysis::{StudentAnalysis, StrugglingArea};

/// Asked before the first move
pub const PLAN_QUESTION: &str = "What's your plan for the first few moves?";

/// Generic pool; the first doubles as the pattern-recognition question
pub const GENERIC_QUESTIONS: [&str; 4] = [
    "What do you think would happen if you move the smallest disk to each tower in sequence?",
    "Can you identify which disk needs to be moved to make progress toward your goal?",
    "What similarities do you see between solving this puzzle and the steps you'd take with fewer disks?",
    "If you had to explain your strategy to someone else, what would you say?",
];

/// Picks an index into a non-empty pool
pub trait QuestionSelector: Send {
    fn select(&mut self, len: usize) -> usize;
}

/// Uniform choice from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> QuestionSelector for RandomSelector<R> {
    fn select(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}

/// Always the same index (modulo the pool size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl QuestionSelector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        self.0 % len.max(1)
    }
}

/// Choose the guiding question for this reply
pub fn socratic_question(
    context: &RetrievedContext,
    analysis: &StudentAnalysis,
    selector: &mut dyn QuestionSelector,
) -> String {
    if context.game_history.move_count == 0 {
        return PLAN_QUESTION.to_string();
    }

    if analysis.is_struggling_with(StrugglingArea::SystematicPlanning) {
        return GENERIC_QUESTIONS[0].to_string();
    }

    let index = selector.select(GENERIC_QUESTIONS.len());
    GENERIC_QUESTIONS[index % GENERIC_QUESTIONS.len()].to_string()
}
