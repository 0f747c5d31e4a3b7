//! Context retriever: query + game state -> ranked context bundle
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::errors::{Result, TutorError};
use crate::history::{MoveLog, RANDOM_MOVEMENT_THRESHOLD};
use crate::knowledge::{KnowledgeBase, MistakePattern, Strategy, INEFFICIENT_SOLVING, RANDOM_MOVES};
use crate::puzzle::PuzzleState;
use crate::rag::context::{GameHistorySnapshot, PedagogicalFocus, Priority, RetrievedContext};
use crate::rag::rules::{RetrievalInput, PEDAGOGY_RULES, STRATEGY_RULES};

/// Windows, caps and thresholds for retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Accepted moves included in the history snapshot
    pub snapshot_window: usize,
    /// Accepted moves inspected for random movement
    pub variance_window: usize,
    /// Combined variance above this flags random movement
    pub random_threshold: f64,
    /// Moves beyond `factor * optimal` flag inefficient solving
    pub inefficiency_factor: f64,
    pub max_strategies: usize,
    pub max_mistakes: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            snapshot_window: 5,
            variance_window: 3,
            random_threshold: RANDOM_MOVEMENT_THRESHOLD,
            inefficiency_factor: 1.5,
            max_strategies: 2,
            max_mistakes: 2,
        }
    }
}

/// Rule-driven retriever over the static knowledge base
#[derive(Debug, Clone)]
pub struct ContextRetriever {
    knowledge: Arc<KnowledgeBase>,
    config: RetrievalConfig,
}

impl ContextRetriever {
    /// Retriever over the process-wide knowledge base
    pub fn new() -> Self {
        Self::with_knowledge(KnowledgeBase::shared())
    }

    pub fn with_knowledge(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            config: RetrievalConfig::default(),
        }
    }

    pub fn with_config(knowledge: Arc<KnowledgeBase>, config: RetrievalConfig) -> Self {
        Self { knowledge, config }
    }

    /// Retrieve context for a query. Pure apart from the knowledge base.
    pub fn retrieve(
        &self,
        query: &str,
        state: &PuzzleState,
        log: &MoveLog,
    ) -> Result<RetrievedContext> {
        let query = query.to_lowercase();
        let input = RetrievalInput {
            query: &query,
            state,
        };

        let game_history = self.history_snapshot(state, log);

        let mut top_strategies = self.select_strategies(&input)?;
        top_strategies.truncate(self.config.max_strategies);

        let mut key_mistakes = self.detect_mistakes(state, log)?;
        key_mistakes.truncate(self.config.max_mistakes);

        let pedagogical_focus = self.pedagogical_focus(&input);

        let context = RetrievedContext {
            priority: Priority::High,
            game_history,
            top_strategies,
            key_mistakes,
            pedagogical_focus,
        };

        debug!(summary = %context.summary(), "Retrieved tutor context");
        Ok(context)
    }

    /// Last accepted moves plus peg counts and disk total
    pub fn history_snapshot(&self, state: &PuzzleState, log: &MoveLog) -> GameHistorySnapshot {
        GameHistorySnapshot {
            recent_moves: log
                .recent_successful(self.config.snapshot_window)
                .into_iter()
                .cloned()
                .collect(),
            peg_counts: state.disk_counts(),
            move_count: state.moves_made(),
            total_disks: state.disk_count(),
            progress: state.progress(),
        }
    }

    /// Every strategy whose rule fires, in table order (uncapped)
    pub fn select_strategies(&self, input: &RetrievalInput<'_>) -> Result<Vec<Strategy>> {
        STRATEGY_RULES
            .iter()
            .filter(|rule| (rule.applies)(input))
            .map(|rule| {
                self.knowledge
                    .strategy(rule.strategy)
                    .cloned()
                    .ok_or_else(|| missing("strategy", rule.strategy))
            })
            .collect()
    }

    /// Random movement and inefficiency signals (uncapped)
    pub fn detect_mistakes(&self, state: &PuzzleState, log: &MoveLog) -> Result<Vec<MistakePattern>> {
        let mut mistakes = Vec::new();

        if let Some(v) = log.move_variance(self.config.variance_window) {
            if v > self.config.random_threshold {
                let pattern = self
                    .knowledge
                    .mistake(RANDOM_MOVES)
                    .cloned()
                    .ok_or_else(|| missing("mistake pattern", RANDOM_MOVES))?;
                mistakes.push(pattern);
            }
        }

        let limit = state.optimal_move_count() as f64 * self.config.inefficiency_factor;
        if f64::from(state.moves_made()) > limit {
            mistakes.push(MistakePattern::new(
                INEFFICIENT_SOLVING,
                "Try to think more systematically about each move",
            ));
        }

        Ok(mistakes)
    }

    /// Objectives, exercises and concepts triggered by query wording
    pub fn pedagogical_focus(&self, input: &RetrievalInput<'_>) -> PedagogicalFocus {
        let mut focus = PedagogicalFocus::default();

        for rule in PEDAGOGY_RULES.iter().filter(|r| input.mentions(r.keywords)) {
            focus.learning_objectives.push(rule.objective.to_string());
            if let Some(exercise) = rule.exercise {
                focus.suggested_exercises.push(exercise.to_string());
            }
            if let Some(concept) = rule.concept {
                focus.concepts_to_reinforce.push(concept.to_string());
            }
        }

        focus
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

impl Default for ContextRetriever {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(kind: &str, name: &str) -> TutorError {
    TutorError::RetrievalOrResponseFailure(format!("knowledge base has no {} '{}'", kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{ALTERNATING_MOVES, RECURSIVE_PATTERN, SMALLEST_DISK_CYCLE};
    use crate::puzzle::PegId::*;

    fn play(state: &mut PuzzleState, log: &mut MoveLog, moves: &[(crate::puzzle::PegId, crate::puzzle::PegId)]) {
        for (from, to) in moves {
            log.record(state.attempt_move(*from, *to));
        }
    }

    #[test]
    fn test_stuck_query_includes_alternating_moves() {
        let retriever = ContextRetriever::new();
        let mut state = PuzzleState::new(3).unwrap();
        let mut log = MoveLog::new();
        play(&mut state, &mut log, &[(Source, Destination)]);

        let ctx = retriever.retrieve("I'm stuck", &state, &log).unwrap();
        assert!(ctx.has_strategy(ALTERNATING_MOVES));
        assert_eq!(ctx.top_strategies.len(), 1);
    }

    #[test]
    fn test_fresh_puzzle_includes_smallest_disk_cycle() {
        let retriever = ContextRetriever::new();
        let state = PuzzleState::new(3).unwrap();
        let ctx = retriever.retrieve("hello", &state, &MoveLog::new()).unwrap();
        assert_eq!(ctx.top_strategies[0].name, SMALLEST_DISK_CYCLE);
    }

    #[test]
    fn test_strategies_capped_in_rule_order() {
        let retriever = ContextRetriever::new();
        let state = PuzzleState::new(5).unwrap();
        let ctx = retriever.retrieve("help!", &state, &MoveLog::new()).unwrap();

        let names: Vec<&str> = ctx.top_strategies.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![ALTERNATING_MOVES, SMALLEST_DISK_CYCLE]);
    }

    #[test]
    fn test_five_disks_includes_recursive_pattern() {
        let retriever = ContextRetriever::new();
        let mut state = PuzzleState::new(5).unwrap();
        let mut log = MoveLog::new();
        play(&mut state, &mut log, &[(Source, Auxiliary)]);

        let ctx = retriever.retrieve("what next?", &state, &log).unwrap();
        assert!(ctx.has_strategy(RECURSIVE_PATTERN));
    }

    #[test]
    fn test_random_movement_detected() {
        let retriever = ContextRetriever::new();
        let mut state = PuzzleState::new(3).unwrap();
        let mut log = MoveLog::new();
        play(
            &mut state,
            &mut log,
            &[(Source, Destination), (Destination, Source), (Source, Destination)],
        );

        let ctx = retriever.retrieve("hmm", &state, &log).unwrap();
        assert!(ctx.has_mistake(RANDOM_MOVES));
        assert!(!ctx.has_mistake(INEFFICIENT_SOLVING));
    }

    #[test]
    fn test_inefficiency_detected() {
        let retriever = ContextRetriever::new();
        let mut state = PuzzleState::new(1).unwrap();
        let mut log = MoveLog::new();
        // optimal is 1; two moves exceed 1.5
        play(&mut state, &mut log, &[(Source, Auxiliary), (Auxiliary, Destination)]);

        let ctx = retriever.retrieve("ok", &state, &log).unwrap();
        assert!(ctx.has_mistake(INEFFICIENT_SOLVING));
    }

    #[test]
    fn test_failed_moves_ignored_by_variance() {
        let retriever = ContextRetriever::new();
        let mut state = PuzzleState::new(3).unwrap();
        let mut log = MoveLog::new();
        // Only rejected moves
        play(
            &mut state,
            &mut log,
            &[(Auxiliary, Source), (Destination, Source), (Auxiliary, Destination)],
        );

        let ctx = retriever.retrieve("hmm", &state, &log).unwrap();
        assert!(ctx.key_mistakes.is_empty());
        assert!(ctx.game_history.recent_moves.is_empty());
    }

    #[test]
    fn test_snapshot_window() {
        let retriever = ContextRetriever::new();
        let mut state = PuzzleState::new(3).unwrap();
        let mut log = MoveLog::new();
        play(&mut state, &mut log, &crate::puzzle::solve(3));

        let ctx = retriever.retrieve("done?", &state, &log).unwrap();
        assert_eq!(ctx.game_history.recent_moves.len(), 5);
        assert_eq!(ctx.game_history.recent_moves[0].move_number, 3);
        assert_eq!(ctx.game_history.peg_counts, [0, 0, 3]);
        assert_eq!(ctx.game_history.progress, 1.0);
        assert_eq!(ctx.priority, Priority::High);
    }

    #[test]
    fn test_pedagogical_focus() {
        let retriever = ContextRetriever::new();
        let state = PuzzleState::new(3).unwrap();
        let ctx = retriever
            .retrieve("Why is this faster? I want to understand", &state, &MoveLog::new())
            .unwrap();

        let focus = &ctx.pedagogical_focus;
        assert_eq!(focus.learning_objectives.len(), 2);
        assert_eq!(focus.suggested_exercises, vec!["Practice with systematic move patterns"]);
        assert_eq!(
            focus.concepts_to_reinforce,
            vec!["Pattern recognition in recursive algorithms"]
        );
    }

    #[test]
    fn test_missing_strategy_is_an_error() {
        let mut kb = KnowledgeBase::tower_of_hanoi();
        kb.strategies.clear();
        let retriever = ContextRetriever::with_knowledge(Arc::new(kb));
        let state = PuzzleState::new(3).unwrap();

        let result = retriever.retrieve("help", &state, &MoveLog::new());
        assert!(matches!(result, Err(TutorError::RetrievalOrResponseFailure(_))));
    }
}
