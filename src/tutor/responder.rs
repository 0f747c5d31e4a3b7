//! Reply assembly
//!
//! Order is fixed: message, hints, mistake hint appended to the message,
//! questions, encouragement.

use tracing::debug;

use crate::errors::{Result, TutorError};
use crate::rag::RetrievedContext;
use crate::tutor::analysis::{analyze, StudentAnalysis, StrugglingArea};
use crate::tutor::encouragement::encouragement;
use crate::tutor::socratic::{socratic_question, QuestionSelector, RandomSelector};
use crate::types::TutorReply;

const PLANNING_MESSAGE: &str = "I notice you might benefit from a more systematic approach. ";
const PLANNING_QUESTION: &str = "What pattern do you see in how the smallest disk should move?";
const PLANNING_HINT: &str = "Try moving the smallest disk in a consistent cycle between towers";

/// Builds structured replies; owns the only source of randomness
pub struct TutorResponder {
    selector: Box<dyn QuestionSelector>,
}

impl TutorResponder {
    /// Responder choosing generic questions at random
    pub fn new() -> Self {
        Self::with_selector(Box::new(RandomSelector::from_entropy()))
    }

    pub fn with_selector(selector: Box<dyn QuestionSelector>) -> Self {
        Self { selector }
    }

    /// Analyze the context and assemble a reply
    pub fn respond(&mut self, query: &str, context: &RetrievedContext) -> Result<TutorReply> {
        validate(context)?;
        let analysis = analyze(context);
        debug!(
            query_len = query.len(),
            struggling = analysis.struggling_areas.len(),
            load = ?analysis.cognitive_load,
            "Student analysis"
        );
        Ok(self.compose(context, &analysis))
    }

    /// Assemble a reply from an existing analysis
    pub fn compose(&mut self, context: &RetrievedContext, analysis: &StudentAnalysis) -> TutorReply {
        let mut reply = TutorReply::guidance();

        if analysis.is_struggling_with(StrugglingArea::SystematicPlanning) {
            reply.message.push_str(PLANNING_MESSAGE);
            reply.questions.push(PLANNING_QUESTION.to_string());
            reply.hints.push(PLANNING_HINT.to_string());
        }

        if let Some(strategy) = context.top_strategies.first() {
            reply.hints.push(format!("Strategy tip: {}", strategy.description));
        }

        if let Some(mistake) = context.key_mistakes.first() {
            reply.message.push_str(&format!("Hint: {}", mistake.hint));
        }

        reply
            .questions
            .push(socratic_question(context, analysis, self.selector.as_mut()));

        reply.encouragement = encouragement(context.game_history.progress).to_string();

        reply
    }
}

impl Default for TutorResponder {
    fn default() -> Self {
        Self::new()
    }
}

/// Contexts can arrive from outside the retriever; reject impossible ones
fn validate(context: &RetrievedContext) -> Result<()> {
    let history = &context.game_history;

    if history.total_disks == 0 {
        return Err(TutorError::RetrievalOrResponseFailure(
            "context reports zero disks".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&history.progress) {
        return Err(TutorError::RetrievalOrResponseFailure(format!(
            "progress {} outside [0, 1]",
            history.progress
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{KnowledgeBase, MistakePattern, ALTERNATING_MOVES, RANDOM_MOVES};
    use crate::rag::{GameHistorySnapshot, PedagogicalFocus, Priority};
    use crate::tutor::encouragement::{BEGINNER, PROGRESSING};
    use crate::tutor::socratic::{FixedSelector, GENERIC_QUESTIONS, PLAN_QUESTION};
    use crate::types::ReplyKind;

    fn context(move_count: u32, progress: f64) -> RetrievedContext {
        RetrievedContext {
            priority: Priority::High,
            game_history: GameHistorySnapshot {
                recent_moves: Vec::new(),
                peg_counts: [3, 0, 0],
                move_count,
                total_disks: 3,
                progress,
            },
            top_strategies: Vec::new(),
            key_mistakes: Vec::new(),
            pedagogical_focus: PedagogicalFocus::default(),
        }
    }

    fn responder(index: usize) -> TutorResponder {
        TutorResponder::with_selector(Box::new(FixedSelector(index)))
    }

    #[test]
    fn test_fresh_game_reply() {
        let reply = responder(0).respond("hi", &context(0, 0.0)).unwrap();
        assert_eq!(reply.kind, ReplyKind::EducationalGuidance);
        assert!(reply.message.is_empty());
        assert!(reply.hints.is_empty());
        assert_eq!(reply.questions, vec![PLAN_QUESTION]);
        assert_eq!(reply.encouragement, BEGINNER);
    }

    #[test]
    fn test_reply_ordering_when_struggling() {
        let kb = KnowledgeBase::global();
        let mut ctx = context(20, 1.0 / 3.0);
        ctx.top_strategies.push(kb.strategy(ALTERNATING_MOVES).unwrap().clone());
        ctx.key_mistakes.push(kb.mistake(RANDOM_MOVES).unwrap().clone());

        let reply = responder(2).respond("I'm stuck", &ctx).unwrap();

        assert_eq!(
            reply.message,
            "I notice you might benefit from a more systematic approach. \
             Hint: Try to develop a systematic approach rather than moving randomly"
        );
        assert_eq!(reply.hints.len(), 2);
        assert_eq!(reply.hints[0], PLANNING_HINT);
        assert!(reply.hints[1].starts_with("Strategy tip: Alternate between"));
        assert_eq!(reply.questions, vec![PLANNING_QUESTION, GENERIC_QUESTIONS[0]]);
        assert_eq!(reply.encouragement, PROGRESSING);
    }

    #[test]
    fn test_mistake_hint_only() {
        let mut ctx = context(4, 0.0);
        ctx.key_mistakes
            .push(MistakePattern::new("inefficient_solving", "Think first"));
        let reply = responder(1).respond("what now", &ctx).unwrap();
        assert_eq!(reply.message, "Hint: Think first");
        assert_eq!(reply.questions, vec![GENERIC_QUESTIONS[1]]);
    }

    #[test]
    fn test_invalid_progress_rejected() {
        let result = responder(0).respond("hi", &context(1, 1.5));
        assert!(matches!(result, Err(TutorError::RetrievalOrResponseFailure(_))));

        let result = responder(0).respond("hi", &context(1, f64::NAN));
        assert!(result.is_err());
    }
}
