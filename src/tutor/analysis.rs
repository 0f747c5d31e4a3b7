//! Lightweight student analysis derived from retrieved context

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::rag::RetrievedContext;

/// Efficiency below this suggests the student is not planning
pub const PLANNING_EFFICIENCY_THRESHOLD: f64 = 0.5;

/// Move count above this suggests overload
pub const HIGH_LOAD_MOVES: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrugglingArea {
    SystematicPlanning,
    RuleApplication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    EfficientPlay,
    SteadyProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    FocusOnPatternRecognition,
    ReinforceBasicRules,
    SuggestResetWithFewerDisks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveLoad {
    Low,
    #[default]
    Appropriate,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAnalysis {
    pub struggling_areas: BTreeSet<StrugglingArea>,
    pub strengths: BTreeSet<Strength>,
    pub next_steps: Vec<NextStep>,
    pub cognitive_load: CognitiveLoad,
}

impl StudentAnalysis {
    pub fn is_struggling_with(&self, area: StrugglingArea) -> bool {
        self.struggling_areas.contains(&area)
    }
}

/// Derive the analysis for one query
pub fn analyze(context: &RetrievedContext) -> StudentAnalysis {
    let mut analysis = StudentAnalysis::default();
    let history = &context.game_history;
    let efficiency = history.efficiency();

    if efficiency < PLANNING_EFFICIENCY_THRESHOLD {
        analysis.struggling_areas.insert(StrugglingArea::SystematicPlanning);
        analysis.next_steps.push(NextStep::FocusOnPatternRecognition);
    }

    if !context.key_mistakes.is_empty() {
        analysis.struggling_areas.insert(StrugglingArea::RuleApplication);
        analysis.next_steps.push(NextStep::ReinforceBasicRules);
    }

    if history.move_count > HIGH_LOAD_MOVES {
        analysis.cognitive_load = CognitiveLoad::High;
        analysis.next_steps.push(NextStep::SuggestResetWithFewerDisks);
    }

    // Strengths are informational only; they never change the reply
    if history.move_count > 0 && efficiency >= 0.9 {
        analysis.strengths.insert(Strength::EfficientPlay);
    }
    if history.progress >= 0.5 {
        analysis.strengths.insert(Strength::SteadyProgress);
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::MistakePattern;
    use crate::rag::{GameHistorySnapshot, PedagogicalFocus, Priority};

    fn context(move_count: u32, total_disks: u32, progress: f64) -> RetrievedContext {
        RetrievedContext {
            priority: Priority::High,
            game_history: GameHistorySnapshot {
                recent_moves: Vec::new(),
                peg_counts: [total_disks as usize, 0, 0],
                move_count,
                total_disks,
                progress,
            },
            top_strategies: Vec::new(),
            key_mistakes: Vec::new(),
            pedagogical_focus: PedagogicalFocus::default(),
        }
    }

    #[test]
    fn test_fresh_game_is_appropriate() {
        let analysis = analyze(&context(0, 3, 0.0));
        assert!(analysis.struggling_areas.is_empty());
        assert!(analysis.next_steps.is_empty());
        assert_eq!(analysis.cognitive_load, CognitiveLoad::Appropriate);
    }

    #[test]
    fn test_low_efficiency_flags_planning() {
        // optimal 7, 15 moves -> 0.47
        let analysis = analyze(&context(15, 3, 0.0));
        assert!(analysis.is_struggling_with(StrugglingArea::SystematicPlanning));
        assert_eq!(analysis.next_steps, vec![NextStep::FocusOnPatternRecognition]);
    }

    #[test]
    fn test_mistake_flags_rule_application() {
        let mut ctx = context(3, 3, 0.0);
        ctx.key_mistakes.push(MistakePattern::new("random_moves", "hint"));
        let analysis = analyze(&ctx);
        assert!(analysis.is_struggling_with(StrugglingArea::RuleApplication));
        assert_eq!(analysis.next_steps, vec![NextStep::ReinforceBasicRules]);
    }

    #[test]
    fn test_many_moves_is_high_load() {
        let mut ctx = context(51, 3, 0.3);
        ctx.key_mistakes.push(MistakePattern::new("inefficient_solving", "hint"));
        let analysis = analyze(&ctx);
        assert_eq!(analysis.cognitive_load, CognitiveLoad::High);
        assert_eq!(
            analysis.next_steps,
            vec![
                NextStep::FocusOnPatternRecognition,
                NextStep::ReinforceBasicRules,
                NextStep::SuggestResetWithFewerDisks,
            ]
        );
    }

    #[test]
    fn test_strengths() {
        let analysis = analyze(&context(7, 3, 1.0));
        assert!(analysis.strengths.contains(&Strength::EfficientPlay));
        assert!(analysis.strengths.contains(&Strength::SteadyProgress));
    }
}
