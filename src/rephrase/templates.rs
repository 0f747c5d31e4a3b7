//! Offline rephraser built from phrase templates
//!
//! Picks a category from the player's wording, a template from that
//! category, and splices in the reply's first hint.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::rephrase::payload::RephraseRequest;
use crate::rephrase::Rephraser;
use crate::tutor::{QuestionSelector, RandomSelector};

/// Hint used when the reply carries none
pub const DEFAULT_HINT: &str = "Try thinking about the patterns in the puzzle.";

const HINT_SLOT: &str = "{hint}";

/// Template family chosen from the player's wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Stuck,
    Strategy,
    Rules,
    General,
}

impl TemplateCategory {
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has(&["stuck", "help"]) {
            TemplateCategory::Stuck
        } else if has(&["strategy", "best", "approach"]) {
            TemplateCategory::Strategy
        } else if has(&["rule", "why", "not allowed"]) {
            TemplateCategory::Rules
        } else {
            TemplateCategory::General
        }
    }

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            TemplateCategory::Stuck => &[
                "I can see you're feeling stuck! Let's think about this step by step. {hint} What do you think would happen if you tried that approach?",
                "Getting stuck is part of learning! {hint} Can you see why this might be the next logical step?",
                "Don't worry about being stuck, it means you're thinking! {hint} What pattern do you notice?",
            ],
            TemplateCategory::Strategy => &[
                "Great question about strategy! {hint} How do you think this connects to what you've learned about problem-solving?",
                "Strategy is key to solving puzzles efficiently. {hint} What similarities do you see with other problems you've solved?",
                "Let's explore different approaches together. {hint} Why do you think this strategy might work?",
            ],
            TemplateCategory::Rules => &[
                "Understanding the rules is important! {hint} Can you explain why this rule exists?",
                "Rules help us solve problems systematically. {hint} What would happen if we didn't follow this rule?",
                "Good question about the rules! {hint} How does this rule help us reach our goal?",
            ],
            TemplateCategory::General => &[
                "That's a thoughtful question! {hint} What connections can you make to help solve this?",
                "I like how you're thinking about this! {hint} What would you try next?",
                "Excellent observation! {hint} How might this help you move forward?",
            ],
        }
    }
}

/// Rephraser that never leaves the process
pub struct TemplateRephraser {
    selector: Mutex<Box<dyn QuestionSelector>>,
}

impl TemplateRephraser {
    pub fn new() -> Self {
        Self::with_selector(Box::new(RandomSelector::from_entropy()))
    }

    pub fn with_selector(selector: Box<dyn QuestionSelector>) -> Self {
        Self {
            selector: Mutex::new(selector),
        }
    }
}

impl Default for TemplateRephraser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Rephraser for TemplateRephraser {
    fn name(&self) -> &'static str {
        "templates"
    }

    async fn rephrase(&self, request: &RephraseRequest) -> Result<String> {
        let templates = TemplateCategory::classify(&request.user_message).templates();
        let index = self.selector.lock().await.select(templates.len()) % templates.len();
        let hint = request.agent_response.first_hint().unwrap_or(DEFAULT_HINT);

        Ok(templates[index].replacen(HINT_SLOT, hint, 1))
    }
}
