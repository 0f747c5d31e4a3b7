//! Tutor: turns retrieved context into a pedagogical reply
//!
//! retrieve -> analyze -> respond, with a fixed fallback reply whenever any
//! step fails.

pub mod analysis;
pub mod conversation;
pub mod encouragement;
pub mod pipeline;
pub mod responder;
pub mod socratic;

// Re-export commonly used types
pub use analysis::{analyze, CognitiveLoad, NextStep, Strength, StrugglingArea, StudentAnalysis};
pub use conversation::{ConversationEntry, ConversationHistory, DEFAULT_CONVERSATION_LIMIT};
pub use encouragement::encouragement;
pub use pipeline::Tutor;
pub use responder::TutorResponder;
pub use socratic::{FixedSelector, QuestionSelector, RandomSelector, GENERIC_QUESTIONS};
