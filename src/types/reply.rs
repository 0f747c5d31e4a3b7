//! Tutor replies

use serde::{Deserialize, Serialize};

/// What produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    EducationalGuidance,
    Fallback,
}

/// Structured pedagogical reply; the tutor's external contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorReply {
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub message: String,
    pub hints: Vec<String>,
    pub questions: Vec<String>,
    pub encouragement: String,
}

impl TutorReply {
    /// Empty guidance reply, filled in by the responder
    pub fn guidance() -> Self {
        Self {
            kind: ReplyKind::EducationalGuidance,
            message: String::new(),
            hints: Vec::new(),
            questions: Vec::new(),
            encouragement: String::new(),
        }
    }

    /// Fixed reply used whenever the pipeline fails
    pub fn fallback() -> Self {
        Self {
            kind: ReplyKind::Fallback,
            message: "I'm here to help you learn! Can you tell me what specific aspect of the Tower of Hanoi you'd like to understand better?".to_string(),
            hints: vec!["Try focusing on moving the smallest disk in a pattern".to_string()],
            questions: vec!["What's your current strategy?".to_string()],
            encouragement: "Keep exploring - problem-solving is a skill that improves with practice!".to_string(),
        }
    }

    pub fn first_hint(&self) -> Option<&str> {
        self.hints.first().map(String::as_str)
    }

    pub fn first_question(&self) -> Option<&str> {
        self.questions.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let reply = TutorReply::fallback();
        assert_eq!(reply.kind, ReplyKind::Fallback);
        assert_eq!(reply.hints.len(), 1);
        assert_eq!(reply.questions.len(), 1);
        assert!(!reply.message.is_empty());
        assert!(!reply.encouragement.is_empty());
    }

    #[test]
    fn test_reply_serializes_type_tag() {
        let json = serde_json::to_value(TutorReply::guidance()).unwrap();
        assert_eq!(json["type"], "educational_guidance");
        assert!(json["hints"].as_array().unwrap().is_empty());
    }
}
