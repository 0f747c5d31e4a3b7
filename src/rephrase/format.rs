//! Local formatting of a structured reply

use crate::types::TutorReply;

pub const HINT_MARK: &str = "💡";
pub const QUESTION_MARK: &str = "🤔";
pub const ENCOURAGEMENT_MARK: &str = "⭐";

/// Message, first hint, first question and encouragement, separated by
/// blank lines. Empty parts are skipped.
pub fn format_reply(reply: &TutorReply) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if !reply.message.trim().is_empty() {
        parts.push(reply.message.trim_end().to_string());
    }
    if let Some(hint) = reply.first_hint() {
        parts.push(format!("{} {}", HINT_MARK, hint));
    }
    if let Some(question) = reply.first_question() {
        parts.push(format!("{} {}", QUESTION_MARK, question));
    }
    if !reply.encouragement.is_empty() {
        parts.push(format!("{} {}", ENCOURAGEMENT_MARK, reply.encouragement));
    }

    parts.join("\n\n")
}
