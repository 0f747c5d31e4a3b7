//! Tutor pipeline with fallback at the boundary

use tracing::{info, warn};

use crate::errors::Result;
use crate::history::MoveLog;
use crate::puzzle::PuzzleState;
use crate::rag::{ContextRetriever, RetrievedContext};
use crate::tutor::responder::TutorResponder;
use crate::tutor::socratic::QuestionSelector;
use crate::types::TutorReply;

/// Retriever + responder. Never surfaces a pipeline error to the caller.
pub struct Tutor {
    retriever: ContextRetriever,
    responder: TutorResponder,
}

impl Tutor {
    pub fn new() -> Self {
        Self {
            retriever: ContextRetriever::new(),
            responder: TutorResponder::new(),
        }
    }

    pub fn with_parts(retriever: ContextRetriever, responder: TutorResponder) -> Self {
        Self {
            retriever,
            responder,
        }
    }

    /// Tutor with pinned question selection
    pub fn with_selector(selector: Box<dyn QuestionSelector>) -> Self {
        Self::with_parts(ContextRetriever::new(), TutorResponder::with_selector(selector))
    }

    /// retrieve -> analyze -> respond, or the fixed fallback on any failure
    pub fn reply(&mut self, query: &str, state: &PuzzleState, log: &MoveLog) -> TutorReply {
        match self.try_reply(query, state, log) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Tutor pipeline failed, using fallback reply");
                TutorReply::fallback()
            }
        }
    }

    /// The pipeline without the fallback
    pub fn try_reply(&mut self, query: &str, state: &PuzzleState, log: &MoveLog) -> Result<TutorReply> {
        let context = self.retriever.retrieve(query, state, log)?;
        let reply = self.responder.respond(query, &context)?;
        info!(
            moves = state.moves_made(),
            hints = reply.hints.len(),
            questions = reply.questions.len(),
            "Tutor reply ready"
        );
        Ok(reply)
    }

    /// Respond to an externally built context, falling back on failure
    pub fn reply_to_context(&mut self, query: &str, context: &RetrievedContext) -> TutorReply {
        self.responder.respond(query, context).unwrap_or_else(|e| {
            warn!(error = %e, "Tutor responder failed, using fallback reply");
            TutorReply::fallback()
        })
    }

    pub fn retriever(&self) -> &ContextRetriever {
        &self.retriever
    }
}

impl Default for Tutor {
    fn default() -> Self {
        Self::new()
    }
}
