//! Optional rephrasing of tutor replies
//!
//! A rephraser may rewrite the structured reply into prose. Every failure
//! (network, status, timeout, malformed body) degrades to local formatting;
//! the player never sees the error.

pub mod format;
pub mod http;
pub mod payload;
pub mod templates;

pub use format::format_reply;
pub use http::{HttpRephraser, DEFAULT_TIMEOUT_MS};
pub use payload::{GameStatePayload, RephraseRequest, RephraseResponse, HISTORY_SENT};
pub use templates::TemplateRephraser;

use async_trait::async_trait;
use tracing::warn;

use crate::errors::Result;

/// Rewrites a structured reply into natural prose
#[async_trait]
pub trait Rephraser: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Rephrase or fail with `RephraseUnavailable`
    async fn rephrase(&self, request: &RephraseRequest) -> Result<String>;
}

/// Rephrase when a rephraser is configured, otherwise (or on any failure)
/// format the reply locally
pub async fn rephrase_or_format(rephraser: Option<&dyn Rephraser>, request: &RephraseRequest) -> String {
    let Some(rephraser) = rephraser else {
        return format_reply(&request.agent_response);
    };

    match rephraser.rephrase(request).await {
        Ok(text) => text,
        Err(e) => {
            warn!(rephraser = rephraser.name(), error = %e, "Rephrasing failed, formatting locally");
            format_reply(&request.agent_response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TutorError;
    use crate::puzzle::PuzzleState;
    use crate::types::TutorReply;

    struct Failing;

    #[async_trait]
    impl Rephraser for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn rephrase(&self, _request: &RephraseRequest) -> Result<String> {
            Err(TutorError::RephraseUnavailable("down".to_string()))
        }
    }

    struct Echo;

    #[async_trait]
    impl Rephraser for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        async fn rephrase(&self, request: &RephraseRequest) -> Result<String> {
            Ok(format!("echo: {}", request.user_message))
        }
    }

    fn request() -> RephraseRequest {
        let state = PuzzleState::new(3).unwrap();
        RephraseRequest::new("help", TutorReply::fallback(), &state, Vec::new())
    }

    #[tokio::test]
    async fn test_no_rephraser_formats_locally() {
        let req = request();
        assert_eq!(rephrase_or_format(None, &req).await, format_reply(&req.agent_response));
    }

    #[tokio::test]
    async fn test_failure_formats_locally() {
        let req = request();
        let text = rephrase_or_format(Some(&Failing), &req).await;
        assert_eq!(text, format_reply(&req.agent_response));
    }

    #[test]
    fn test_success_passes_through() {
        let req = request();
        let text = tokio_test::block_on(rephrase_or_format(Some(&Echo), &req));
        assert_eq!(text, "echo: help");
    }
}
