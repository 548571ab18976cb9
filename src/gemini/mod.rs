//! Gemini client boundary
//!
//! Single point of contact with the remote generative services. The
//! `GenerativeBackend` trait is the seam between the orchestration layer and
//! the wire: `GeminiBackend` talks to the real API, tests substitute their
//! own implementation. `GenerationClient` wraps a backend with the
//! error-state contract the UI consumes.

mod client;
mod error;
mod rest;
mod schema;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::types::{AspectRatio, Campaign, ChatRole, GeneratedImage};

pub use client::{CAMPAIGN_ERROR_MESSAGE, GenerationClient, IMAGE_ERROR_MESSAGE};
pub use error::GeminiError;
pub use rest::{GeminiBackend, parse_sse_line};
pub use schema::response_schema_for;

/// Persona and topical scope for the chat assistant, configured once per session
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful and friendly marketing assistant chatbot. \
     Provide concise and useful answers to questions about marketing, email campaigns, and content strategy.";

/// One prior turn of a conversation, replayed to the service on each send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    /// Role name in the Gemini contents format
    pub(crate) fn api_role(&self) -> &'static str {
        match self.role {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// Contract with the remote generative services
///
/// One logical request per call, no retries. Streaming replies arrive as an
/// ordered, finite sequence of text fragments over the returned channel; the
/// channel closes when the turn is complete.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate a full campaign from a free-text prompt via structured JSON output
    async fn generate_campaign(&self, prompt: &str) -> Result<Campaign, GeminiError>;

    /// Generate exactly one JPEG hero image at the given aspect ratio
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, GeminiError>;

    /// Stream one model reply for `text`, given the prior conversation turns
    async fn stream_message(
        &self,
        history: &[ChatTurn],
        text: &str,
    ) -> Result<mpsc::Receiver<Result<String, GeminiError>>, GeminiError>;
}
