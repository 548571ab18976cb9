//! Generation client facade
//!
//! Wraps a backend with the error-state contract: each attempt clears the
//! previous error, each failure overwrites it with a fixed human-readable
//! message and logs the underlying cause. No error crosses this boundary.

use std::sync::Arc;
use tokio::sync::mpsc;

use super::{ChatTurn, GeminiBackend, GeminiError, GenerativeBackend};
use crate::chat::ChatSession;
use crate::config::Config;
use crate::signal::Signal;
use crate::types::{AspectRatio, Campaign, GeneratedImage};
use crate::{log_debug, log_error};

/// Shown when campaign generation fails for any reason
pub const CAMPAIGN_ERROR_MESSAGE: &str =
    "Failed to generate the email campaign. Please check the logs for more details.";

/// Shown when image generation fails; hints at content-policy rejection
pub const IMAGE_ERROR_MESSAGE: &str =
    "Failed to generate the campaign image. The image prompt may have been unsafe. Please try again.";

/// Single point of contact with the remote generative services
///
/// Cheap to clone; clones share the backend and the error cell.
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn GenerativeBackend>,
    error: Signal<Option<String>>,
}

impl GenerationClient {
    /// Create a client against the real Gemini API
    pub fn new(config: &Config) -> Self {
        Self::with_backend(Arc::new(GeminiBackend::new(config)))
    }

    /// Create a client over any backend (tests substitute their own)
    pub fn with_backend(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            error: Signal::new(None),
        }
    }

    /// Last human-readable error, cleared at the start of each attempt
    pub fn error(&self) -> &Signal<Option<String>> {
        &self.error
    }

    /// Generate a campaign, or `None` with the error cell set
    pub async fn generate_campaign(&self, prompt: &str) -> Option<Campaign> {
        self.error.set(None);

        match self.backend.generate_campaign(prompt).await {
            Ok(campaign) => {
                log_debug!("Campaign generated: subject={:?}", campaign.subject);
                Some(campaign)
            }
            Err(e) => {
                log_error!("Error generating campaign: {e}");
                self.error.set(Some(CAMPAIGN_ERROR_MESSAGE.to_string()));
                None
            }
        }
    }

    /// Generate a hero image, or `None` with the error cell set
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Option<GeneratedImage> {
        self.error.set(None);

        match self.backend.generate_image(prompt, aspect_ratio).await {
            Ok(image) => Some(image),
            Err(e) => {
                log_error!("Error generating image: {e}");
                self.error.set(Some(IMAGE_ERROR_MESSAGE.to_string()));
                None
            }
        }
    }

    /// Open one streaming reply; streaming failures are the session's to
    /// present, so errors pass through here untranslated
    pub(crate) async fn stream_message(
        &self,
        history: &[ChatTurn],
        text: &str,
    ) -> Result<mpsc::Receiver<Result<String, GeminiError>>, GeminiError> {
        self.backend.stream_message(history, text).await
    }

    /// Open a stateful chat session seeded with the assistant greeting
    pub fn create_chat_session(&self) -> ChatSession {
        ChatSession::new(self.clone())
    }
}
