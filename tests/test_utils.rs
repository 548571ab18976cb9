//! Shared test utilities: a scriptable in-memory backend
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

use mailmuse::gemini::{ChatTurn, GeminiError, GenerativeBackend};
use mailmuse::types::{AspectRatio, Campaign, GeneratedImage};

/// Backend double that records every call and plays back scripted results
#[derive(Default)]
pub struct MockBackend {
    /// Fail the next campaign requests with a malformed-response error
    pub fail_campaign: AtomicBool,
    /// Fail the next image requests with a blocked-prompt error
    pub fail_image: AtomicBool,
    /// Refuse to open the chat stream
    pub fail_stream_open: AtomicBool,
    /// Artificial latency inside `generate_campaign`, for re-entrancy tests
    pub campaign_delay: Mutex<Option<Duration>>,
    /// Artificial latency before each streamed fragment
    pub fragment_delay: Mutex<Option<Duration>>,
    /// Fragments to stream; `Err(())` injects a mid-stream error
    pub fragments: Mutex<Vec<Result<String, ()>>>,

    /// Prompts passed to `generate_campaign`
    pub campaign_calls: Mutex<Vec<String>>,
    /// Prompts and ratios passed to `generate_image`
    pub image_calls: Mutex<Vec<(String, AspectRatio)>>,
    /// Message text and prior history passed to `stream_message`
    pub stream_calls: Mutex<Vec<(String, Vec<ChatTurn>)>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully populated campaign used by the happy paths
    pub fn sample_campaign() -> Campaign {
        Campaign {
            subject: "Step Into the Future".to_string(),
            preview_text: "Futuristic sneakers, 40% off for 48 hours".to_string(),
            body: "<p>The future of footwear is <strong>here</strong>.<br>Run, don't walk.</p>"
                .to_string(),
            image_prompt: "Neon-lit futuristic sneakers on a chrome pedestal".to_string(),
        }
    }

    pub fn set_fragments(&self, fragments: Vec<Result<String, ()>>) {
        *self.fragments.lock() = fragments;
    }
}

#[async_trait]
impl GenerativeBackend for MockBackend {
    async fn generate_campaign(&self, prompt: &str) -> Result<Campaign, GeminiError> {
        self.campaign_calls.lock().push(prompt.to_string());

        let delay = *self.campaign_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_campaign.load(Ordering::SeqCst) {
            Err(GeminiError::MalformedResponse(
                "scripted campaign failure".to_string(),
            ))
        } else {
            Ok(Self::sample_campaign())
        }
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, GeminiError> {
        self.image_calls
            .lock()
            .push((prompt.to_string(), aspect_ratio));

        if self.fail_image.load(Ordering::SeqCst) {
            Err(GeminiError::Blocked("scripted image failure".to_string()))
        } else {
            Ok(GeneratedImage {
                mime_type: "image/jpeg".to_string(),
                data: "c2FtcGxlLWpwZWctYnl0ZXM=".to_string(),
            })
        }
    }

    async fn stream_message(
        &self,
        history: &[ChatTurn],
        text: &str,
    ) -> Result<mpsc::Receiver<Result<String, GeminiError>>, GeminiError> {
        self.stream_calls
            .lock()
            .push((text.to_string(), history.to_vec()));

        if self.fail_stream_open.load(Ordering::SeqCst) {
            return Err(GeminiError::Stream(
                "scripted stream-open failure".to_string(),
            ));
        }

        let fragments = self.fragments.lock().clone();
        let fragment_delay = *self.fragment_delay.lock();
        let (tx, rx) = mpsc::channel(8);

        tokio::spawn(async move {
            for fragment in fragments {
                if let Some(delay) = fragment_delay {
                    tokio::time::sleep(delay).await;
                }
                let item = match fragment {
                    Ok(text) => Ok(text),
                    Err(()) => Err(GeminiError::Stream(
                        "scripted mid-stream failure".to_string(),
                    )),
                };
                let stop = item.is_err();
                if tx.send(item).await.is_err() || stop {
                    return;
                }
            }
        });

        Ok(rx)
    }
}
