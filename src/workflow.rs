//! Campaign generation workflow
//!
//! Sequences the two dependent remote calls: generate the campaign text,
//! then generate its hero image from the campaign's own image prompt. A
//! failed campaign step never attempts the image; a failed image step still
//! keeps the campaign (deliberate partial success, not a rollback).

use crate::gemini::GenerationClient;
use crate::log_debug;
use crate::signal::Signal;
use crate::types::{AspectRatio, Campaign, GeneratedImage};

/// Orchestrates campaign-then-image generation for one generator surface
pub struct CampaignWorkflow {
    client: GenerationClient,
    campaign: Signal<Option<Campaign>>,
    image: Signal<Option<GeneratedImage>>,
    is_loading: Signal<bool>,
}

impl CampaignWorkflow {
    pub fn new(client: GenerationClient) -> Self {
        Self {
            client,
            campaign: Signal::new(None),
            image: Signal::new(None),
            is_loading: Signal::new(false),
        }
    }

    /// The generated campaign, replaced wholesale on each run
    pub fn campaign(&self) -> &Signal<Option<Campaign>> {
        &self.campaign
    }

    /// The hero image, present only after a fully successful run
    pub fn image(&self) -> &Signal<Option<GeneratedImage>> {
        &self.image
    }

    /// Whether a generation run is currently in flight
    pub fn is_loading(&self) -> &Signal<bool> {
        &self.is_loading
    }

    /// Last error from the client boundary
    pub fn error(&self) -> &Signal<Option<String>> {
        self.client.error()
    }

    /// Run one generation cycle
    ///
    /// A whitespace-only prompt or an in-flight run is a silent no-op. The
    /// loading flag is checked and set before the first await, so a second
    /// call can never slip in between the check and the suspension point.
    pub async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) {
        if prompt.trim().is_empty() || self.is_loading.get() {
            return;
        }

        self.is_loading.set(true);
        self.campaign.set(None);
        self.image.set(None);

        if let Some(campaign) = self.client.generate_campaign(prompt).await {
            let image_prompt = campaign.image_prompt.clone();
            self.campaign.set(Some(campaign));

            if let Some(image) = self.client.generate_image(&image_prompt, aspect_ratio).await {
                self.image.set(Some(image));
            }
        } else {
            log_debug!("Campaign generation failed; skipping image generation");
        }

        self.is_loading.set(false);
    }
}
