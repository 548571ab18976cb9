//! REST implementation of the Gemini backend

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde_json::{Value, json};
use tokio::sync::mpsc;

use super::schema::response_schema_for;
use super::{ChatTurn, GeminiError, GenerativeBackend, SYSTEM_INSTRUCTION};
use crate::config::Config;
use crate::log_debug;
use crate::types::{AspectRatio, Campaign, GeneratedImage};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Bound on fragments buffered ahead of the consumer
const STREAM_CHANNEL_CAPACITY: usize = 32;

/// Talks to the Gemini `generateContent`/`streamGenerateContent` endpoints
/// and the Imagen `predict` endpoint
pub struct GeminiBackend {
    api_key: String,
    model: String,
    image_model: String,
    client: Client,
}

impl GeminiBackend {
    /// Creates a new backend from the application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            image_model: config.image_model.clone(),
            client: Client::new(),
        }
    }

    fn endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{BASE_URL}/models/{model}:{operation}?key={key}",
            key = self.api_key
        )
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, GeminiError> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    /// Issues a single structured-generation request constrained to the
    /// campaign schema and parses the returned text as JSON
    async fn generate_campaign(&self, prompt: &str) -> Result<Campaign, GeminiError> {
        log_debug!("Generating campaign with model {}", self.model);

        let request_body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": format!(
                            "Based on the following prompt, generate a complete email marketing campaign.\n\
                             Prompt: \"{prompt}\""
                        )}
                    ]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema_for::<Campaign>(),
            }
        });

        let url = self.endpoint(&self.model, "generateContent");
        let response_body = self.post_json(&url, &request_body).await?;

        // The response format is:
        // { "candidates": [ { "content": { "parts": [ { "text": "..." } ] } } ] }
        let content = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                GeminiError::MalformedResponse("no candidate text in response".to_string())
            })?;

        let campaign: Campaign = serde_json::from_str(content.trim())?;
        Ok(campaign)
    }

    /// Requests exactly one JPEG image at the given aspect ratio, returned
    /// as base64 bytes plus a MIME type
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<GeneratedImage, GeminiError> {
        log_debug!(
            "Generating {} image with model {}",
            aspect_ratio,
            self.image_model
        );

        let request_body = json!({
            "instances": [
                {"prompt": prompt}
            ],
            "parameters": {
                "sampleCount": 1,
                "outputMimeType": "image/jpeg",
                "aspectRatio": aspect_ratio.to_string(),
            }
        });

        let url = self.endpoint(&self.image_model, "predict");
        let response_body = self.post_json(&url, &request_body).await?;

        let prediction = &response_body["predictions"][0];
        let data = prediction["bytesBase64Encoded"].as_str().ok_or_else(|| {
            // An empty predictions array is how the API reports a safety block
            GeminiError::Blocked("no image returned for prompt".to_string())
        })?;
        let mime_type = prediction["mimeType"].as_str().unwrap_or("image/jpeg");

        Ok(GeneratedImage {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Opens an SSE stream for one reply and forwards its text fragments,
    /// in arrival order, over a bounded channel
    async fn stream_message(
        &self,
        history: &[ChatTurn],
        text: &str,
    ) -> Result<mpsc::Receiver<Result<String, GeminiError>>, GeminiError> {
        log_debug!(
            "Streaming chat reply with model {} ({} prior turns)",
            self.model,
            history.len()
        );

        let mut contents: Vec<Value> = history
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.api_role(),
                    "parts": [{"text": turn.text}]
                })
            })
            .collect();
        contents.push(json!({
            "role": "user",
            "parts": [{"text": text}]
        }));

        let request_body = json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{"text": SYSTEM_INSTRUCTION}]
            }
        });

        let url = format!(
            "{BASE_URL}/models/{model}:streamGenerateContent?alt=sse&key={key}",
            model = self.model,
            key = self.api_key
        );
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            // SSE events can be split across TCP chunks, so buffer until newline
            let mut buffer = String::new();

            while let Some(item) = stream.next().await {
                match item {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));

                        while let Some(newline_pos) = buffer.find('\n') {
                            let line =
                                buffer[..newline_pos].trim_end_matches('\r').to_string();
                            buffer.drain(..=newline_pos);

                            if let Some(fragment) = parse_sse_line(&line)
                                && tx.send(Ok(fragment)).await.is_err()
                            {
                                // Receiver dropped, stop reading
                                return;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(GeminiError::Stream(e.to_string()))).await;
                        return;
                    }
                }
            }

            // Flush any trailing event without a final newline
            if let Some(fragment) = parse_sse_line(buffer.trim()) {
                let _ = tx.send(Ok(fragment)).await;
            }
        });

        Ok(rx)
    }
}

/// Extract the text fragment from one SSE line, if it carries one
///
/// Keep-alives, `[DONE]` markers, and events without candidate text
/// (e.g. the final usage-metadata event) yield `None`.
pub fn parse_sse_line(line: &str) -> Option<String> {
    let data = line.strip_prefix("data: ")?;
    if data == "[DONE]" {
        return None;
    }

    let json: Value = serde_json::from_str(data).ok()?;
    let text = json["candidates"][0]["content"]["parts"][0]["text"].as_str()?;
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
