//! Typed errors for the Gemini boundary
//!
//! Every remote failure is converted into one of these variants at the
//! client boundary; callers above `GenerationClient` only ever see the
//! fixed user-facing strings, never these errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    /// Transport-level failure from reqwest
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not contain the expected structure
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Returned text was not valid JSON for the requested schema
    #[error("response did not match the requested schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// The service produced no image, typically a content-policy rejection
    #[error("image prompt rejected: {0}")]
    Blocked(String),

    /// Streaming response was interrupted mid-turn
    #[error("stream interrupted: {0}")]
    Stream(String),
}
