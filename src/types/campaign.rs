//! Campaign content types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Model for a generated email marketing campaign
///
/// Produced atomically by a single structured-generation call; the field
/// doc comments double as the generation hints sent in the response schema.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// A compelling and concise subject line for the email.
    pub subject: String,
    /// A short, engaging preview text that appears after the subject line in the inbox.
    pub preview_text: String,
    /// The main body content of the email, formatted in simple HTML with paragraphs <p>, bold <strong>, and line breaks <br>. The tone should be engaging and persuasive.
    pub body: String,
    /// A detailed, descriptive prompt for an AI image generator to create a visually appealing and relevant hero image for this email campaign.
    pub image_prompt: String,
}

/// An encoded hero image associated 1:1 with a campaign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// MIME type of the payload (e.g. `image/jpeg`)
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl GeneratedImage {
    /// Render the image as a data URI suitable for direct embedding
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Supported hero-image aspect ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
pub enum AspectRatio {
    #[default]
    #[strum(serialize = "16:9")]
    Landscape,
    #[strum(serialize = "1:1")]
    Square,
    #[strum(serialize = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Human-readable label shown in selectors
    pub fn label(self) -> &'static str {
        match self {
            Self::Landscape => "Landscape (16:9)",
            Self::Square => "Square (1:1)",
            Self::Portrait => "Portrait (9:16)",
        }
    }
}
