//! Domain types for campaign generation and chat
//!
//! This module consolidates the content the studio produces and exchanges:
//! - Campaigns (subject, preview text, body, image prompt)
//! - Generated hero images
//! - Chat messages

mod campaign;
mod chat;

// Campaign types
pub use self::campaign::{AspectRatio, Campaign, GeneratedImage};

// Chat types
pub use self::chat::{ChatMessage, ChatRole, GREETING_ID, GREETING_TEXT, generate_message_id};
