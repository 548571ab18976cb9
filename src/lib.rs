//! Mailmuse - AI-powered email campaign studio
//!
//! This library turns a free-text prompt into a complete email marketing
//! campaign (subject line, preview text, HTML body, generated hero image)
//! and provides a streaming chat assistant for marketing questions. All
//! generative work is delegated to the Gemini API; this crate marshals
//! input into requests and renders the results.

// Allow certain clippy warnings that are either stylistic or from external dependencies
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod gemini;
pub mod logger;
pub mod messages;
pub mod signal;
pub mod studio;
pub mod types;
pub mod ui;
pub mod workflow;

// Re-export important structs and functions for easier testing
pub use chat::ChatSession;
pub use config::Config;
pub use gemini::{GenerationClient, GenerativeBackend};
pub use signal::Signal;
pub use workflow::CampaignWorkflow;

// Re-exports from types module
pub use types::{AspectRatio, Campaign, ChatMessage, ChatRole, GeneratedImage};
