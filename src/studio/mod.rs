//! Mailmuse Studio - interactive TUI
//!
//! A two-tab interface for the campaign workflow:
//! - **Generator**: prompt in, rendered campaign + hero image status out
//! - **Chatbot**: streaming conversation with the marketing assistant

mod app;
mod events;
mod render;
mod spinner;
mod state;

// Re-exports
pub use app::{StudioApp, run_studio};
pub use render::html_to_text;
pub use state::{StudioState, Tab};
