//! Event handling for Mailmuse Studio
//!
//! Keyboard input processing and action dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{StudioState, Tab};
use crate::types::AspectRatio;

// ═══════════════════════════════════════════════════════════════════════════════
// Action Types
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of processing an input event
#[derive(Debug, Clone)]
pub enum Action {
    /// No action, continue running
    None,
    /// Quit the application
    Quit,
    /// Request redraw
    Redraw,
    /// Start a campaign generation run
    Generate {
        prompt: String,
        aspect_ratio: AspectRatio,
    },
    /// Send a chat message
    SendChat(String),
}

// ═══════════════════════════════════════════════════════════════════════════════
// Event Handler
// ═══════════════════════════════════════════════════════════════════════════════

/// Process a key event and return the resulting action
///
/// `chat_loading` gates input clearing: while a send is in flight the input
/// buffer must stay untouched so a re-entrant Enter is a true no-op.
pub fn handle_key_event(state: &mut StudioState, key: KeyEvent, chat_loading: bool) -> Action {
    // Global keybindings (work in both tabs)
    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::Quit;
        }
        KeyCode::Tab => {
            state.switch_tab();
            return Action::Redraw;
        }
        _ => {}
    }

    match state.active_tab {
        Tab::Generator => handle_generator_key(state, key),
        Tab::Chatbot => handle_chatbot_key(state, key, chat_loading),
    }
}

fn handle_generator_key(state: &mut StudioState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Generate {
            prompt: state.prompt_text(),
            aspect_ratio: state.aspect_ratio,
        },
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.cycle_aspect_ratio();
            Action::Redraw
        }
        _ => {
            if state.prompt_input.input(key) {
                state.mark_dirty();
            }
            Action::Redraw
        }
    }
}

fn handle_chatbot_key(state: &mut StudioState, key: KeyEvent, chat_loading: bool) -> Action {
    match key.code {
        KeyCode::Enter => {
            let text = state.chat_text();
            if text.trim().is_empty() {
                return Action::None;
            }
            if !chat_loading {
                state.clear_chat_input();
                state.chat_scroll = 0;
            }
            Action::SendChat(text)
        }
        KeyCode::Up => {
            state.chat_scroll = state.chat_scroll.saturating_add(1);
            Action::Redraw
        }
        KeyCode::Down => {
            state.chat_scroll = state.chat_scroll.saturating_sub(1);
            Action::Redraw
        }
        _ => {
            if state.chat_input.input(key) {
                state.mark_dirty();
            }
            Action::Redraw
        }
    }
}
