//! State management for Mailmuse Studio

use ratatui::style::{Modifier, Style};
use strum::IntoEnumIterator;
use tui_textarea::TextArea;

use super::spinner::SpinnerState;
use crate::types::AspectRatio;
use crate::ui;

/// Prompt pre-filled into the generator input on startup
pub const DEFAULT_PROMPT: &str = "A flash sale for a new line of futuristic sneakers.";

// ═══════════════════════════════════════════════════════════════════════════════
// Tab Enum
// ═══════════════════════════════════════════════════════════════════════════════

/// The two user-facing surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Campaign generator - prompt in, campaign + hero image out
    #[default]
    Generator,
    /// Marketing assistant chatbot
    Chatbot,
}

impl Tab {
    /// Get the display name for this tab
    pub fn display_name(self) -> &'static str {
        match self {
            Tab::Generator => "Generator",
            Tab::Chatbot => "Chatbot",
        }
    }

    /// The other tab
    pub fn next(self) -> Self {
        match self {
            Tab::Generator => Tab::Chatbot,
            Tab::Chatbot => Tab::Generator,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Studio State
// ═══════════════════════════════════════════════════════════════════════════════

/// Centralized view state for the studio
pub struct StudioState {
    /// Currently selected tab
    pub active_tab: Tab,
    /// Generator prompt input
    pub prompt_input: TextArea<'static>,
    /// Chat message input
    pub chat_input: TextArea<'static>,
    /// Selected hero-image aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Chat scroll offset from the bottom (0 = pinned to latest)
    pub chat_scroll: usize,
    /// Spinner shown while a remote call is in flight
    pub spinner: SpinnerState,
    /// Whether a redraw is needed
    dirty: bool,
}

impl StudioState {
    pub fn new() -> Self {
        let mut prompt_input = make_input(vec![DEFAULT_PROMPT.to_string()]);
        prompt_input.move_cursor(tui_textarea::CursorMove::End);

        Self {
            active_tab: Tab::default(),
            prompt_input,
            chat_input: make_input(Vec::new()),
            aspect_ratio: AspectRatio::default(),
            chat_scroll: 0,
            spinner: SpinnerState::new(),
            dirty: true,
        }
    }

    /// Switch to the other tab
    pub fn switch_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.mark_dirty();
    }

    /// Cycle to the next aspect ratio option
    pub fn cycle_aspect_ratio(&mut self) {
        let mut ratios = AspectRatio::iter().cycle();
        let _ = ratios.find(|r| *r == self.aspect_ratio);
        if let Some(next) = ratios.next() {
            self.aspect_ratio = next;
        }
        self.mark_dirty();
    }

    /// Current generator prompt text
    pub fn prompt_text(&self) -> String {
        self.prompt_input.lines().join("\n")
    }

    /// Current chat input text
    pub fn chat_text(&self) -> String {
        self.chat_input.lines().join("\n")
    }

    /// Clear the chat input buffer
    pub fn clear_chat_input(&mut self) {
        self.chat_input = make_input(Vec::new());
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consume the dirty flag
    pub fn check_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }
}

impl Default for StudioState {
    fn default() -> Self {
        Self::new()
    }
}

fn make_input(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_style(Style::default().fg(ui::SOFT_WHITE));
    textarea
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_cycles_through_all_options() {
        let mut state = StudioState::new();
        assert_eq!(state.aspect_ratio, AspectRatio::Landscape);
        state.cycle_aspect_ratio();
        assert_eq!(state.aspect_ratio, AspectRatio::Square);
        state.cycle_aspect_ratio();
        assert_eq!(state.aspect_ratio, AspectRatio::Portrait);
        state.cycle_aspect_ratio();
        assert_eq!(state.aspect_ratio, AspectRatio::Landscape);
    }

    #[test]
    fn tab_switch_toggles() {
        let mut state = StudioState::new();
        state.switch_tab();
        assert_eq!(state.active_tab, Tab::Chatbot);
        state.switch_tab();
        assert_eq!(state.active_tab, Tab::Generator);
    }
}
