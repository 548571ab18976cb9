//! Main application for Mailmuse Studio
//!
//! Event loop and rendering coordination.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::chat::ChatSession;
use crate::config::Config;
use crate::gemini::GenerationClient;
use crate::workflow::CampaignWorkflow;

use super::events::{Action, handle_key_event};
use super::render::{ContentView, render};
use super::state::StudioState;

/// Receivers used to detect workflow-state changes between frames
struct ChangeFeeds {
    campaign: watch::Receiver<Option<crate::types::Campaign>>,
    image: watch::Receiver<Option<crate::types::GeneratedImage>>,
    error: watch::Receiver<Option<String>>,
    generating: watch::Receiver<bool>,
    messages: watch::Receiver<Vec<crate::types::ChatMessage>>,
    chat_loading: watch::Receiver<bool>,
}

impl ChangeFeeds {
    fn new(workflow: &CampaignWorkflow, chat: &ChatSession) -> Self {
        Self {
            campaign: workflow.campaign().subscribe(),
            image: workflow.image().subscribe(),
            error: workflow.error().subscribe(),
            generating: workflow.is_loading().subscribe(),
            messages: chat.messages().subscribe(),
            chat_loading: chat.is_loading().subscribe(),
        }
    }

    /// True when any observed cell changed since the last frame
    fn any_changed(&mut self) -> bool {
        let mut changed = false;
        changed |= consume(&mut self.campaign);
        changed |= consume(&mut self.image);
        changed |= consume(&mut self.error);
        changed |= consume(&mut self.generating);
        changed |= consume(&mut self.messages);
        changed |= consume(&mut self.chat_loading);
        changed
    }
}

fn consume<T>(rx: &mut watch::Receiver<T>) -> bool {
    if rx.has_changed().unwrap_or(false) {
        let _ = rx.borrow_and_update();
        true
    } else {
        false
    }
}

/// Main Mailmuse Studio application
pub struct StudioApp {
    /// Application state
    pub state: StudioState,
    workflow: Arc<CampaignWorkflow>,
    chat: Arc<ChatSession>,
}

impl StudioApp {
    /// Create a new Studio application
    pub fn new(config: &Config) -> Self {
        let client = GenerationClient::new(config);
        let workflow = Arc::new(CampaignWorkflow::new(client.clone()));
        let chat = Arc::new(client.create_chat_session());

        Self {
            state: StudioState::new(),
            workflow,
            chat,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run main loop
        let result = self.main_loop(&mut terminal);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut feeds = ChangeFeeds::new(&self.workflow, &self.chat);
        let mut was_generating = false;

        loop {
            if feeds.any_changed() {
                self.state.mark_dirty();
            }

            let view = self.snapshot();

            // Fresh waiting message each time a run starts; keep the spinner
            // animating while anything is in flight
            if view.generating && !was_generating {
                self.state.spinner.refresh_message();
            }
            was_generating = view.generating;
            if view.generating || view.chat_loading {
                self.state.mark_dirty();
            }

            // Render if dirty
            if self.state.check_dirty() {
                terminal.draw(|frame| render(frame, &mut self.state, &view))?;
            }

            // Poll for events with timeout for animations
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                // Only handle key press events
                if key.kind == KeyEventKind::Press {
                    let action = handle_key_event(&mut self.state, key, view.chat_loading);

                    match action {
                        Action::Quit => return Ok(()),
                        Action::Redraw => self.state.mark_dirty(),
                        Action::Generate {
                            prompt,
                            aspect_ratio,
                        } => {
                            let workflow = Arc::clone(&self.workflow);
                            tokio::spawn(async move {
                                workflow.generate(&prompt, aspect_ratio).await;
                            });
                        }
                        Action::SendChat(text) => {
                            let chat = Arc::clone(&self.chat);
                            tokio::spawn(async move {
                                chat.send(&text).await;
                            });
                        }
                        Action::None => {}
                    }
                }
            }
        }
    }

    /// Sample the workflow signals for one frame
    fn snapshot(&self) -> ContentView {
        ContentView {
            campaign: self.workflow.campaign().get(),
            image: self.workflow.image().get(),
            error: self.workflow.error().get(),
            generating: self.workflow.is_loading().get(),
            messages: self.chat.messages().get(),
            chat_loading: self.chat.is_loading().get(),
        }
    }
}

/// Entry point used by the CLI
pub fn run_studio(config: &Config) -> Result<()> {
    let mut app = StudioApp::new(config);
    app.run()
}
