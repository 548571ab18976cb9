//! Chat session
//!
//! Ordered, append-only message log plus the conversation handle replayed
//! to the service on each turn. The most recent model message grows in
//! place while a reply streams; once the stream ends its text is settled.

use parking_lot::Mutex;

use crate::gemini::{ChatTurn, GenerationClient};
use crate::log_error;
use crate::signal::Signal;
use crate::types::{ChatMessage, generate_message_id};

/// Replaces a partially streamed reply after a mid-stream failure
pub const CHAT_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again.";

/// One conversation with the marketing assistant
///
/// Created through [`GenerationClient::create_chat_session`]; starts with a
/// single model-authored greeting. Not persisted beyond its lifetime.
pub struct ChatSession {
    client: GenerationClient,
    history: Mutex<Vec<ChatTurn>>,
    messages: Signal<Vec<ChatMessage>>,
    is_loading: Signal<bool>,
}

impl ChatSession {
    pub(crate) fn new(client: GenerationClient) -> Self {
        Self {
            client,
            history: Mutex::new(Vec::new()),
            messages: Signal::new(vec![ChatMessage::greeting()]),
            is_loading: Signal::new(false),
        }
    }

    /// Ordered message log, oldest first
    pub fn messages(&self) -> &Signal<Vec<ChatMessage>> {
        &self.messages
    }

    /// Whether a send is currently in flight
    pub fn is_loading(&self) -> &Signal<bool> {
        &self.is_loading
    }

    /// Submit one user message and stream the reply into the log
    ///
    /// A whitespace-only message or an in-flight send is a silent no-op.
    /// The loading flag is set before the first await. Fragments are
    /// appended in arrival order; any error mid-stream replaces the
    /// accumulated text wholesale with the apology string.
    pub async fn send(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() || self.is_loading.get() {
            return;
        }

        self.is_loading.set(true);

        self.messages
            .update(|m| m.push(ChatMessage::user(generate_message_id(), text)));

        let model_id = generate_message_id();
        self.messages
            .update(|m| m.push(ChatMessage::model(model_id.clone(), "")));

        let prior_turns = self.history.lock().clone();
        let mut reply = String::new();
        let mut failed = false;

        match self.client.stream_message(&prior_turns, text).await {
            Ok(mut fragments) => {
                while let Some(item) = fragments.recv().await {
                    match item {
                        Ok(fragment) => {
                            reply.push_str(&fragment);
                            self.append_text(&model_id, &fragment);
                        }
                        Err(e) => {
                            log_error!("Error during chat stream: {e}");
                            failed = true;
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                log_error!("Error sending message: {e}");
                failed = true;
            }
        }

        if failed {
            self.replace_text(&model_id, CHAT_ERROR_TEXT);
        } else {
            // Commit the completed turn so the next send replays it
            let mut history = self.history.lock();
            history.push(ChatTurn::user(text));
            history.push(ChatTurn::model(reply));
        }

        self.is_loading.set(false);
    }

    fn append_text(&self, id: &str, fragment: &str) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.text.push_str(fragment);
            }
        });
    }

    fn replace_text(&self, id: &str, text: &str) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.text = text.to_string();
            }
        });
    }
}
