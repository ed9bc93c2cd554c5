//! Session struct and conversation state.

use std::sync::atomic::{AtomicBool, Ordering};

use palmera_common::SessionId;
use tracing::debug;

use crate::message::ChatMessage;

/// Assistant message appended when a turn fails.
pub const FALLBACK_TEXT: &str = "Sorry, I encountered an error. Please try again.";

/// Assistant message a fresh session opens with.
pub const DEFAULT_GREETING: &str =
    "Hello! I am your resort booking assistant. When do you want to stay?";

/// A booking conversation: ordered message history, a strictly increasing
/// id counter, and the in-flight flag. History lives in memory only.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) messages: Vec<ChatMessage>,
    pub(super) next_id: u64,
    pub(super) busy: AtomicBool,
    pub(super) greeting: String,
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self {
            id: SessionId::new(),
            messages: Vec::new(),
            next_id: 1,
            busy: AtomicBool::new(false),
            greeting: DEFAULT_GREETING.to_string(),
        };
        debug!(session = %session.id, "new session");
        session.seed();
        session
    }

    /// Replace the opening greeting. Resets the history.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self.seed();
        self
    }

    /// Reset to a fresh conversation holding only the greeting.
    pub fn clear(&mut self) {
        self.seed();
    }

    pub(super) fn seed(&mut self) {
        self.messages.clear();
        self.next_id = 1;
        let id = self.next_id;
        self.next_id += 1;
        self.messages
            .push(ChatMessage::assistant(id, self.greeting.clone()));
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Whether a backend call is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
