//! Async turn method for Session (submit + convenience operations).

use palmera_common::new_correlation_id;
use tracing::{debug, warn};

use crate::classify::classify_response;
use crate::message::{ChatMessage, HouseOption};
use crate::wire::history_to_wire;
use crate::{ChatBackend, ChatError};

use super::manager::{Session, FALLBACK_TEXT};
use super::types::InFlightGuard;

impl Session {
    /// Submit one user turn: append the user message, send the full
    /// history to the backend, and append exactly one assistant message.
    ///
    /// A turn-level failure (transport error, non-2xx status, malformed
    /// house list) still resolves to `Ok` with the fixed fallback message
    /// appended; the session always returns to idle. `Err` is returned
    /// only when nothing was appended: blank input, or a request already
    /// in flight.
    pub async fn submit_user_text(
        &mut self,
        backend: &dyn ChatBackend,
        text: impl Into<String>,
    ) -> Result<ChatMessage, ChatError> {
        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let _guard = InFlightGuard::acquire(&self.busy)?;

        let user_id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::user(user_id, text));

        let wire = history_to_wire(&self.messages);
        let turn = new_correlation_id();
        debug!(session = %self.id, turn = %turn, turns = wire.len(), "submitting chat turn");

        let outcome = backend.send(&wire).await;

        let reply_id = self.next_id;
        self.next_id += 1;

        let reply = match outcome {
            Ok(response) => match classify_response(&response) {
                Ok(classified) => classified.into_message(reply_id),
                Err(e) => {
                    warn!(session = %self.id, turn = %turn, "classification failed: {e}");
                    ChatMessage::assistant(reply_id, FALLBACK_TEXT)
                }
            },
            Err(e) => {
                warn!(session = %self.id, turn = %turn, "backend call failed: {e}");
                ChatMessage::assistant(reply_id, FALLBACK_TEXT)
            }
        };

        self.messages.push(reply.clone());
        Ok(reply)
    }

    /// Pick a house from an option list. The backend treats selection as
    /// an ordinary chat turn, so this just relays the choice as text.
    pub async fn select_house(
        &mut self,
        backend: &dyn ChatBackend,
        house: &HouseOption,
    ) -> Result<ChatMessage, ChatError> {
        self.submit_user_text(backend, format!("I choose the {}", house.name))
            .await
    }

    /// Confirm the pending booking summary.
    pub async fn confirm_booking(
        &mut self,
        backend: &dyn ChatBackend,
    ) -> Result<ChatMessage, ChatError> {
        self.submit_user_text(backend, "Confirm").await
    }

    /// Cancel the pending booking summary.
    pub async fn cancel_booking(
        &mut self,
        backend: &dyn ChatBackend,
    ) -> Result<ChatMessage, ChatError> {
        self.submit_user_text(backend, "Cancel").await
    }
}
