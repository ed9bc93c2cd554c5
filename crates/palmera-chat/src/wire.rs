//! Wire types for the resort chat endpoint.
//!
//! The backend accepts `{ "messages": [...] }` where each entry carries a
//! role, the display text, and (for user turns only) a human-readable
//! timestamp the model uses for relative-date resolution.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::message::{ChatMessage, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One history entry as the backend sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Request body for `POST /api/chat/message`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<WireMessage>,
}

/// Response body from the chat endpoint.
///
/// `kind` is `"house_options"` when the backend returns a house list; in
/// that case `houses` holds a JSON-encoded array. Otherwise only `message`
/// is present, possibly with an embedded booking-summary block.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: String,
    pub houses: Option<String>,
}

/// Format a timestamp the way the backend expects on user turns:
/// a long localized date-time string, e.g.
/// `Saturday, August 30, 2025 at 02:15 PM`.
pub fn format_wire_timestamp(instant: &DateTime<Local>) -> String {
    instant.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

/// Serialize the conversation history to the backend wire format.
///
/// Only {user, assistant} turns exist in a session, in chronological
/// order; timestamps are attached to user turns only.
pub fn history_to_wire(messages: &[ChatMessage]) -> Vec<WireMessage> {
    messages
        .iter()
        .map(|msg| match msg.sender {
            Sender::User => WireMessage {
                role: Role::User,
                content: msg.text.clone(),
                timestamp: Some(format_wire_timestamp(&msg.timestamp)),
            },
            Sender::Assistant => WireMessage {
                role: Role::Assistant,
                content: msg.text.clone(),
                timestamp: None,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn assistant_turns_omit_timestamp() {
        let history = vec![
            ChatMessage::assistant(1, "Hello!"),
            ChatMessage::user(2, "I want to book"),
        ];
        let wire = history_to_wire(&history);
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].role, Role::Assistant);
        assert!(wire[0].timestamp.is_none());
        assert_eq!(wire[1].role, Role::User);
        assert!(wire[1].timestamp.is_some());

        let json = serde_json::to_string(&ChatRequest { messages: wire }).unwrap();
        // The None timestamp must not appear as null
        assert_eq!(json.matches("timestamp").count(), 1);
    }

    #[test]
    fn wire_preserves_chronological_order() {
        let history = vec![
            ChatMessage::assistant(1, "greeting"),
            ChatMessage::user(2, "first"),
            ChatMessage::assistant(3, "reply"),
            ChatMessage::user(4, "second"),
        ];
        let wire = history_to_wire(&history);
        let contents: Vec<&str> = wire.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["greeting", "first", "reply", "second"]);
    }

    #[test]
    fn wire_timestamp_is_long_form() {
        let now = Local::now();
        let formatted = format_wire_timestamp(&now);
        // Long localized form: weekday name, month name, "at", 12-hour clock
        assert!(formatted.contains(" at "));
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }

    #[test]
    fn response_without_type_deserializes() {
        let json = r#"{"message":"When do you want to stay?"}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.kind.is_none());
        assert!(response.houses.is_none());
        assert_eq!(response.message, "When do you want to stay?");
    }

    #[test]
    fn response_with_house_options_deserializes() {
        let json = r#"{"type":"house_options","message":"Here are our houses","houses":"[]"}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.kind.as_deref(), Some("house_options"));
        assert_eq!(response.houses.as_deref(), Some("[]"));
    }
}
