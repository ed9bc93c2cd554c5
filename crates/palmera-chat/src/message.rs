//! Conversation message types and rich attachments.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One bookable house offered by the backend.
///
/// Wire field names match the backend's `houses` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseOption {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub guests: u32,
    pub price_per_night: f64,
}

/// Booking details the assistant asks the user to confirm or cancel.
///
/// Carries no identifier; it only drives the confirm/cancel affordance
/// on the message it rides on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub date: String,
    pub guests: u32,
    #[serde(rename = "houseType")]
    pub house_type: String,
}

/// Optional structured payload riding on a chat message.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    HouseOptions(Vec<HouseOption>),
    BookingSummary(BookingSummary),
}

/// One turn in the conversation. Immutable once appended to a session.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Unique, strictly increasing per session.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Creation instant; display only for assistant turns.
    pub timestamp: DateTime<Local>,
    pub attachment: Option<Attachment>,
}

impl ChatMessage {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::User,
            text: text.into(),
            timestamp: Local::now(),
            attachment: None,
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: Local::now(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_no_attachment() {
        let msg = ChatMessage::user(1, "hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "hello");
        assert!(msg.attachment.is_none());
    }

    #[test]
    fn attachment_builder() {
        let summary = BookingSummary {
            date: "Oct 1".into(),
            guests: 2,
            house_type: "Villa".into(),
        };
        let msg = ChatMessage::assistant(2, "Please confirm")
            .with_attachment(Attachment::BookingSummary(summary.clone()));
        assert_eq!(msg.attachment, Some(Attachment::BookingSummary(summary)));
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn house_option_deserializes_wire_names() {
        let json = r#"{"id":3,"name":"Beach Villa","image_url":"https://cdn/x.jpg","guests":4,"price_per_night":250.5}"#;
        let house: HouseOption = serde_json::from_str(json).unwrap();
        assert_eq!(house.name, "Beach Villa");
        assert_eq!(house.guests, 4);
        assert_eq!(house.price_per_night, 250.5);
    }

    #[test]
    fn booking_summary_uses_camel_case_house_type() {
        let json = r#"{"date":"Oct 1","guests":2,"houseType":"Villa"}"#;
        let summary: BookingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.house_type, "Villa");

        let back = serde_json::to_string(&summary).unwrap();
        assert!(back.contains("\"houseType\""));
    }
}
