//! Response classification: backend payload to renderable message shape.
//!
//! The backend embeds structured booking data inside the free-text
//! `message` field between fixed marker strings. The markers must match
//! byte-for-byte; the scan is a plain substring search, first occurrence
//! only, with no nesting.

use tracing::warn;

use crate::message::{Attachment, BookingSummary, ChatMessage, HouseOption};
use crate::wire::ChatResponse;
use crate::ChatError;

pub const SUMMARY_START: &str = "<[BOOKING_SUMMARY]>";
pub const SUMMARY_END: &str = "</[BOOKING_SUMMARY]>";

/// Result of scanning a message for an embedded booking-summary block.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryScan {
    /// No marker pair found; the message is plain text.
    NotFound,
    /// A valid block was found and parsed. `cleaned` is the message with
    /// the whole marker-delimited span removed and trimmed.
    Found {
        cleaned: String,
        summary: BookingSummary,
    },
    /// Markers were present but the JSON between them did not parse.
    ParseError(String),
}

/// Scan `message` for the first `<[BOOKING_SUMMARY]>...</[BOOKING_SUMMARY]>`
/// block. Both markers are located by first occurrence over the whole
/// message; a missing end marker, or a first end marker that precedes the
/// start marker, counts as not found.
pub fn scan_booking_summary(message: &str) -> SummaryScan {
    let Some(start) = message.find(SUMMARY_START) else {
        return SummaryScan::NotFound;
    };
    let Some(json_end) = message.find(SUMMARY_END) else {
        return SummaryScan::NotFound;
    };
    if json_end <= start {
        return SummaryScan::NotFound;
    }
    let json_start = start + SUMMARY_START.len();

    let raw = message[json_start..json_end].trim();
    match serde_json::from_str::<BookingSummary>(raw) {
        Ok(summary) => {
            let span_end = json_end + SUMMARY_END.len();
            let cleaned = format!("{}{}", &message[..start], &message[span_end..])
                .trim()
                .to_string();
            SummaryScan::Found { cleaned, summary }
        }
        Err(e) => SummaryScan::ParseError(e.to_string()),
    }
}

/// A backend payload reduced to one of the three renderable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    PlainText(String),
    HouseOptions {
        text: String,
        houses: Vec<HouseOption>,
    },
    BookingSummary {
        text: String,
        summary: BookingSummary,
    },
}

impl Classified {
    /// Build the assistant message this classification renders as.
    pub fn into_message(self, id: u64) -> ChatMessage {
        match self {
            Classified::PlainText(text) => ChatMessage::assistant(id, text),
            Classified::HouseOptions { text, houses } => {
                ChatMessage::assistant(id, text).with_attachment(Attachment::HouseOptions(houses))
            }
            Classified::BookingSummary { text, summary } => ChatMessage::assistant(id, text)
                .with_attachment(Attachment::BookingSummary(summary)),
        }
    }
}

/// Classify a backend payload.
///
/// The `type` discriminator wins: a `house_options` response is never
/// scanned for summary markers. A malformed `houses` field is fatal to
/// the turn; a malformed summary block degrades to plain text.
pub fn classify_response(response: &ChatResponse) -> Result<Classified, ChatError> {
    if response.kind.as_deref() == Some("house_options") {
        let raw = response
            .houses
            .as_deref()
            .ok_or_else(|| ChatError::MalformedHouseList("missing houses field".into()))?;
        let houses: Vec<HouseOption> = serde_json::from_str(raw)
            .map_err(|e| ChatError::MalformedHouseList(e.to_string()))?;
        return Ok(Classified::HouseOptions {
            text: response.message.clone(),
            houses,
        });
    }

    match scan_booking_summary(&response.message) {
        SummaryScan::Found { cleaned, summary } => Ok(Classified::BookingSummary {
            text: cleaned,
            summary,
        }),
        SummaryScan::ParseError(e) => {
            warn!("malformed booking summary block, rendering as plain text: {e}");
            Ok(Classified::PlainText(response.message.clone()))
        }
        SummaryScan::NotFound => Ok(Classified::PlainText(response.message.clone())),
    }
}
