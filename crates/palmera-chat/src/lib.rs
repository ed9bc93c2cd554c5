//! Chat engine for the Palmera booking assistant.
//!
//! Provides the conversation session handler:
//! - Message history with strictly increasing ids
//! - Wire serialization for the resort chat endpoint
//! - Response classification (plain text, house options, booking summary)
//! - Single in-flight request discipline with guaranteed release

pub mod backend;
pub mod classify;
pub mod message;
pub mod session;
pub mod wire;

use async_trait::async_trait;

pub use backend::{BackendConfig, HttpBackend};
pub use classify::{classify_response, scan_booking_summary, Classified, SummaryScan};
pub use message::{Attachment, BookingSummary, ChatMessage, HouseOption, Sender};
pub use session::Session;
pub use wire::{ChatRequest, ChatResponse, Role, WireMessage};

/// A backend able to answer one chat turn given the conversation so far.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, messages: &[WireMessage]) -> Result<ChatResponse, ChatError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("backend error: {0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("malformed house list: {0}")]
    MalformedHouseList(String),
    #[error("a request is already in flight")]
    SessionBusy,
    #[error("input is empty")]
    EmptyInput,
}
