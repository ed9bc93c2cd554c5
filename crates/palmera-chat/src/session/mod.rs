//! Conversation session management.
//!
//! A `Session` holds the conversation history, allocates message ids,
//! and enforces the single in-flight request discipline.

mod chat;
mod manager;
mod types;

pub use manager::{Session, DEFAULT_GREETING, FALLBACK_TEXT};
