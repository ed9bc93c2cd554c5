//! HTTP backend for the resort chat endpoint.
//!
//! The backend is an external collaborator; its contract is a single
//! JSON POST endpoint answering one conversation turn at a time.

mod api;
mod client;
mod config;

pub use client::HttpBackend;
pub use config::BackendConfig;
